use superloop::{StateHandler, StateMachineCell, Task, Transition};

use crate::{
    BroadcastPayload, ButtonGateway, ButtonSnapshot, DisplayGateway, LCD_LINE_LEN,
    LINE1_START_ADDR, LINE2_START_ADDR, LinkGateway, LinkMessage, TriggerConfig, encode,
    render_data_line,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DrumState {
    /// Waiting for the first pad press before broadcasting.
    AwaitBegin,
    SampleButtons,
    /// Link setup failed. Terminal, does nothing.
    FailedInit,
}

/// Everything the state handlers touch, owned by one task.
struct TriggerContext<L, B, D> {
    config: TriggerConfig,
    link: L,
    buttons: B,
    display: D,
    payload: BroadcastPayload,
    redraw_pending: bool,
}

impl<L: LinkGateway, B: ButtonGateway, D: DisplayGateway> TriggerContext<L, B, D> {
    fn open_link(&mut self) -> DrumState {
        if let Err(_err) = self.link.configure(&self.config.link) {
            #[cfg(feature = "defmt")]
            defmt::warn!(
                "Link configuration rejected, trigger idle: {}",
                defmt::Debug2Format(&_err)
            );
            return DrumState::FailedInit;
        }

        self.link.open();

        #[cfg(feature = "defmt")]
        defmt::info!("Link channel {} open as master", self.config.link.channel);

        let prompts = self.config.prompts;
        self.display.clear_region(LINE1_START_ADDR, LCD_LINE_LEN);
        self.display.write_text(LINE1_START_ADDR, prompts.start.as_bytes());
        self.display.write_text(LINE2_START_ADDR, prompts.legend.as_bytes());

        if self.config.await_first_press {
            DrumState::AwaitBegin
        } else {
            DrumState::SampleButtons
        }
    }

    fn await_begin(&mut self) -> Transition<DrumState> {
        let buttons = ButtonSnapshot::sample(&mut self.buttons, &self.config.pads);

        if buttons.any_pressed() {
            Transition::To(DrumState::SampleButtons)
        } else {
            Transition::Stay
        }
    }

    fn sample_buttons(&mut self) -> Transition<DrumState> {
        if self.redraw_pending {
            self.display.clear_region(LINE1_START_ADDR, LCD_LINE_LEN);
            self.display
                .write_text(LINE1_START_ADDR, self.config.prompts.stop.as_bytes());
            self.redraw_pending = false;
        }

        // nothing from the link this tick, nothing to broadcast
        let Some(message) = self.link.try_read() else {
            return Transition::Stay;
        };

        if let LinkMessage::Data(data) = &message {
            self.display
                .write_text(LINE2_START_ADDR, &render_data_line(data));
        }

        let buttons = ButtonSnapshot::sample(&mut self.buttons, &self.config.pads);
        self.payload = encode(buttons, self.payload, Some(message.class()));
        if buttons.any_pressed() {
            self.redraw_pending = true;
        }

        self.link.queue_broadcast(&self.payload);

        Transition::Stay
    }
}

impl<L: LinkGateway, B: ButtonGateway, D: DisplayGateway> StateHandler<DrumState>
    for TriggerContext<L, B, D>
{
    fn handle(&mut self, state: DrumState) -> Transition<DrumState> {
        match state {
            DrumState::AwaitBegin => self.await_begin(),
            DrumState::SampleButtons => self.sample_buttons(),
            DrumState::FailedInit => Transition::Stay,
        }
    }
}

/// Samples four pads and broadcasts them over the link once per tick.
pub struct DrumTriggerTask<L, B, D> {
    cell: StateMachineCell<DrumState>,
    context: TriggerContext<L, B, D>,
}

impl<L: LinkGateway, B: ButtonGateway, D: DisplayGateway> DrumTriggerTask<L, B, D> {
    pub fn new(config: TriggerConfig, link: L, buttons: B, display: D) -> Self {
        Self {
            cell: StateMachineCell::new(),
            context: TriggerContext {
                config,
                link,
                buttons,
                display,
                payload: BroadcastPayload::new(),
                redraw_pending: false,
            },
        }
    }

    /// `None` until `initialize` has run.
    pub fn state(&self) -> Option<DrumState> {
        self.cell.current()
    }

    pub fn config(&self) -> &TriggerConfig {
        &self.context.config
    }

    /// The payload most recently queued for broadcast.
    pub fn payload(&self) -> BroadcastPayload {
        self.context.payload
    }

    /// Set when a pad was pressed this tick; line 1 is redrawn next tick.
    pub fn redraw_pending(&self) -> bool {
        self.context.redraw_pending
    }

    pub fn link(&self) -> &L {
        &self.context.link
    }

    pub fn link_mut(&mut self) -> &mut L {
        &mut self.context.link
    }

    pub fn buttons_mut(&mut self) -> &mut B {
        &mut self.context.buttons
    }

    pub fn display(&self) -> &D {
        &self.context.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.context.display
    }
}

impl<L: LinkGateway, B: ButtonGateway, D: DisplayGateway> Task for DrumTriggerTask<L, B, D> {
    fn initialize(&mut self) {
        if self.cell.current().is_some() {
            #[cfg(feature = "defmt")]
            defmt::warn!("Trigger task already initialized");
            return;
        }

        let initial = self.context.open_link();
        // the cell is empty, checked above
        self.cell.initialize(initial).ok();
    }

    fn run_active_state(&mut self) {
        self.cell.run_once(&mut self.context);
    }
}
