use defmt::info;
use drum_trigger::{DrumTriggerTask, TriggerConfig, link::ChannelLink};
use embassy_executor::SpawnToken;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_time::{Duration, Ticker};
use static_cell::StaticCell;
use superloop::{Superloop, Task};

use crate::buttons::PadButtons;
use crate::display::LoggedLcd;
use crate::radio_task::{BROADCAST_QUEUE, BROADCAST_QUEUE_SIZE, LINK_INBOX, LINK_INBOX_SIZE};

#[cfg(not(feature = "template"))]
pub const TRIGGER_CONFIG: TriggerConfig = TriggerConfig::DRUMSET;
#[cfg(feature = "template")]
pub const TRIGGER_CONFIG: TriggerConfig = TriggerConfig::TEMPLATE;

const TICK_PERIOD: Duration = Duration::from_millis(1);
const HEARTBEAT_TICKS: u32 = 1000;

type TriggerLink =
    ChannelLink<'static, CriticalSectionRawMutex, LINK_INBOX_SIZE, BROADCAST_QUEUE_SIZE>;

pub struct SuperloopTaskState {
    trigger: DrumTriggerTask<TriggerLink, PadButtons<'static>, LoggedLcd>,
}

impl SuperloopTaskState {
    pub fn new(pads: PadButtons<'static>) -> Self {
        let link = ChannelLink::new(LINK_INBOX.receiver(), BROADCAST_QUEUE.sender());

        Self {
            trigger: DrumTriggerTask::new(TRIGGER_CONFIG, link, pads, LoggedLcd::new()),
        }
    }
}

pub static SUPERLOOP_TASK_STATE: StaticCell<SuperloopTaskState> = StaticCell::new();

pub fn create_task(pads: PadButtons<'static>) -> SpawnToken<impl Sized> {
    superloop_task(SUPERLOOP_TASK_STATE.init(SuperloopTaskState::new(pads)))
}

#[embassy_executor::task]
pub async fn superloop_task(state: &'static mut SuperloopTaskState) {
    info!("Superloop: Task starting");

    let mut superloop = Superloop::new();
    superloop.initialize(&mut [&mut state.trigger as &mut dyn Task]);
    info!("Superloop: trigger state {}", state.trigger.state());
    state.trigger.display_mut().flush();

    let mut ticker = Ticker::every(TICK_PERIOD);

    loop {
        state.trigger.buttons_mut().poll();
        superloop.tick(&mut [&mut state.trigger as &mut dyn Task]);
        state.trigger.display_mut().flush();

        if superloop.ticks() % HEARTBEAT_TICKS == 0 {
            info!(
                "Superloop: {} ticks, payload {=[u8]:x}",
                superloop.ticks(),
                state.trigger.payload().as_bytes().as_slice()
            );
        }

        ticker.next().await;
    }
}
