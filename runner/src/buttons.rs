use drum_trigger::{ButtonGateway, ButtonId, debounce::Debouncer};
use embassy_stm32::gpio::Input;

/// Consecutive polls a pad has to hold a new level for.
const DEBOUNCE_SAMPLES: u8 = 5;

#[allow(dead_code)]
pub enum Polarity {
    ActiveLow,
    ActiveHigh,
}

pub struct PadButtons<'a> {
    pads: [Input<'a>; 4],
    polarity: Polarity,
    debouncers: [Debouncer; 4],
}

impl<'a> PadButtons<'a> {
    pub fn new(pads: [Input<'a>; 4], polarity: Polarity) -> PadButtons<'a> {
        PadButtons {
            pads,
            polarity,
            debouncers: [Debouncer::new(DEBOUNCE_SAMPLES); 4],
        }
    }

    /// Feeds one raw sample of every pad into its debouncer. Call once per tick.
    pub fn poll(&mut self) {
        for (pad, debouncer) in self.pads.iter().zip(self.debouncers.iter_mut()) {
            let raw_pressed = match self.polarity {
                Polarity::ActiveHigh => pad.is_high(),
                Polarity::ActiveLow => pad.is_low(),
            };
            debouncer.update(raw_pressed);
        }
    }
}

impl ButtonGateway for PadButtons<'_> {
    fn is_pressed(&mut self, button: ButtonId) -> bool {
        self.debouncers[button.index()].is_pressed()
    }
}
