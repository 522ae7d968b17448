use defmt::info;
use embassy_stm32::gpio::{Input, Pull};

use crate::buttons::{PadButtons, Polarity};

pub struct Hardware<'a> {
    pub pads: PadButtons<'a>,
}

impl<'a> Hardware<'a> {
    pub fn get() -> Hardware<'a> {
        info!("Initializing");
        let peripherals = embassy_stm32::init(Default::default());

        // A0..A3 on the Nucleo header, pads short to ground
        let pads = PadButtons::new(
            [
                Input::new(peripherals.PA3, Pull::Up),
                Input::new(peripherals.PC0, Pull::Up),
                Input::new(peripherals.PC3, Pull::Up),
                Input::new(peripherals.PB1, Pull::Up),
            ],
            Polarity::ActiveLow,
        );

        Hardware { pads }
    }
}
