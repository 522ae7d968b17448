#![no_std]
#![no_main]

mod buttons;
mod display;
mod hardware;
mod radio_task;
mod superloop_task;

use defmt::info;
use embassy_executor::Executor;
use static_cell::StaticCell;

use defmt_rtt as _;
use panic_probe as _;

use crate::hardware::Hardware;

static EXECUTOR: StaticCell<Executor> = StaticCell::new();

#[cortex_m_rt::entry]
fn main() -> ! {
    info!("Setting up hardware");
    let hardware = Hardware::get();

    info!("Setting up executor");
    let executor = EXECUTOR.init(embassy_executor::Executor::new());

    executor.run(|spawner| {
        info!("Spawning radio task");
        spawner.spawn(radio_task::create_task()).unwrap();

        info!("Spawning superloop task");
        spawner
            .spawn(superloop_task::create_task(hardware.pads))
            .unwrap();
    })
}
