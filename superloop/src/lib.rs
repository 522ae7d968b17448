#![cfg_attr(not(test), no_std)]

mod cell;

pub use cell::{CellError, StateHandler, StateMachineCell, Transition};

/// A cooperative task driven by the superloop.
///
/// `initialize` runs once before the first tick. `run_active_state` runs
/// once per tick and must return without blocking.
pub trait Task {
    fn initialize(&mut self);
    fn run_active_state(&mut self);
}

/// Drives tasks the way the firmware superloop does: one call to `tick`
/// runs every task once, in order, to completion.
#[derive(Debug, Default)]
pub struct Superloop {
    ticks: u32,
}

impl Superloop {
    pub const fn new() -> Self {
        Self { ticks: 0 }
    }

    pub fn initialize(&mut self, tasks: &mut [&mut dyn Task]) {
        for task in tasks.iter_mut() {
            task.initialize();
        }
    }

    pub fn tick(&mut self, tasks: &mut [&mut dyn Task]) {
        self.ticks = self.ticks.wrapping_add(1);

        for task in tasks.iter_mut() {
            task.run_active_state();
        }
    }

    pub fn ticks(&self) -> u32 {
        self.ticks
    }
}

#[cfg(test)]
mod test;
