use pretty_assertions::assert_eq;

use crate::{CellError, StateHandler, StateMachineCell, Superloop, Task, Transition};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Light {
    Red,
    Green,
    Dark,
}

#[derive(Default)]
struct LightHandler {
    handled: Vec<Light>,
    green_ticks: u8,
}

impl StateHandler<Light> for LightHandler {
    fn handle(&mut self, state: Light) -> Transition<Light> {
        self.handled.push(state);

        match state {
            Light::Red => Transition::To(Light::Green),
            Light::Green => {
                self.green_ticks += 1;
                if self.green_ticks == 2 {
                    Transition::To(Light::Dark)
                } else {
                    Transition::Stay
                }
            }
            Light::Dark => Transition::Stay,
        }
    }
}

#[test]
fn run_once_before_initialize_does_not_dispatch() {
    let mut cell = StateMachineCell::<Light>::new();
    let mut handler = LightHandler::default();

    cell.run_once(&mut handler);

    assert_eq!(cell.current(), None);
    assert!(handler.handled.is_empty());
}

#[test]
fn initialize_only_once() {
    let mut cell = StateMachineCell::new();

    assert_eq!(cell.initialize(Light::Red), Ok(()));
    assert_eq!(
        cell.initialize(Light::Green),
        Err(CellError::AlreadyInitialized)
    );
    assert_eq!(cell.current(), Some(Light::Red));
}

#[test]
fn handler_transitions_are_applied_after_each_run() {
    let mut cell = StateMachineCell::new();
    let mut handler = LightHandler::default();
    cell.initialize(Light::Red).unwrap();

    for _ in 0..5 {
        cell.run_once(&mut handler);
    }

    assert_eq!(
        handler.handled,
        [
            Light::Red,
            Light::Green,
            Light::Green,
            Light::Dark,
            Light::Dark
        ]
    );
    assert_eq!(cell.current(), Some(Light::Dark));
}

#[derive(Default)]
struct CountingTask {
    initialized: u32,
    runs: u32,
}

impl Task for CountingTask {
    fn initialize(&mut self) {
        self.initialized += 1;
    }

    fn run_active_state(&mut self) {
        self.runs += 1;
    }
}

#[test]
fn superloop_runs_every_task_once_per_tick() {
    let mut first = CountingTask::default();
    let mut second = CountingTask::default();
    let mut superloop = Superloop::new();

    superloop.initialize(&mut [&mut first, &mut second]);
    for _ in 0..3 {
        superloop.tick(&mut [&mut first, &mut second]);
    }

    assert_eq!(superloop.ticks(), 3);
    assert_eq!((first.initialized, first.runs), (1, 3));
    assert_eq!((second.initialized, second.runs), (1, 3));
}
