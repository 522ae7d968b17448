use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CellError {
    #[error("state machine already has an initial state")]
    AlreadyInitialized,
}

/// What a state handler asks the cell to do once it returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Transition<S> {
    Stay,
    To(S),
}

/// Dispatches one tick's worth of work for the given state.
///
/// Implementors match on the state enum, so every state has exactly one
/// handler and adding a state without a handler fails to compile.
pub trait StateHandler<S> {
    fn handle(&mut self, state: S) -> Transition<S>;
}

/// Holds the current state of a run-to-completion state machine.
///
/// The only way the state changes after `initialize` is through the
/// [`Transition`] returned by the handler that is currently running.
#[derive(Debug)]
pub struct StateMachineCell<S> {
    current: Option<S>,
}

impl<S: Copy> StateMachineCell<S> {
    pub const fn new() -> Self {
        Self { current: None }
    }

    pub fn initialize(&mut self, initial: S) -> Result<(), CellError> {
        if self.current.is_some() {
            return Err(CellError::AlreadyInitialized);
        }

        self.current = Some(initial);
        Ok(())
    }

    pub fn current(&self) -> Option<S> {
        self.current
    }

    /// Runs the handler for the current state once. Does nothing before
    /// `initialize`.
    pub fn run_once<H: StateHandler<S>>(&mut self, handler: &mut H) {
        let Some(state) = self.current else {
            return;
        };

        if let Transition::To(next) = handler.handle(state) {
            self.current = Some(next);
        }
    }
}

impl<S: Copy> Default for StateMachineCell<S> {
    fn default() -> Self {
        Self::new()
    }
}
