//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime
//! executes. The reducer only mutates state; anything that touches the
//! outside world goes through an effect. Session transitions are state
//! mutations, not effects: they have no side effects beyond the state
//! change.

/// Effects returned by the reducer for the runtime to execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEffect {
    /// Quit the application.
    Quit,
}
