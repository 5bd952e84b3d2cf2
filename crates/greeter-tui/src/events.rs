//! UI event types.
//!
//! All inputs to the TUI are converted to [`UiEvent`] before being
//! processed by the reducer. Everything here is synchronous: state
//! reads and writes happen inside the same event-loop iteration that
//! collected the event.

use crossterm::event::Event as CrosstermEvent;

/// Unified event enum for the TUI.
#[derive(Debug)]
pub enum UiEvent {
    /// Timer tick (render cadence).
    Tick,

    /// Terminal input event (key, paste, resize).
    Terminal(CrosstermEvent),
}
