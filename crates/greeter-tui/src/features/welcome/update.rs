//! Welcome feature reducer.

use crossterm::event::{KeyCode, KeyEvent};
use greeter_core::session::SessionCommand;

/// Handles a key press while the welcome view is active.
///
/// Enter activates the logout control. Other keys are ignored; the
/// view has nothing else to interact with.
pub fn handle_key(key: KeyEvent) -> Option<SessionCommand> {
    match key.code {
        KeyCode::Enter => Some(SessionCommand::Logout),
        _ => None,
    }
}
