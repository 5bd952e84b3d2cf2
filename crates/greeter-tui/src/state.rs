//! Application state composition.
//!
//! This module defines the top-level state for the TUI:
//!
//! ```text
//! AppState
//! ├── session: Session        (login/logout state machine)
//! ├── login: LoginFormState   (username field, cursor)
//! └── config: Config          (greeting prefix, hint visibility)
//! ```
//!
//! The session is owned here and passed by reference to views; there
//! is no ambient/global session lookup. The root view reads
//! `session.current_user()` to decide which child view to show.

use greeter_core::config::Config;
use greeter_core::session::Session;

use crate::login::LoginFormState;

/// TUI application state.
pub struct AppState {
    /// Flag indicating the app should quit.
    pub should_quit: bool,
    /// The login/logout state machine.
    pub session: Session,
    /// Login form state (username field).
    pub login: LoginFormState,
    /// Presentation configuration.
    pub config: Config,
}

impl AppState {
    /// Creates a new `AppState` in the logged-out state.
    pub fn new(config: Config) -> Self {
        Self {
            should_quit: false,
            session: Session::new(),
            login: LoginFormState::new(),
            config,
        }
    }
}
