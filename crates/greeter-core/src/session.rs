//! Session state holder.
//!
//! The one piece of actual logic in this application: an optional
//! "current user" value and the two transitions that change it.
//!
//! ## State Machine
//!
//! ```text
//! LoggedOut --Login(user)--> LoggedIn
//! LoggedIn  --Logout------> LoggedOut
//! LoggedIn  --Login(user)--> LoggedIn   (overwrite, last write wins)
//! LoggedOut --Logout------> LoggedOut   (no-op)
//! ```
//!
//! Initial state is LoggedOut. There is no terminal state and no
//! failure mode: both transitions always succeed.
//!
//! The session is an explicitly owned value passed through the UI
//! state tree. Nothing here reads ambient/global state.

/// The value object identifying the logged-in party.
///
/// No identity beyond the string itself; no uniqueness constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub username: String,
}

impl User {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }
}

/// A state transition command.
///
/// Tagged commands handled by [`reduce`]. Both variants are total over
/// their inputs; `Logout` carries no payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    /// Set the current user, overwriting any previous one.
    Login(User),
    /// Clear the current user.
    Logout,
}

/// Holder of the current optional [`User`].
///
/// `current_user` is either `None` or a fully-formed `User`; there is
/// no partial state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    current_user: Option<User>,
}

impl Session {
    /// Creates a session in the LoggedOut state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pure read of the current state.
    pub fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    /// Returns true if a user is present.
    pub fn is_logged_in(&self) -> bool {
        self.current_user.is_some()
    }

    /// Unconditionally sets the current user.
    ///
    /// Accepts any user value, including one with an empty username;
    /// no validation is performed by this layer.
    pub fn login(&mut self, user: User) {
        self.apply(SessionCommand::Login(user));
    }

    /// Unconditionally clears the current user. A no-op when already
    /// logged out.
    pub fn logout(&mut self) {
        self.apply(SessionCommand::Logout);
    }

    /// Applies a command in place via the pure [`reduce`] transition.
    pub fn apply(&mut self, command: SessionCommand) {
        tracing::debug!(?command, "session transition");
        *self = reduce(std::mem::take(self), command);
    }
}

/// The pure transition function: `(Session, SessionCommand) -> Session`.
pub fn reduce(mut session: Session, command: SessionCommand) -> Session {
    match command {
        SessionCommand::Login(user) => session.current_user = Some(user),
        SessionCommand::Logout => session.current_user = None,
    }
    session
}
