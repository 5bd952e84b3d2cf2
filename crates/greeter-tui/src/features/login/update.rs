//! Login feature reducer.
//!
//! Keyboard handling for the username field. Enter submits the form as
//! a `Login` command; everything else edits the field in place.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use greeter_core::session::{SessionCommand, User};

use super::state::LoginFormState;

/// Outcome of a key press on the login view.
#[derive(Debug, PartialEq, Eq)]
pub enum LoginAction {
    /// Key consumed (or ignored); nothing further to do.
    Handled,
    /// Submit the entered username as a login command.
    Submit(SessionCommand),
}

/// Handles a key press while the login view is active.
pub fn handle_key(form: &mut LoginFormState, key: KeyEvent) -> LoginAction {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    match key.code {
        // Enter submits. No validation: an empty username logs in too.
        KeyCode::Enter => {
            let username = form.take();
            LoginAction::Submit(SessionCommand::Login(User::new(username)))
        }

        // Ctrl+A / Ctrl+E: emacs-style line start/end
        KeyCode::Char('a') if ctrl => {
            form.move_home();
            LoginAction::Handled
        }
        KeyCode::Char('e') if ctrl => {
            form.move_end();
            LoginAction::Handled
        }
        // Ctrl+U: clear the field
        KeyCode::Char('u') if ctrl => {
            form.clear();
            LoginAction::Handled
        }

        KeyCode::Backspace => {
            form.delete_prev_char();
            LoginAction::Handled
        }
        KeyCode::Delete => {
            form.delete_next_char();
            LoginAction::Handled
        }
        KeyCode::Left => {
            form.move_left();
            LoginAction::Handled
        }
        KeyCode::Right => {
            form.move_right();
            LoginAction::Handled
        }
        KeyCode::Home => {
            form.move_home();
            LoginAction::Handled
        }
        KeyCode::End => {
            form.move_end();
            LoginAction::Handled
        }

        KeyCode::Char(ch) if !ctrl && !alt => {
            form.insert_char(ch);
            LoginAction::Handled
        }

        _ => LoginAction::Handled,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(ch: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_typing_fills_the_field() {
        let mut form = LoginFormState::new();
        for ch in "alice".chars() {
            assert_eq!(
                handle_key(&mut form, key(KeyCode::Char(ch))),
                LoginAction::Handled
            );
        }
        assert_eq!(form.value(), "alice");
    }

    #[test]
    fn test_enter_submits_and_clears() {
        let mut form = LoginFormState::new();
        form.insert_str("alice");

        let action = handle_key(&mut form, key(KeyCode::Enter));
        assert_eq!(
            action,
            LoginAction::Submit(SessionCommand::Login(User::new("alice")))
        );
        assert_eq!(form.value(), "");
    }

    #[test]
    fn test_enter_with_empty_field_submits_empty_username() {
        let mut form = LoginFormState::new();
        let action = handle_key(&mut form, key(KeyCode::Enter));
        assert_eq!(
            action,
            LoginAction::Submit(SessionCommand::Login(User::new("")))
        );
    }

    #[test]
    fn test_ctrl_u_clears_field() {
        let mut form = LoginFormState::new();
        form.insert_str("alice");
        handle_key(&mut form, ctrl('u'));
        assert_eq!(form.value(), "");
    }

    #[test]
    fn test_ctrl_chars_are_not_inserted() {
        let mut form = LoginFormState::new();
        handle_key(&mut form, ctrl('e'));
        handle_key(&mut form, ctrl('a'));
        assert_eq!(form.value(), "");
    }
}
