//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls
//! `update(app, event)` and executes the returned effects.
//!
//! Keys are routed to the view the root renderer would show for the
//! current session state, so input and display can never disagree
//! about which view is active.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::AppState;
use crate::{login, welcome};

/// The main reducer function.
///
/// Takes the current state and an event, mutates state, and returns
/// effects for the runtime to execute.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => vec![],
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event),
    }
}

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => handle_key(app, key),
        Event::Paste(text) => {
            // Paste only makes sense in the username field.
            if !app.session.is_logged_in() {
                app.login.insert_str(&text);
            }
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    // Ctrl+C quits from either view.
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return vec![UiEffect::Quit];
    }

    let command = if app.session.is_logged_in() {
        welcome::handle_key(key)
    } else {
        match login::handle_key(&mut app.login, key) {
            login::LoginAction::Submit(command) => Some(command),
            login::LoginAction::Handled => None,
        }
    };

    if let Some(command) = command {
        app.session.apply(command);
    }
    vec![]
}

#[cfg(test)]
mod tests {
    use greeter_core::config::Config;
    use greeter_core::session::User;

    use super::*;

    fn app() -> AppState {
        AppState::new(Config::default())
    }

    fn press(app: &mut AppState, code: KeyCode) -> Vec<UiEffect> {
        let key = KeyEvent::new(code, KeyModifiers::NONE);
        update(app, UiEvent::Terminal(Event::Key(key)))
    }

    fn type_str(app: &mut AppState, text: &str) {
        for ch in text.chars() {
            press(app, KeyCode::Char(ch));
        }
    }

    #[test]
    fn test_initial_state_is_logged_out() {
        let app = app();
        assert_eq!(app.session.current_user(), None);
    }

    #[test]
    fn test_typing_and_enter_logs_in() {
        let mut app = app();
        type_str(&mut app, "alice");
        let effects = press(&mut app, KeyCode::Enter);

        assert!(effects.is_empty());
        assert_eq!(app.session.current_user(), Some(&User::new("alice")));
        // The username field is cleared on submit.
        assert_eq!(app.login.value(), "");
    }

    #[test]
    fn test_logout_returns_to_login_view() {
        let mut app = app();
        type_str(&mut app, "alice");
        press(&mut app, KeyCode::Enter);

        // Enter on the welcome view activates the logout control.
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.session.current_user(), None);
    }

    #[test]
    fn test_relogin_overwrites_user() {
        let mut app = app();
        type_str(&mut app, "alice");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter); // log out

        type_str(&mut app, "bob");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.session.current_user(), Some(&User::new("bob")));
    }

    #[test]
    fn test_empty_submit_logs_in_with_empty_username() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.session.current_user(), Some(&User::new("")));
    }

    #[test]
    fn test_typing_while_logged_in_does_not_edit_form() {
        let mut app = app();
        press(&mut app, KeyCode::Enter); // log in as ""
        type_str(&mut app, "ignored");
        assert_eq!(app.login.value(), "");
        assert!(app.session.is_logged_in());
    }

    #[test]
    fn test_ctrl_c_quits_from_both_views() {
        let mut app = app();
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        let effects = update(&mut app, UiEvent::Terminal(Event::Key(key)));
        assert_eq!(effects, vec![UiEffect::Quit]);

        app.session.login(User::new("alice"));
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        let effects = update(&mut app, UiEvent::Terminal(Event::Key(key)));
        assert_eq!(effects, vec![UiEffect::Quit]);
        // Quit is an effect for the runtime; state is untouched here.
        assert!(app.session.is_logged_in());
    }

    #[test]
    fn test_paste_goes_to_username_field_only() {
        let mut app = app();
        update(&mut app, UiEvent::Terminal(Event::Paste("ali\nce".into())));
        assert_eq!(app.login.value(), "alice");

        press(&mut app, KeyCode::Enter);
        update(&mut app, UiEvent::Terminal(Event::Paste("junk".into())));
        assert_eq!(app.login.value(), "");
    }

    #[test]
    fn test_tick_produces_no_effects() {
        let mut app = app();
        assert!(update(&mut app, UiEvent::Tick).is_empty());
    }
}
