//! Pure view/render functions for the TUI.
//!
//! Functions here take `&AppState` by immutable reference, draw to a
//! ratatui Frame, and never mutate state or return effects.
//!
//! The root view reads `session.current_user()` to decide which child
//! view to show: the login form when absent, the welcome view when
//! present.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::state::AppState;
use crate::{login, welcome};

/// Height of the status line at the bottom of the screen.
const STATUS_HEIGHT: u16 = 1;

/// Renders the entire TUI to the frame.
pub fn render(app: &AppState, frame: &mut Frame) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),                // Active view
            Constraint::Length(STATUS_HEIGHT), // Status line
        ])
        .split(area);

    match app.session.current_user() {
        None => login::render_login_view(frame, &app.login, app.config.show_hints, chunks[0]),
        Some(user) => welcome::render_welcome_view(frame, user, &app.config, chunks[0]),
    }

    render_status_line(app, frame, chunks[1]);
}

/// Renders the status line below the active view.
fn render_status_line(app: &AppState, frame: &mut Frame, area: Rect) {
    let spans: Vec<Span> = match app.session.current_user() {
        None => vec![
            Span::styled("Logged out", Style::default().fg(Color::DarkGray)),
            Span::raw("  "),
            Span::styled("Ctrl+C", Style::default().fg(Color::DarkGray)),
            Span::raw(" quit"),
        ],
        Some(user) => vec![
            Span::styled("Logged in as ", Style::default().fg(Color::DarkGray)),
            Span::styled(user.username.clone(), Style::default().fg(Color::Green)),
        ],
    };

    let status = Paragraph::new(Line::from(spans)).alignment(Alignment::Left);
    frame.render_widget(status, area);
}

/// Computes a centered box of at most `width` x `height` within `area`.
pub(crate) fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use greeter_core::config::Config;
    use greeter_core::session::User;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;

    fn draw(app: &AppState) -> String {
        let backend = TestBackend::new(60, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(app, frame)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_initial_state_shows_login_view() {
        let app = AppState::new(Config::default());
        let screen = draw(&app);
        assert!(screen.contains("Log in"));
        assert!(screen.contains("Username:"));
        assert!(screen.contains("Logged out"));
        assert!(!screen.contains("Welcome"));
    }

    #[test]
    fn test_logged_in_state_shows_welcome_view() {
        let mut app = AppState::new(Config::default());
        app.session.login(User::new("alice"));

        let screen = draw(&app);
        assert!(screen.contains("Welcome, alice"));
        assert!(screen.contains("[ Log out ]"));
        assert!(screen.contains("Logged in as"));
        assert!(!screen.contains("Username:"));
    }

    #[test]
    fn test_greeting_prefix_comes_from_config() {
        let config = Config {
            greeting: "Hi".to_string(),
            ..Config::default()
        };
        let mut app = AppState::new(config);
        app.session.login(User::new("bob"));

        assert!(draw(&app).contains("Hi, bob"));
    }

    #[test]
    fn test_hints_can_be_disabled() {
        let config = Config {
            show_hints: false,
            ..Config::default()
        };
        let app = AppState::new(config);

        assert!(!draw(&app).contains("Enter to log in"));
    }
}
