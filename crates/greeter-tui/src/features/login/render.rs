//! Login feature view.
//!
//! Pure rendering for the login form: a bordered box with a username
//! field and submit hint. The hardware cursor is placed inside the
//! field so editing feels like a real input.

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::state::LoginFormState;
use crate::render::centered_rect;

/// Width of the login box.
const BOX_WIDTH: u16 = 44;

/// Height of the login box (borders included).
const BOX_HEIGHT: u16 = 7;

/// Renders the logged-out view.
pub fn render_login_view(frame: &mut Frame, form: &LoginFormState, show_hints: bool, area: Rect) {
    let popup = centered_rect(area, BOX_WIDTH, BOX_HEIGHT);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(Line::from(Span::styled(
            " Log in ",
            Style::default().fg(Color::Cyan),
        )));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let field_width = inner.width.saturating_sub(2) as usize;
    let mut lines = vec![
        Line::from(Span::styled(
            "Username:",
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(
            format!("  {}", form.value()),
            Style::default().fg(Color::Green),
        )),
        Line::from(""),
    ];
    if show_hints {
        lines.push(Line::from(vec![
            Span::styled("Enter", Style::default().fg(Color::DarkGray)),
            Span::raw(" to log in  "),
            Span::styled("Ctrl+C", Style::default().fg(Color::DarkGray)),
            Span::raw(" to quit"),
        ]));
    }

    let para = Paragraph::new(lines);
    frame.render_widget(para, inner);

    // Place the cursor inside the field, clamped to the box width.
    let cursor_x = inner.x + 2 + form.cursor_display_width().min(field_width) as u16;
    let cursor_y = inner.y + 1;
    frame.set_cursor_position(Position::new(cursor_x, cursor_y));
}
