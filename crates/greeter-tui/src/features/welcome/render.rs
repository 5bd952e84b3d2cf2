//! Welcome feature view.

use greeter_core::config::Config;
use greeter_core::session::User;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::render::centered_rect;

/// Width of the welcome box.
const BOX_WIDTH: u16 = 44;

/// Height of the welcome box (borders included).
const BOX_HEIGHT: u16 = 7;

/// Renders the logged-in view: greeting plus the logout control.
pub fn render_welcome_view(frame: &mut Frame, user: &User, config: &Config, area: Rect) {
    let popup = centered_rect(area, BOX_WIDTH, BOX_HEIGHT);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green))
        .title(Line::from(Span::styled(
            " Session ",
            Style::default().fg(Color::Green),
        )));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let greeting = format!("{}, {}", config.greeting, user.username);
    let mut lines = vec![
        Line::from(Span::styled(greeting, Style::default().fg(Color::White))),
        Line::from(""),
        Line::from(Span::styled(
            "[ Log out ]",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::REVERSED),
        )),
    ];
    if config.show_hints {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("Enter", Style::default().fg(Color::DarkGray)),
            Span::raw(" to log out  "),
            Span::styled("Ctrl+C", Style::default().fg(Color::DarkGray)),
            Span::raw(" to quit"),
        ]));
    }

    let para = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(para, inner);
}
