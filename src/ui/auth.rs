//! Login screen.

use ratatui::{Frame, layout::{Rect, Layout, Constraint}, style::{Style, Color}, widgets::{Block, Paragraph, Borders, Wrap}, text::Span};
use ratatui::prelude::Alignment;
use crate::app::App;
use crate::ui::popups::draw_centered_rect;

pub fn draw_login(f: &mut Frame, app: &mut App, area: Rect) {
    let area = draw_centered_rect(area, 60, 80);
    let outer_block = Block::default().title("Login").borders(Borders::ALL);
    f.render_widget(outer_block, area);
    let chunks = Layout::default().margin(2).constraints([
        Constraint::Length(3), Constraint::Length(3), Constraint::Min(1)
    ]).split(area);

    let input_style = if app.auth.form_disabled {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::Yellow)
    };
    f.render_widget(
        Paragraph::new(app.auth.username_input.as_str())
            .block(Block::default().borders(Borders::ALL).title("Username")).style(input_style),
        chunks[0],
    );

    let (status, status_style) = if app.auth.form_disabled {
        ("Looking you up...".to_string(), Style::default().fg(Color::Cyan))
    } else if let Some(err) = &app.auth.login_error {
        (err.clone(), Style::default().fg(Color::Red))
    } else {
        ("[ Enter ] to log in".to_string(), Style::default().fg(Color::DarkGray))
    };
    f.render_widget(
        Paragraph::new(Span::styled(status, status_style))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        chunks[1],
    );

    if !app.auth.form_disabled {
        f.set_cursor_position((chunks[0].x + app.auth.username_input.len() as u16 + 1, chunks[0].y + 1));
    }
}
