//! Popups: notifications and the quit confirmation.

use ratatui::{Frame, layout::{Rect, Layout, Constraint, Direction}, style::{Style, Color}, widgets::{Block, Paragraph, Borders, BorderType, Clear, Wrap}, text::{Line, Span}, layout::Alignment};
use crate::app::App;
use ratatui::style::Modifier;

pub fn draw_centered_rect(r: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let popup_layout = Layout::default().direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2), Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ]).split(r);
    Layout::default().direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2), Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ]).split(popup_layout[1])[1]
}

pub fn draw_notification_popup(f: &mut Frame, text: &str) {
    let area = draw_centered_rect(f.area(), 50, 20);
    let block = Block::default().title("Notification").borders(Borders::ALL).border_type(BorderType::Double);
    let popup_height = area.height.saturating_sub(2);
    let lines: Vec<&str> = text.lines().collect();
    let text_lines = lines.len() as u16;
    let pad_top = (popup_height.saturating_sub(text_lines)) / 2;
    let mut content = Vec::new();
    for _ in 0..pad_top { content.push(Line::raw("")); }
    for l in lines.iter() { content.push(Line::from(*l)); }
    content.push(Line::raw(""));
    content.push(Line::from(Span::styled("press any key", Style::default().fg(Color::DarkGray))));
    let p = Paragraph::new(content).wrap(Wrap { trim: true }).block(block).alignment(Alignment::Center);
    f.render_widget(Clear, area);
    f.render_widget(p, area);
}

pub fn draw_minimal_notification_popup(f: &mut Frame, text: &str) {
    let size = f.area();
    let width = 30u16.max(text.len() as u16 + 2).min(size.width / 2);
    let height = 3u16;
    if size.width < width + 2 || size.height < height + 1 {
        return;
    }
    let x = size.x + size.width - width - 2;
    let y = size.y + 1;
    let area = Rect { x, y, width, height };
    let block = Block::default().borders(Borders::ALL).border_type(BorderType::Plain);
    let p = Paragraph::new(text.to_string()).block(block).alignment(Alignment::Left);
    f.render_widget(Clear, area);
    f.render_widget(p, area);
}

pub fn draw_quit_confirm_popup(f: &mut Frame, app: &App) {
    // Grow the popup until message and buttons fit
    let mut percent_y = 18u16;
    let percent_x = 40u16;
    let content_lines = 5;
    let mut area = draw_centered_rect(f.area(), percent_x, percent_y);
    let mut popup_height = area.height.saturating_sub(2);
    while popup_height < content_lines && percent_y < 60 {
        percent_y += 5;
        area = draw_centered_rect(f.area(), percent_x, percent_y);
        popup_height = area.height.saturating_sub(2);
    }
    let block = Block::default()
        .title("Are you sure?")
        .borders(Borders::ALL)
        .border_type(BorderType::Double);
    let pad_top = popup_height.saturating_sub(content_lines) / 2;
    let mut lines = Vec::new();
    for _ in 0..pad_top + 1 { lines.push(Line::from("")); }
    lines.push(Line::from(Span::styled(
        "Do you really want to quit?",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));
    let yes_style = if app.ui.quit_confirm_selected == 0 {
        Style::default().fg(Color::Black).bg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Green)
    };
    let no_style = if app.ui.quit_confirm_selected == 1 {
        Style::default().fg(Color::Black).bg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Red)
    };
    lines.push(Line::from(vec![
        Span::styled("[ Yes ]", yes_style),
        Span::raw("  "),
        Span::styled("[ No ]", no_style),
    ]));
    let para = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(Clear, area);
    f.render_widget(para, area);
}
