//! Banner drawing for the login screen and the dashboard title bar.

use figlet_rs::FIGfont;
use ratatui::{Frame, layout::{Alignment, Rect}, style::{Color, Modifier, Style}, text::{Line, Span}, widgets::{Block, Borders, Paragraph}};
use crate::app::App;

const PALETTE: [Color; 4] = [Color::Magenta, Color::LightMagenta, Color::Cyan, Color::LightCyan];

/// Figlet rendering of `text`, or None when the font is unavailable.
fn figlet(text: &str) -> Option<String> {
    let font = FIGfont::standard().ok()?;
    font.convert(text).map(|figure| figure.to_string())
}

/// Banner rows with a color band that drifts right as `tick_count` grows.
pub fn get_styled_banner_lines(width: u16, tick_count: u64) -> Vec<Line<'static>> {
    let art = figlet("Momentum").unwrap_or_default();
    let art_width = art.lines().map(|l| l.chars().count()).max().unwrap_or(0);
    if art.is_empty() || art_width > width as usize {
        return vec![Line::from(Span::styled(
            "M O M E N T U M",
            Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
        ))];
    }

    let shift = (tick_count / 4) as usize;
    art.lines()
        .filter(|l| !l.trim().is_empty())
        .map(|line| {
            let spans: Vec<Span<'static>> = line
                .chars()
                .enumerate()
                .map(|(x, c)| {
                    let color = PALETTE[((x + shift) / 6) % PALETTE.len()];
                    Span::styled(c.to_string(), Style::default().fg(color))
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}

pub fn draw_full_banner(f: &mut Frame, app: &App, area: Rect) {
    let banner = Paragraph::new(get_styled_banner_lines(area.width, app.ui.tick_count))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(banner, area);
}

pub fn draw_title_bar(f: &mut Frame, title: &str, area: Rect) {
    let bar = Paragraph::new(Line::from(Span::styled(
        title.to_string(),
        Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(bar, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrow_terminal_gets_plain_banner() {
        let lines = get_styled_banner_lines(10, 0);
        assert_eq!(lines.len(), 1);
    }

    #[test]
    fn wide_terminal_gets_figlet_art() {
        let lines = get_styled_banner_lines(200, 0);
        assert!(lines.len() > 1);
    }
}
