//! Main UI module. Re-exports submodules and provides the main entry point.

pub mod banner;
pub mod auth;
pub mod dashboard;
pub mod popups;

use ratatui::Frame;
use crate::app::App;
use crate::state::{AppMode, RegionPhase};
use crate::ui::banner::{draw_full_banner, draw_title_bar};
use crate::ui::auth::draw_login;
use crate::ui::dashboard::draw_dashboard;
use crate::ui::popups::{draw_minimal_notification_popup, draw_notification_popup, draw_quit_confirm_popup};

/// "Momentum - {title}" for the screen being shown.
pub fn window_title(app: &App) -> String {
    let title = match app.ui.mode {
        AppMode::Login => "Login",
        AppMode::Dashboard => {
            let panel_title = (app.dashboard.phase != RegionPhase::Closed)
                .then(|| app.dashboard.stack.current().title())
                .flatten();
            panel_title.unwrap_or("Dashboard")
        }
    };
    format!("Momentum - {}", title)
}

pub fn ui(f: &mut Frame, app: &mut App) {
    let size = f.area();
    let banner_height = match app.ui.mode {
        AppMode::Login => 9,
        AppMode::Dashboard => 2,
    };
    let chunks = ratatui::layout::Layout::default()
        .constraints([
            ratatui::layout::Constraint::Length(banner_height), // Banner height
            ratatui::layout::Constraint::Min(0),                // Main Content
            ratatui::layout::Constraint::Length(3),             // Footer
        ])
        .split(size);

    match app.ui.mode {
        AppMode::Login => draw_full_banner(f, app, chunks[0]),
        AppMode::Dashboard => draw_title_bar(f, &window_title(app), chunks[0]),
    }

    let help_text = match app.ui.mode {
        AppMode::Login => "[Enter] Log in | [Esc] Quit",
        AppMode::Dashboard => "[↑↓] Nav | [Enter] Open | [←/Bksp] Back | [→] Next\n[Tab] Focus | [Esc] Menu | [Ctrl+L] Log out | [Ctrl+C] Quit",
    };
    let status_text = match &app.auth.current_user {
        Some(user) => format!("Logged in as: {}", user.username),
        None => "Not Logged In".to_string(),
    };

    // Split footer into two sections: help text and status
    let footer_chunks = ratatui::layout::Layout::default()
        .direction(ratatui::layout::Direction::Horizontal)
        .constraints([
            ratatui::layout::Constraint::Percentage(67), // Help text area
            ratatui::layout::Constraint::Percentage(33), // Status area
        ])
        .split(chunks[2]);

    f.render_widget(
        ratatui::widgets::Paragraph::new(help_text)
            .wrap(ratatui::widgets::Wrap { trim: true })
            .block(ratatui::widgets::Block::default().borders(ratatui::widgets::Borders::TOP)),
        footer_chunks[0],
    );

    f.render_widget(
        ratatui::widgets::Paragraph::new(ratatui::text::Span::styled(
            status_text,
            ratatui::style::Style::default().fg(ratatui::style::Color::Yellow)
        ))
            .alignment(ratatui::layout::Alignment::Right)
            .block(ratatui::widgets::Block::default().borders(ratatui::widgets::Borders::TOP)),
        footer_chunks[1],
    );

    let main_area = chunks[1];
    match app.ui.mode {
        AppMode::Login => draw_login(f, app, main_area),
        AppMode::Dashboard => draw_dashboard(f, app, main_area),
    }

    if let Some((notification, _, minimal)) = &app.notifications.current_notification {
        if *minimal {
            draw_minimal_notification_popup(f, notification);
        } else {
            draw_notification_popup(f, notification);
        }
    }
    if app.ui.show_quit_confirm {
        draw_quit_confirm_popup(f, app);
    }
}
