pub mod auth;
pub mod comment;
pub mod dashboard;
pub mod navigation;

use crate::app::App;
use crate::state::{AppMode, DashboardFocus};
use crossterm::event::{KeyEvent, KeyEventKind};

/// Main input handler dispatcher
pub fn handle_key_event(key: KeyEvent, app: &mut App) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    // Handle quit confirmation dialog
    if app.ui.show_quit_confirm {
        handle_quit_confirm_input(key, app);
        return;
    }

    // Handle global shortcuts first
    if navigation::handle_global_shortcuts(key, app) {
        return;
    }

    // A full notification swallows the key that dismisses it; minimal ones
    // just go away.
    if let Some((_, _, minimal)) = &app.notifications.current_notification {
        let minimal = *minimal;
        app.notifications.clear_notification();
        if !minimal {
            return;
        }
    }

    match app.ui.mode {
        AppMode::Login => auth::handle_login_input(key, app),
        AppMode::Dashboard => match app.dashboard.focus {
            DashboardFocus::CommentForm => comment::handle_comment_input(key, app),
            _ => dashboard::handle_dashboard_input(key, app),
        },
    }
}

fn handle_quit_confirm_input(key: KeyEvent, app: &mut App) {
    use crossterm::event::{KeyCode, KeyModifiers};

    match key.code {
        KeyCode::Left | KeyCode::Right | KeyCode::Tab => {
            app.ui.quit_confirm_selected = if app.ui.quit_confirm_selected == 0 { 1 } else { 0 };
        }
        KeyCode::Enter => {
            if app.ui.quit_confirm_selected == 0 {
                app.ui.quit();
            }
            app.ui.show_quit_confirm = false;
        }
        KeyCode::Esc => {
            app.ui.show_quit_confirm = false;
        }
        // Ctrl+C again closes the dialog
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.ui.show_quit_confirm = false;
        }
        _ => {}
    }
}

/// Wrap-around step through a list of `len` rows.
pub(crate) fn step(current: Option<usize>, len: usize, forward: bool) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let current = current.unwrap_or(0);
    Some(if forward {
        (current + 1) % len
    } else {
        (current + len - 1) % len
    })
}
