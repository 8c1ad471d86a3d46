use super::step;
use crate::app::App;
use crate::state::{DashboardFocus, Direction};
use crossterm::event::{KeyCode, KeyEvent};

/// Handle dashboard input for the menu and the content region
pub fn handle_dashboard_input(key: KeyEvent, app: &mut App) {
    match app.dashboard.focus {
        DashboardFocus::Menu => handle_menu_input(key, app),
        DashboardFocus::Content => handle_content_input(key, app),
        DashboardFocus::CommentForm => {}
    }
}

fn handle_menu_input(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Down | KeyCode::Up => {
            let len = app.dashboard.menu.len();
            let next = step(app.dashboard.menu_state.selected(), len, key.code == KeyCode::Down);
            app.dashboard.menu_state.select(next);
        }
        KeyCode::Enter => {
            if let Some(idx) = app.dashboard.selected_menu() {
                app.handle_menu_click(idx);
            }
        }
        KeyCode::Tab | KeyCode::Right => {
            if app.dashboard.is_open() {
                app.dashboard.focus = DashboardFocus::Content;
            }
        }
        _ => {}
    }
}

fn handle_content_input(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Down | KeyCode::Up => {
            let panel = app.dashboard.stack.current_mut();
            let len = panel.content.as_ref().map_or(0, |c| c.links().len());
            let next = step(panel.selection.selected(), len, key.code == KeyCode::Down);
            panel.selection.select(next);
        }
        KeyCode::Enter => {
            app.open_selected_link();
        }
        KeyCode::Left | KeyCode::Backspace => {
            app.change_page(Direction::Previous);
        }
        KeyCode::Right => {
            app.change_page(Direction::Next);
        }
        KeyCode::Tab => {
            let on_post = app
                .dashboard
                .stack
                .current()
                .content
                .as_ref()
                .and_then(|c| c.post_view())
                .is_some();
            app.dashboard.focus = if on_post {
                DashboardFocus::CommentForm
            } else {
                DashboardFocus::Menu
            };
        }
        KeyCode::Esc => {
            app.dashboard.focus = DashboardFocus::Menu;
        }
        _ => {}
    }
}
