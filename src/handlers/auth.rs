use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent};

/// Handle login screen input
pub fn handle_login_input(key: KeyEvent, app: &mut App) {
    if app.auth.form_disabled {
        return;
    }
    match key.code {
        KeyCode::Char(c) => {
            app.auth.username_input.push(c);
        }
        KeyCode::Backspace => {
            app.auth.username_input.pop();
        }
        KeyCode::Enter => {
            app.submit_login();
        }
        KeyCode::Esc => {
            app.ui.show_quit_confirm = true;
            app.ui.quit_confirm_selected = 1;
        }
        _ => {}
    }
}
