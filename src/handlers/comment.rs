use crate::app::App;
use crate::state::{CommentField, DashboardFocus};
use crossterm::event::{KeyCode, KeyEvent};

/// Handle input while the comment form under a post has focus
pub fn handle_comment_input(key: KeyEvent, app: &mut App) {
    let form = &mut app.dashboard.comment_form;
    match key.code {
        KeyCode::Esc => {
            app.dashboard.focus = DashboardFocus::Content;
        }
        KeyCode::Tab => {
            form.field = form.field.next();
        }
        KeyCode::BackTab => {
            form.field = form.field.previous();
        }
        _ if form.disabled => {}
        KeyCode::Char(c) => {
            if let Some(input) = form.focused_input() {
                input.push(c);
            }
        }
        KeyCode::Backspace => {
            if let Some(input) = form.focused_input() {
                input.pop();
            }
        }
        KeyCode::Enter => match form.field {
            CommentField::Name => form.field = CommentField::Body,
            CommentField::Body => form.body.push('\n'),
            CommentField::Submit => app.submit_comment(),
        },
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::*;
    use crate::model::{Post, RequestKey};
    use crate::services::{ApiRequest, ApiResponse, PageBody, PageContent, PostView};

    fn on_post_form() -> (App, tokio::sync::mpsc::UnboundedReceiver<ApiRequest>) {
        let (mut app, mut rx) = logged_in();
        app.handle_menu_click(2);
        rx.try_recv().unwrap();
        let author = app.auth.current_user.clone().unwrap();
        app.handle_api_response(ApiResponse::PageLoaded {
            session: 0,
            slot: 0,
            page: PageContent {
                title: "sunt aut".into(),
                body: PageBody::Post(PostView {
                    post: Post { user_id: 1, id: 1, title: "sunt aut".into(), body: "quia".into() },
                    author,
                    comments: vec![],
                    comment_count: 0,
                }),
            },
        });
        app.dashboard.focus = DashboardFocus::CommentForm;
        (app, rx)
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            handle_comment_input(key(KeyCode::Char(c)), app);
        }
    }

    #[test]
    fn fill_and_submit() {
        let (mut app, mut rx) = on_post_form();
        type_str(&mut app, "Leanne");
        handle_comment_input(key(KeyCode::Enter), &mut app);
        type_str(&mut app, "nice");
        handle_comment_input(key(KeyCode::Tab), &mut app);
        assert_eq!(app.dashboard.comment_form.field, CommentField::Submit);
        handle_comment_input(key(KeyCode::Enter), &mut app);

        match rx.try_recv().unwrap() {
            ApiRequest::PostComment { name, body, post_id, .. } => {
                assert_eq!((name.as_str(), body.as_str(), post_id), ("Leanne", "nice", 1));
            }
            other => panic!("unexpected {:?}", other),
        }
        assert!(app.dashboard.comment_form.disabled);
        type_str(&mut app, "x");
        assert_eq!(app.dashboard.comment_form.body, "nice");
    }

    #[test]
    fn esc_returns_to_content() {
        let (mut app, _rx) = on_post_form();
        handle_comment_input(key(KeyCode::Esc), &mut app);
        assert_eq!(app.dashboard.focus, DashboardFocus::Content);
        // The author link stays selectable.
        let links = app.dashboard.stack.current().content.as_ref().unwrap().links();
        assert_eq!(links[0].1, RequestKey::User(1));
    }
}
