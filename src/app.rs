use crate::model::{MenuItem, RequestKey};
use crate::services::{ApiRequest, ApiResponse, CommentService};
use crate::state::{
    AppConfig, AppError, AppMode, AuthState, DashboardFocus, DashboardState, Direction,
    NotificationState, RegionPhase, UiState,
};
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

pub struct App {
    pub auth: AuthState,
    pub ui: UiState,
    pub dashboard: DashboardState,
    pub notifications: NotificationState,
    pub config: AppConfig,
    /// Bumped on logout; responses tagged with an older value are dropped.
    pub session: u64,
    pub to_worker: mpsc::UnboundedSender<ApiRequest>,
}

impl App {
    pub fn new(
        to_worker: mpsc::UnboundedSender<ApiRequest>,
        config: AppConfig,
        menu: Vec<MenuItem>,
    ) -> App {
        App {
            auth: AuthState::default(),
            ui: UiState::default(),
            dashboard: DashboardState::new(menu, config.transition_ticks),
            notifications: NotificationState::default(),
            config,
            session: 0,
            to_worker,
        }
    }

    pub fn set_notification(&mut self, message: impl Into<String>, ms: Option<u64>, minimal: bool) {
        self.notifications
            .set_notification(message, ms, minimal, self.ui.tick_count);
    }

    fn notify_error(&mut self, err: &AppError) {
        self.set_notification(format!("Error: {}", err), None, false);
    }

    pub fn send_request(&mut self, request: ApiRequest) {
        if self.to_worker.send(request).is_err() {
            error!("api worker is gone");
            self.set_notification("Error: the API worker stopped.", None, false);
        }
    }

    // --- Login / logout ---

    pub fn submit_login(&mut self) {
        if self.auth.form_disabled {
            return;
        }
        let username = self.auth.username_input.trim().to_string();
        if username.is_empty() {
            return;
        }
        self.auth.form_disabled = true;
        self.auth.login_error = None;
        debug!(%username, "login requested");
        self.send_request(ApiRequest::Login {
            session: self.session,
            username,
        });
    }

    pub fn logout(&mut self) {
        if let Some(user) = &self.auth.current_user {
            info!(username = %user.username, "logged out");
        }
        self.session += 1;
        self.auth.logout();
        self.dashboard.reset();
        self.notifications.clear_notification();
        self.ui.set_mode(AppMode::Login);
    }

    // --- Dashboard navigation ---

    /// Open, switch or close the content region for menu entry `index`.
    pub fn handle_menu_click(&mut self, index: usize) {
        if self.dashboard.is_locked() {
            debug!(index, "menu click ignored while busy");
            return;
        }
        let Some(item) = self.dashboard.menu.get(index).copied() else {
            return;
        };
        let Some(user_id) = self.auth.user_id() else {
            return;
        };

        self.dashboard.reset_page_stack();
        self.dashboard.menu_state.select(Some(index));

        if self.dashboard.active_menu == Some(index) {
            self.close_region();
            return;
        }

        self.dashboard.active_menu = Some(index);
        self.dashboard.processing = true;
        if self.dashboard.is_open() {
            self.dashboard.slide_direction = Direction::Next;
            self.dashboard.begin(RegionPhase::Sliding);
        } else {
            self.dashboard.begin(RegionPhase::Opening);
        }
        self.dashboard.focus = DashboardFocus::Content;

        debug!(menu = item.label(), "loading menu page");
        self.send_request(ApiRequest::LoadPage {
            session: self.session,
            slot: 0,
            descriptor: item.request(user_id).descriptor(),
        });
    }

    fn close_region(&mut self) {
        self.dashboard.active_menu = None;
        if self.dashboard.is_open() {
            self.dashboard.begin(RegionPhase::Closing);
        }
    }

    /// Step through the page stack. Going back from the first panel closes
    /// the region.
    pub fn change_page(&mut self, direction: Direction) {
        if self.dashboard.is_locked() || !self.dashboard.is_open() {
            return;
        }
        if direction == Direction::Previous && self.dashboard.stack.is_first() {
            self.close_region();
            return;
        }
        if self.dashboard.stack.change(direction) {
            self.dashboard.slide_direction = direction;
            self.dashboard.begin(RegionPhase::Sliding);
            if self.dashboard.focus == DashboardFocus::CommentForm {
                self.dashboard.focus = DashboardFocus::Content;
            }
        }
    }

    /// Follow the link under the cursor of the current panel.
    pub fn open_selected_link(&mut self) {
        let panel = self.dashboard.stack.current();
        let key = panel
            .content
            .as_ref()
            .zip(panel.selection.selected())
            .and_then(|(content, idx)| content.links().get(idx).map(|(_, key)| *key));
        if let Some(key) = key {
            self.open_link(key);
        }
    }

    /// Load `key` into the panel after the current one.
    pub fn open_link(&mut self, key: RequestKey) {
        if self.dashboard.is_locked() || !self.auth.is_logged_in() {
            debug!(?key, "link ignored while busy");
            return;
        }
        let slot = self.dashboard.stack.ensure_next();
        self.dashboard.processing = true;
        self.send_request(ApiRequest::LoadPage {
            session: self.session,
            slot,
            descriptor: key.descriptor(),
        });
    }

    // --- Comments ---

    /// Post the comment form against the post on the current panel. The
    /// region stays locked until the worker answers.
    pub fn submit_comment(&mut self) {
        if self.dashboard.comment_form.disabled || self.dashboard.is_locked() {
            return;
        }
        self.dashboard.comment_form.disable();

        let slot = self.dashboard.stack.current_index();
        let post_id = self
            .dashboard
            .stack
            .current()
            .content
            .as_ref()
            .and_then(|c| c.post_view())
            .map(|view| view.post.id);
        let Some(post_id) = post_id else {
            self.dashboard.comment_form.enable();
            self.notify_error(&AppError::MissingTarget("no post on this panel".to_string()));
            return;
        };

        let form = &self.dashboard.comment_form;
        let (name, body) = match CommentService::validate(&form.name, &form.body) {
            Ok(fields) => fields,
            Err(err) => {
                self.dashboard.comment_form.enable();
                self.set_notification(err.to_string(), Some(self.config.notification_ms), true);
                return;
            }
        };
        let Some(email) = self.auth.current_user.as_ref().map(|u| u.email.clone()) else {
            self.dashboard.comment_form.enable();
            return;
        };

        self.dashboard.processing = true;
        self.send_request(ApiRequest::PostComment {
            session: self.session,
            slot,
            post_id,
            name,
            body,
            email,
        });
    }

    // --- Worker responses ---

    pub fn handle_api_response(&mut self, response: ApiResponse) {
        if response.session() != self.session {
            debug!("dropping response from an earlier session");
            return;
        }
        match response {
            ApiResponse::LoginSucceeded { user, .. } => {
                let welcome = format!("Welcome, {}!", user.username);
                self.auth.login(user);
                self.dashboard.reset();
                self.ui.set_mode(AppMode::Dashboard);
                self.set_notification(welcome, Some(self.config.notification_ms), true);
            }
            ApiResponse::LoginFailed { error, .. } => {
                self.auth.fail(error.to_string());
            }
            ApiResponse::PageLoaded { slot, page, .. } => {
                self.dashboard.processing = false;
                let Some(panel) = self.dashboard.stack.get_mut(slot) else {
                    warn!(slot, "loaded page has no panel");
                    return;
                };
                panel.fill(page);
                self.dashboard.stack.truncate_after(slot);
                self.dashboard.comment_form.clear();
                self.dashboard.comment_form.enable();
                if slot > self.dashboard.stack.current_index() {
                    self.change_page(Direction::Next);
                }
            }
            ApiResponse::PageFailed { slot, error, .. } => {
                self.dashboard.processing = false;
                self.notify_error(&error);
                if slot == 0 {
                    self.close_region();
                } else if self
                    .dashboard
                    .stack
                    .get(slot)
                    .is_some_and(|p| p.content.is_none())
                {
                    self.dashboard.stack.truncate_after(slot - 1);
                }
            }
            ApiResponse::CommentPosted { slot, comment, .. } => {
                self.dashboard.processing = false;
                let form = &mut self.dashboard.comment_form;
                form.enable();
                form.clear();
                match self
                    .dashboard
                    .stack
                    .get_mut(slot)
                    .and_then(|p| p.content.as_mut())
                    .and_then(|c| c.post_view_mut())
                {
                    Some(view) if view.post.id == comment.post_id => {
                        view.prepend_comment(comment)
                    }
                    _ => warn!(slot, post_id = comment.post_id, "comment has no matching post"),
                }
                self.set_notification("Comment posted.", Some(self.config.notification_ms), true);
            }
            ApiResponse::CommentFailed { error, .. } => {
                self.dashboard.processing = false;
                self.dashboard.comment_form.enable();
                self.notify_error(&error);
            }
        }
    }

    pub fn on_tick(&mut self) {
        self.ui.tick();
        self.dashboard.tick();
        if self.notifications.should_close_notification(self.ui.tick_count) {
            self.notifications.clear_notification();
        }
    }
}
