use crate::model::User;

/// State management for the login form and the logged-in user
pub struct AuthState {
    pub current_user: Option<User>,
    pub username_input: String,
    pub login_error: Option<String>,
    pub form_disabled: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            current_user: None,
            username_input: String::new(),
            login_error: None,
            form_disabled: false,
        }
    }
}

impl AuthState {
    pub fn is_logged_in(&self) -> bool {
        self.current_user.is_some()
    }

    pub fn user_id(&self) -> Option<u64> {
        self.current_user.as_ref().map(|u| u.id)
    }

    pub fn login(&mut self, user: User) {
        self.current_user = Some(user);
        self.login_error = None;
        self.form_disabled = false;
    }

    pub fn logout(&mut self) {
        self.current_user = None;
        self.username_input.clear();
        self.login_error = None;
        self.form_disabled = false;
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.login_error = Some(message.into());
        self.form_disabled = false;
    }
}
