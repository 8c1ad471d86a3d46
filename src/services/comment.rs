use crate::state::{AppError, AppResult};

/// Validation and request building for post comments
pub struct CommentService;

impl CommentService {
    /// Trimmed `(name, body)`, or a validation error when either is blank.
    pub fn validate(name: &str, body: &str) -> AppResult<(String, String)> {
        let name = name.trim();
        let body = body.trim();

        if name.is_empty() {
            return Err(AppError::Validation("Comment name cannot be empty".to_string()));
        }
        if body.is_empty() {
            return Err(AppError::Validation("Comment body cannot be empty".to_string()));
        }

        Ok((name.to_string(), body.to_string()))
    }

    /// Form fields for `POST comments`.
    pub fn params(post_id: u64, name: &str, body: &str, email: &str) -> Vec<(String, String)> {
        vec![
            ("postId".to_string(), post_id.to_string()),
            ("name".to_string(), name.to_string()),
            ("body".to_string(), body.to_string()),
            ("email".to_string(), email.to_string()),
        ]
    }

    /// Cached list the created comment is appended to.
    pub fn comments_query(post_id: u64) -> String {
        format!("posts/{}/comments", post_id)
    }
}
