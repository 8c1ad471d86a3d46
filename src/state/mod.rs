pub mod auth;
pub mod comment;
pub mod dashboard;
pub mod notification;
pub mod page_stack;
pub mod ui;

pub use auth::AuthState;
pub use comment::{CommentField, CommentForm};
pub use dashboard::{DashboardFocus, DashboardState, RegionPhase};
pub use notification::NotificationState;
pub use page_stack::{Direction, PageStack, Panel};
pub use ui::{AppMode, UiState};

use thiserror::Error;

/// Milliseconds per UI tick; the event loop ticks at this rate.
pub const TICK_MS: u64 = 50;

/// Configuration constants for the application
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub transition_ticks: u64,
    pub notification_ms: u64,
    pub min_two_column_width: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            transition_ticks: 6,
            notification_ms: 4000,
            min_two_column_width: 90,
        }
    }
}

/// Application error types
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Unexpected HTTP status {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("Malformed response for '{query}': {source}")]
    Decode {
        query: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Username \"{0}\" does not exist.")]
    UserNotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unsupported content type: {0}")]
    UnsupportedType(String),

    #[error("Missing render target: {0}")]
    MissingTarget(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type AppResult<T> = Result<T, AppError>;
