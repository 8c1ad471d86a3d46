//! Momentum: a terminal dashboard over a placeholder REST API.

pub mod app;
pub mod handlers;
pub mod logging;
pub mod model;
pub mod prefs;
pub mod services;
pub mod state;
pub mod ui;

pub use app::App;
pub use state::{AppError, AppResult};
