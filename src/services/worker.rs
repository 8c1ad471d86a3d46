//! Async side of the client.
//!
//! The App never awaits anything. It sends an [`ApiRequest`] down a channel
//! and gets an [`ApiResponse`] back through the event loop. Every request
//! runs on its own task, so a slow post page does not hold up a login.

use super::api::ApiGateway;
use super::comment::CommentService;
use super::templates::{self, PageContent};
use crate::model::{Comment, RequestDescriptor, User};
use crate::state::{AppError, AppResult};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};
use url::form_urlencoded;

#[derive(Debug, Clone)]
pub enum ApiRequest {
    Login {
        session: u64,
        username: String,
    },
    LoadPage {
        session: u64,
        slot: usize,
        descriptor: RequestDescriptor,
    },
    PostComment {
        session: u64,
        slot: usize,
        post_id: u64,
        name: String,
        body: String,
        email: String,
    },
}

#[derive(Debug)]
pub enum ApiResponse {
    LoginSucceeded { session: u64, user: User },
    LoginFailed { session: u64, error: AppError },
    PageLoaded { session: u64, slot: usize, page: PageContent },
    PageFailed { session: u64, slot: usize, error: AppError },
    CommentPosted { session: u64, slot: usize, comment: Comment },
    CommentFailed { session: u64, slot: usize, error: AppError },
}

impl ApiResponse {
    pub fn session(&self) -> u64 {
        match self {
            ApiResponse::LoginSucceeded { session, .. }
            | ApiResponse::LoginFailed { session, .. }
            | ApiResponse::PageLoaded { session, .. }
            | ApiResponse::PageFailed { session, .. }
            | ApiResponse::CommentPosted { session, .. }
            | ApiResponse::CommentFailed { session, .. } => *session,
        }
    }
}

/// Serve requests until the App side hangs up.
pub async fn run(
    api: ApiGateway,
    mut requests: mpsc::UnboundedReceiver<ApiRequest>,
    responses: mpsc::UnboundedSender<ApiResponse>,
) {
    info!(base_url = api.base_url(), "api worker started");
    while let Some(request) = requests.recv().await {
        let api = api.clone();
        let responses = responses.clone();
        tokio::spawn(async move {
            let response = handle(&api, request).await;
            if responses.send(response).is_err() {
                debug!("ui gone, dropping api response");
            }
        });
    }
    info!("api worker stopped");
}

/// Run one request to completion.
pub async fn handle(api: &ApiGateway, request: ApiRequest) -> ApiResponse {
    match request {
        ApiRequest::Login { session, username } => match login(api, &username).await {
            Ok(user) => {
                info!(username = %user.username, id = user.id, "logged in");
                ApiResponse::LoginSucceeded { session, user }
            }
            Err(error) => {
                warn!(%username, %error, "login failed");
                ApiResponse::LoginFailed { session, error }
            }
        },
        ApiRequest::LoadPage { session, slot, descriptor } => {
            match load_page(api, &descriptor).await {
                Ok(page) => ApiResponse::PageLoaded { session, slot, page },
                Err(error) => {
                    warn!(query = %descriptor.query, %error, "page load failed");
                    ApiResponse::PageFailed { session, slot, error }
                }
            }
        }
        ApiRequest::PostComment { session, slot, post_id, name, body, email } => {
            match post_comment(api, post_id, &name, &body, &email).await {
                Ok(comment) => ApiResponse::CommentPosted { session, slot, comment },
                Err(error) => {
                    warn!(post_id, %error, "comment rejected");
                    ApiResponse::CommentFailed { session, slot, error }
                }
            }
        }
    }
}

async fn login(api: &ApiGateway, username: &str) -> AppResult<User> {
    let query = login_query(username);
    let found = api.get_data(&query).await?;
    let mut users: Vec<User> = serde_json::from_value((*found).clone())
        .map_err(|source| AppError::Decode { query, source })?;
    if users.is_empty() {
        return Err(AppError::UserNotFound(username.to_string()));
    }
    Ok(users.swap_remove(0))
}

fn login_query(username: &str) -> String {
    let encoded = form_urlencoded::Serializer::new(String::new())
        .append_pair("username", username)
        .finish();
    format!("users?{}", encoded)
}

async fn load_page(api: &ApiGateway, descriptor: &RequestDescriptor) -> AppResult<PageContent> {
    let content = api.get_data(&descriptor.query).await?;
    templates::render(api, descriptor, &content).await
}

async fn post_comment(
    api: &ApiGateway,
    post_id: u64,
    name: &str,
    body: &str,
    email: &str,
) -> AppResult<Comment> {
    let (name, body) = CommentService::validate(name, body)?;
    let params = CommentService::params(post_id, &name, &body, email);
    let append_to = CommentService::comments_query(post_id);
    let record = api.post_data("comments", &params, Some(&append_to)).await?;
    serde_json::from_value(record).map_err(|source| AppError::Decode {
        query: "comments".to_string(),
        source,
    })
}
