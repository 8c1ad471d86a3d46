pub mod api;
pub mod comment;
pub mod templates;
pub mod worker;

pub use api::{ApiGateway, HttpReply, HttpTransport, Transport};
pub use comment::CommentService;
pub use templates::{ListEntry, PageBody, PageContent, PostView};
pub use worker::{ApiRequest, ApiResponse};
