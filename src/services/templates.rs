//! Builds panel content from fetched payloads.
//!
//! Each content kind has its own builder. Builders that need more than the
//! primary payload (the owning user for a title, a post's author and
//! comments, an album's photos) fetch it through the gateway, one request
//! after another.

use super::api::ApiGateway;
use crate::model::{Album, Comment, ContentKind, Photo, Post, RequestDescriptor, RequestKey, User};
use crate::state::{AppError, AppResult};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

#[derive(Debug, Clone, PartialEq)]
pub struct PageContent {
    pub title: String,
    pub body: PageBody,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PageBody {
    List(Vec<ListEntry>),
    Post(PostView),
    Profile(User),
    Photo(Photo),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListEntry {
    pub heading: String,
    pub text: String,
    pub link: Option<RequestKey>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PostView {
    pub post: Post,
    pub author: User,
    pub comments: Vec<Comment>,
    pub comment_count: usize,
}

impl PostView {
    /// Optimistic insert of a freshly posted comment at the top.
    pub fn prepend_comment(&mut self, comment: Comment) {
        self.comments.insert(0, comment);
        self.comment_count += 1;
    }

    pub fn comment_count_label(&self) -> String {
        if self.comment_count == 1 {
            "1 comment".to_string()
        } else {
            format!("{} comments", self.comment_count)
        }
    }
}

impl PageContent {
    /// Selectable drill-down targets, in display order.
    pub fn links(&self) -> Vec<(String, RequestKey)> {
        match &self.body {
            PageBody::List(entries) => entries
                .iter()
                .filter_map(|e| e.link.map(|k| (e.heading.clone(), k)))
                .collect(),
            PageBody::Post(view) => vec![(
                format!("By: {}", view.author.username),
                RequestKey::User(view.author.id),
            )],
            PageBody::Profile(user) => vec![
                (format!("Posts by {}", user.username), RequestKey::UserPosts(user.id)),
                (format!("Albums by {}", user.username), RequestKey::UserAlbums(user.id)),
            ],
            PageBody::Photo(photo) => vec![(
                "Back to album".to_string(),
                RequestKey::Album(photo.album_id),
            )],
        }
    }

    pub fn post_view_mut(&mut self) -> Option<&mut PostView> {
        match &mut self.body {
            PageBody::Post(view) => Some(view),
            _ => None,
        }
    }

    pub fn post_view(&self) -> Option<&PostView> {
        match &self.body {
            PageBody::Post(view) => Some(view),
            _ => None,
        }
    }
}

fn decode<T: DeserializeOwned>(query: &str, value: &Value) -> AppResult<T> {
    T::deserialize(value).map_err(|source| AppError::Decode {
        query: query.to_string(),
        source,
    })
}

async fn fetch<T: DeserializeOwned>(api: &ApiGateway, query: &str) -> AppResult<T> {
    let value = api.get_data(query).await?;
    decode(query, &value)
}

/// Title from the owning user when the descriptor names one, else the
/// descriptor's own title.
async fn resolve_title(
    api: &ApiGateway,
    request: &RequestDescriptor,
    prefix: &str,
) -> AppResult<String> {
    if let Some(query) = &request.title_query {
        let user: User = fetch(api, query).await?;
        return Ok(format!("{}: {}", prefix, user.username));
    }
    Ok(request.title.clone().unwrap_or_else(|| "Page".to_string()))
}

/// Render `content` (the payload of `request.query`) into a panel.
pub async fn render(
    api: &ApiGateway,
    request: &RequestDescriptor,
    content: &Value,
) -> AppResult<PageContent> {
    debug!(kind = %request.kind, query = %request.query, "rendering page");
    match request.kind {
        ContentKind::Posts => render_posts(api, request, content).await,
        ContentKind::UserAlbums => render_user_albums(api, request, content).await,
        ContentKind::Album => render_album(api, request, content).await,
        ContentKind::Photo => render_photo(request, content),
        ContentKind::Post => render_post(api, request, content).await,
        ContentKind::User => render_user(request, content),
    }
}

async fn render_posts(
    api: &ApiGateway,
    request: &RequestDescriptor,
    content: &Value,
) -> AppResult<PageContent> {
    let posts: Vec<Post> = decode(&request.query, content)?;
    let title = resolve_title(api, request, "Posts by").await?;
    let entries = posts
        .into_iter()
        .map(|post| ListEntry {
            heading: post.title,
            text: post.body,
            link: Some(RequestKey::Post(post.id)),
        })
        .collect();
    Ok(PageContent { title, body: PageBody::List(entries) })
}

async fn render_user_albums(
    api: &ApiGateway,
    request: &RequestDescriptor,
    content: &Value,
) -> AppResult<PageContent> {
    let albums: Vec<Album> = decode(&request.query, content)?;
    let title = resolve_title(api, request, "Albums by").await?;
    let entries = albums
        .into_iter()
        .map(|album| ListEntry {
            heading: album.title,
            text: String::new(),
            link: Some(RequestKey::Album(album.id)),
        })
        .collect();
    Ok(PageContent { title, body: PageBody::List(entries) })
}

async fn render_album(
    api: &ApiGateway,
    request: &RequestDescriptor,
    content: &Value,
) -> AppResult<PageContent> {
    let album: Album = decode(&request.query, content)?;
    let photos: Vec<Photo> = fetch(api, &format!("albums/{}/photos", album.id)).await?;
    let entries = photos
        .into_iter()
        .map(|photo| ListEntry {
            heading: photo.title,
            text: photo.thumbnail_url,
            link: Some(RequestKey::Photo(photo.id)),
        })
        .collect();
    Ok(PageContent {
        title: format!("Album: {}", album.title),
        body: PageBody::List(entries),
    })
}

fn render_photo(request: &RequestDescriptor, content: &Value) -> AppResult<PageContent> {
    let photo: Photo = decode(&request.query, content)?;
    Ok(PageContent {
        title: photo.title.clone(),
        body: PageBody::Photo(photo),
    })
}

async fn render_post(
    api: &ApiGateway,
    request: &RequestDescriptor,
    content: &Value,
) -> AppResult<PageContent> {
    let post: Post = decode(&request.query, content)?;
    // Author first, then comments.
    let author: User = fetch(api, &format!("users/{}", post.user_id)).await?;
    let comments: Vec<Comment> = fetch(api, &format!("posts/{}/comments", post.id)).await?;
    let comment_count = comments.len();
    Ok(PageContent {
        title: post.title.clone(),
        body: PageBody::Post(PostView { post, author, comments, comment_count }),
    })
}

fn render_user(request: &RequestDescriptor, content: &Value) -> AppResult<PageContent> {
    let user: User = decode(&request.query, content)?;
    Ok(PageContent {
        title: format!("User: {}", user.username),
        body: PageBody::Profile(user),
    })
}
