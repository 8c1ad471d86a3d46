use crate::state::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// --- API entities ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub username: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub address: Address,
    #[serde(default)]
    pub company: Company,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub suite: String,
    pub city: String,
    pub zipcode: String,
    #[serde(default)]
    pub geo: Geo,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Geo {
    pub lat: String,
    pub lng: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub name: String,
    pub catch_phrase: String,
    pub bs: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub user_id: u64,
    pub id: u64,
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    pub user_id: u64,
    pub id: u64,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub album_id: u64,
    pub id: u64,
    pub title: String,
    pub url: String,
    pub thumbnail_url: String,
}

/// Comment ids and post ids come back as strings from form-encoded POSTs,
/// so both shapes are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    #[serde(deserialize_with = "lenient_id")]
    pub post_id: u64,
    #[serde(deserialize_with = "lenient_id")]
    pub id: u64,
    pub name: String,
    pub email: String,
    pub body: String,
}

fn lenient_id<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Num(u64),
        Text(String),
    }
    match Id::deserialize(deserializer)? {
        Id::Num(n) => Ok(n),
        Id::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

// --- Request table ---

/// How a fetched payload is rendered into a panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    Posts,
    Album,
    UserAlbums,
    Photo,
    Post,
    User,
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ContentKind::Posts => "posts",
            ContentKind::Album => "album",
            ContentKind::UserAlbums => "userAlbums",
            ContentKind::Photo => "photo",
            ContentKind::Post => "post",
            ContentKind::User => "user",
        };
        f.write_str(name)
    }
}

/// What to fetch and how to render it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    pub query: String,
    pub kind: ContentKind,
    pub title: Option<String>,
    pub title_query: Option<String>,
}

/// Entries of the request table. Menu items and drill-down links both
/// resolve to one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestKey {
    UserPosts(u64),
    UserAlbums(u64),
    Album(u64),
    Photo(u64),
    AllPosts,
    Post(u64),
    User(u64),
}

impl RequestKey {
    pub fn descriptor(&self) -> RequestDescriptor {
        match *self {
            RequestKey::UserPosts(user_id) => RequestDescriptor {
                query: format!("posts?userId={}", user_id),
                kind: ContentKind::Posts,
                title: None,
                title_query: Some(format!("users/{}", user_id)),
            },
            RequestKey::UserAlbums(user_id) => RequestDescriptor {
                query: format!("albums?userId={}", user_id),
                kind: ContentKind::UserAlbums,
                title: None,
                title_query: Some(format!("users/{}", user_id)),
            },
            RequestKey::Album(album_id) => RequestDescriptor {
                query: format!("albums/{}", album_id),
                kind: ContentKind::Album,
                title: None,
                title_query: None,
            },
            RequestKey::Photo(photo_id) => RequestDescriptor {
                query: format!("photos/{}", photo_id),
                kind: ContentKind::Photo,
                title: None,
                title_query: None,
            },
            RequestKey::AllPosts => RequestDescriptor {
                query: "posts".to_string(),
                kind: ContentKind::Posts,
                title: Some("All Posts".to_string()),
                title_query: None,
            },
            RequestKey::Post(post_id) => RequestDescriptor {
                query: format!("posts/{}", post_id),
                kind: ContentKind::Post,
                title: None,
                title_query: None,
            },
            RequestKey::User(user_id) => RequestDescriptor {
                query: format!("users/{}", user_id),
                kind: ContentKind::User,
                title: None,
                title_query: None,
            },
        }
    }
}

// --- Dashboard menu ---

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    MyPosts,
    MyAlbums,
    AllPosts,
    MyProfile,
}

impl MenuItem {
    pub const DEFAULT: [MenuItem; 4] = [
        MenuItem::MyPosts,
        MenuItem::MyAlbums,
        MenuItem::AllPosts,
        MenuItem::MyProfile,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MenuItem::MyPosts => "My Posts",
            MenuItem::MyAlbums => "My Albums",
            MenuItem::AllPosts => "All Posts",
            MenuItem::MyProfile => "My Profile",
        }
    }

    pub fn request(&self, user_id: u64) -> RequestKey {
        match self {
            MenuItem::MyPosts => RequestKey::UserPosts(user_id),
            MenuItem::MyAlbums => RequestKey::UserAlbums(user_id),
            MenuItem::AllPosts => RequestKey::AllPosts,
            MenuItem::MyProfile => RequestKey::User(user_id),
        }
    }
}

impl FromStr for MenuItem {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "userPosts" => Ok(MenuItem::MyPosts),
            "userAlbums" => Ok(MenuItem::MyAlbums),
            "allPosts" => Ok(MenuItem::AllPosts),
            "user" => Ok(MenuItem::MyProfile),
            other => Err(AppError::UnsupportedType(other.to_string())),
        }
    }
}
