//! Domain records and response DTOs for the todo API.
//!
//! # Design
//! `Todo` is the stored record and carries no links. Links are recomputed on
//! every response, so each response type pairs data with a freshly built
//! link set instead of persisting one. Absent links are omitted from the
//! JSON entirely; a client reads "no `complete` link" as "cannot complete".

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::http::HttpMethod;

pub type TodoId = i64;

/// A single stored todo record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub description: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

/// Request payload for creating or fully updating a todo.
///
/// Both fields default to empty so a missing `title` is reported as a
/// validation error rather than as malformed JSON.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoInput {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

impl TodoInput {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn validate(&self) -> Result<(), ApiError> {
        if self.title.is_empty() {
            return Err(ApiError::Validation("Title is required"));
        }
        Ok(())
    }
}

/// A hypermedia link. `method` is omitted when it carries no meaning, as
/// for pagination links.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Link {
    pub href: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<HttpMethod>,
}

impl Link {
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            method: None,
        }
    }

    pub fn with_method(href: impl Into<String>, method: HttpMethod) -> Self {
        Self {
            href: href.into(),
            method: Some(method),
        }
    }
}

/// Links attached to a single todo, and to error responses (which only
/// fill in `todos`).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoLinks {
    #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
    pub self_link: Option<Link>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update: Option<Link>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delete: Option<Link>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complete: Option<Link>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub todos: Option<Link>,
}

/// A todo as returned to clients: the record plus its `_links`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoResource {
    #[serde(flatten)]
    pub todo: Todo,
    #[serde(rename = "_links")]
    pub links: TodoLinks,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CollectionMeta {
    pub total: usize,
    pub count: usize,
    pub page: usize,
    pub per_page: usize,
    pub total_pages: usize,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CollectionLinks {
    #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
    pub self_link: Option<Link>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first: Option<Link>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last: Option<Link>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<Link>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev: Option<Link>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create: Option<Link>,
}

/// One page of todos with pagination metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoCollection {
    pub todos: Vec<TodoResource>,
    #[serde(rename = "_meta")]
    pub meta: CollectionMeta,
    #[serde(rename = "_links")]
    pub links: CollectionLinks,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RootLinks {
    #[serde(rename = "self")]
    pub self_link: Link,
    pub todos: Link,
}

/// Entry document served at `/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiRoot {
    pub message: String,
    #[serde(rename = "_links")]
    pub links: RootLinks,
}

/// Body of every error response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
    #[serde(rename = "_links")]
    pub links: TodoLinks,
}
