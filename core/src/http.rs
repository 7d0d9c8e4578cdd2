//! HTTP types for the host-does-IO pattern.
//!
//! # Design
//! Handlers in [`crate::api`] never touch a socket. They return an
//! `HttpResponse` described as plain data and the transport (the
//! `todo-server` crate, or a test) writes it out verbatim. `HttpMethod`
//! doubles as the method hint carried by hypermedia links.
//!
//! All fields use owned types (`String`, `Vec`) so a response can be moved
//! into any transport without lifetime concerns.

use serde::{Deserialize, Serialize};

use crate::error::ApiError;

pub const CONTENT_TYPE: &str = "content-type";
pub const LOCATION: &str = "location";
pub const APPLICATION_JSON: &str = "application/json";

/// HTTP method, serialized in upper case (`"GET"`, `"PATCH"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

/// An HTTP response described as plain data.
///
/// Produced by `TodoApi` handlers. Every response carries a JSON content
/// type, including the empty `204` body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    /// Serialize `value` as the body of a response with `status`.
    pub fn json<T: Serialize>(status: u16, value: &T) -> Result<Self, ApiError> {
        let body = serde_json::to_string(value).map_err(ApiError::Serialization)?;
        Ok(Self {
            status,
            headers: vec![(CONTENT_TYPE.to_string(), APPLICATION_JSON.to_string())],
            body,
        })
    }

    pub fn no_content() -> Self {
        Self {
            status: 204,
            headers: vec![(CONTENT_TYPE.to_string(), APPLICATION_JSON.to_string())],
            body: String::new(),
        }
    }

    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.push((name.to_string(), value.into()));
        self
    }

    /// First value of header `name`, compared case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}
