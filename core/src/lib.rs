//! In-memory todo API core with hypermedia links.
//!
//! # Overview
//! A thread-safe record store, a service facade over it, pure link builders
//! and transport-agnostic request handlers. Handlers return `HttpResponse`
//! values as plain data (host-does-IO pattern); the `todo-server` crate
//! routes HTTP requests to them and writes their responses out verbatim.
//!
//! # Design
//! - `TodoStore` owns every record behind a single reader/writer lock.
//! - `TodoApi` depends on the `TodoService` trait, not on the store type.
//! - Links are recomputed on every response and never stored.
//! - The base URL is injected once and prefixed verbatim to every link.

pub mod api;
pub mod error;
pub mod http;
pub mod links;
pub mod pagination;
pub mod service;
pub mod store;
pub mod types;

pub use api::TodoApi;
pub use error::ApiError;
pub use http::{HttpMethod, HttpResponse};
pub use pagination::PageRequest;
pub use service::{StoreService, TodoService};
pub use store::TodoStore;
pub use types::{
    ApiRoot, CollectionLinks, CollectionMeta, ErrorBody, Link, Todo, TodoCollection, TodoId,
    TodoInput, TodoLinks, TodoResource,
};
