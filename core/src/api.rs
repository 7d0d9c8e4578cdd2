//! Transport-agnostic request handlers for the todo API.
//!
//! # Design
//! `TodoApi` holds only a `base_url` and a [`TodoService`]. Each operation
//! takes the raw values a router extracts (path segment, query strings,
//! body bytes) and returns a complete [`HttpResponse`]. Every handler
//! either fully succeeds or returns exactly one structured error, and every
//! error body links back to the collection.

use tracing::{debug, info};

use crate::error::ApiError;
use crate::http::{HttpResponse, APPLICATION_JSON, CONTENT_TYPE, LOCATION};
use crate::links;
use crate::pagination::PageRequest;
use crate::service::TodoService;
use crate::types::{
    ApiRoot, CollectionMeta, ErrorBody, Todo, TodoCollection, TodoId, TodoInput, TodoResource,
};

pub const WELCOME_MESSAGE: &str = "Welcome to the HATEOAS Todo API";

#[derive(Debug, Clone)]
pub struct TodoApi<S> {
    service: S,
    base_url: String,
}

impl<S: TodoService> TodoApi<S> {
    pub fn new(base_url: impl Into<String>, service: S) -> Self {
        Self {
            service,
            base_url: base_url.into(),
        }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// `GET /`
    pub fn root(&self) -> HttpResponse {
        let root = ApiRoot {
            message: WELCOME_MESSAGE.to_string(),
            links: links::root_links(&self.base_url),
        };
        self.respond(HttpResponse::json(200, &root))
    }

    /// `GET /todos?page=&per_page=`
    pub fn list_todos(&self, page: Option<&str>, per_page: Option<&str>) -> HttpResponse {
        let request = PageRequest::from_query(page, per_page);
        self.respond(self.try_list_todos(request))
    }

    /// `GET /todos/{id}`
    pub fn get_todo(&self, id: &str) -> HttpResponse {
        self.respond(self.try_get_todo(id))
    }

    /// `POST /todos`
    pub fn create_todo(&self, body: &[u8]) -> HttpResponse {
        self.respond(self.try_create_todo(body))
    }

    /// `PUT /todos/{id}`
    pub fn update_todo(&self, id: &str, body: &[u8]) -> HttpResponse {
        self.respond(self.try_update_todo(id, body))
    }

    /// `PATCH /todos/{id}/complete`
    pub fn complete_todo(&self, id: &str) -> HttpResponse {
        self.respond(self.try_complete_todo(id))
    }

    /// `DELETE /todos/{id}`
    pub fn delete_todo(&self, id: &str) -> HttpResponse {
        self.respond(self.try_delete_todo(id))
    }

    /// Structured error response for `err`.
    pub fn error_response(&self, err: &ApiError) -> HttpResponse {
        self.error_body_response(err.status(), err.category(), &err.to_string())
    }

    /// Error response outside the `ApiError` taxonomy, for transport-level
    /// failures such as unknown routes or recovered panics.
    pub fn error_body_response(&self, status: u16, error: &str, message: &str) -> HttpResponse {
        let body = ErrorBody {
            error: error.to_string(),
            message: message.to_string(),
            links: links::error_links(&self.base_url),
        };
        HttpResponse::json(status, &body).unwrap_or_else(|_| HttpResponse {
            status,
            headers: vec![(CONTENT_TYPE.to_string(), APPLICATION_JSON.to_string())],
            body: String::from("{}"),
        })
    }

    fn try_list_todos(&self, request: PageRequest) -> Result<HttpResponse, ApiError> {
        let all = self.service.list_todos();
        let total = all.len();
        let bounds = request.bounds(total);
        let todos: Vec<TodoResource> = all[bounds].iter().map(|t| self.resource(t)).collect();

        debug!(
            page = request.page(),
            per_page = request.per_page(),
            total,
            count = todos.len(),
            "listing todos"
        );

        let collection = TodoCollection {
            meta: CollectionMeta {
                total,
                count: todos.len(),
                page: request.page(),
                per_page: request.per_page(),
                total_pages: request.total_pages(total),
            },
            links: links::collection_links(&self.base_url, &request, total),
            todos,
        };
        HttpResponse::json(200, &collection)
    }

    fn try_get_todo(&self, id: &str) -> Result<HttpResponse, ApiError> {
        let id = parse_id(id)?;
        let todo = self.service.get_todo(id).ok_or(ApiError::NotFound(id))?;
        debug!(id, "fetched todo");
        HttpResponse::json(200, &self.resource(&todo))
    }

    fn try_create_todo(&self, body: &[u8]) -> Result<HttpResponse, ApiError> {
        let input = parse_input(body)?;
        let todo = self.service.create_todo(input);
        info!(id = todo.id, title = %todo.title, "created todo");
        Ok(HttpResponse::json(201, &self.resource(&todo))?
            .with_header(LOCATION, links::todo_url(&self.base_url, todo.id)))
    }

    fn try_update_todo(&self, id: &str, body: &[u8]) -> Result<HttpResponse, ApiError> {
        let id = parse_id(id)?;
        let input = parse_input(body)?;
        let todo = self
            .service
            .update_todo(id, input)
            .ok_or(ApiError::NotFound(id))?;
        info!(id, "updated todo");
        HttpResponse::json(200, &self.resource(&todo))
    }

    fn try_complete_todo(&self, id: &str) -> Result<HttpResponse, ApiError> {
        let id = parse_id(id)?;
        let todo = self.service.complete_todo(id).ok_or(ApiError::NotFound(id))?;
        info!(id, "completed todo");
        HttpResponse::json(200, &self.resource(&todo))
    }

    fn try_delete_todo(&self, id: &str) -> Result<HttpResponse, ApiError> {
        let id = parse_id(id)?;
        if !self.service.delete_todo(id) {
            return Err(ApiError::NotFound(id));
        }
        info!(id, "deleted todo");
        Ok(HttpResponse::no_content())
    }

    fn resource(&self, todo: &Todo) -> TodoResource {
        TodoResource {
            links: links::todo_links(todo, &self.base_url),
            todo: todo.clone(),
        }
    }

    fn respond(&self, result: Result<HttpResponse, ApiError>) -> HttpResponse {
        result.unwrap_or_else(|err| {
            debug!(status = err.status(), error = %err, "request rejected");
            self.error_response(&err)
        })
    }
}

fn parse_id(raw: &str) -> Result<TodoId, ApiError> {
    raw.parse().map_err(|_| ApiError::InvalidId)
}

/// A `null` body decodes to an empty input and fails on the title.
fn parse_input(body: &[u8]) -> Result<TodoInput, ApiError> {
    let input = serde_json::from_slice::<Option<TodoInput>>(body)
        .map_err(ApiError::InvalidJson)?
        .unwrap_or_default();
    input.validate()?;
    Ok(input)
}
