//! Axum transport for the todo API.
//!
//! Routes each path to the matching `todo_core::TodoApi` handler and writes
//! the returned `HttpResponse` out unchanged. Everything around the core
//! lives here: CORS, request tracing, panic recovery and startup seeding.

pub mod config;
pub mod logging;

use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::{header, HeaderName, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, patch},
    Router,
};
use tokio::net::TcpListener;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any as AnyOrigin, CorsLayer},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};
use tracing::{error, info, warn};

use todo_core::{HttpResponse, StoreService, TodoApi, TodoInput, TodoService};

pub use config::Config;

pub type SharedApi = Arc<TodoApi<StoreService>>;

/// Todos present at startup unless seeding is disabled.
pub const SAMPLE_TODOS: [(&str, &str); 3] = [
    ("Learn Rust", "Master the Rust programming language"),
    ("Build REST API", "Create a HATEOAS-compliant REST API"),
    ("Write Tests", "Add comprehensive test coverage"),
];

/// Build the full application described by `config`.
pub fn app(config: &Config) -> Router {
    let service = StoreService::default();
    if config.seed() {
        seed(&service);
    }
    info!(todos = service.store().count(), "store ready");
    router(Arc::new(TodoApi::new(config.base_url(), service)))
}

pub fn seed(service: &impl TodoService) {
    for (title, description) in SAMPLE_TODOS {
        service.create_todo(TodoInput::new(title, description));
    }
    info!(count = SAMPLE_TODOS.len(), "seeded sample todos");
}

pub fn router(api: SharedApi) -> Router {
    let panic_api = Arc::clone(&api);
    Router::new()
        .route("/", get(root))
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/{id}", get(get_todo).put(update_todo).delete(delete_todo))
        .route("/todos/{id}/complete", patch(complete_todo))
        .fallback(not_found)
        .with_state(api)
        .layer(CatchPanicLayer::custom(move |panic: Box<dyn Any + Send + 'static>| {
            error!(panic = panic_message(panic.as_ref()), "handler panicked");
            ApiResponse(panic_api.error_body_response(
                500,
                "Internal server error",
                "An unexpected error occurred",
            ))
            .into_response()
        }))
        .layer(cors())
        .layer(SetResponseHeaderLayer::if_not_present(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        ))
        .layer(TraceLayer::new_for_http())
}

pub async fn run(listener: TcpListener, app: Router) -> Result<(), std::io::Error> {
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::CONTENT_LENGTH,
            header::ACCEPT_ENCODING,
            HeaderName::from_static("x-csrf-token"),
            header::AUTHORIZATION,
        ])
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutdown signal received"),
        Err(err) => {
            warn!(%err, "could not install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> &str {
    if let Some(&s) = panic.downcast_ref::<&'static str>() {
        s
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.as_str()
    } else {
        "unknown panic"
    }
}

/// Adapter writing a core `HttpResponse` as an axum response.
pub struct ApiResponse(pub HttpResponse);

impl IntoResponse for ApiResponse {
    fn into_response(self) -> Response {
        let HttpResponse {
            status,
            headers,
            body,
        } = self.0;
        let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let mut response = (status, body).into_response();
        for (name, value) in headers {
            match (HeaderName::try_from(name), HeaderValue::try_from(value)) {
                (Ok(name), Ok(value)) => {
                    response.headers_mut().insert(name, value);
                }
                _ => warn!("dropping malformed response header"),
            }
        }
        response
    }
}

async fn root(State(api): State<SharedApi>) -> ApiResponse {
    ApiResponse(api.root())
}

async fn list_todos(
    State(api): State<SharedApi>,
    Query(params): Query<HashMap<String, String>>,
) -> ApiResponse {
    ApiResponse(api.list_todos(
        params.get("page").map(String::as_str),
        params.get("per_page").map(String::as_str),
    ))
}

async fn create_todo(State(api): State<SharedApi>, body: Bytes) -> ApiResponse {
    ApiResponse(api.create_todo(&body))
}

async fn get_todo(State(api): State<SharedApi>, Path(id): Path<String>) -> ApiResponse {
    ApiResponse(api.get_todo(&id))
}

async fn update_todo(
    State(api): State<SharedApi>,
    Path(id): Path<String>,
    body: Bytes,
) -> ApiResponse {
    ApiResponse(api.update_todo(&id, &body))
}

async fn complete_todo(State(api): State<SharedApi>, Path(id): Path<String>) -> ApiResponse {
    ApiResponse(api.complete_todo(&id))
}

async fn delete_todo(State(api): State<SharedApi>, Path(id): Path<String>) -> ApiResponse {
    ApiResponse(api.delete_todo(&id))
}

async fn not_found(State(api): State<SharedApi>) -> ApiResponse {
    ApiResponse(api.error_body_response(
        404,
        "Not found",
        "The requested resource does not exist",
    ))
}
