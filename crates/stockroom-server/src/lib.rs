//! Stockroom Server
//!
//! HTTP service exposing CRUD over products persisted in SQLite, plus a
//! process-lifetime todo map.
//!
//! # Routes
//!
//! | Method | Path | |
//! |---|---|---|
//! | GET | `/_/health` | liveness |
//! | GET, POST | `/product` | list, create |
//! | GET, PUT, DELETE | `/product/:id` | read, replace, remove |
//! | GET, PUT | `/:todo_id` | read, write (form field `data`) |
//!
//! Every single-segment path other than `/product` is a todo id. The static
//! `/product` segment always wins over the `/:todo_id` capture, so a method
//! it doesn't register (e.g. `PUT /product`) is answered with 405. The health
//! check sits two segments deep so it takes no todo id.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod storage;

use axum::{routing::get, Router};
use std::sync::Arc;
use stockroom_core::{ProductStore, TodoStore};
use tower_http::trace::TraceLayer;

pub use config::ServerConfig;
pub use error::AppError;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub products: Arc<dyn ProductStore>,
    pub todos: Arc<dyn TodoStore>,
}

impl AppState {
    pub fn new(products: Arc<dyn ProductStore>, todos: Arc<dyn TodoStore>) -> Self {
        Self { products, todos }
    }
}

/// Build the HTTP router. With `debug` set, internal failures carry their
/// underlying error message in the response body.
pub fn router(state: AppState, debug: bool) -> Router {
    let mut app = Router::new()
        // Health check
        .route("/_/health", get(handlers::health))
        // Products
        .route(
            "/product",
            get(handlers::products::list).post(handlers::products::create),
        )
        .route(
            "/product/:id",
            get(handlers::products::get)
                .put(handlers::products::update)
                .delete(handlers::products::delete),
        )
        // Todos
        .route(
            "/:todo_id",
            get(handlers::todos::get).put(handlers::todos::put),
        );

    if debug {
        app = app.layer(axum::middleware::map_response(
            middleware::expose_error_detail,
        ));
    }

    app.layer(TraceLayer::new_for_http()).with_state(state)
}
