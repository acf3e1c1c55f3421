//! # chatroute_api
//!
//! HTTP API library for Chatroute.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};

use crate::config::ApiConfig;
use crate::handlers::{chat, health, page};

/// Route paths.
pub mod routes {
    pub const GET_INDEX: &str = "/";
    pub const POST_CHAT: &str = "/chat";
    pub const POST_ROUTE: &str = "/route";
    pub const GET_API_HELLO: &str = "/api/hello";
}

/// Shared application state passed to all handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    /// API configuration.
    pub config: ApiConfig,
}

/// Builds the Axum router with all routes and shared state.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(routes::GET_INDEX, get(page::index))
        .route(routes::POST_CHAT, post(chat::chat_handler))
        .route(routes::POST_ROUTE, post(chat::route_handler))
        .route(routes::GET_API_HELLO, get(health::hello))
        .fallback(handlers::not_found)
        .layer(cors)
        .with_state(state)
}
