//! Liveness endpoint.

use axum::Json;
use axum::extract::State;

use crate::AppState;
use crate::models::HelloResponse;

/// `GET /api/hello` — reports the core version and bound address.
pub async fn hello(State(state): State<AppState>) -> Json<HelloResponse> {
    Json(HelloResponse {
        greeting: chatroute_core::greeting(),
        version: chatroute_core::version().to_string(),
        bind_addr: state.config.bind_addr,
    })
}
