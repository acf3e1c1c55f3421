//! Chat endpoints: plain reply and the diagnostic routing view.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use tracing::info;

use crate::error::AppResult;
use crate::models::{ChatRequest, ChatResponse, RouteRequest, RouteResponse};

/// `POST /chat` — classify a message and return the reply.
pub async fn chat_handler(
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> AppResult<Json<ChatResponse>> {
    let Json(body) = payload?;
    let classification = chatroute_core::classify(&body.message);
    info!(intent = %classification.intent, "chat message handled");

    Ok(Json(ChatResponse {
        reply: classification.reply,
    }))
}

/// `POST /route` — classify a query and report intent, parameters and reply.
pub async fn route_handler(
    payload: Result<Json<RouteRequest>, JsonRejection>,
) -> AppResult<Json<RouteResponse>> {
    let Json(body) = payload?;
    let classification = chatroute_core::classify(&body.query);
    info!(intent = %classification.intent, "route query handled");

    Ok(Json(RouteResponse::new(body.query, classification)))
}
