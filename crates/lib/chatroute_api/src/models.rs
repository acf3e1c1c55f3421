//! Request and response bodies.

use chatroute_core::{Classification, Intent, Parameters};
use serde::{Deserialize, Serialize};

/// Body of `POST /chat`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    #[serde(alias = "query")]
    pub message: String,
}

/// Reply to `POST /chat`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub reply: String,
}

/// Body of `POST /route`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteRequest {
    #[serde(alias = "message")]
    pub query: String,
}

/// Diagnostic reply to `POST /route`: what was detected and why.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteResponse {
    pub query: String,
    pub intent: Intent,
    pub parameters: Parameters,
    pub reply: String,
}

impl RouteResponse {
    pub fn new(query: String, classification: Classification) -> Self {
        Self {
            query,
            intent: classification.intent,
            parameters: classification.parameters,
            reply: classification.reply,
        }
    }
}

/// Reply to `GET /api/hello`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HelloResponse {
    pub greeting: String,
    pub version: String,
    pub bind_addr: String,
}

/// Error body shared by every failing endpoint.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}
