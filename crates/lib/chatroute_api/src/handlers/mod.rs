//! Request handlers.

pub mod chat;
pub mod health;
pub mod page;

use axum::http::Uri;

use crate::error::AppError;

/// Fallback for unknown paths.
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("no route for {}", uri.path()))
}
