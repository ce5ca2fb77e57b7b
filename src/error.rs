//! Error types for the storefront
//!
//! - `StorefrontError`: domain errors raised by the catalog and cart manager
//! - `AppError`: HTTP-facing wrapper that maps domain errors to responses
//!
//! Removing or updating a cart line that does not exist is never an error;
//! those operations are silent no-ops.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Domain errors for catalog loading, cart operations and order submission
#[derive(Debug, Error)]
pub enum StorefrontError {
    #[error("Missing required contact field: {0}")]
    MissingContactField(&'static str),

    #[error("Cart is empty")]
    EmptyCart,

    #[error("Menu item not found: {0}")]
    UnknownItem(u32),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("Order rejected: {0}")]
    OrderRejected(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Application layer errors returned by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Storefront(#[from] StorefrontError),

    #[error("Invalid request: {0}")]
    BadRequest(String),
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::Storefront(StorefrontError::MissingContactField(field)) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "Validation error",
                Some(format!("{field} is required")),
            ),
            AppError::Storefront(StorefrontError::EmptyCart) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "Validation error",
                Some("cart is empty".to_string()),
            ),
            AppError::Storefront(StorefrontError::UnknownItem(id)) => (
                StatusCode::NOT_FOUND,
                "Not found",
                Some(format!("menu item {id}")),
            ),
            AppError::Storefront(StorefrontError::UnknownCategory(category)) => (
                StatusCode::BAD_REQUEST,
                "Unknown category",
                Some(category.clone()),
            ),
            AppError::Storefront(StorefrontError::OrderRejected(msg)) => {
                tracing::warn!("Order rejected: {}", msg);
                (StatusCode::BAD_GATEWAY, "Order rejected", Some(msg.clone()))
            }
            AppError::Storefront(e) => {
                tracing::error!("Internal error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    None,
                )
            }
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "Bad request", Some(msg.clone()))
            }
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            details,
        });

        (status, body).into_response()
    }
}
