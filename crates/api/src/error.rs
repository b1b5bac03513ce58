//! API error types with HTTP response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use catalog::CatalogError;
use checkout::CheckoutError;

/// API-level error type that maps to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// Resource not found.
    NotFound(String),
    /// Bad request from the client.
    BadRequest(String),
    /// The request clashes with work already running.
    Conflict(String),
    /// Catalog read error.
    Catalog(CatalogError),
    /// Order submission error.
    Checkout(CheckoutError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::Catalog(err) => catalog_error_to_response(err),
            ApiError::Checkout(err) => checkout_error_to_response(err),
        };

        let body = serde_json::json!({ "error": message });
        (status, axum::Json(body)).into_response()
    }
}

fn catalog_error_to_response(err: CatalogError) -> (StatusCode, String) {
    match &err {
        CatalogError::ProductNotFound(_) => (StatusCode::NOT_FOUND, err.to_string()),
        CatalogError::Unavailable(_) => {
            tracing::error!(error = %err, "catalog unavailable");
            (StatusCode::SERVICE_UNAVAILABLE, err.to_string())
        }
    }
}

fn checkout_error_to_response(err: CheckoutError) -> (StatusCode, String) {
    match &err {
        CheckoutError::Unauthenticated => (StatusCode::UNAUTHORIZED, err.to_string()),
        CheckoutError::EmptyCart | CheckoutError::IncompleteDelivery(_) => {
            (StatusCode::BAD_REQUEST, err.to_string())
        }
        CheckoutError::Persistence(_) => (StatusCode::BAD_GATEWAY, err.to_string()),
    }
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        ApiError::Catalog(err)
    }
}

impl From<CheckoutError> for ApiError {
    fn from(err: CheckoutError) -> Self {
        ApiError::Checkout(err)
    }
}
