//! API error type and [`axum::response::IntoResponse`] implementation.
//!
//! Every failure is rendered as `{"success": false, "message": ...}`;
//! validation failures add an `errors` list with one entry per field.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use folio_core::ValidationError;
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("validation failed: {0}")]
  Validation(#[from] ValidationError),

  #[error("bad request body: {0}")]
  BadBody(String),

  #[error("not found")]
  NotFound,

  /// `message` is what the client sees; `source` is only logged.
  #[error("{message}: {source}")]
  Store {
    message: &'static str,
    #[source]
    source:  Box<dyn std::error::Error + Send + Sync>,
  },
}

impl ApiError {
  pub fn store<E>(message: &'static str) -> impl FnOnce(E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    move |e| ApiError::Store {
      message,
      source: Box::new(e),
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    match self {
      ApiError::Validation(e) => (
        StatusCode::BAD_REQUEST,
        Json(json!({
          "success": false,
          "message": "Validation error",
          "errors":  e.issues,
        })),
      )
        .into_response(),
      ApiError::BadBody(reason) => {
        tracing::debug!(%reason, "rejected request body");
        (
          StatusCode::BAD_REQUEST,
          Json(json!({ "success": false, "message": "Invalid request body" })),
        )
          .into_response()
      }
      ApiError::NotFound => (
        StatusCode::NOT_FOUND,
        Json(json!({ "success": false, "message": "Not found" })),
      )
        .into_response(),
      ApiError::Store { message, source } => {
        tracing::error!(error = %source, "{message}");
        (
          StatusCode::INTERNAL_SERVER_ERROR,
          Json(json!({ "success": false, "message": message })),
        )
          .into_response()
      }
    }
  }
}
