//! Handlers for `/contact` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `POST` | `/contact` | Body: `{name, email, subject, message}`; 201 + stored submission |
//! | `GET`  | `/contact` | All submissions, oldest first |

use std::sync::Arc;

use axum::{
  Json,
  extract::{State, rejection::JsonRejection},
  http::StatusCode,
  response::IntoResponse,
};
use folio_core::{store::Storage, validate_contact};
use serde_json::{Value, json};

use crate::error::ApiError;

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /contact` — validates the body and stores it.
///
/// The body is taken as untyped JSON so that missing or mistyped fields are
/// reported per field rather than as a single deserialisation failure.
#[tracing::instrument(name = "submit contact form", skip_all)]
pub async fn create<S>(
  State(store): State<Arc<S>>,
  payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError>
where
  S: Storage,
{
  let Json(payload) = payload.map_err(|e| ApiError::BadBody(e.body_text()))?;

  let contact = validate_contact(&payload).inspect_err(|e| {
    tracing::debug!(issues = e.issues.len(), "contact submission rejected");
  })?;

  let submission = store
    .create_contact_submission(contact)
    .await
    .map_err(ApiError::store("Failed to submit contact form"))?;

  tracing::info!(id = submission.id, "contact submission accepted");
  Ok((
    StatusCode::CREATED,
    Json(json!({
      "success": true,
      "message": "Contact form submitted successfully",
      "data":    submission,
    })),
  ))
}

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /contact`
#[tracing::instrument(name = "list contact submissions", skip_all)]
pub async fn list<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Value>, ApiError>
where
  S: Storage,
{
  let submissions = store
    .get_contact_submissions()
    .await
    .map_err(ApiError::store("Failed to fetch contact submissions"))?;
  Ok(Json(json!({ "success": true, "data": submissions })))
}
