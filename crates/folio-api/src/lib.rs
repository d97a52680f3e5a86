//! JSON REST API for the Folio contact backend.
//!
//! Exposes an axum [`Router`] backed by any [`folio_core::store::Storage`].
//! TLS, transport, and access control are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", folio_api::api_router(store.clone()))
//! ```

pub mod contact;
pub mod error;

use std::sync::Arc;

use axum::{Router, routing::get};
use folio_core::store::Storage;

pub use error::ApiError;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: Storage + 'static,
{
  Router::new()
    .route("/contact", get(contact::list::<S>).post(contact::create::<S>))
    .with_state(store)
}

/// Fallback for unmatched routes: a 404 in the usual JSON envelope.
pub async fn not_found() -> ApiError {
  ApiError::NotFound
}

// ─── Integration tests ────────────────────────────────────────────────────────
