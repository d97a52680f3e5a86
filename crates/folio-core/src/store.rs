//! The `Storage` trait.
//!
//! Implemented by storage backends (e.g. `folio-store-mem`). The API layer
//! depends on this abstraction, not on any concrete backend.

use std::future::Future;

use crate::{
  contact::{ContactSubmission, NewContact},
  user::{NewUser, User},
};

/// Abstraction over a Folio storage backend.
///
/// Records are write-once: there are no update or delete operations. Ids are
/// assigned by the backend, start at 1 and are never reused.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait Storage: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Users ─────────────────────────────────────────────────────────────

  /// Retrieve a user by id. Returns `None` if not found.
  fn get_user(
    &self,
    id: u64,
  ) -> impl Future<Output = Result<Option<User>, Self::Error>> + Send + '_;

  /// Retrieve the first user whose username equals `username` exactly.
  fn get_user_by_username<'a>(
    &'a self,
    username: &'a str,
  ) -> impl Future<Output = Result<Option<User>, Self::Error>> + Send + 'a;

  /// Persist a new user and return it with its assigned id.
  fn create_user(
    &self,
    input: NewUser,
  ) -> impl Future<Output = Result<User, Self::Error>> + Send + '_;

  // ── Contact submissions ───────────────────────────────────────────────

  /// Store a validated submission. The id and `created_at` timestamp are set
  /// by the store.
  fn create_contact_submission(
    &self,
    input: NewContact,
  ) -> impl Future<Output = Result<ContactSubmission, Self::Error>> + Send + '_;

  /// Return every stored submission in insertion order.
  fn get_contact_submissions(
    &self,
  ) -> impl Future<Output = Result<Vec<ContactSubmission>, Self::Error>> + Send + '_;
}
