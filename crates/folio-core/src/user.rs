//! User accounts. Present in the storage interface, not exposed over HTTP.

use serde::{Deserialize, Serialize};

/// A stored user with its store-assigned id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
  pub id:       u64,
  pub username: String,
  #[serde(skip_serializing)]
  pub password: String,
}

/// Input to [`Storage::create_user`](crate::store::Storage::create_user).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
  pub username: String,
  pub password: String,
}
