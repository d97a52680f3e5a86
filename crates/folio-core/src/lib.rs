//! Core types and trait definitions for the Folio contact backend.
//!
//! This crate is deliberately free of HTTP and runtime dependencies. The
//! store and API crates depend on it; it depends on nothing of theirs.

pub mod contact;
pub mod error;
pub mod store;
pub mod user;
pub mod validate;

pub use error::{Field, FieldIssue, ValidationError};
pub use validate::validate_contact;
