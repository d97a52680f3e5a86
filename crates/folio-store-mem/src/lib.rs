//! In-memory backend for the Folio store.
//!
//! Contents live for the lifetime of the process and are lost on restart.

mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::MemStore;
