//! Error type for `folio-store-mem`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// A thread panicked while holding the store lock.
  #[error("store lock poisoned")]
  Poisoned,

  #[error("{0} id space exhausted")]
  IdsExhausted(&'static str),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
