//! [`MemStore`] — the in-memory implementation of [`Storage`].

use std::sync::{Arc, Mutex, MutexGuard};

use chrono::Utc;
use folio_core::{
  contact::{ContactSubmission, NewContact},
  store::Storage,
  user::{NewUser, User},
};

use crate::{Error, Result};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A Folio store held entirely in memory.
///
/// Cloning is cheap; clones share the same contents. Id assignment and
/// insertion happen under one lock, so ids stay unique and increasing across
/// concurrent writers.
#[derive(Clone, Default)]
pub struct MemStore {
  inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
  users:           Vec<User>,
  next_user_id:    u64,
  contacts:        Vec<ContactSubmission>,
  next_contact_id: u64,
}

/// Hand out the next id from `counter`, starting at 1.
fn next_id(counter: &mut u64, kind: &'static str) -> Result<u64> {
  let id = counter.checked_add(1).ok_or(Error::IdsExhausted(kind))?;
  *counter = id;
  Ok(id)
}

impl MemStore {
  pub fn new() -> Self {
    Self::default()
  }

  fn lock(&self) -> Result<MutexGuard<'_, Inner>> {
    self.inner.lock().map_err(|_| Error::Poisoned)
  }

  /// A store whose next contact id will come after `last`.
  #[cfg(test)]
  pub(crate) fn with_last_contact_id(last: u64) -> Self {
    let store = Self::new();
    if let Ok(mut inner) = store.inner.lock() {
      inner.next_contact_id = last;
    }
    store
  }

  /// Panic on another thread while holding the lock.
  #[cfg(test)]
  pub(crate) fn poison(&self) {
    let inner = Arc::clone(&self.inner);
    let _ = std::thread::spawn(move || {
      let _guard = inner.lock();
      panic!("poisoning store lock");
    })
    .join();
  }

  fn insert_contact(&self, input: NewContact) -> Result<ContactSubmission> {
    let mut inner = self.lock()?;
    let id = next_id(&mut inner.next_contact_id, "contact")?;
    let submission = ContactSubmission::from_new(id, Utc::now(), input);
    inner.contacts.push(submission.clone());
    tracing::debug!(id, "stored contact submission");
    Ok(submission)
  }

  fn insert_user(&self, input: NewUser) -> Result<User> {
    let mut inner = self.lock()?;
    let id = next_id(&mut inner.next_user_id, "user")?;
    let user = User {
      id,
      username: input.username,
      password: input.password,
    };
    inner.users.push(user.clone());
    Ok(user)
  }
}

// ─── Storage impl ────────────────────────────────────────────────────────────

impl Storage for MemStore {
  type Error = Error;

  async fn get_user(&self, id: u64) -> Result<Option<User>> {
    Ok(self.lock()?.users.iter().find(|u| u.id == id).cloned())
  }

  async fn get_user_by_username<'a>(
    &'a self,
    username: &'a str,
  ) -> Result<Option<User>> {
    Ok(
      self
        .lock()?
        .users
        .iter()
        .find(|u| u.username == username)
        .cloned(),
    )
  }

  async fn create_user(&self, input: NewUser) -> Result<User> {
    self.insert_user(input)
  }

  async fn create_contact_submission(
    &self,
    input: NewContact,
  ) -> Result<ContactSubmission> {
    self.insert_contact(input)
  }

  async fn get_contact_submissions(&self) -> Result<Vec<ContactSubmission>> {
    Ok(self.lock()?.contacts.clone())
  }
}
