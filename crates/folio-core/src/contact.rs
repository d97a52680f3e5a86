//! Contact submissions — the records accepted from the site's contact form.
//!
//! A submission is written once by the store and never updated. The `id` and
//! `created_at` fields are always store-assigned.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A validated submission that has not been stored yet.
///
/// Only [`validate_contact`](crate::validate::validate_contact) produces this
/// from untrusted input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
  pub name:    String,
  pub email:   String,
  pub subject: String,
  pub message: String,
}

/// A stored submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
  pub id:         u64,
  pub name:       String,
  pub email:      String,
  pub subject:    String,
  pub message:    String,
  #[serde(with = "iso_millis")]
  pub created_at: DateTime<Utc>,
}

impl ContactSubmission {
  /// Stamp `input` with its store-assigned identity.
  pub fn from_new(id: u64, created_at: DateTime<Utc>, input: NewContact) -> Self {
    ContactSubmission {
      id,
      name: input.name,
      email: input.email,
      subject: input.subject,
      message: input.message,
      created_at,
    }
  }
}

/// `createdAt` is rendered in UTC with millisecond precision and a `Z`
/// suffix, e.g. `2026-10-19T08:30:00.123Z`.
mod iso_millis {
  use chrono::{DateTime, SecondsFormat, Utc};
  use serde::{Deserialize, Deserializer, Serializer, de::Error as _};

  pub fn serialize<S: Serializer>(
    dt: &DateTime<Utc>,
    serializer: S,
  ) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&dt.to_rfc3339_opts(SecondsFormat::Millis, true))
  }

  pub fn deserialize<'de, D: Deserializer<'de>>(
    deserializer: D,
  ) -> Result<DateTime<Utc>, D::Error> {
    let s = String::deserialize(deserializer)?;
    DateTime::parse_from_rfc3339(&s)
      .map(|dt| dt.with_timezone(&Utc))
      .map_err(D::Error::custom)
  }
}
