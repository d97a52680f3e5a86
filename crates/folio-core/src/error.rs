//! Error types for `folio-core`.

use serde::Serialize;
use thiserror::Error;

/// One of the four validated fields of a contact submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
  Name,
  Email,
  Subject,
  Message,
}

impl Field {
  /// All fields, in the order they are checked and reported.
  #[cfg(test)]
  pub(crate) const ALL: [Field; 4] =
    [Field::Name, Field::Email, Field::Subject, Field::Message];

  /// The JSON key for this field.
  pub fn key(self) -> &'static str {
    match self {
      Field::Name => "name",
      Field::Email => "email",
      Field::Subject => "subject",
      Field::Message => "message",
    }
  }

  /// Capitalised form used at the start of user-facing messages.
  pub fn label(self) -> &'static str {
    match self {
      Field::Name => "Name",
      Field::Email => "Email",
      Field::Subject => "Subject",
      Field::Message => "Message",
    }
  }
}

/// A single violated constraint, rendered for form feedback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldIssue {
  pub field:   Field,
  pub message: String,
}

/// A submission payload failed validation.
///
/// Holds every violation found, never just the first.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} field(s) failed validation", .issues.len())]
pub struct ValidationError {
  pub issues: Vec<FieldIssue>,
}

impl ValidationError {
  /// Whether any issue names `field`.
  #[cfg(test)]
  pub(crate) fn has(&self, field: Field) -> bool {
    self.issues.iter().any(|i| i.field == field)
  }
}
