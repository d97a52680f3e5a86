//! The validation gate for inbound contact submissions.
//!
//! [`validate_contact`] accepts a payload of any shape and either normalises
//! it into a [`NewContact`] or reports every violated field.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::{
  contact::NewContact,
  error::{Field, FieldIssue, ValidationError},
};

/// Minimum lengths, counted in UTF-16 code units like a browser's
/// `String.length`.
const MIN_NAME: usize = 2;
const MIN_SUBJECT: usize = 3;
const MIN_MESSAGE: usize = 10;

/// Local part, `@`, dot-terminated labels, alphabetic TLD. The "no leading
/// dot" and "no `..`" rules are checked separately in [`is_valid_email`].
static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(
    r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$",
  )
  .expect("email pattern is valid")
});

fn utf16_len(s: &str) -> usize {
  s.encode_utf16().count()
}

/// Whether `email` matches the accepted address grammar.
pub fn is_valid_email(email: &str) -> bool {
  !email.starts_with('.') && !email.contains("..") && EMAIL.is_match(email)
}

/// Validate an untrusted payload into a [`NewContact`].
///
/// All four fields are checked; the error lists one issue per violated
/// field, in the order name, email, subject, message. Unknown keys are
/// ignored. A payload that is not a JSON object is treated as having no
/// fields at all.
pub fn validate_contact(payload: &Value) -> Result<NewContact, ValidationError> {
  let mut issues = Vec::new();

  let name = check(payload, Field::Name, &mut issues, |s| {
    (utf16_len(s) < MIN_NAME)
      .then(|| format!("Name must be at least {MIN_NAME} characters"))
  });
  let email = check(payload, Field::Email, &mut issues, |s| {
    (!is_valid_email(s)).then(|| "Please enter a valid email address".to_string())
  });
  let subject = check(payload, Field::Subject, &mut issues, |s| {
    (utf16_len(s) < MIN_SUBJECT)
      .then(|| format!("Subject must be at least {MIN_SUBJECT} characters"))
  });
  let message = check(payload, Field::Message, &mut issues, |s| {
    (utf16_len(s) < MIN_MESSAGE)
      .then(|| format!("Message must be at least {MIN_MESSAGE} characters"))
  });

  match (name, email, subject, message) {
    (Some(name), Some(email), Some(subject), Some(message)) => {
      Ok(NewContact { name, email, subject, message })
    }
    _ => Err(ValidationError { issues }),
  }
}

/// Extract `field` as a string and run `constraint` over it. Records an issue
/// and returns `None` on any failure.
fn check(
  payload: &Value,
  field: Field,
  issues: &mut Vec<FieldIssue>,
  constraint: impl FnOnce(&str) -> Option<String>,
) -> Option<String> {
  let message = match payload.get(field.key()) {
    None | Some(Value::Null) => format!("{} is required", field.label()),
    Some(Value::String(s)) => match constraint(s.as_str()) {
      None => return Some(s.clone()),
      Some(message) => message,
    },
    Some(_) => format!("{} must be a string", field.label()),
  };
  issues.push(FieldIssue { field, message });
  None
}
