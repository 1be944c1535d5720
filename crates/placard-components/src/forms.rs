/* crates/placard-components/src/forms.rs */

//! Field rules for the contact form. Submission itself goes to the
//! third-party form backend; these rules are what the page enforces
//! before letting a submission out.

use std::sync::LazyLock;

use regex::Regex;

pub const NAME_MIN_LEN: usize = 2;
pub const MESSAGE_MAX_LEN: usize = 1000;

static EMAIL_RE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

pub fn is_valid_email(value: &str) -> bool {
  EMAIL_RE.is_match(value)
}

/// Validate one named form field. Returns the error message to show next
/// to the field, or `None` when the value is acceptable. Unknown field
/// names have no rules.
pub fn validate_field(field: &str, value: &str) -> Option<String> {
  match field {
    "name" => {
      if value.trim().is_empty() {
        Some("Full name is required".to_string())
      } else if value.trim().len() < NAME_MIN_LEN {
        Some(format!("Full name must be at least {NAME_MIN_LEN} characters"))
      } else {
        None
      }
    }
    "email" => {
      if value.trim().is_empty() {
        Some("Email address is required".to_string())
      } else if !is_valid_email(value) {
        Some("Please enter a valid email address".to_string())
      } else {
        None
      }
    }
    "message" => {
      if value.len() > MESSAGE_MAX_LEN {
        Some(format!("Message must be less than {MESSAGE_MAX_LEN} characters"))
      } else {
        None
      }
    }
    _ => None,
  }
}

/// Validate a whole submission; returns `(field, message)` pairs.
pub fn validate_submission(name: &str, email: &str, message: &str) -> Vec<(String, String)> {
  [("name", name), ("email", email), ("message", message)]
    .into_iter()
    .filter_map(|(field, value)| {
      validate_field(field, value).map(|error| (field.to_string(), error))
    })
    .collect()
}
