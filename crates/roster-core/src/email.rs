//! Normalized email addresses — the unique key of a roster.
//!
//! An [`Email`] is trimmed and lower-cased on construction and is guaranteed
//! to have the shape `local@domain.suffix`: exactly one `@`, no whitespace,
//! a non-empty local part, and a dot inside the domain with at least one
//! character on each side.

use std::{fmt, str::FromStr, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::Invalid;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// A validated, normalized email address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
  /// Normalize `raw` and check its shape.
  pub fn parse(raw: &str) -> Result<Self, Invalid> {
    let normalized = normalize(raw);
    if normalized.is_empty() {
      return Err(Invalid::EmptyEmail);
    }
    if !EMAIL_RE.is_match(&normalized) {
      return Err(Invalid::MalformedEmail(raw.trim().to_string()));
    }
    Ok(Self(normalized))
  }

  pub fn as_str(&self) -> &str { &self.0 }

  /// Whether `raw`, once normalized, denotes this address.
  pub fn matches(&self, raw: &str) -> bool { self.0 == normalize(raw) }
}

/// Trim surrounding whitespace and lower-case. Does not validate.
pub fn normalize(raw: &str) -> String { raw.trim().to_lowercase() }

impl fmt::Display for Email {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

impl AsRef<str> for Email {
  fn as_ref(&self) -> &str { &self.0 }
}

impl FromStr for Email {
  type Err = Invalid;

  fn from_str(s: &str) -> Result<Self, Self::Err> { Self::parse(s) }
}

impl TryFrom<String> for Email {
  type Error = Invalid;

  fn try_from(value: String) -> Result<Self, Self::Error> { Self::parse(&value) }
}

impl From<Email> for String {
  fn from(email: Email) -> Self { email.0 }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn trims_and_lowercases() {
    let email = Email::parse("  ALICE@Example.COM ").unwrap();
    assert_eq!(email.as_str(), "alice@example.com");
    assert!(email.matches("Alice@example.com"));
  }

  #[test]
  fn accepts_plain_shapes() {
    for ok in ["a@b.c", "first.last@sub.example.org", "x+tag@host.io", "é@exemple.fr"] {
      assert!(Email::parse(ok).is_ok(), "{ok} should be accepted");
    }
  }

  #[test]
  fn rejects_malformed_shapes() {
    for bad in [
      "plain",
      "@example.com",
      "user@",
      "user@example",
      "user@.com",
      "user@example.",
      "us er@example.com",
      "a@b@c.com",
    ] {
      assert!(
        matches!(Email::parse(bad), Err(Invalid::MalformedEmail(_))),
        "{bad} should be rejected"
      );
    }
  }

  #[test]
  fn shape_is_the_classic_pattern() {
    assert!(EMAIL_RE.is_match("a@b.c"));
    assert!(EMAIL_RE.is_match("a@b..c"));
    assert!(!EMAIL_RE.is_match("a@b\t.c"));
    assert!(!EMAIL_RE.is_match("a@@b.c"));
  }

  #[test]
  fn blank_is_empty_not_malformed() {
    assert_eq!(Email::parse("   "), Err(Invalid::EmptyEmail));
    assert_eq!(Email::parse(""), Err(Invalid::EmptyEmail));
  }

  #[test]
  fn deserialize_validates() {
    let ok: Email = serde_json::from_str("\"Bob@Example.com\"").unwrap();
    assert_eq!(ok.as_str(), "bob@example.com");
    assert!(serde_json::from_str::<Email>("\"nope\"").is_err());
  }
}
