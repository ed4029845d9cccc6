//! JSON codec for roster files.
//!
//! The canonical layout is a top-level array of
//! `{"name", "email", "password", "active"}` objects, pretty-printed with
//! non-ASCII text written literally.
//!
//! Decoding is tolerant. Each logical field is looked up under an ordered
//! list of accepted key spellings; a key that is absent, `null`, or holds a
//! blank string defers to the next spelling. Entries without a usable email
//! are dropped, and a repeated email keeps only its first occurrence.

use std::collections::HashSet;

use serde_json::{Map, Value};
use tracing::debug;

use crate::{
  email::Email,
  error::{Error, Result},
  password::PasswordPolicy,
  user::User,
};

// ─── Accepted key spellings, highest priority first ──────────────────────────

pub const NAME_KEYS: &[&str] = &["name", "fullname", "nom"];
pub const EMAIL_KEYS: &[&str] = &["email", "mail"];
pub const PASSWORD_KEYS: &[&str] = &["password", "pwd", "mot_de_passe"];
pub const ACTIVE_KEYS: &[&str] = &["active", "actif"];

// ─── Encoding ────────────────────────────────────────────────────────────────

/// Render `users` in the canonical layout, with a trailing newline.
pub fn encode(users: &[User]) -> Result<String> {
  let mut out = serde_json::to_string_pretty(users)?;
  out.push('\n');
  Ok(out)
}

// ─── Decoding ────────────────────────────────────────────────────────────────

/// Decode a roster file, generating passwords with `policy` where missing.
pub fn decode(input: &str, policy: &PasswordPolicy) -> Result<Vec<User>> {
  let value: Value = serde_json::from_str(input)?;
  let Value::Array(entries) = value else {
    return Err(Error::Format(format!(
      "expected an array of users, found {}",
      describe(&value)
    )));
  };

  let mut seen = HashSet::with_capacity(entries.len());
  let mut users = Vec::with_capacity(entries.len());

  for (index, entry) in entries.iter().enumerate() {
    let Value::Object(fields) = entry else {
      debug!(index, "skipping {} entry", describe(entry));
      continue;
    };

    let Some(email) = text_field(fields, EMAIL_KEYS).and_then(|raw| Email::parse(raw).ok())
    else {
      debug!(index, "skipping entry without a valid email");
      continue;
    };

    if !seen.insert(email.clone()) {
      debug!(index, %email, "skipping duplicate email");
      continue;
    }

    let name = text_field(fields, NAME_KEYS)
      .map(|n| n.trim().to_string())
      .unwrap_or_default();
    let password = match text_field(fields, PASSWORD_KEYS) {
      Some(p) => p.to_string(),
      None => policy.generate()?,
    };
    let active = flag_field(fields, ACTIVE_KEYS).unwrap_or(true);

    users.push(User { name, email, password, active });
  }

  Ok(users)
}

/// First non-blank string stored under any of `keys`.
fn text_field<'a>(fields: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a str> {
  keys.iter().find_map(|key| match fields.get(*key) {
    Some(Value::String(s)) if !s.trim().is_empty() => Some(s.as_str()),
    _ => None,
  })
}

/// First value under any of `keys` that reads as a boolean.
fn flag_field(fields: &Map<String, Value>, keys: &[&str]) -> Option<bool> {
  keys.iter().find_map(|key| match fields.get(*key)? {
    Value::Bool(b) => Some(*b),
    Value::Number(n) => n.as_f64().map(|f| f != 0.0),
    Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
      "true" | "yes" | "1" => Some(true),
      "false" | "no" | "0" => Some(false),
      _ => None,
    },
    _ => None,
  })
}

fn describe(value: &Value) -> &'static str {
  match value {
    Value::Null => "null",
    Value::Bool(_) => "a boolean",
    Value::Number(_) => "a number",
    Value::String(_) => "a string",
    Value::Array(_) => "an array",
    Value::Object(_) => "an object",
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn decode_default(input: &str) -> Result<Vec<User>> {
    decode(input, &PasswordPolicy::default())
  }

  #[test]
  fn canonical_layout() {
    let users = vec![User {
      name:     "Zoé".into(),
      email:    Email::parse("zoe@example.fr").unwrap(),
      password: "s3cret".into(),
      active:   false,
    }];
    let text = encode(&users).unwrap();
    assert_eq!(
      text,
      "[\n  {\n    \"name\": \"Zoé\",\n    \"email\": \"zoe@example.fr\",\n    \
       \"password\": \"s3cret\",\n    \"active\": false\n  }\n]\n"
    );
  }

  #[test]
  fn empty_roster_encodes_as_empty_array() {
    assert_eq!(encode(&[]).unwrap(), "[]\n");
  }

  #[test]
  fn alternate_spellings() {
    let users = decode_default(
      r#"[
        {"fullname": "U1", "mail": "u1@example.com", "pwd": "a"},
        {"nom": "U2", "email": "U2@Example.com", "mot_de_passe": "b", "actif": false}
      ]"#,
    )
    .unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(users[0].name, "U1");
    assert_eq!(users[0].email.as_str(), "u1@example.com");
    assert_eq!(users[0].password, "a");
    assert!(users[0].active);
    assert_eq!(users[1].name, "U2");
    assert_eq!(users[1].email.as_str(), "u2@example.com");
    assert_eq!(users[1].password, "b");
    assert!(!users[1].active);
  }

  #[test]
  fn priority_and_blank_fallthrough() {
    let users = decode_default(
      r#"[{"name": "  ", "fullname": "Second", "nom": "Third",
           "email": null, "mail": "x@example.com",
           "password": "", "pwd": "p2",
           "active": "maybe", "actif": 0}]"#,
    )
    .unwrap();
    assert_eq!(users[0].name, "Second");
    assert_eq!(users[0].email.as_str(), "x@example.com");
    assert_eq!(users[0].password, "p2");
    assert!(!users[0].active);
  }

  #[test]
  fn english_keys_win_over_legacy_spellings() {
    let users = decode_default(
      r#"[{"nom": "Legacy", "name": "Current",
           "mail": "old@example.com", "email": "new@example.com",
           "mot_de_passe": "old", "password": "new",
           "actif": true, "active": false}]"#,
    )
    .unwrap();
    assert_eq!(users[0].name, "Current");
    assert_eq!(users[0].email.as_str(), "new@example.com");
    assert_eq!(users[0].password, "new");
    assert!(!users[0].active);
  }

  #[test]
  fn drops_unusable_entries_and_duplicates() {
    let users = decode_default(
      r#"[
        {"name": "ok", "email": "a@example.com"},
        {"name": "no email"},
        {"name": "bad", "email": "not-an-email"},
        {"name": "dup", "email": "A@EXAMPLE.COM"},
        42,
        "text",
        {"name": "ok2", "email": "b@example.com"}
      ]"#,
    )
    .unwrap();
    let names: Vec<_> = users.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, ["ok", "ok2"]);
  }

  #[test]
  fn missing_password_is_generated() {
    let users = decode_default(r#"[{"email": "a@example.com"}]"#).unwrap();
    assert_eq!(users[0].password.len(), crate::password::DEFAULT_LENGTH);
    assert_eq!(users[0].name, "");
  }

  #[test]
  fn top_level_must_be_array() {
    assert!(matches!(
      decode_default(r#"{"users": []}"#),
      Err(Error::Format(_))
    ));
  }

  #[test]
  fn syntax_errors_are_parse_errors() {
    assert!(matches!(
      decode_default("{invalide: ,,,}"),
      Err(Error::Parse(_))
    ));
  }
}
