//! [`Roster`] — the in-memory user roster.

use std::{fs, path::Path};

use tracing::debug;

use crate::{
  email::{self, Email},
  error::{Error, Invalid, Result},
  json,
  password::PasswordPolicy,
  user::{User, UserFilter},
};

/// An ordered set of users keyed by normalized email.
///
/// Insertion order is preserved and is the order of [`Roster::list`]. Every
/// read hands out owned copies. The roster assumes a single owner; wrap it
/// in a mutex to share it across threads.
#[derive(Debug, Clone, Default)]
pub struct Roster {
  users:  Vec<User>,
  policy: PasswordPolicy,
}

impl Roster {
  /// An empty roster generating passwords with the default policy.
  pub fn new() -> Self { Self::default() }

  /// An empty roster generating passwords with `policy`.
  pub fn with_password_policy(policy: PasswordPolicy) -> Result<Self> {
    policy.validate()?;
    Ok(Self { users: Vec::new(), policy })
  }

  pub fn len(&self) -> usize { self.users.len() }

  pub fn is_empty(&self) -> bool { self.users.is_empty() }

  pub fn iter(&self) -> impl Iterator<Item = &User> + '_ { self.users.iter() }

  // ── Mutations ─────────────────────────────────────────────────────────

  /// Create an active user with a generated password.
  pub fn add(&mut self, name: &str, email: &str) -> Result<User> {
    self.add_with_password(name, email, "")
  }

  /// Create an active user. An empty `password` is replaced by a generated
  /// one; anything else is stored verbatim.
  pub fn add_with_password(
    &mut self,
    name: &str,
    email: &str,
    password: &str,
  ) -> Result<User> {
    let name = name.trim();
    if name.is_empty() {
      return Err(Invalid::EmptyName.into());
    }
    let email = Email::parse(email)?;
    if self.position(&email).is_some() {
      return Err(Invalid::DuplicateEmail(email.into()).into());
    }

    let password = if password.is_empty() {
      self.policy.generate()?
    } else {
      password.to_string()
    };

    let user = User::new(name.to_string(), email, password);
    self.users.push(user.clone());
    Ok(user)
  }

  /// Remove the user with this email. Removing an absent email is a no-op;
  /// the return value tells whether anything was removed.
  pub fn remove(&mut self, email: &str) -> bool {
    let key = email::normalize(email);
    let before = self.users.len();
    self.users.retain(|u| u.email.as_str() != key);
    before != self.users.len()
  }

  pub fn enable(&mut self, email: &str) -> Result<()> {
    self.find_mut(email)?.active = true;
    Ok(())
  }

  pub fn disable(&mut self, email: &str) -> Result<()> {
    self.find_mut(email)?.active = false;
    Ok(())
  }

  // ── Reads ─────────────────────────────────────────────────────────────

  pub fn lookup(&self, email: &str) -> Result<User> {
    self
      .users
      .iter()
      .find(|u| u.email.matches(email))
      .cloned()
      .ok_or_else(|| Error::NotFound(email::normalize(email)))
  }

  pub fn list(&self, filter: UserFilter) -> Vec<User> {
    self
      .users
      .iter()
      .filter(|u| filter.admits(u))
      .cloned()
      .collect()
  }

  // ── Persistence ───────────────────────────────────────────────────────

  /// Write the whole roster to `path` as a JSON array.
  pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let text = json::encode(&self.users)?;
    fs::write(path, text).map_err(|e| Error::io(path, e))?;
    debug!(path = %path.display(), users = self.users.len(), "saved roster");
    Ok(())
  }

  /// Replace the roster with the users read from `path` and return how many
  /// were loaded. On error the roster is left as it was.
  ///
  /// A missing file is an [`Error::Io`]; callers that want "no file means
  /// no users" should check [`Error::is_missing_file`].
  pub fn load(&mut self, path: impl AsRef<Path>) -> Result<usize> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let users = json::decode(&text, &self.policy)?;
    debug!(path = %path.display(), users = users.len(), "loaded roster");
    self.users = users;
    Ok(self.users.len())
  }

  // ── Internals ─────────────────────────────────────────────────────────

  fn position(&self, email: &Email) -> Option<usize> {
    self.users.iter().position(|u| &u.email == email)
  }

  fn find_mut(&mut self, email: &str) -> Result<&mut User> {
    self
      .users
      .iter_mut()
      .find(|u| u.email.matches(email))
      .ok_or_else(|| Error::NotFound(email::normalize(email)))
  }
}
