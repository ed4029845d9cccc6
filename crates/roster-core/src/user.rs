//! The user record and the filter used to list records.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::{email::Email, error::Invalid};

/// A single roster entry.
///
/// Values handed out by [`Roster`](crate::Roster) are copies; mutating one
/// never affects the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
  pub name:     String,
  pub email:    Email,
  /// Opaque secret, generated by the roster unless supplied.
  pub password: String,
  pub active:   bool,
}

impl User {
  /// A freshly created user is always active.
  pub(crate) fn new(name: String, email: Email, password: String) -> Self {
    Self { name, email, password, active: true }
  }
}

/// Which records [`Roster::list`](crate::Roster::list) returns.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumIter, EnumString,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum UserFilter {
  #[default]
  All,
  Active,
  Inactive,
}

impl UserFilter {
  /// Parse a filter name (`all`, `active`, `inactive`, any case).
  pub fn parse(name: &str) -> Result<Self, Invalid> {
    name
      .trim()
      .parse()
      .map_err(|_| Invalid::UnknownFilter(name.to_string()))
  }

  pub fn admits(self, user: &User) -> bool {
    match self {
      Self::All => true,
      Self::Active => user.active,
      Self::Inactive => !user.active,
    }
  }
}
