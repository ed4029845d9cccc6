//! Error types for `roster-core`.

use std::path::PathBuf;

use thiserror::Error;

/// Why a piece of caller input was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Invalid {
  #[error("name is required")]
  EmptyName,

  #[error("email is required")]
  EmptyEmail,

  #[error("malformed email address: {0:?}")]
  MalformedEmail(String),

  #[error("a user with email {0} already exists")]
  DuplicateEmail(String),

  #[error("unknown user filter: {0:?}")]
  UnknownFilter(String),

  #[error("password length must be at least 1")]
  ZeroLength,

  #[error("at least one character class is required")]
  NoCharClass,
}

#[derive(Debug, Error)]
pub enum Error {
  #[error("validation failed: {0}")]
  Validation(#[from] Invalid),

  #[error("user not found: {0}")]
  NotFound(String),

  #[error("invalid JSON: {0}")]
  Parse(#[from] serde_json::Error),

  #[error("unexpected roster layout: {0}")]
  Format(String),

  #[error("i/o error on {}: {source}", path.display())]
  Io {
    path:   PathBuf,
    #[source]
    source: std::io::Error,
  },
}

impl Error {
  pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
    Self::Io { path: path.into(), source }
  }

  /// Whether this is an I/O error caused by a missing file.
  pub fn is_missing_file(&self) -> bool {
    matches!(self, Self::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
