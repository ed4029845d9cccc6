//! Layered configuration: defaults, then an optional TOML file, then
//! `ROSTER_*` environment variables, then command-line flags.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use roster_core::{PasswordPolicy, password::DEFAULT_LENGTH};
use serde::Deserialize;

pub const DEFAULT_ROSTER_PATH: &str = "users.json";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
  /// JSON file holding the roster.
  pub roster_path:     PathBuf,
  /// Length of passwords generated for new users.
  pub password_length: usize,
}

impl Settings {
  pub fn load(config_file: &Path, roster_override: Option<&Path>) -> anyhow::Result<Self> {
    let mut builder = config::Config::builder()
      .set_default("roster_path", DEFAULT_ROSTER_PATH)?
      .set_default("password_length", DEFAULT_LENGTH as i64)?
      .add_source(config::File::from(config_file).required(false))
      .add_source(config::Environment::with_prefix("ROSTER"));

    if let Some(path) = roster_override {
      builder = builder.set_override("roster_path", path.to_string_lossy().into_owned())?;
    }

    builder
      .build()
      .with_context(|| format!("failed to read config file {}", config_file.display()))?
      .try_deserialize()
      .context("failed to deserialise settings")
  }

  /// The roster's default character classes at the configured length.
  pub fn password_policy(&self) -> PasswordPolicy {
    PasswordPolicy { length: self.password_length, ..PasswordPolicy::default() }
  }
}
