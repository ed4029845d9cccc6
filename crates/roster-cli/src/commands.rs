//! Command dispatch and output formatting.

use std::{io::Write, path::Path};

use anyhow::{Context as _, Result};
use roster_core::{PasswordPolicy, Roster, User};
use roster_tools::{Direction, aes_ecb_decrypt, aes_ecb_encrypt, caesar, digest_hex};
use tracing::{debug, info};

use crate::{
  cli::{Command, char_classes},
  settings::Settings,
};

/// Execute `command`, writing human-readable output to `out`.
pub fn run(command: Command, settings: &Settings, out: &mut impl Write) -> Result<()> {
  match command {
    // ── Roster ────────────────────────────────────────────────────────────
    Command::Add { name, email, password } => {
      let mut roster = open(settings)?;
      let user = roster.add_with_password(&name, &email, password.as_deref().unwrap_or(""))?;
      save(&roster, &settings.roster_path)?;
      writeln!(out, "added {} <{}>", user.name, user.email)?;
      if password.as_deref().is_none_or(str::is_empty) {
        writeln!(out, "password: {}", user.password)?;
      }
    }

    Command::Remove { email } => {
      let mut roster = open(settings)?;
      if roster.remove(&email) {
        save(&roster, &settings.roster_path)?;
        writeln!(out, "removed {}", email.trim())?;
      } else {
        writeln!(out, "no user with email {}", email.trim())?;
      }
    }

    Command::Show { email } => {
      let user = open(settings)?.lookup(&email)?;
      writeln!(out, "name:     {}", user.name)?;
      writeln!(out, "email:    {}", user.email)?;
      writeln!(out, "password: {}", user.password)?;
      writeln!(out, "status:   {}", status(&user))?;
    }

    Command::Enable { email } => {
      let mut roster = open(settings)?;
      roster.enable(&email)?;
      save(&roster, &settings.roster_path)?;
      writeln!(out, "enabled {}", email.trim())?;
    }

    Command::Disable { email } => {
      let mut roster = open(settings)?;
      roster.disable(&email)?;
      save(&roster, &settings.roster_path)?;
      writeln!(out, "disabled {}", email.trim())?;
    }

    Command::List { filter, json } => {
      let users = open(settings)?.list(filter);
      if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&users)?)?;
      } else {
        write_table(out, &users)?;
      }
    }

    Command::Import { path } => {
      let mut roster = Roster::with_password_policy(settings.password_policy())?;
      let count = roster
        .load(&path)
        .with_context(|| format!("failed to import {}", path.display()))?;
      save(&roster, &settings.roster_path)?;
      writeln!(out, "imported {count} users from {}", path.display())?;
    }

    Command::Export { path } => {
      let roster = open(settings)?;
      save(&roster, &path)?;
      writeln!(out, "exported {} users to {}", roster.len(), path.display())?;
    }

    // ── Tools ─────────────────────────────────────────────────────────────
    Command::Hash { algorithm, text } => {
      writeln!(out, "{}", digest_hex(algorithm, &text)?)?;
    }

    Command::Password { length, upper, lower, digits, symbols } => {
      let mut policy = settings.password_policy();
      if let Some(length) = length {
        policy.length = length;
      }
      let classes = char_classes(upper, lower, digits, symbols);
      if !classes.is_empty() {
        policy = PasswordPolicy { classes, ..policy };
      }
      writeln!(out, "{}", policy.generate()?)?;
    }

    Command::Caesar { direction, shift, text } => {
      writeln!(out, "{}", caesar(&text, shift, direction)?)?;
    }

    Command::Aes { direction, key, text } => {
      let result = match direction {
        Direction::Encrypt => aes_ecb_encrypt(&text, &key)?,
        Direction::Decrypt => aes_ecb_decrypt(&text, &key)?,
      };
      writeln!(out, "{result}")?;
    }
  }

  Ok(())
}

/// Load the configured roster; a missing file means an empty roster.
fn open(settings: &Settings) -> Result<Roster> {
  let path = &settings.roster_path;
  let mut roster = Roster::with_password_policy(settings.password_policy())?;
  match roster.load(path) {
    Ok(count) => debug!(path = %path.display(), count, "opened roster"),
    Err(e) if e.is_missing_file() => {
      info!(path = %path.display(), "roster file not found, starting empty");
    }
    Err(e) => {
      return Err(e).with_context(|| format!("failed to load roster {}", path.display()));
    }
  }
  Ok(roster)
}

fn save(roster: &Roster, path: &Path) -> Result<()> {
  roster
    .save(path)
    .with_context(|| format!("failed to save roster {}", path.display()))
}

fn status(user: &User) -> &'static str {
  if user.active { "active" } else { "inactive" }
}

fn write_table(out: &mut impl Write, users: &[User]) -> Result<()> {
  if users.is_empty() {
    writeln!(out, "no users")?;
    return Ok(());
  }

  let name_w = users
    .iter()
    .map(|u| u.name.chars().count())
    .chain([4])
    .max()
    .unwrap_or(4);
  let email_w = users
    .iter()
    .map(|u| u.email.as_str().chars().count())
    .chain([5])
    .max()
    .unwrap_or(5);

  writeln!(out, "{:<name_w$}  {:<email_w$}  STATUS", "NAME", "EMAIL")?;
  for user in users {
    writeln!(
      out,
      "{:<name_w$}  {:<email_w$}  {}",
      user.name,
      user.email.as_str(),
      status(user)
    )?;
  }
  Ok(())
}
