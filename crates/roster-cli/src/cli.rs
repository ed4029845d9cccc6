//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use roster_core::{CharClass, UserFilter};
use roster_tools::{DigestAlgorithm, Direction};

#[derive(Parser, Debug)]
#[command(name = "roster", version, about = "Manage a roster of users and their access")]
pub struct Cli {
  /// Path to a TOML config file (roster_path, password_length).
  #[arg(short, long, value_name = "FILE", default_value = "roster.toml")]
  pub config: PathBuf,

  /// Roster JSON file; overrides the config file and `ROSTER_ROSTER_PATH`.
  #[arg(short, long, value_name = "PATH")]
  pub file: Option<PathBuf>,

  #[command(subcommand)]
  pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
  /// Create an active user; prints the generated password.
  Add {
    name:     String,
    email:    String,
    /// Use this password instead of generating one.
    #[arg(long)]
    password: Option<String>,
  },

  /// Delete a user. Deleting an unknown email is not an error.
  Remove { email: String },

  /// Print one user.
  Show { email: String },

  /// Mark a user active.
  Enable { email: String },

  /// Mark a user inactive.
  Disable { email: String },

  /// List users in insertion order.
  List {
    /// all, active or inactive.
    #[arg(short, long, default_value = "all", value_parser = UserFilter::parse)]
    filter: UserFilter,

    /// Print the records as a JSON array.
    #[arg(long)]
    json:   bool,
  },

  /// Replace the roster with the users read from another JSON file.
  Import { path: PathBuf },

  /// Write the roster to another JSON file.
  Export { path: PathBuf },

  /// Print the hex digest of a text (md5, sha1, sha256, sha512).
  Hash {
    #[arg(value_parser = DigestAlgorithm::parse)]
    algorithm: DigestAlgorithm,
    text:      String,
  },

  /// Generate a random password. Without class flags, uses letters and digits.
  Password {
    /// Defaults to the configured password length.
    #[arg(short, long)]
    length:  Option<usize>,
    #[arg(long)]
    upper:   bool,
    #[arg(long)]
    lower:   bool,
    #[arg(long)]
    digits:  bool,
    #[arg(long)]
    symbols: bool,
  },

  /// Shift the letters of a text (Caesar cipher).
  Caesar {
    /// encrypt or decrypt.
    #[arg(value_parser = parse_direction)]
    direction: Direction,
    #[arg(short, long, allow_negative_numbers = true)]
    shift:     i64,
    text:      String,
  },

  /// AES-256-ECB demo cipher; ciphertext is base64.
  Aes {
    /// encrypt or decrypt.
    #[arg(value_parser = parse_direction)]
    direction: Direction,
    /// Passphrase; the AES key is its SHA-256.
    #[arg(short, long)]
    key:       String,
    text:      String,
  },
}

/// Character classes selected by the `password` flags, if any.
pub fn char_classes(upper: bool, lower: bool, digits: bool, symbols: bool) -> Vec<CharClass> {
  [
    (upper, CharClass::Upper),
    (lower, CharClass::Lower),
    (digits, CharClass::Digits),
    (symbols, CharClass::Symbols),
  ]
  .into_iter()
  .filter_map(|(on, class)| on.then_some(class))
  .collect()
}

fn parse_direction(s: &str) -> Result<Direction, String> {
  s.parse()
    .map_err(|_| format!("expected `encrypt` or `decrypt`, got {s:?}"))
}

#[cfg(test)]
mod tests {
  use super::*;

  fn parse(args: &[&str]) -> Command {
    Cli::try_parse_from(std::iter::once("roster").chain(args.iter().copied()))
      .unwrap()
      .command
  }

  #[test]
  fn list_filter_is_validated() {
    assert_eq!(
      parse(&["list", "--filter", "Inactive"]),
      Command::List { filter: UserFilter::Inactive, json: false }
    );
    assert_eq!(
      parse(&["list"]),
      Command::List { filter: UserFilter::All, json: false }
    );
    assert!(Cli::try_parse_from(["roster", "list", "--filter", "Actifs"]).is_err());
  }

  #[test]
  fn tool_arguments() {
    assert_eq!(
      parse(&["hash", "SHA1", "abc"]),
      Command::Hash { algorithm: DigestAlgorithm::Sha1, text: "abc".into() }
    );
    assert_eq!(
      parse(&["caesar", "decrypt", "--shift", "-3", "abc"]),
      Command::Caesar { direction: Direction::Decrypt, shift: -3, text: "abc".into() }
    );
    assert!(Cli::try_parse_from(["roster", "hash", "crc32", "abc"]).is_err());
  }

  #[test]
  fn class_flags() {
    assert_eq!(
      char_classes(true, false, true, false),
      [CharClass::Upper, CharClass::Digits]
    );
    assert!(char_classes(false, false, false, false).is_empty());
  }
}
