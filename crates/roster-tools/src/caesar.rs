//! Caesar cipher over ASCII letters.

use strum::{Display, EnumString};

use crate::{Result, require_text};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Direction {
  Encrypt,
  Decrypt,
}

/// Shift every ASCII letter of `text` by `shift` places, keeping its case.
///
/// Any shift is accepted and reduced modulo 26. Non-letters, including
/// non-ASCII letters, pass through unchanged.
pub fn caesar(text: &str, shift: i64, direction: Direction) -> Result<String> {
  require_text(text)?;
  let forward = shift.rem_euclid(26) as u8;
  let shift = match direction {
    Direction::Encrypt => forward,
    Direction::Decrypt => (26 - forward) % 26,
  };
  Ok(text.chars().map(|c| rotate(c, shift)).collect())
}

fn rotate(c: char, shift: u8) -> char {
  let base = match c {
    'a'..='z' => b'a',
    'A'..='Z' => b'A',
    _ => return c,
  };
  char::from((c as u8 - base + shift) % 26 + base)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::Error;

  #[test]
  fn shifts_letters_and_keeps_the_rest() {
    assert_eq!(
      caesar("Hello, World! é", 3, Direction::Encrypt).unwrap(),
      "Khoor, Zruog! é"
    );
    assert_eq!(caesar("xyz XYZ", 3, Direction::Encrypt).unwrap(), "abc ABC");
  }

  #[test]
  fn decrypt_inverts_any_shift() {
    let plain = "The quick brown fox jumps over the lazy dog";
    for shift in [-53, -1, 0, 1, 13, 25, 26, 27, 1000] {
      let secret = caesar(plain, shift, Direction::Encrypt).unwrap();
      assert_eq!(caesar(&secret, shift, Direction::Decrypt).unwrap(), plain);
    }
  }

  #[test]
  fn rot13_is_its_own_inverse() {
    let once = caesar("Rust", 13, Direction::Encrypt).unwrap();
    assert_eq!(once, "Ehfg");
    assert_eq!(caesar(&once, 13, Direction::Encrypt).unwrap(), "Rust");
  }

  #[test]
  fn blank_text_is_rejected() {
    assert!(matches!(
      caesar("   ", 3, Direction::Encrypt),
      Err(Error::EmptyInput)
    ));
  }
}
