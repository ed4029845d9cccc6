//! Random password generation from character-class alphabets.

use rand::{CryptoRng, Rng, rngs::OsRng};
use strum::{Display, EnumIter, EnumString};

use crate::error::Invalid;

const UPPER: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWER: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*()-_=+[]{};:,.?/";

pub const DEFAULT_LENGTH: usize = 12;

/// A family of characters a password may draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum CharClass {
  Upper,
  Lower,
  Digits,
  Symbols,
}

impl CharClass {
  pub fn alphabet(self) -> &'static str {
    match self {
      Self::Upper => UPPER,
      Self::Lower => LOWER,
      Self::Digits => DIGITS,
      Self::Symbols => SYMBOLS,
    }
  }
}

/// Length and character classes of generated passwords.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordPolicy {
  pub length:  usize,
  pub classes: Vec<CharClass>,
}

impl Default for PasswordPolicy {
  /// Letters and digits, twelve characters.
  fn default() -> Self {
    Self {
      length:  DEFAULT_LENGTH,
      classes: vec![CharClass::Upper, CharClass::Lower, CharClass::Digits],
    }
  }
}

impl PasswordPolicy {
  pub fn new(length: usize, classes: impl IntoIterator<Item = CharClass>) -> Self {
    Self { length, classes: classes.into_iter().collect() }
  }

  pub fn validate(&self) -> Result<(), Invalid> {
    if self.length == 0 {
      return Err(Invalid::ZeroLength);
    }
    if self.classes.is_empty() {
      return Err(Invalid::NoCharClass);
    }
    Ok(())
  }

  /// Union of the selected alphabets; a class listed twice counts once.
  pub fn alphabet(&self) -> Vec<u8> {
    let mut seen = Vec::with_capacity(self.classes.len());
    let mut out = Vec::new();
    for class in &self.classes {
      if !seen.contains(class) {
        seen.push(*class);
        out.extend_from_slice(class.alphabet().as_bytes());
      }
    }
    out
  }

  /// Generate a password using the operating-system CSPRNG.
  pub fn generate(&self) -> Result<String, Invalid> {
    self.generate_with(&mut OsRng)
  }

  pub fn generate_with<R>(&self, rng: &mut R) -> Result<String, Invalid>
  where
    R: Rng + CryptoRng,
  {
    self.validate()?;
    let alphabet = self.alphabet();
    Ok(
      (0..self.length)
        .map(|_| char::from(alphabet[rng.gen_range(0..alphabet.len())]))
        .collect(),
    )
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn default_policy_is_alphanumeric() {
    let pw = PasswordPolicy::default().generate().unwrap();
    assert_eq!(pw.len(), DEFAULT_LENGTH);
    assert!(pw.chars().all(|c| c.is_ascii_alphanumeric()));
  }

  #[test]
  fn honours_selected_classes() {
    let policy = PasswordPolicy::new(64, [CharClass::Digits]);
    let pw = policy.generate().unwrap();
    assert_eq!(pw.len(), 64);
    assert!(pw.chars().all(|c| c.is_ascii_digit()));

    let policy = PasswordPolicy::new(64, [CharClass::Symbols]);
    let pw = policy.generate().unwrap();
    assert!(pw.chars().all(|c| SYMBOLS.contains(c)));
  }

  #[test]
  fn draws_from_the_supplied_rng() {
    use rand::{SeedableRng, rngs::StdRng};

    let policy = PasswordPolicy::new(200, [CharClass::Digits]);
    let a = policy.generate_with(&mut StdRng::seed_from_u64(7)).unwrap();
    let b = policy.generate_with(&mut StdRng::seed_from_u64(7)).unwrap();
    assert_eq!(a, b);
    assert!(('0'..='9').all(|d| a.contains(d)));
  }

  #[test]
  fn duplicate_classes_do_not_skew_alphabet() {
    let policy = PasswordPolicy::new(8, [CharClass::Lower, CharClass::Lower]);
    assert_eq!(policy.alphabet().len(), 26);
  }

  #[test]
  fn rejects_degenerate_policies() {
    assert_eq!(
      PasswordPolicy::new(0, [CharClass::Upper]).generate(),
      Err(Invalid::ZeroLength)
    );
    assert_eq!(
      PasswordPolicy::new(8, Vec::<CharClass>::new()).generate(),
      Err(Invalid::NoCharClass)
    );
  }
}
