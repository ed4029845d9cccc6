//! Text tools shipped alongside the roster: message digests, a Caesar
//! cipher, and an AES-256-ECB demonstration cipher.
//!
//! Everything here is pure and synchronous. None of it is meant to protect
//! real secrets: the Caesar cipher is a teaching toy and ECB mode leaks
//! plaintext structure.

pub mod caesar;
pub mod digest;
pub mod ecb;
pub mod error;

pub use caesar::{Direction, caesar};
pub use digest::{DigestAlgorithm, digest_hex};
pub use ecb::{decrypt as aes_ecb_decrypt, encrypt as aes_ecb_encrypt};
pub use error::{Error, Result};

/// Reject input that is empty or only whitespace.
pub(crate) fn require_text(text: &str) -> Result<()> {
  if text.trim().is_empty() {
    return Err(Error::EmptyInput);
  }
  Ok(())
}
