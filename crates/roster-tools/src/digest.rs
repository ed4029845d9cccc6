//! Hex digests over a closed set of hash functions.

use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha256, Sha512};
use strum::{Display, EnumIter, EnumString};

use crate::{Error, Result, require_text};

/// The hash functions offered by the digest tool.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumIter, EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum DigestAlgorithm {
  #[strum(to_string = "md5", serialize = "md-5")]
  Md5,
  #[strum(to_string = "sha1", serialize = "sha-1")]
  Sha1,
  #[default]
  #[strum(to_string = "sha256", serialize = "sha-256")]
  Sha256,
  #[strum(to_string = "sha512", serialize = "sha-512")]
  Sha512,
}

impl DigestAlgorithm {
  pub fn parse(name: &str) -> Result<Self> {
    name
      .trim()
      .parse()
      .map_err(|_| Error::UnknownAlgorithm(name.to_string()))
  }

  /// Lowercase hex digest of `bytes`.
  pub fn hex_digest(self, bytes: &[u8]) -> String {
    match self {
      Self::Md5 => hex_of::<Md5>(bytes),
      Self::Sha1 => hex_of::<Sha1>(bytes),
      Self::Sha256 => hex_of::<Sha256>(bytes),
      Self::Sha512 => hex_of::<Sha512>(bytes),
    }
  }
}

/// Digest the UTF-8 bytes of `text`. Blank text is rejected.
pub fn digest_hex(algorithm: DigestAlgorithm, text: &str) -> Result<String> {
  require_text(text)?;
  Ok(algorithm.hex_digest(text.as_bytes()))
}

fn hex_of<D: Digest>(bytes: &[u8]) -> String { hex::encode(D::digest(bytes)) }
