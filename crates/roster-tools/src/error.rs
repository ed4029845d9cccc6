//! Error types for `roster-tools`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("input text is empty")]
  EmptyInput,

  #[error("unknown digest algorithm: {0:?}")]
  UnknownAlgorithm(String),

  #[error("ciphertext is not valid base64: {0}")]
  Base64(#[from] base64::DecodeError),

  #[error("ciphertext length {0} is not a positive multiple of the block size")]
  BlockLength(usize),

  #[error("bad padding: wrong key or corrupted ciphertext")]
  Padding,

  #[error("decrypted bytes are not UTF-8")]
  Utf8(#[from] std::string::FromUtf8Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
