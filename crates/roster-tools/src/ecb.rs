//! AES-256 in ECB mode, keyed by the SHA-256 of a passphrase.
//!
//! Plaintext is PKCS#7-padded UTF-8; ciphertext travels as standard base64.

use aes::Aes256;
use base64::{Engine as _, engine::general_purpose::STANDARD as B64};
use ecb::cipher::{BlockDecryptMut, BlockEncryptMut, KeyInit, block_padding::Pkcs7};
use sha2::{Digest, Sha256};

use crate::{Error, Result, require_text};

type Encryptor = ecb::Encryptor<Aes256>;
type Decryptor = ecb::Decryptor<Aes256>;

const BLOCK: usize = 16;

pub fn encrypt(text: &str, passphrase: &str) -> Result<String> {
  require_text(text)?;
  let key = Sha256::digest(passphrase.as_bytes());
  let buf = Encryptor::new(&key).encrypt_padded_vec_mut::<Pkcs7>(text.as_bytes());
  Ok(B64.encode(buf))
}

pub fn decrypt(ciphertext: &str, passphrase: &str) -> Result<String> {
  require_text(ciphertext)?;
  let buf = B64.decode(ciphertext.trim())?;
  if buf.is_empty() || buf.len() % BLOCK != 0 {
    return Err(Error::BlockLength(buf.len()));
  }

  let key = Sha256::digest(passphrase.as_bytes());
  let plain = Decryptor::new(&key)
    .decrypt_padded_vec_mut::<Pkcs7>(&buf)
    .map_err(|_| Error::Padding)?;
  Ok(String::from_utf8(plain)?)
}
