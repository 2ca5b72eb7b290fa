//! Key derivation and payload decryption for cloud map blobs.
//!
//! The blob is base64 text wrapping AES-128-ECB ciphertext; the plaintext is a
//! hex string whose decoded bytes are the compressed map container.

mod cipher;
mod decryptor;
mod error;
mod key;

pub use decryptor::{decrypt, encrypt};
pub use error::{CryptoError, Result};
pub use key::{derive_key, DecryptionKey, KeyEncoding, KeyMaterial};
