use base64::{engine::general_purpose::STANDARD as BASE64, Engine};

use crate::cipher::{decrypt_ecb, encrypt_ecb};
use crate::error::{CryptoError, Result};
use crate::key::DecryptionKey;

/// Decrypts a base64 map blob into the compressed container bytes.
pub fn decrypt(ciphertext_base64: &[u8], key: &DecryptionKey) -> Result<Vec<u8>> {
    let key_bytes = key.to_bytes()?;
    let ciphertext = BASE64
        .decode(ciphertext_base64.trim_ascii())
        .map_err(|e| CryptoError::Decode(format!("invalid base64 wrapper: {e}")))?;

    let inner = decrypt_ecb(&key_bytes, &ciphertext)?;
    hex::decode(inner.trim_ascii())
        .map_err(|e| CryptoError::Decode(format!("invalid hex payload: {e}")))
}

/// Inverse of [`decrypt`]: hex-encodes `plaintext`, encrypts it and wraps the
/// ciphertext in base64.
pub fn encrypt(plaintext: &[u8], key: &DecryptionKey) -> Result<String> {
    let key_bytes = key.to_bytes()?;
    let ciphertext = encrypt_ecb(&key_bytes, hex::encode(plaintext).as_bytes())?;
    Ok(BASE64.encode(ciphertext))
}
