pub type Result<T> = std::result::Result<T, CryptoError>;

#[derive(Debug, thiserror::Error)]
pub enum CryptoError {
    /// The key could not be turned into AES key bytes
    #[error("invalid decryption key: {0}")]
    KeyDerivation(String),

    /// Malformed base64 wrapper or inner hex payload
    #[error("malformed payload: {0}")]
    Decode(String),

    /// Wrong key or corrupted ciphertext, detected as bad padding
    #[error("decryption failed: {0}")]
    Decrypt(String),
}
