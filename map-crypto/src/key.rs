use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use md5::{Digest, Md5};

use crate::cipher::{encrypt_ecb_with, KEY_LEN};
use crate::error::{CryptoError, Result};

/// How a derived key is rendered and read back by the decryptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyEncoding {
    /// Full 32-character MD5 hex digest, hex-decoded to 16 key bytes.
    #[default]
    Hex,
    /// Upper-cased middle 16 characters of the digest, used as raw key bytes.
    Text,
}

/// Identity strings the device key is derived from. Blank fields are empty
/// strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyMaterial {
    pub wifi_sn: String,
    pub owner_id: String,
    pub device_id: String,
    pub model: String,
    pub mac: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecryptionKey {
    text: String,
    encoding: KeyEncoding,
}

impl DecryptionKey {
    pub fn new(text: impl Into<String>, encoding: KeyEncoding) -> Self {
        Self {
            text: text.into(),
            encoding,
        }
    }

    pub fn hex(text: impl Into<String>) -> Self {
        Self::new(text, KeyEncoding::Hex)
    }

    /// AES key bytes. A malformed hex key is a hard error.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        match self.encoding {
            KeyEncoding::Hex => hex::decode(&self.text)
                .map_err(|e| CryptoError::KeyDerivation(format!("key is not valid hex: {e}"))),
            KeyEncoding::Text => Ok(self.text.as_bytes().to_vec()),
        }
    }
}

/// Derives the map decryption key from the device identity.
///
/// Never fails: blank fields take part as empty strings.
pub fn derive_key(material: &KeyMaterial, encoding: KeyEncoding) -> DecryptionKey {
    let identity = [
        material.wifi_sn.as_str(),
        material.owner_id.as_str(),
        material.device_id.as_str(),
    ]
    .join("+");

    let intermediate = format!(
        "{}{}",
        normalize_model(&material.model),
        normalize_mac(&material.mac)
    );

    let ciphertext = encrypt_ecb_with(&fit_key(intermediate.as_bytes()), identity.as_bytes());
    let digest = hex::encode(Md5::digest(BASE64.encode(ciphertext).as_bytes()));

    match encoding {
        KeyEncoding::Hex => DecryptionKey::new(digest, encoding),
        KeyEncoding::Text => DecryptionKey::new(digest[8..24].to_uppercase(), encoding),
    }
}

/// Last dot-separated segment, left-padded with `0` or cut to its last four
/// characters.
fn normalize_model(model: &str) -> String {
    let segment = model.rsplit('.').next().unwrap_or_default();
    let chars: Vec<char> = segment.chars().collect();
    if chars.len() > 4 {
        chars[chars.len() - 4..].iter().collect()
    } else {
        format!("{segment:0>4}")
    }
}

fn normalize_mac(mac: &str) -> String {
    mac.replace(':', "").to_lowercase()
}

// A well-formed model and MAC give exactly 16 bytes; anything else is
// zero-padded or cut so derivation still completes.
fn fit_key(raw: &[u8]) -> [u8; KEY_LEN] {
    let mut key = [0u8; KEY_LEN];
    let len = raw.len().min(KEY_LEN);
    key[..len].copy_from_slice(&raw[..len]);
    key
}
