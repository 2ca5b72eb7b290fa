use aes::Aes128;
use ecb::cipher::{block_padding::Pkcs7, BlockDecryptMut, BlockEncryptMut, KeyInit};

use crate::error::{CryptoError, Result};

pub(crate) const KEY_LEN: usize = 16;

type Aes128EcbEnc = ecb::Encryptor<Aes128>;
type Aes128EcbDec = ecb::Decryptor<Aes128>;

pub(crate) fn encrypt_ecb(key: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
    let cipher = Aes128EcbEnc::new_from_slice(key).map_err(|_| invalid_length(key))?;
    Ok(cipher.encrypt_padded_vec_mut::<Pkcs7>(plaintext))
}

pub(crate) fn encrypt_ecb_with(key: &[u8; KEY_LEN], plaintext: &[u8]) -> Vec<u8> {
    Aes128EcbEnc::new(key.into()).encrypt_padded_vec_mut::<Pkcs7>(plaintext)
}

pub(crate) fn decrypt_ecb(key: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
    let cipher = Aes128EcbDec::new_from_slice(key).map_err(|_| invalid_length(key))?;
    cipher
        .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(|_| {
            CryptoError::Decrypt(format!(
                "invalid PKCS#7 padding over {} ciphertext bytes",
                ciphertext.len()
            ))
        })
}

fn invalid_length(key: &[u8]) -> CryptoError {
    CryptoError::KeyDerivation(format!(
        "expected a {KEY_LEN}-byte key, got {} bytes",
        key.len()
    ))
}
