//! Authenticated sealing of promotion payloads.
//!
//! Wire format: `base64url_nopad(nonce[12] || ciphertext || tag[16])`, with no
//! associated data.

use aes_gcm::{
    Aes256Gcm, Nonce,
    aead::{Aead, AeadCore, KeyInit, OsRng},
};
use base64::{
    Engine as _, alphabet,
    engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
};
use zeroize::Zeroizing;

use crate::domain::{
    codes::{CodeError, PromotionPayload},
    restaurants::keys::RestaurantKey,
};

/// AES-GCM nonce length in bytes (96 bits).
pub const NONCE_BYTES: usize = 12;

/// Emits unpadded base64url; accepts padded input so codes minted by older
/// padded encoders still open.
const CODE_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Encrypt `payload` under `key` with a freshly generated nonce.
///
/// # Errors
///
/// Returns an error if the payload cannot be serialized or encryption fails.
pub fn seal(key: &RestaurantKey, payload: &PromotionPayload) -> Result<String, CodeError> {
    let cipher = Aes256Gcm::new(key.as_bytes().into());

    let plaintext = Zeroizing::new(serde_json::to_vec(payload).map_err(CodeError::Serialize)?);

    let nonce = Aes256Gcm::generate_nonce(&mut OsRng);

    let ciphertext = cipher
        .encrypt(&nonce, plaintext.as_slice())
        .map_err(|_aead_error| CodeError::Encryption)?;

    let mut sealed = Vec::with_capacity(NONCE_BYTES + ciphertext.len());

    sealed.extend_from_slice(nonce.as_slice());
    sealed.extend_from_slice(&ciphertext);

    Ok(CODE_ENGINE.encode(sealed))
}

/// Decrypt and authenticate `code` under `key`.
///
/// # Errors
///
/// Returns [`CodeError::Decode`] for malformed or truncated input and
/// [`CodeError::Authentication`] when the tag does not verify (wrong key or
/// tampered code).
pub fn open(key: &RestaurantKey, code: &str) -> Result<PromotionPayload, CodeError> {
    let sealed = CODE_ENGINE
        .decode(code)
        .map_err(|_decode_error| CodeError::Decode)?;

    let (nonce, ciphertext) = sealed
        .split_at_checked(NONCE_BYTES)
        .ok_or(CodeError::Decode)?;

    let cipher = Aes256Gcm::new(key.as_bytes().into());

    let plaintext = Zeroizing::new(
        cipher
            .decrypt(Nonce::from_slice(nonce), ciphertext)
            .map_err(|_aead_error| CodeError::Authentication)?,
    );

    serde_json::from_slice(&plaintext).map_err(|_json_error| CodeError::Decode)
}
