//! Promotion Codes
//!
//! A promotion code is the AES-256-GCM sealed JSON form of a
//! [`PromotionPayload`], encrypted under the issuing restaurant's key and
//! rendered as unpadded base64url so it can travel in QR codes and links.

mod codec;
mod errors;
pub mod payload;
pub mod sealing;

pub(crate) use codec::PgPromotionCodec;
pub use errors::CodeError;
pub use payload::{IssuanceUuid, PromotionPayload};
