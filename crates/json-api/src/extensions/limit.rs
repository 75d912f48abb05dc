//! Page size query parsing helpers.

use salvo::{oapi::extract::QueryParam, prelude::StatusError};

pub(crate) trait LimitExt {
    /// Missing means `default`; anything above `max` is clamped to it.
    fn into_limit(self, default: u32, max: u32) -> Result<u32, StatusError>;
}

impl LimitExt for QueryParam<u32, false> {
    fn into_limit(self, default: u32, max: u32) -> Result<u32, StatusError> {
        page_size(self.into_inner(), default, max)
    }
}

fn page_size(limit: Option<u32>, default: u32, max: u32) -> Result<u32, StatusError> {
    match limit {
        None => Ok(default),
        Some(0) => Err(StatusError::bad_request().brief("\"limit\" must be at least 1")),
        Some(limit) => Ok(limit.min(max)),
    }
}
