//! Review Handlers

pub(crate) mod create;
pub(crate) mod recent;
