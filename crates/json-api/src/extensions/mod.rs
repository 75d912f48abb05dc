//! Extension traits

mod depot;
mod limit;

pub(crate) use depot::DepotExt as _;
pub(crate) use limit::LimitExt as _;
