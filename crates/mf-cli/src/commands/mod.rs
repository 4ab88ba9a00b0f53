//! CLI command implementations

pub(crate) mod common;
pub(crate) mod fix;
