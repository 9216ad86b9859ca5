//! Violation records and the aggregated result of a validation pass.

pub(crate) mod path;
pub(crate) mod summary;
pub(crate) mod violation;
