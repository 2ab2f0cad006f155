//! Read-only garment catalog and its lookups.

pub(crate) mod model;
pub(crate) mod query;
