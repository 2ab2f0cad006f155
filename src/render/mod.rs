//! Compositing stage.

pub(crate) mod backend;
pub(crate) mod overlay;
