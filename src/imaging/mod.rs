//! Pixel helpers: blending, codecs, placeholder rasterization.

pub(crate) mod blend;
pub(crate) mod codec;
pub(crate) mod placeholder;
