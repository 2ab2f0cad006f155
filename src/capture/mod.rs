//! Capture stage: camera acquisition and pose-quality scoring.

pub(crate) mod camera;
pub(crate) mod quality;
