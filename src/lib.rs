//! drape is a virtual garment try-on engine.
//!
//! It models one shopper's pass through a four-step wizard over a read-only garment catalog:
//!
//! 1. **Capture**: open a camera (rear first, front as fallback), freeze a frame, and score it
//!    with a [`PoseScorer`].
//! 2. **Measurements**: edit [`UserMeasurements`]; the values are advisory and never block.
//! 3. **Selection**: pick a [`Garment`], then one of its colorways and sizes.
//! 4. **Result**: a [`TryOnRenderer`] turns photo plus selection into a composite image.
//!
//! Around the session sit catalog-derived list views: [`ClosetQuery`] for filtering and
//! sorting, [`SwipeDeck`], [`Wishlist`] and [`TryOnHistory`].
//!
//! The built-in scorer ([`RandomPoseScorer`]) and compositor ([`OverlayRenderer`]) are
//! placeholders. They keep the shape of the contracts (four flags plus ordered warnings; an
//! 800x1000 JPEG with the garment color drawn over the photo) so real models can be swapped in.
//!
//! Constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Single owner**: a [`TryOnSession`] is driven through `&mut self`; compositing is a
//!   two-phase job so at most one composite is ever outstanding.
//! - **Scoped camera**: streams are stopped whenever the session leaves the capture step,
//!   resets, or is dropped.
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(missing_docs_in_private_items)]

mod capture;
mod catalog;
mod foundation;
mod imaging;
mod render;
mod session;
mod views;

/// JSON configuration for capture and compositing.
pub mod config;

pub use capture::camera::{
    CameraSource, CameraStats, CameraStatsHandle, CameraStream, Facing, StillImageCamera,
    SyntheticCamera, acquire_with_fallback,
};
pub use capture::quality::{
    FACE_WARNING, LIGHTING_WARNING, POSE_WARNING, PoseQualityCheck, PoseScorer, RandomPoseScorer,
    TORSO_WARNING,
};
pub use catalog::model::{
    Catalog, Category, Colorway, Fit, Garment, Landmarks, STANDARD_SIZE_LABELS, Size, Thickness,
    UsageRights,
};
pub use config::{CaptureSettings, DrapeConfig};
pub use foundation::core::{Canvas, HexColor, Point, Rect, Rgba8Premul};
pub use foundation::error::{DrapeError, DrapeResult};
pub use imaging::blend::{
    PremulRgba8, fill_rect_over, over, premultiply_in_place, unpremultiply_in_place,
};
pub use imaging::codec::{DEFAULT_JPEG_QUALITY, EncodedImage, JPEG_MIME, decode_image, encode_jpeg};
pub use imaging::placeholder::PlaceholderSpec;
pub use render::backend::{RenderRequest, TryOnRenderer};
pub use render::overlay::{OverlayRect, OverlayRenderer, OverlaySettings};
pub use session::job::TryOnJob;
pub use session::machine::TryOnSession;
pub use session::measurements::{
    Advisory, CHEST_RANGE, LENGTH_RANGE, MEASUREMENT_STEP, MeasurementField, SLEEVE_RANGE,
    UserMeasurements,
};
pub use session::state::{Step, StepKind};
pub use views::closet::{ClosetQuery, ClosetView, SortKey, sort_garments};
pub use views::history::{HistoryEntry, TryOnHistory};
pub use views::swipe::{SwipeAction, SwipeDeck};
pub use views::wishlist::Wishlist;
