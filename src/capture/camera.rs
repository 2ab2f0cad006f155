use std::path::Path;
use std::sync::{Arc, Mutex, PoisonError};

use image::RgbaImage;

use crate::foundation::error::{DrapeError, DrapeResult};
use crate::imaging::codec::decode_image;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
/// Which way the requested camera faces.
pub enum Facing {
    /// Rear camera, pointing away from the user.
    Environment,
    /// Front camera, pointing at the user.
    User,
}

impl Facing {
    /// The other facing mode.
    pub fn alternate(self) -> Self {
        match self {
            Facing::Environment => Facing::User,
            Facing::User => Facing::Environment,
        }
    }
}

/// A live camera feed. Dropping a stream must release it.
pub trait CameraStream {
    /// Facing mode the stream was opened with.
    fn facing(&self) -> Facing;

    /// Grab the current frame as straight-alpha RGBA8.
    fn snapshot(&mut self) -> DrapeResult<RgbaImage>;

    /// Stop all tracks. Idempotent.
    fn stop(&mut self);

    /// `false` once stopped.
    fn is_live(&self) -> bool;
}

/// A device that can open camera streams.
pub trait CameraSource {
    /// Request a stream with the given facing mode.
    fn open(&mut self, facing: Facing) -> DrapeResult<Box<dyn CameraStream>>;
}

/// Open `preferred`, retrying exactly once with the alternate facing mode.
#[tracing::instrument(skip(source))]
pub fn acquire_with_fallback(
    source: &mut dyn CameraSource,
    preferred: Facing,
) -> DrapeResult<Box<dyn CameraStream>> {
    let first = match source.open(preferred) {
        Ok(stream) => return Ok(stream),
        Err(err) => err,
    };
    let fallback = preferred.alternate();
    tracing::warn!(error = %first, ?fallback, "camera unavailable, retrying with fallback facing");

    source.open(fallback).map_err(|second| {
        DrapeError::camera(format!(
            "no camera available ({preferred:?}: {first}; {fallback:?}: {second})"
        ))
    })
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// Open/stop counters shared by a built-in source and its streams.
pub struct CameraStats {
    /// Successful `open` calls.
    pub opened: usize,
    /// Failed `open` calls.
    pub failed: usize,
    /// Streams stopped (explicitly or on drop).
    pub stopped: usize,
}

impl CameraStats {
    /// Streams opened and not yet stopped.
    pub fn live(&self) -> usize {
        self.opened.saturating_sub(self.stopped)
    }
}

type SharedStats = Arc<Mutex<CameraStats>>;

fn bump(stats: &SharedStats, f: impl FnOnce(&mut CameraStats)) {
    let mut guard = stats.lock().unwrap_or_else(PoisonError::into_inner);
    f(&mut guard);
}

/// Generates a deterministic gradient frame; can be told that some facing modes are missing.
#[derive(Debug, Clone)]
pub struct SyntheticCamera {
    width: u32,
    height: u32,
    unavailable: Vec<Facing>,
    stats: SharedStats,
}

impl SyntheticCamera {
    /// Camera producing `width x height` frames for every facing mode.
    pub fn new(width: u32, height: u32) -> DrapeResult<Self> {
        if width == 0 || height == 0 {
            return Err(DrapeError::validation("camera frame size must be > 0"));
        }
        Ok(Self {
            width,
            height,
            unavailable: Vec::new(),
            stats: SharedStats::default(),
        })
    }

    /// Make `open(facing)` fail.
    pub fn without(mut self, facing: Facing) -> Self {
        if !self.unavailable.contains(&facing) {
            self.unavailable.push(facing);
        }
        self
    }

    /// Snapshot of the open/stop counters.
    pub fn stats(&self) -> CameraStats {
        *self.stats.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Handle that keeps observing counters after the camera is moved into a session.
    pub fn stats_handle(&self) -> CameraStatsHandle {
        CameraStatsHandle(Arc::clone(&self.stats))
    }

    fn frame(&self) -> RgbaImage {
        let (w, h) = (self.width, self.height);
        RgbaImage::from_fn(w, h, |x, y| {
            image::Rgba([
                (x * 255 / w.max(1)) as u8,
                (y * 255 / h.max(1)) as u8,
                128,
                255,
            ])
        })
    }
}

/// Read-only view of a built-in camera's counters.
#[derive(Debug, Clone)]
pub struct CameraStatsHandle(SharedStats);

impl CameraStatsHandle {
    /// Current counters.
    pub fn get(&self) -> CameraStats {
        *self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl CameraSource for SyntheticCamera {
    fn open(&mut self, facing: Facing) -> DrapeResult<Box<dyn CameraStream>> {
        if self.unavailable.contains(&facing) {
            bump(&self.stats, |s| s.failed += 1);
            return Err(DrapeError::camera(format!("{facing:?} camera not found")));
        }
        bump(&self.stats, |s| s.opened += 1);
        Ok(Box::new(FrameStream {
            facing,
            frame: Arc::new(self.frame()),
            live: true,
            stats: Arc::clone(&self.stats),
        }))
    }
}

/// Serves one fixed image as the live feed, e.g. a photo loaded from disk.
#[derive(Debug, Clone)]
pub struct StillImageCamera {
    frame: Arc<RgbaImage>,
    stats: SharedStats,
}

impl StillImageCamera {
    /// Serve `frame` for every facing mode.
    pub fn new(frame: RgbaImage) -> Self {
        Self {
            frame: Arc::new(frame),
            stats: SharedStats::default(),
        }
    }

    /// Decode an image file and serve it.
    pub fn open_path(path: impl AsRef<Path>) -> DrapeResult<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)
            .map_err(|e| DrapeError::camera(format!("read '{}': {e}", path.display())))?;
        Ok(Self::new(decode_image(&bytes)?))
    }

    /// Snapshot of the open/stop counters.
    pub fn stats(&self) -> CameraStats {
        *self.stats.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl CameraSource for StillImageCamera {
    fn open(&mut self, facing: Facing) -> DrapeResult<Box<dyn CameraStream>> {
        bump(&self.stats, |s| s.opened += 1);
        Ok(Box::new(FrameStream {
            facing,
            frame: Arc::clone(&self.frame),
            live: true,
            stats: Arc::clone(&self.stats),
        }))
    }
}

struct FrameStream {
    facing: Facing,
    frame: Arc<RgbaImage>,
    live: bool,
    stats: SharedStats,
}

impl CameraStream for FrameStream {
    fn facing(&self) -> Facing {
        self.facing
    }

    fn snapshot(&mut self) -> DrapeResult<RgbaImage> {
        if !self.live {
            return Err(DrapeError::camera("snapshot on a stopped stream"));
        }
        Ok(self.frame.as_ref().clone())
    }

    fn stop(&mut self) {
        if self.live {
            self.live = false;
            bump(&self.stats, |s| s.stopped += 1);
        }
    }

    fn is_live(&self) -> bool {
        self.live
    }
}

impl Drop for FrameStream {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/capture/camera.rs"]
mod tests;
