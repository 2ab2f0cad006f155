use std::path::Path;

use anyhow::Context;

use crate::capture::camera::Facing;
use crate::capture::quality::{PoseScorer, RandomPoseScorer};
use crate::foundation::error::{DrapeError, DrapeResult};
use crate::imaging::codec::DEFAULT_JPEG_QUALITY;
use crate::render::overlay::OverlaySettings;

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Capture-stage settings.
pub struct CaptureSettings {
    /// Facing mode requested first; the alternate one is tried once on failure.
    pub preferred_facing: Facing,
    /// JPEG quality used when freezing the captured frame.
    pub photo_jpeg_quality: u8,
    /// Seed for the placeholder pose scorer; `None` seeds from OS entropy.
    pub scorer_seed: Option<u64>,
}

impl Default for CaptureSettings {
    fn default() -> Self {
        Self {
            preferred_facing: Facing::Environment,
            photo_jpeg_quality: DEFAULT_JPEG_QUALITY,
            scorer_seed: None,
        }
    }
}

impl CaptureSettings {
    /// Check that the photo quality is a valid JPEG quality.
    pub fn validate(&self) -> DrapeResult<()> {
        if !(1..=100).contains(&self.photo_jpeg_quality) {
            return Err(DrapeError::validation(
                "capture.photo_jpeg_quality must be in 1..=100",
            ));
        }
        Ok(())
    }

    /// Placeholder scorer honoring `scorer_seed`.
    pub fn build_scorer(&self) -> Box<dyn PoseScorer> {
        match self.scorer_seed {
            Some(seed) => Box::new(RandomPoseScorer::seeded(seed)),
            None => Box::new(RandomPoseScorer::from_entropy()),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Top-level configuration; every field has a default, so `{}` is a valid document.
pub struct DrapeConfig {
    /// Capture stage.
    pub capture: CaptureSettings,
    /// Placeholder compositor.
    pub overlay: OverlaySettings,
}

impl DrapeConfig {
    /// Parse and validate a JSON document. The top level must be an object.
    pub fn from_json_str(json: &str) -> DrapeResult<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        if !value.is_object() {
            return Err(DrapeError::serde("config document must be a JSON object"));
        }
        let cfg: DrapeConfig = serde_json::from_value(value)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read, parse and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> DrapeResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        Self::from_json_str(&json)
    }

    /// Check ranges across all sections.
    pub fn validate(&self) -> DrapeResult<()> {
        self.capture.validate()?;
        self.overlay.validate()
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
