use image::RgbaImage;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Warning emitted when the pose check fails.
pub const POSE_WARNING: &str = "Please stand with arms slightly away from body";
/// Warning emitted when the lighting check fails.
pub const LIGHTING_WARNING: &str = "Better lighting will improve results";
/// Warning emitted when the face check fails.
pub const FACE_WARNING: &str = "Face should be clearly visible";
/// Warning emitted when the torso check fails.
pub const TORSO_WARNING: &str = "Torso should be unobstructed";

/// Suitability assessment of one captured photo.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoseQualityCheck {
    /// Arms held away from the body.
    pub is_good_pose: bool,
    /// Scene is lit well enough.
    pub is_good_lighting: bool,
    /// Face is in frame.
    pub is_face_visible: bool,
    /// Torso is unobstructed.
    pub is_torso_visible: bool,
    /// One entry per failed flag, in pose/lighting/face/torso order.
    pub warnings: Vec<String>,
    /// Overall score, 0 to 100.
    pub score: u8,
}

impl PoseQualityCheck {
    /// Build a check from its four flags; warnings are derived, score is clamped to 100.
    pub fn from_flags(pose: bool, lighting: bool, face: bool, torso: bool, score: u8) -> Self {
        let warnings = [
            (pose, POSE_WARNING),
            (lighting, LIGHTING_WARNING),
            (face, FACE_WARNING),
            (torso, TORSO_WARNING),
        ]
        .into_iter()
        .filter(|(ok, _)| !ok)
        .map(|(_, w)| w.to_owned())
        .collect();

        Self {
            is_good_pose: pose,
            is_good_lighting: lighting,
            is_face_visible: face,
            is_torso_visible: torso,
            warnings,
            score: score.min(100),
        }
    }

    /// Number of flags that are `false`.
    pub fn failed_checks(&self) -> usize {
        [
            self.is_good_pose,
            self.is_good_lighting,
            self.is_face_visible,
            self.is_torso_visible,
        ]
        .into_iter()
        .filter(|ok| !ok)
        .count()
    }

    /// `true` when every flag passed.
    pub fn all_passed(&self) -> bool {
        self.failed_checks() == 0
    }
}

/// Assesses a captured frame. Implementations may be models or mocks.
pub trait PoseScorer {
    /// Score one frame.
    fn evaluate(&mut self, frame: &RgbaImage) -> PoseQualityCheck;
}

/// Placeholder scorer: four independent uniform draws against fixed thresholds plus a
/// uniform integer score in `60..100`. The frame is ignored.
#[derive(Debug, Clone)]
pub struct RandomPoseScorer {
    rng: StdRng,
}

impl RandomPoseScorer {
    /// Draw a pose as good above this value.
    pub const POSE_THRESHOLD: f64 = 0.3;
    /// Draw lighting as good above this value.
    pub const LIGHTING_THRESHOLD: f64 = 0.2;
    /// Draw the face as visible above this value.
    pub const FACE_THRESHOLD: f64 = 0.1;
    /// Draw the torso as visible above this value.
    pub const TORSO_THRESHOLD: f64 = 0.1;

    /// Scorer seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible scorer.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl PoseScorer for RandomPoseScorer {
    fn evaluate(&mut self, _frame: &RgbaImage) -> PoseQualityCheck {
        let pose = self.rng.random::<f64>() > Self::POSE_THRESHOLD;
        let lighting = self.rng.random::<f64>() > Self::LIGHTING_THRESHOLD;
        let face = self.rng.random::<f64>() > Self::FACE_THRESHOLD;
        let torso = self.rng.random::<f64>() > Self::TORSO_THRESHOLD;
        let score = self.rng.random_range(60u8..100);
        PoseQualityCheck::from_flags(pose, lighting, face, torso, score)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/capture/quality.rs"]
mod tests;
