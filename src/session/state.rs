use crate::capture::camera::CameraStream;
use crate::imaging::codec::EncodedImage;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
/// Payload-free discriminant of [`Step`].
pub enum StepKind {
    /// Live camera, waiting for a photo.
    Capture,
    /// Photo taken, editing body measurements.
    Measurements,
    /// Picking a garment, colorway and size.
    Selection,
    /// Showing a composite.
    Result,
}

impl StepKind {
    /// Steps in wizard order.
    pub const ALL: [StepKind; 4] = [
        StepKind::Capture,
        StepKind::Measurements,
        StepKind::Selection,
        StepKind::Result,
    ];

    /// One-based position for "step N of 4" indicators.
    pub fn position(self) -> usize {
        match self {
            StepKind::Capture => 1,
            StepKind::Measurements => 2,
            StepKind::Selection => 3,
            StepKind::Result => 4,
        }
    }

    /// Lower-case name.
    pub fn as_str(self) -> &'static str {
        match self {
            StepKind::Capture => "capture",
            StepKind::Measurements => "measurements",
            StepKind::Selection => "selection",
            StepKind::Result => "result",
        }
    }
}

impl std::fmt::Display for StepKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// Current wizard step together with the data that only exists in that step.
pub enum Step {
    /// The camera stream is owned here, so leaving the step is what releases it.
    /// `None` when acquisition failed.
    Capture {
        /// Open stream, if any.
        camera: Option<Box<dyn CameraStream>>,
    },
    /// Measurements entry.
    Measurements,
    /// Garment selection.
    Selection,
    /// Composite display.
    Result {
        /// The published composite.
        image: EncodedImage,
    },
}

impl Step {
    /// Discriminant.
    pub fn kind(&self) -> StepKind {
        match self {
            Step::Capture { .. } => StepKind::Capture,
            Step::Measurements => StepKind::Measurements,
            Step::Selection => StepKind::Selection,
            Step::Result { .. } => StepKind::Result,
        }
    }

    /// Stop the camera stream if this is a capture step holding one.
    pub(crate) fn release_camera(&mut self) {
        if let Step::Capture {
            camera: Some(stream),
        } = self
        {
            stream.stop();
        }
    }
}

impl std::fmt::Debug for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Step::Capture { camera } => f
                .debug_struct("Capture")
                .field("camera_live", &camera.as_ref().is_some_and(|c| c.is_live()))
                .finish(),
            Step::Measurements => f.write_str("Measurements"),
            Step::Selection => f.write_str("Selection"),
            Step::Result { image } => f.debug_struct("Result").field("image", image).finish(),
        }
    }
}
