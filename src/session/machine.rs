use std::sync::Arc;

use crate::capture::camera::{CameraSource, acquire_with_fallback};
use crate::capture::quality::{PoseQualityCheck, PoseScorer};
use crate::catalog::model::{Catalog, Colorway, Garment, Size};
use crate::config::{CaptureSettings, DrapeConfig};
use crate::foundation::error::{DrapeError, DrapeResult};
use crate::imaging::codec::{EncodedImage, encode_jpeg};
use crate::render::backend::TryOnRenderer;
use crate::session::job::TryOnJob;
use crate::session::measurements::UserMeasurements;
use crate::session::state::{Step, StepKind};
use crate::views::history::TryOnHistory;
use crate::views::wishlist::Wishlist;

#[derive(Clone, Debug, PartialEq)]
struct Selection {
    garment_id: String,
    colorway_id: Option<String>,
    size: Option<Size>,
}

/// One user's pass through capture, measurements, selection and result.
///
/// All mutation goes through `&mut self`, so a session is driven by exactly one caller. The
/// only asynchronous piece, compositing, is split into [`TryOnSession::begin_try_on`] and
/// [`TryOnSession::complete_try_on`]; at most one job is outstanding at a time.
pub struct TryOnSession {
    catalog: Arc<Catalog>,
    camera_source: Box<dyn CameraSource>,
    scorer: Box<dyn PoseScorer>,
    settings: CaptureSettings,

    step: Step,
    camera_error: Option<DrapeError>,
    privacy_notice_visible: bool,
    photo: Option<EncodedImage>,
    quality: Option<PoseQualityCheck>,
    measurements: UserMeasurements,
    selection: Option<Selection>,
    in_flight: Option<u64>,
    next_job_id: u64,

    wishlist: Wishlist,
    history: TryOnHistory,
}

impl TryOnSession {
    /// Start a session in the capture step and open the camera.
    ///
    /// Fails with a `Validation` error when `settings` are out of range; no camera is opened then.
    pub fn new(
        catalog: Arc<Catalog>,
        camera_source: Box<dyn CameraSource>,
        scorer: Box<dyn PoseScorer>,
        settings: CaptureSettings,
    ) -> DrapeResult<Self> {
        settings.validate()?;
        let mut session = Self {
            catalog,
            camera_source,
            scorer,
            settings,
            step: Step::Capture { camera: None },
            camera_error: None,
            privacy_notice_visible: true,
            photo: None,
            quality: None,
            measurements: UserMeasurements::default(),
            selection: None,
            in_flight: None,
            next_job_id: 1,
            wishlist: Wishlist::new(),
            history: TryOnHistory::new(),
        };
        session.acquire_camera();
        Ok(session)
    }

    /// Like [`TryOnSession::new`], with the scorer built from `config.capture`.
    pub fn from_config(
        catalog: Arc<Catalog>,
        camera_source: Box<dyn CameraSource>,
        config: &DrapeConfig,
    ) -> DrapeResult<Self> {
        let scorer = config.capture.build_scorer();
        Self::new(catalog, camera_source, scorer, config.capture.clone())
    }

    /// Catalog the session selects from.
    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// Current step with its payload.
    pub fn step(&self) -> &Step {
        &self.step
    }

    /// Current step discriminant.
    pub fn kind(&self) -> StepKind {
        self.step.kind()
    }

    /// Why the last camera acquisition failed, if it did.
    pub fn camera_error(&self) -> Option<&DrapeError> {
        self.camera_error.as_ref()
    }

    /// `true` while the capture step holds a live stream.
    pub fn camera_live(&self) -> bool {
        matches!(&self.step, Step::Capture { camera: Some(c) } if c.is_live())
    }

    /// Try to open the camera again after a failure. Returns whether a stream is now live.
    pub fn retry_camera(&mut self) -> DrapeResult<bool> {
        self.require(StepKind::Capture, "retry camera")?;
        if !self.camera_live() {
            self.acquire_camera();
        }
        Ok(self.camera_live())
    }

    /// Whether the privacy notice is still shown.
    pub fn privacy_notice_visible(&self) -> bool {
        self.privacy_notice_visible
    }

    /// Hide the privacy notice for the rest of the session.
    pub fn dismiss_privacy_notice(&mut self) {
        self.privacy_notice_visible = false;
    }

    /// Freeze the current frame, release the camera and score the photo.
    #[tracing::instrument(skip(self))]
    pub fn capture_photo(&mut self) -> DrapeResult<PoseQualityCheck> {
        self.require(StepKind::Capture, "capture photo")?;
        let Step::Capture { camera } = &mut self.step else {
            return Err(DrapeError::session("capture photo requires the capture step"));
        };
        let stream = camera
            .as_mut()
            .ok_or_else(|| DrapeError::camera("no camera stream to capture from"))?;
        let frame = stream.snapshot()?;
        // Stop only after encoding; a failed encode leaves the stream live.
        let photo = encode_jpeg(&frame, self.settings.photo_jpeg_quality)?;
        stream.stop();

        let check = self.scorer.evaluate(&frame);
        tracing::info!(
            width = frame.width(),
            height = frame.height(),
            score = check.score,
            warnings = check.warnings.len(),
            "photo captured"
        );

        self.photo = Some(photo);
        self.quality = Some(check.clone());
        self.transition(Step::Measurements);
        Ok(check)
    }

    /// From measurements back to the camera. Measurements and the previous photo are kept.
    pub fn back_to_capture(&mut self) -> DrapeResult<()> {
        self.require(StepKind::Measurements, "go back to capture")?;
        self.transition(Step::Capture { camera: None });
        self.acquire_camera();
        Ok(())
    }

    /// From measurements to garment selection. Values are never validated here.
    pub fn continue_to_selection(&mut self) -> DrapeResult<()> {
        self.require(StepKind::Measurements, "continue to selection")?;
        self.transition(Step::Selection);
        Ok(())
    }

    /// From selection back to measurements. The selection is kept.
    pub fn back_to_measurements(&mut self) -> DrapeResult<()> {
        self.require(StepKind::Selection, "go back to measurements")?;
        self.require_idle("go back to measurements")?;
        self.transition(Step::Measurements);
        Ok(())
    }

    /// Current measurements.
    pub fn measurements(&self) -> &UserMeasurements {
        &self.measurements
    }

    /// Mutable access to the measurements, allowed in any step.
    pub fn measurements_mut(&mut self) -> &mut UserMeasurements {
        &mut self.measurements
    }

    /// Replace the measurements.
    pub fn set_measurements(&mut self, measurements: UserMeasurements) {
        self.measurements = measurements;
    }

    /// Pick a garment; colorway and size are reset to the garment's defaults.
    pub fn select_garment(&mut self, garment_id: &str) -> DrapeResult<()> {
        self.require_selecting("select a garment")?;
        let garment = self
            .catalog
            .by_id(garment_id)
            .ok_or_else(|| DrapeError::catalog(format!("unknown garment '{garment_id}'")))?;
        let selection = Selection {
            garment_id: garment.id.clone(),
            colorway_id: garment.default_colorway().map(|c| c.id.clone()),
            size: garment.default_size().copied(),
        };
        tracing::debug!(
            garment = %selection.garment_id,
            colorway = ?selection.colorway_id,
            "garment selected"
        );
        self.selection = Some(selection);
        Ok(())
    }

    /// Pick a colorway of the selected garment.
    pub fn select_colorway(&mut self, colorway_id: &str) -> DrapeResult<()> {
        self.require_selecting("select a colorway")?;
        let garment = self.require_garment()?;
        let id = garment
            .colorway(colorway_id)
            .map(|c| c.id.clone())
            .ok_or_else(|| {
                DrapeError::validation(format!(
                    "colorway '{colorway_id}' does not belong to garment '{}'",
                    garment.id
                ))
            })?;
        if let Some(selection) = self.selection.as_mut() {
            selection.colorway_id = Some(id);
        }
        Ok(())
    }

    /// Pick a size of the selected garment by chart label (`S`, `M`, ...).
    pub fn select_size(&mut self, label: &str) -> DrapeResult<()> {
        self.require_selecting("select a size")?;
        let garment = self.require_garment()?;
        let size = garment.size_for_label(label).copied().ok_or_else(|| {
            DrapeError::validation(format!(
                "garment '{}' has no size '{label}'",
                garment.id
            ))
        })?;
        self.set_selected_size(size);
        Ok(())
    }

    /// Pick an entry of the selected garment's `sizes` list by index.
    pub fn select_size_variant(&mut self, index: usize) -> DrapeResult<()> {
        self.require_selecting("select a size")?;
        let garment = self.require_garment()?;
        let size = garment.sizes.get(index).copied().ok_or_else(|| {
            DrapeError::validation(format!(
                "garment '{}' has {} sizes, index {index} is out of range",
                garment.id,
                garment.sizes.len()
            ))
        })?;
        self.set_selected_size(size);
        Ok(())
    }

    /// Selected garment.
    pub fn selected_garment(&self) -> Option<&Garment> {
        self.selection
            .as_ref()
            .and_then(|s| self.catalog.by_id(&s.garment_id))
    }

    /// Selected colorway; always one of the selected garment's colorways.
    pub fn selected_colorway(&self) -> Option<&Colorway> {
        let selection = self.selection.as_ref()?;
        let garment = self.catalog.by_id(&selection.garment_id)?;
        garment.colorway(selection.colorway_id.as_deref()?)
    }

    /// Selected size.
    pub fn selected_size(&self) -> Option<&Size> {
        self.selection.as_ref()?.size.as_ref()
    }

    /// `true` while a composite is outstanding.
    pub fn is_generating(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Whether "try it on" is enabled: colorway and size chosen and nothing in flight.
    pub fn can_try_on(&self) -> bool {
        self.selected_colorway().is_some() && self.selected_size().is_some() && !self.is_generating()
    }

    /// Start a composite.
    ///
    /// Returns `None` without touching any state when a photo, garment, colorway or size is
    /// missing, when the session is not in selection or result, or when a job is already out.
    pub fn begin_try_on(&mut self) -> Option<TryOnJob> {
        if !matches!(self.kind(), StepKind::Selection | StepKind::Result) || !self.can_try_on() {
            tracing::debug!(step = %self.kind(), "try-on skipped, preconditions not met");
            return None;
        }
        let photo = self.photo.clone()?;
        let garment = self.selected_garment()?.clone();
        let colorway = self.selected_colorway()?.clone();
        let size = *self.selected_size()?;

        let id = self.next_job_id;
        self.next_job_id += 1;
        self.in_flight = Some(id);
        tracing::debug!(job = id, garment = %garment.id, colorway = %colorway.id, "try-on started");
        Some(TryOnJob::new(id, photo, garment, colorway, size))
    }

    /// Publish the composite of `job`, enter the result step and record the garment in history.
    ///
    /// Fails if `job` is not the outstanding one, e.g. after a reset.
    pub fn complete_try_on(&mut self, job: TryOnJob, image: EncodedImage) -> DrapeResult<()> {
        self.take_in_flight(&job)?;
        self.history.record(job.garment_id());
        tracing::info!(
            job = job.id,
            garment = %job.garment_id(),
            bytes = image.bytes.len(),
            history = self.history.len(),
            "try-on complete"
        );
        self.transition(Step::Result { image });
        Ok(())
    }

    /// Drop `job` after a renderer failure. The step is left as it was: Selection, or Result
    /// still showing the previous image. The selection is kept.
    pub fn fail_try_on(&mut self, job: TryOnJob, error: &DrapeError) -> DrapeResult<()> {
        self.take_in_flight(&job)?;
        tracing::warn!(job = job.id, garment = %job.garment_id(), %error, "try-on failed");
        Ok(())
    }

    /// Run both compositing phases with `renderer`. Returns `false` for a skipped call.
    #[tracing::instrument(skip_all)]
    pub fn generate_try_on(&mut self, renderer: &dyn TryOnRenderer) -> DrapeResult<bool> {
        let Some(job) = self.begin_try_on() else {
            return Ok(false);
        };
        let rendered = renderer.render(&job.request());
        match rendered {
            Ok(image) => {
                self.complete_try_on(job, image)?;
                Ok(true)
            }
            Err(err) => {
                self.fail_try_on(job, &err)?;
                Err(err)
            }
        }
    }

    /// Composite shown in the result step.
    pub fn result_image(&self) -> Option<&EncodedImage> {
        match &self.step {
            Step::Result { image } => Some(image),
            _ => None,
        }
    }

    /// Captured photo.
    pub fn photo(&self) -> Option<&EncodedImage> {
        self.photo.as_ref()
    }

    /// Quality check of the captured photo.
    pub fn quality(&self) -> Option<&PoseQualityCheck> {
        self.quality.as_ref()
    }

    /// Start over from the camera. Photo, quality check, selection, result and measurements
    /// are cleared; the wishlist and history are kept. An outstanding job becomes stale.
    pub fn reset(&mut self) {
        if let Some(job) = self.in_flight.take() {
            tracing::debug!(job, "discarding outstanding try-on");
        }
        self.transition(Step::Capture { camera: None });
        self.photo = None;
        self.quality = None;
        self.selection = None;
        self.measurements = UserMeasurements::default();
        self.acquire_camera();
    }

    /// Wishlisted garment ids.
    pub fn wishlist(&self) -> &Wishlist {
        &self.wishlist
    }

    /// Add or remove a catalog garment. Returns membership after the call.
    pub fn toggle_wishlist(&mut self, garment_id: &str) -> DrapeResult<bool> {
        if self.catalog.by_id(garment_id).is_none() {
            return Err(DrapeError::catalog(format!("unknown garment '{garment_id}'")));
        }
        Ok(self.wishlist.toggle(garment_id))
    }

    /// Completed try-ons, oldest first.
    pub fn history(&self) -> &TryOnHistory {
        &self.history
    }

    fn acquire_camera(&mut self) {
        let Step::Capture { camera } = &mut self.step else {
            return;
        };
        if let Some(mut old) = camera.take() {
            old.stop();
        }
        match acquire_with_fallback(self.camera_source.as_mut(), self.settings.preferred_facing) {
            Ok(stream) => {
                tracing::debug!(facing = ?stream.facing(), "camera acquired");
                *camera = Some(stream);
                self.camera_error = None;
            }
            Err(err) => {
                tracing::warn!(error = %err, "camera unavailable");
                self.camera_error = Some(err);
            }
        }
    }

    fn transition(&mut self, next: Step) {
        let from = self.kind();
        let mut prev = std::mem::replace(&mut self.step, next);
        prev.release_camera();
        tracing::debug!(%from, to = %self.kind(), "step change");
    }

    fn require(&self, kind: StepKind, action: &str) -> DrapeResult<()> {
        if self.kind() == kind {
            Ok(())
        } else {
            Err(DrapeError::session(format!(
                "cannot {action} in the {} step",
                self.kind()
            )))
        }
    }

    fn require_idle(&self, action: &str) -> DrapeResult<()> {
        if self.is_generating() {
            return Err(DrapeError::session(format!(
                "cannot {action} while a try-on is in progress"
            )));
        }
        Ok(())
    }

    fn require_selecting(&self, action: &str) -> DrapeResult<()> {
        self.require(StepKind::Selection, action)?;
        self.require_idle(action)
    }

    fn require_garment(&self) -> DrapeResult<&Garment> {
        self.selected_garment()
            .ok_or_else(|| DrapeError::session("no garment selected"))
    }

    fn set_selected_size(&mut self, size: Size) {
        if let Some(selection) = self.selection.as_mut() {
            selection.size = Some(size);
        }
    }

    fn take_in_flight(&mut self, job: &TryOnJob) -> DrapeResult<()> {
        if self.in_flight != Some(job.id) {
            return Err(DrapeError::session(format!(
                "try-on job {} is not the outstanding job",
                job.id
            )));
        }
        self.in_flight = None;
        Ok(())
    }
}

impl std::fmt::Debug for TryOnSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TryOnSession")
            .field("step", &self.step)
            .field("camera_error", &self.camera_error)
            .field("photo", &self.photo)
            .field("selection", &self.selection)
            .field("in_flight", &self.in_flight)
            .field("wishlist", &self.wishlist)
            .field("history", &self.history)
            .finish_non_exhaustive()
    }
}

impl Drop for TryOnSession {
    fn drop(&mut self) {
        self.step.release_camera();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/machine.rs"]
mod tests;
