use crate::catalog::model::{Colorway, Garment, Size};
use crate::imaging::codec::EncodedImage;
use crate::render::backend::RenderRequest;

/// An outstanding composite, handed out by `TryOnSession::begin_try_on`.
///
/// The job owns copies of its inputs, so it can be rendered off the session (another thread,
/// a remote backend) and reported back with `complete_try_on` or `fail_try_on`.
#[derive(Clone, Debug)]
pub struct TryOnJob {
    pub(crate) id: u64,
    photo: EncodedImage,
    garment: Garment,
    colorway: Colorway,
    size: Size,
}

impl TryOnJob {
    pub(crate) fn new(
        id: u64,
        photo: EncodedImage,
        garment: Garment,
        colorway: Colorway,
        size: Size,
    ) -> Self {
        Self {
            id,
            photo,
            garment,
            colorway,
            size,
        }
    }

    /// Session-unique job number.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Id of the garment being tried on.
    pub fn garment_id(&self) -> &str {
        &self.garment.id
    }

    /// Renderer input.
    pub fn request(&self) -> RenderRequest<'_> {
        RenderRequest {
            photo: &self.photo,
            garment: &self.garment,
            colorway: &self.colorway,
            size: &self.size,
        }
    }
}
