use crate::catalog::model::{Colorway, Garment, Size};
use crate::foundation::error::DrapeResult;
use crate::imaging::codec::EncodedImage;

/// Everything a renderer needs for one try-on composite.
#[derive(Clone, Copy, Debug)]
pub struct RenderRequest<'a> {
    /// Captured photo.
    pub photo: &'a EncodedImage,
    /// Selected garment.
    pub garment: &'a Garment,
    /// Selected colorway of `garment`.
    pub colorway: &'a Colorway,
    /// Selected size of `garment`.
    pub size: &'a Size,
}

/// Produces a try-on image from a photo and a garment selection.
///
/// The session only relies on "eventually returns an image or an error"; any latency is the
/// implementation's business.
pub trait TryOnRenderer {
    /// Render one composite.
    fn render(&self, request: &RenderRequest<'_>) -> DrapeResult<EncodedImage>;
}

impl<R: TryOnRenderer + ?Sized> TryOnRenderer for Box<R> {
    fn render(&self, request: &RenderRequest<'_>) -> DrapeResult<EncodedImage> {
        (**self).render(request)
    }
}
