use std::time::{Duration, Instant};

use image::imageops::{self, FilterType};

use crate::foundation::core::{Canvas, Rect};
use crate::foundation::error::{DrapeError, DrapeResult};
use crate::imaging::blend::{fill_rect_over, premultiply_in_place, unpremultiply_in_place};
use crate::imaging::codec::{DEFAULT_JPEG_QUALITY, EncodedImage, encode_jpeg};
use crate::render::backend::{RenderRequest, TryOnRenderer};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Axis-aligned rectangle in canvas pixels.
pub struct OverlayRect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}

impl OverlayRect {
    /// Convert to a `kurbo` rect.
    pub fn to_rect(self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Parameters of the placeholder compositor.
pub struct OverlaySettings {
    /// Output size; the photo is stretched to fill it.
    pub canvas: Canvas,
    /// Garment stand-in rectangle.
    pub rect: OverlayRect,
    /// Fill opacity of the rectangle.
    pub opacity: f32,
    /// JPEG quality of the composite, 1 to 100.
    pub jpeg_quality: u8,
    /// Simulated processing latency.
    pub delay_ms: u64,
}

impl Default for OverlaySettings {
    fn default() -> Self {
        Self {
            canvas: Canvas {
                width: 800,
                height: 1000,
            },
            rect: OverlayRect {
                x: 200.0,
                y: 150.0,
                width: 400.0,
                height: 600.0,
            },
            opacity: 0.8,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
            delay_ms: 2000,
        }
    }
}

impl OverlaySettings {
    /// Check ranges.
    pub fn validate(&self) -> DrapeResult<()> {
        Canvas::new(self.canvas.width, self.canvas.height)?;
        let r = self.rect;
        if [r.x, r.y, r.width, r.height].iter().any(|v| !v.is_finite())
            || r.width < 0.0
            || r.height < 0.0
        {
            return Err(DrapeError::validation(
                "overlay rect must be finite with width/height >= 0",
            ));
        }
        if !self.opacity.is_finite() || !(0.0..=1.0).contains(&self.opacity) {
            return Err(DrapeError::validation("overlay opacity must be in [0, 1]"));
        }
        if !(1..=100).contains(&self.jpeg_quality) {
            return Err(DrapeError::validation("jpeg_quality must be in 1..=100"));
        }
        Ok(())
    }

    /// Same settings without the simulated latency.
    pub fn without_delay(self) -> Self {
        Self {
            delay_ms: 0,
            ..self
        }
    }
}

/// Placeholder compositor: waits, stretches the photo to the canvas, fills the configured
/// rectangle with the colorway color, encodes JPEG.
#[derive(Clone, Debug)]
pub struct OverlayRenderer {
    settings: OverlaySettings,
}

impl OverlayRenderer {
    /// Create a renderer with validated settings.
    pub fn new(settings: OverlaySettings) -> DrapeResult<Self> {
        settings.validate()?;
        Ok(Self { settings })
    }

    /// Active settings.
    pub fn settings(&self) -> &OverlaySettings {
        &self.settings
    }
}

impl TryOnRenderer for OverlayRenderer {
    #[tracing::instrument(
        skip(self, request),
        fields(garment = %request.garment.id, colorway = %request.colorway.id)
    )]
    fn render(&self, request: &RenderRequest<'_>) -> DrapeResult<EncodedImage> {
        let started = Instant::now();
        if self.settings.delay_ms > 0 {
            std::thread::sleep(Duration::from_millis(self.settings.delay_ms));
        }

        let photo = request.photo.decode()?;
        let Canvas { width, height } = self.settings.canvas;
        let mut canvas = imageops::resize(&photo, width, height, FilterType::Triangle);
        premultiply_in_place(&mut canvas);

        let color = request.colorway.hex_code.to_rgba8_premul();
        fill_rect_over(
            &mut canvas,
            width,
            height,
            self.settings.rect.to_rect(),
            color,
            self.settings.opacity,
        )?;

        unpremultiply_in_place(&mut canvas);
        let out = encode_jpeg(&canvas, self.settings.jpeg_quality)?;
        tracing::debug!(
            elapsed_ms = started.elapsed().as_millis() as u64,
            bytes = out.bytes.len(),
            "composite rendered"
        );
        Ok(out)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/overlay.rs"]
mod tests;
