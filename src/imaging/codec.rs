use anyhow::Context;
use base64::Engine as _;
use image::{RgbaImage, codecs::jpeg::JpegEncoder};

use crate::foundation::error::{DrapeError, DrapeResult};

/// MIME type of every image the session produces.
pub const JPEG_MIME: &str = "image/jpeg";

/// Default JPEG quality for captured photos and composites (a 0.9 quality factor).
pub const DEFAULT_JPEG_QUALITY: u8 = 90;

/// An encoded, in-memory image artifact (captured photo or composite).
#[derive(Clone, PartialEq, Eq)]
pub struct EncodedImage {
    /// MIME type, e.g. `image/jpeg`.
    pub mime: String,
    /// Encoded bytes.
    pub bytes: Vec<u8>,
}

impl std::fmt::Debug for EncodedImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EncodedImage")
            .field("mime", &self.mime)
            .field("bytes_len", &self.bytes.len())
            .finish()
    }
}

impl EncodedImage {
    /// Wrap already-encoded JPEG bytes.
    pub fn jpeg(bytes: Vec<u8>) -> Self {
        Self {
            mime: JPEG_MIME.to_owned(),
            bytes,
        }
    }

    /// Encode as a `data:<mime>;base64,...` URI.
    pub fn to_data_uri(&self) -> String {
        let b64 = base64::engine::general_purpose::STANDARD.encode(&self.bytes);
        format!("data:{};base64,{b64}", self.mime)
    }

    /// Parse a base64 `data:` URI.
    pub fn from_data_uri(uri: &str) -> DrapeResult<Self> {
        let rest = uri
            .trim()
            .strip_prefix("data:")
            .ok_or_else(|| DrapeError::validation("data uri must start with \"data:\""))?;
        let (meta, payload) = rest
            .split_once(',')
            .ok_or_else(|| DrapeError::validation("data uri is missing the ',' separator"))?;
        let mime = meta
            .strip_suffix(";base64")
            .ok_or_else(|| DrapeError::validation("only base64 data uris are supported"))?;
        if mime.is_empty() {
            return Err(DrapeError::validation("data uri has an empty mime type"));
        }
        let bytes = base64::engine::general_purpose::STANDARD
            .decode(payload)
            .context("decode data uri payload")?;
        Ok(Self {
            mime: mime.to_owned(),
            bytes,
        })
    }

    /// Decode into straight-alpha RGBA8 pixels.
    pub fn decode(&self) -> DrapeResult<RgbaImage> {
        decode_image(&self.bytes)
    }
}

/// Decode any format supported by `image` into straight-alpha RGBA8.
pub fn decode_image(bytes: &[u8]) -> DrapeResult<RgbaImage> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    Ok(dyn_img.to_rgba8())
}

/// Encode straight-alpha RGBA8 pixels as JPEG (alpha is dropped).
pub fn encode_jpeg(img: &RgbaImage, quality: u8) -> DrapeResult<EncodedImage> {
    if !(1..=100).contains(&quality) {
        return Err(DrapeError::validation("jpeg quality must be in 1..=100"));
    }
    let rgb = image::DynamicImage::ImageRgba8(img.clone()).to_rgb8();
    let mut buf = Vec::new();
    JpegEncoder::new_with_quality(&mut buf, quality)
        .encode_image(&rgb)
        .map_err(|e| DrapeError::render(format!("jpeg encode failed: {e}")))?;
    Ok(EncodedImage::jpeg(buf))
}

#[cfg(test)]
#[path = "../../tests/unit/imaging/codec.rs"]
mod tests;
