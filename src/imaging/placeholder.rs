use image::{Rgba, RgbaImage};

use crate::foundation::core::HexColor;
use crate::foundation::error::{DrapeError, DrapeResult};

const PLACEHOLDER_PREFIX: &str = "/api/placeholder/";
const MAX_PLACEHOLDER_DIM: u32 = 4096;
const DEFAULT_BACKGROUND: HexColor = HexColor::rgb(0xCC, 0xCC, 0xCC);
const DEFAULT_FOREGROUND: HexColor = HexColor::rgb(0x33, 0x33, 0x33);

/// Parameters of a placeholder-image URL: `/api/placeholder/{w}/{h}[/{bg}[/{fg}]][?text=...]`.
///
/// Colorway image and mask URLs in the catalog point at this service. The local rasterizer
/// renders a background fill with a centered foreground label band in place of the text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlaceholderSpec {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Background color.
    pub background: HexColor,
    /// Foreground (label) color.
    pub foreground: HexColor,
    /// Decoded label text, if any.
    pub text: Option<String>,
}

impl PlaceholderSpec {
    /// Parse a placeholder URL. Scheme and host, when present, are ignored.
    pub fn parse(url: &str) -> DrapeResult<Self> {
        let url = url.trim();
        let start = url.find(PLACEHOLDER_PREFIX).ok_or_else(|| {
            DrapeError::validation(format!("not a placeholder url: \"{url}\""))
        })?;
        let rest = &url[start + PLACEHOLDER_PREFIX.len()..];
        let (path, query) = match rest.split_once('?') {
            Some((p, q)) => (p, Some(q)),
            None => (rest, None),
        };

        let parts: Vec<&str> = path.split('/').filter(|p| !p.is_empty()).collect();
        if parts.len() < 2 || parts.len() > 4 {
            return Err(DrapeError::validation(
                "placeholder url must be /{w}/{h}[/{bg}[/{fg}]]",
            ));
        }

        let dim = |s: &str, name: &str| -> DrapeResult<u32> {
            let v: u32 = s.parse().map_err(|_| {
                DrapeError::validation(format!("placeholder {name} \"{s}\" is not an integer"))
            })?;
            if v == 0 || v > MAX_PLACEHOLDER_DIM {
                return Err(DrapeError::validation(format!(
                    "placeholder {name} must be in 1..={MAX_PLACEHOLDER_DIM}"
                )));
            }
            Ok(v)
        };

        let width = dim(parts[0], "width")?;
        let height = dim(parts[1], "height")?;
        let background = match parts.get(2) {
            Some(s) => HexColor::parse(s)?,
            None => DEFAULT_BACKGROUND,
        };
        let foreground = match parts.get(3) {
            Some(s) => HexColor::parse(s)?,
            None => DEFAULT_FOREGROUND,
        };

        let text = match query {
            Some(q) => parse_text_param(q)?,
            None => None,
        };

        Ok(Self {
            width,
            height,
            background,
            foreground,
            text,
        })
    }

    /// Rasterize: background fill plus a foreground band centered vertically.
    ///
    /// The band is only drawn when the URL carries text.
    pub fn rasterize(&self) -> RgbaImage {
        let bg = Rgba([
            self.background.r,
            self.background.g,
            self.background.b,
            self.background.a,
        ]);
        let mut img = RgbaImage::from_pixel(self.width, self.height, bg);
        if self.text.is_none() {
            return img;
        }

        let fg = Rgba([
            self.foreground.r,
            self.foreground.g,
            self.foreground.b,
            self.foreground.a,
        ]);
        let band_h = (self.height / 10).max(1);
        let band_w = (self.width * 3 / 5).max(1);
        let x0 = (self.width - band_w) / 2;
        let y0 = (self.height - band_h) / 2;
        for y in y0..y0 + band_h {
            for x in x0..x0 + band_w {
                img.put_pixel(x, y, fg);
            }
        }
        img
    }
}

fn parse_text_param(query: &str) -> DrapeResult<Option<String>> {
    for pair in query.split('&') {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        if key != "text" {
            continue;
        }
        let spaced = value.replace('+', " ");
        let decoded = urlencoding::decode(&spaced)
            .map_err(|e| DrapeError::validation(format!("placeholder text is not utf-8: {e}")))?;
        return Ok(Some(decoded.into_owned()));
    }
    Ok(None)
}

#[cfg(test)]
#[path = "../../tests/unit/imaging/placeholder.rs"]
mod tests;
