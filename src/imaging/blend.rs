use image::RgbaImage;

use crate::foundation::core::{Rect, Rgba8Premul};
use crate::foundation::error::{DrapeError, DrapeResult};

/// Premultiplied RGBA8 pixel as a raw array.
pub type PremulRgba8 = [u8; 4];

/// Premultiplied "source over destination" with an extra global opacity.
pub fn over(dst: PremulRgba8, src: PremulRgba8, opacity: f32) -> PremulRgba8 {
    let opacity = opacity.clamp(0.0, 1.0);
    if opacity <= 0.0 || src[3] == 0 {
        return dst;
    }

    let op = ((opacity * 255.0).round() as i32).clamp(0, 255) as u16;
    let sa = mul_div255(u16::from(src[3]), op);
    if sa == 0 {
        return dst;
    }

    let inv = 255u16 - u16::from(sa);

    let mut out = [0u8; 4];
    out[3] = add_sat_u8(sa, mul_div255(u16::from(dst[3]), inv));

    for i in 0..3 {
        let sc = mul_div255(u16::from(src[i]), op);
        let dc = mul_div255(u16::from(dst[i]), inv);
        out[i] = add_sat_u8(sc, dc);
    }
    out
}

/// Fill `rect` (pixel space, clipped to the buffer) with `color` at `opacity`.
///
/// `rgba` must be premultiplied, tightly packed, `width * height * 4` bytes.
pub fn fill_rect_over(
    rgba: &mut [u8],
    width: u32,
    height: u32,
    rect: Rect,
    color: Rgba8Premul,
    opacity: f32,
) -> DrapeResult<()> {
    let expected = (width as usize) * (height as usize) * 4;
    if rgba.len() != expected {
        return Err(DrapeError::render(
            "fill_rect_over expects a tightly packed rgba8 buffer",
        ));
    }
    let Some((x0, y0, x1, y1)) = pixel_span(rect, width, height) else {
        return Ok(());
    };

    let src = color.to_array();
    let stride = width as usize * 4;
    for row in rgba.chunks_exact_mut(stride).take(y1).skip(y0) {
        for px in row[x0 * 4..x1 * 4].chunks_exact_mut(4) {
            let out = over([px[0], px[1], px[2], px[3]], src, opacity);
            px.copy_from_slice(&out);
        }
    }
    Ok(())
}

/// Clip a float rect to integer pixel bounds `[x0, x1) x [y0, y1)`; `None` when empty.
fn pixel_span(rect: Rect, width: u32, height: u32) -> Option<(usize, usize, usize, usize)> {
    let rect = rect.abs();
    let clamp = |v: f64, max: u32| v.round().clamp(0.0, f64::from(max)) as usize;
    let x0 = clamp(rect.x0, width);
    let x1 = clamp(rect.x1, width);
    let y0 = clamp(rect.y0, height);
    let y1 = clamp(rect.y1, height);
    (x0 < x1 && y0 < y1).then_some((x0, y0, x1, y1))
}

/// Premultiply straight-alpha RGBA8 in place.
pub fn premultiply_in_place(img: &mut RgbaImage) {
    for px in img.pixels_mut() {
        let a = u16::from(px[3]);
        for c in 0..3 {
            px[c] = if a == 0 {
                0
            } else {
                ((u16::from(px[c]) * a + 127) / 255) as u8
            };
        }
    }
}

/// Convert premultiplied RGBA8 back to straight alpha in place.
pub fn unpremultiply_in_place(img: &mut RgbaImage) {
    for px in img.pixels_mut() {
        let a = u16::from(px[3]);
        if a == 0 || a == 255 {
            continue;
        }
        for c in 0..3 {
            px[c] = ((u16::from(px[c]) * 255 + a / 2) / a).min(255) as u8;
        }
    }
}

fn mul_div255(x: u16, y: u16) -> u8 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u8
}

fn add_sat_u8(a: u8, b: u8) -> u8 {
    a.saturating_add(b)
}

#[cfg(test)]
#[path = "../../tests/unit/imaging/blend.rs"]
mod tests;
