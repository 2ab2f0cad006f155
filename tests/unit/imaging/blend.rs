use super::*;

#[test]
fn over_opacity_0_is_noop() {
    let dst = [1, 2, 3, 4];
    let src = [200, 200, 200, 200];
    assert_eq!(over(dst, src, 0.0), dst);
}

#[test]
fn over_src_opaque_replaces_dst() {
    let dst = [0, 0, 0, 255];
    let src = [255, 0, 0, 255];
    assert_eq!(over(dst, src, 1.0), src);
}

#[test]
fn over_at_eighty_percent_mixes_channels() {
    let dst = [0, 100, 200, 255];
    let src = [255, 0, 0, 255];
    let out = over(dst, src, 0.8);
    assert_eq!(out[3], 255);
    assert!((i32::from(out[0]) - 204).abs() <= 1);
    assert!((i32::from(out[1]) - 20).abs() <= 1);
    assert!((i32::from(out[2]) - 40).abs() <= 1);
}

#[test]
fn fill_rect_only_touches_covered_pixels() {
    let (w, h) = (4u32, 3u32);
    let mut buf = vec![0u8; (w * h * 4) as usize];
    for px in buf.chunks_exact_mut(4) {
        px[3] = 255;
    }
    let color = Rgba8Premul::from_straight_rgba(255, 255, 255, 255);
    fill_rect_over(&mut buf, w, h, Rect::new(1.0, 1.0, 3.0, 2.0), color, 1.0).unwrap();

    let at = |x: usize, y: usize| &buf[(y * w as usize + x) * 4..(y * w as usize + x) * 4 + 4];
    assert_eq!(at(0, 0), &[0, 0, 0, 255]);
    assert_eq!(at(1, 1), &[255, 255, 255, 255]);
    assert_eq!(at(2, 1), &[255, 255, 255, 255]);
    assert_eq!(at(3, 1), &[0, 0, 0, 255]);
    assert_eq!(at(1, 2), &[0, 0, 0, 255]);
}

#[test]
fn fill_rect_clips_to_buffer() {
    let mut buf = vec![0u8; 2 * 2 * 4];
    let color = Rgba8Premul::from_straight_rgba(9, 9, 9, 255);
    fill_rect_over(&mut buf, 2, 2, Rect::new(-5.0, -5.0, 50.0, 50.0), color, 1.0).unwrap();
    assert!(buf.chunks_exact(4).all(|px| px == [9, 9, 9, 255]));

    fill_rect_over(&mut buf, 2, 2, Rect::new(10.0, 10.0, 20.0, 20.0), color, 1.0).unwrap();
}

#[test]
fn fill_rect_rejects_mismatched_buffer() {
    let mut buf = vec![0u8; 7];
    let color = Rgba8Premul::transparent();
    assert!(fill_rect_over(&mut buf, 2, 2, Rect::new(0.0, 0.0, 1.0, 1.0), color, 1.0).is_err());
}

#[test]
fn premultiply_then_unpremultiply_is_close() {
    let mut img = RgbaImage::from_raw(1, 1, vec![200, 100, 50, 128]).unwrap();
    premultiply_in_place(&mut img);
    assert_eq!(img.get_pixel(0, 0)[3], 128);
    unpremultiply_in_place(&mut img);
    let px = img.get_pixel(0, 0);
    assert!((i32::from(px[0]) - 200).abs() <= 2);
    assert!((i32::from(px[1]) - 100).abs() <= 2);
    assert!((i32::from(px[2]) - 50).abs() <= 2);
}
