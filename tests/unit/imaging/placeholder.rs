use super::*;

#[test]
fn parses_catalog_style_url() {
    let spec =
        PlaceholderSpec::parse("/api/placeholder/1500/2000/1B365D/FFFFFF?text=Navy+T-Shirt")
            .unwrap();
    assert_eq!(spec.width, 1500);
    assert_eq!(spec.height, 2000);
    assert_eq!(spec.background, HexColor::rgb(0x1b, 0x36, 0x5d));
    assert_eq!(spec.foreground, HexColor::rgb(0xff, 0xff, 0xff));
    assert_eq!(spec.text.as_deref(), Some("Navy T-Shirt"));
}

#[test]
fn host_and_percent_escapes_are_handled() {
    let spec =
        PlaceholderSpec::parse("https://cdn.example.com/api/placeholder/10/20?text=A%26B").unwrap();
    assert_eq!(spec.background, DEFAULT_BACKGROUND);
    assert_eq!(spec.foreground, DEFAULT_FOREGROUND);
    assert_eq!(spec.text.as_deref(), Some("A&B"));
}

#[test]
fn rejects_malformed_urls() {
    assert!(PlaceholderSpec::parse("/images/foo.png").is_err());
    assert!(PlaceholderSpec::parse("/api/placeholder/10").is_err());
    assert!(PlaceholderSpec::parse("/api/placeholder/0/10").is_err());
    assert!(PlaceholderSpec::parse("/api/placeholder/10/99999").is_err());
    assert!(PlaceholderSpec::parse("/api/placeholder/10/10/XYZXYZ").is_err());
}

#[test]
fn rasterize_fills_background_and_band() {
    let spec = PlaceholderSpec::parse("/api/placeholder/100/200/000000/FFFFFF?text=Mask").unwrap();
    let img = spec.rasterize();
    assert_eq!(img.dimensions(), (100, 200));
    assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0, 255]);
    assert_eq!(img.get_pixel(50, 100).0, [255, 255, 255, 255]);
}

#[test]
fn rasterize_without_text_is_plain_fill() {
    let spec = PlaceholderSpec::parse("/api/placeholder/8/8/DC2626/FFFFFF").unwrap();
    let img = spec.rasterize();
    assert!(img.pixels().all(|p| p.0 == [0xDC, 0x26, 0x26, 255]));
}
