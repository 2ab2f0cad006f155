use super::*;

#[test]
fn prefers_environment_camera() {
    let mut cam = SyntheticCamera::new(4, 4).unwrap();
    let stream = acquire_with_fallback(&mut cam, Facing::Environment).unwrap();
    assert_eq!(stream.facing(), Facing::Environment);
    assert_eq!(cam.stats().opened, 1);
    assert_eq!(cam.stats().failed, 0);
}

#[test]
fn falls_back_to_user_camera_once() {
    let mut cam = SyntheticCamera::new(4, 4)
        .unwrap()
        .without(Facing::Environment);
    let stream = acquire_with_fallback(&mut cam, Facing::Environment).unwrap();
    assert_eq!(stream.facing(), Facing::User);
    assert_eq!(cam.stats().failed, 1);
    assert_eq!(cam.stats().opened, 1);
}

#[test]
fn double_failure_is_a_camera_error() {
    let mut cam = SyntheticCamera::new(4, 4)
        .unwrap()
        .without(Facing::Environment)
        .without(Facing::User);
    let err = acquire_with_fallback(&mut cam, Facing::Environment)
        .err()
        .unwrap();
    assert!(matches!(err, DrapeError::Camera(_)));
    assert_eq!(cam.stats().failed, 2);
}

#[test]
fn stop_is_idempotent_and_drop_releases() {
    let mut cam = SyntheticCamera::new(2, 2).unwrap();
    let mut stream = cam.open(Facing::User).unwrap();
    stream.stop();
    stream.stop();
    assert!(!stream.is_live());
    assert!(stream.snapshot().is_err());
    assert_eq!(cam.stats().stopped, 1);

    let stream = cam.open(Facing::User).unwrap();
    assert_eq!(cam.stats().live(), 1);
    drop(stream);
    assert_eq!(cam.stats().live(), 0);
}

#[test]
fn synthetic_frames_are_gradients() {
    let mut cam = SyntheticCamera::new(10, 10).unwrap();
    let frame = cam.open(Facing::User).unwrap().snapshot().unwrap();
    assert_eq!(frame.dimensions(), (10, 10));
    assert_eq!(frame.get_pixel(0, 0).0, [0, 0, 128, 255]);
    assert!(frame.get_pixel(9, 0)[0] > 200);
}

#[test]
fn still_camera_serves_its_image() {
    let img = RgbaImage::from_pixel(3, 2, image::Rgba([1, 2, 3, 255]));
    let mut cam = StillImageCamera::new(img.clone());
    let mut stream = cam.open(Facing::Environment).unwrap();
    assert_eq!(stream.snapshot().unwrap(), img);
    assert!(StillImageCamera::open_path("does/not/exist.png").is_err());
}
