use super::*;

fn vp(w: f64, h: f64, dpr: f64) -> ViewportSize {
    ViewportSize::new(w, h, dpr).unwrap()
}

#[test]
fn backing_store_uses_capped_pixel_ratio() {
    let s = Surface::new(vp(400.0, 300.0, 3.0), 2.0).unwrap();
    assert_eq!((s.width(), s.height()), (800, 600));
    assert_eq!(s.scale(), 2.0);
    assert_eq!(s.data().len(), 800 * 600 * 4);

    let s = Surface::new(vp(400.0, 300.0, 1.0), 2.0).unwrap();
    assert_eq!((s.width(), s.height()), (400, 300));
}

#[test]
fn resize_reports_reallocation() {
    let mut s = Surface::new(vp(100.0, 50.0, 1.0), 1.0).unwrap();
    assert!(!s.resize(vp(100.0, 50.0, 2.0), 1.0).unwrap());
    assert!(s.resize(vp(120.0, 50.0, 1.0), 1.0).unwrap());
    assert_eq!((s.width(), s.height()), (120, 50));
    assert_eq!(s.logical_rect(), Rect::new(0.0, 0.0, 120.0, 50.0));
}

#[test]
fn oversized_surfaces_are_rejected() {
    assert!(Surface::new(vp(20_000.0, 10.0, 1.0), 1.0).is_err());
    let mut s = Surface::new(vp(10.0, 10.0, 1.0), 1.0).unwrap();
    assert!(s.resize(vp(10.0, 10.0, 1.0), 0.0).is_err());
    assert_eq!((s.width(), s.height()), (10, 10));
}

#[test]
fn clear_and_export_apply_opacity() {
    let mut s = Surface::new(vp(2.0, 1.0, 1.0), 1.0).unwrap();
    s.clear([0, 0, 0, 255]);
    assert_eq!(s.pixel(1, 0), Some([0, 0, 0, 255]));
    assert_eq!(s.pixel(2, 0), None);

    let img = s.to_rgba_image(1.0).unwrap();
    assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0, 255]);
    let faded = s.to_rgba_image(0.0).unwrap();
    assert_eq!(faded.get_pixel(0, 0).0[3], 0);
}
