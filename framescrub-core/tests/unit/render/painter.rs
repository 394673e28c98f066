use std::sync::Arc;

use super::*;
use crate::{
    assets::frame_set::{FrameOrigin, FrameSetBuilder},
    foundation::core::{FrameIndex, ViewportSize},
};

const RED: [u8; 4] = [255, 0, 0, 255];
const BLUE: [u8; 4] = [0, 0, 255, 255];

fn frame(w: u32, h: u32, f: impl Fn(u32, u32) -> [u8; 4]) -> PreparedFrame {
    let mut data = Vec::with_capacity((w * h * 4) as usize);
    for y in 0..h {
        for x in 0..w {
            data.extend_from_slice(&f(x, y));
        }
    }
    PreparedFrame {
        width: w,
        height: h,
        rgba8_premul: Arc::new(data),
        origin: FrameOrigin::Decoded,
    }
}

fn set(frames: Vec<PreparedFrame>) -> FrameSet {
    let mut b = FrameSetBuilder::new(frames.len()).unwrap();
    for (i, f) in frames.into_iter().enumerate() {
        b.fill(FrameIndex(i), f).unwrap();
    }
    b.finish().unwrap()
}

fn surface(w: f64, h: f64) -> Surface {
    Surface::new(ViewportSize::new(w, h, 1.0).unwrap(), 1.0).unwrap()
}

fn all_pixels(s: &Surface) -> Vec<[u8; 4]> {
    s.data()
        .chunks_exact(4)
        .map(|p| [p[0], p[1], p[2], p[3]])
        .collect()
}

#[test]
fn no_frames_paints_black() {
    let mut s = surface(4.0, 3.0);
    SurfaceRenderer::new(FitMode::Cover, Smoothing::High)
        .paint(None, FramePick::default(), &mut s)
        .unwrap();
    assert!(all_pixels(&s).iter().all(|p| *p == [0, 0, 0, 255]));
}

#[test]
fn cover_fills_every_pixel() {
    let frames = set(vec![frame(3, 7, |_, _| RED)]);
    for smoothing in [Smoothing::Off, Smoothing::Low, Smoothing::High] {
        let mut s = surface(10.0, 4.0);
        SurfaceRenderer::new(FitMode::Cover, smoothing)
            .paint(Some(&frames), FramePick::single(FrameIndex(0)), &mut s)
            .unwrap();
        assert!(
            all_pixels(&s).iter().all(|p| *p == RED),
            "{smoothing:?} left gaps"
        );
    }
}

#[test]
fn cover_crops_wide_frame_symmetrically() {
    // Left half red, right half blue, drawn 8px wide into a 4px viewport.
    let frames = set(vec![frame(2, 1, |x, _| if x == 0 { RED } else { BLUE })]);
    let mut s = surface(4.0, 4.0);
    let r = SurfaceRenderer::new(FitMode::Cover, Smoothing::Off);
    r.paint(Some(&frames), FramePick::single(FrameIndex(0)), &mut s)
        .unwrap();

    assert_eq!(r.draw_rect(frames.get_clamped(FrameIndex(0)), &s), Rect::new(-2.0, 0.0, 6.0, 4.0));
    for y in 0..4 {
        assert_eq!(s.pixel(0, y), Some(RED));
        assert_eq!(s.pixel(1, y), Some(RED));
        assert_eq!(s.pixel(2, y), Some(BLUE));
        assert_eq!(s.pixel(3, y), Some(BLUE));
    }
}

#[test]
fn contain_leaves_letterbox_transparent() {
    let frames = set(vec![frame(2, 1, |_, _| RED)]);
    let mut s = surface(4.0, 4.0);
    SurfaceRenderer::new(FitMode::Contain, Smoothing::Off)
        .paint(Some(&frames), FramePick::single(FrameIndex(0)), &mut s)
        .unwrap();
    assert_eq!(s.pixel(0, 0), Some([0, 0, 0, 0]));
    assert_eq!(s.pixel(0, 1), Some(RED));
    assert_eq!(s.pixel(3, 2), Some(RED));
    assert_eq!(s.pixel(3, 3), Some([0, 0, 0, 0]));
}

#[test]
fn crossfade_blends_neighbouring_frames() {
    let frames = set(vec![frame(2, 2, |_, _| RED), frame(2, 2, |_, _| BLUE)]);
    let mut s = surface(2.0, 2.0);
    let pick = FramePick {
        base: FrameIndex(0),
        next: FrameIndex(1),
        blend: 0.5,
    };
    SurfaceRenderer::new(FitMode::Cover, Smoothing::Low)
        .paint(Some(&frames), pick, &mut s)
        .unwrap();

    let p = s.pixel(1, 1).unwrap();
    assert!(p[0] > 40 && p[0] < 140, "red channel {p:?}");
    assert!(p[2] > 100, "blue channel {p:?}");
    assert!(p[3] >= 190, "alpha {p:?}");
}

#[test]
fn pick_past_end_is_clamped() {
    let frames = set(vec![frame(1, 1, |_, _| RED), frame(1, 1, |_, _| BLUE)]);
    let mut s = surface(3.0, 3.0);
    SurfaceRenderer::new(FitMode::Cover, Smoothing::Off)
        .paint(Some(&frames), FramePick::single(FrameIndex(40)), &mut s)
        .unwrap();
    assert_eq!(s.pixel(1, 1), Some(BLUE));
}

#[test]
fn high_dpi_surface_is_fully_covered() {
    let frames = set(vec![frame(16, 9, |_, _| BLUE)]);
    let mut s = Surface::new(ViewportSize::new(5.0, 5.0, 2.0).unwrap(), 2.0).unwrap();
    SurfaceRenderer::new(FitMode::Cover, Smoothing::High)
        .paint(Some(&frames), FramePick::single(FrameIndex(0)), &mut s)
        .unwrap();
    assert_eq!((s.width(), s.height()), (10, 10));
    assert!(all_pixels(&s).iter().all(|p| *p == BLUE));
}
