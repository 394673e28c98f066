use super::*;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

#[test]
fn burst_of_scrolls_requests_one_frame() {
    let mut s = PaintScheduler::new(ThrottleMode::AnimationFrame);
    assert!(s.request());
    for _ in 0..50 {
        assert!(!s.request());
    }
    assert_eq!(s.on_frame(ms(16)), FrameDecision::Paint);
    assert_eq!(s.on_frame(ms(16)), FrameDecision::Idle);
    assert_eq!(s.on_frame(ms(33)), FrameDecision::Idle);
}

#[test]
fn scroll_after_paint_schedules_again() {
    let mut s = PaintScheduler::default();
    assert!(s.request());
    assert_eq!(s.on_frame(ms(0)), FrameDecision::Paint);
    assert!(s.request());
    assert_eq!(s.on_frame(ms(16)), FrameDecision::Paint);
}

#[test]
fn min_interval_defers_until_gate_opens() {
    let mut s = PaintScheduler::new(ThrottleMode::MinInterval {
        min_interval_ms: 32,
    });
    assert!(s.request());
    assert_eq!(s.on_frame(ms(100)), FrameDecision::Paint);

    assert!(s.request());
    assert_eq!(s.on_frame(ms(116)), FrameDecision::Defer);
    assert!(s.is_pending());
    assert!(!s.request());
    assert_eq!(s.on_frame(ms(132)), FrameDecision::Paint);
    assert!(!s.is_pending());
}

#[test]
fn cancel_drops_owed_paint() {
    let mut s = PaintScheduler::default();
    assert!(s.request());
    s.cancel();
    assert_eq!(s.on_frame(ms(1)), FrameDecision::Idle);
}

#[test]
fn throttle_mode_serde_shape() {
    let json = serde_json::to_string(&ThrottleMode::MinInterval {
        min_interval_ms: 16,
    })
    .unwrap();
    assert_eq!(json, r#"{"min_interval":{"min_interval_ms":16}}"#);
    let back: ThrottleMode = serde_json::from_str(r#""animation_frame""#).unwrap();
    assert_eq!(back, ThrottleMode::AnimationFrame);
}
