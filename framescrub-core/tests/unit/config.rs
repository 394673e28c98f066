use super::*;
use crate::{device::tier::PerformanceTier, scroll::mapper::FadeEnd};

#[test]
fn empty_object_is_the_default_config() {
    let cfg = PlayerConfig::from_json_str("{}").unwrap();
    assert_eq!(cfg, PlayerConfig::default());
    assert_eq!(cfg.regions.hero, "hero");
    assert_eq!(cfg.regions.next, "about");
    assert_eq!(cfg.fit, FitMode::Cover);
    assert_eq!(cfg.tiers.full.frame_count, 79);
}

#[test]
fn partial_overrides_keep_other_defaults() {
    let cfg = PlayerConfig::from_json_str(
        r#"{
            "thresholds": { "mobile_breakpoint_px": 640 },
            "scroll": { "fade_start_fraction": 0.3, "fade_end": { "fixed_margin": 200 } },
            "throttle": { "min_interval": { "min_interval_ms": 32 } },
            "regions": { "next": "work" }
        }"#,
    )
    .unwrap();
    assert_eq!(cfg.thresholds.mobile_breakpoint_px, 640.0);
    assert_eq!(cfg.thresholds.constrained_cores, 4);
    assert_eq!(cfg.scroll.fade_end, FadeEnd::FixedMargin(200.0));
    assert_eq!(cfg.regions.hero, "hero");
    assert_eq!(cfg.regions.next, "work");
    assert_eq!(
        cfg.throttle,
        ThrottleMode::MinInterval {
            min_interval_ms: 32
        }
    );
}

#[test]
fn unknown_fields_and_bad_values_are_rejected() {
    let err = PlayerConfig::from_json_str(r#"{ "colour": "red" }"#).unwrap_err();
    assert!(err.to_string().contains("serialization error:"));

    let err = PlayerConfig::from_json_str(r#"{ "regions": { "hero": "x", "next": "x" } }"#)
        .unwrap_err();
    assert!(err.to_string().contains("validation error:"));
}

#[test]
fn json_round_trips_through_pretty_printer() {
    let cfg = PlayerConfig::default();
    let back = PlayerConfig::from_json_str(&cfg.to_json_pretty().unwrap()).unwrap();
    assert_eq!(back, cfg);
}

#[test]
fn from_path_reports_missing_file() {
    let err = PlayerConfig::from_path("target/does-not-exist/framescrub.json").unwrap_err();
    assert!(err.to_string().contains("read player config"));
}

#[test]
fn crossfade_follows_tier_setting() {
    let cfg = PlayerConfig::default();
    assert_eq!(
        PlayerConfig::resolve_mode(cfg.tiers.get(PerformanceTier::Full)),
        ResolveMode::CrossFade
    );
    assert_eq!(
        PlayerConfig::resolve_mode(cfg.tiers.get(PerformanceTier::Minimal)),
        ResolveMode::Simple
    );
}

#[test]
fn tier_asking_for_more_frames_than_the_source_is_rejected() {
    let mut cfg = PlayerConfig::default();
    cfg.tiers.full.frame_count = 100;
    let err = cfg.validate().unwrap_err();
    assert!(matches!(err, FramescrubError::Validation(_)));
    assert!(err.to_string().contains("full tier frame_count 100"));

    cfg.tiers.full.frame_count = cfg.frames.source_frame_count;
    cfg.validate().unwrap();
}
