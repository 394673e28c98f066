use super::*;

fn device(width: f64, cores: Option<u32>, mem: Option<f64>, dpr: f64) -> DeviceProfile {
    DeviceProfile {
        viewport_width: width,
        hardware_concurrency: cores,
        device_memory_gb: mem,
        device_pixel_ratio: dpr,
    }
}

#[test]
fn two_core_phone_is_minimal() {
    let t = TierThresholds::default();
    let tier = select_tier(&device(400.0, Some(2), None, 2.0), &t);
    assert_eq!(tier, PerformanceTier::Minimal);

    let settings = resolve_settings(&device(400.0, Some(2), None, 2.0), &t, &TierTable::default());
    let table = TierTable::default();
    assert_eq!(settings.smoothing, Smoothing::Off);
    assert_eq!(settings.asset_dir, "mobile-low");
    assert!(settings.frame_count < table.reduced.frame_count);
    assert!(settings.frame_count < table.full.frame_count);
    assert!(!settings.crossfade);
}

#[test]
fn capable_phone_is_reduced() {
    let t = TierThresholds::default();
    assert_eq!(
        select_tier(&device(390.0, Some(8), Some(8.0), 2.0), &t),
        PerformanceTier::Reduced
    );
}

#[test]
fn dense_phone_without_hints_is_minimal() {
    let t = TierThresholds::default();
    assert_eq!(
        select_tier(&device(390.0, None, None, 3.0), &t),
        PerformanceTier::Minimal
    );
    assert_eq!(
        select_tier(&device(390.0, None, None, 2.0), &t),
        PerformanceTier::Reduced
    );
}

#[test]
fn desktop_tiers_follow_hardware() {
    let t = TierThresholds::default();
    assert_eq!(
        select_tier(&device(1920.0, Some(16), Some(8.0), 1.0), &t),
        PerformanceTier::Full
    );
    assert_eq!(
        select_tier(&device(1920.0, None, None, 1.0), &t),
        PerformanceTier::Full
    );
    assert_eq!(
        select_tier(&device(1920.0, Some(2), None, 1.0), &t),
        PerformanceTier::Reduced
    );
    assert_eq!(
        select_tier(&device(1920.0, Some(12), Some(1.0), 1.0), &t),
        PerformanceTier::Reduced
    );
}

#[test]
fn breakpoint_is_inclusive() {
    let t = TierThresholds::default();
    assert_eq!(
        select_tier(&device(768.0, Some(8), None, 1.0), &t),
        PerformanceTier::Reduced
    );
    assert_eq!(
        select_tier(&device(769.0, Some(8), None, 1.0), &t),
        PerformanceTier::Full
    );
}

#[test]
fn default_table_validates_and_rejects_bad_slots() {
    let table = TierTable::default();
    table.validate().unwrap();

    let mut bad = table.clone();
    bad.reduced.batch_size = 0;
    assert!(bad.validate().is_err());

    let mut swapped = table;
    swapped.full.tier = PerformanceTier::Minimal;
    assert!(swapped.validate().is_err());
}

#[test]
fn settings_serialize_pause_as_millis() {
    let json = serde_json::to_value(&TierTable::default().minimal).unwrap();
    assert_eq!(json["batch_pause"], 50);
    assert_eq!(json["tier"], "minimal");
    let back: TierSettings = serde_json::from_value(json).unwrap();
    assert_eq!(back.batch_pause, Duration::from_millis(50));
}
