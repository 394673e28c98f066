use super::*;
use crate::device::tier::TierTable;

#[test]
fn default_names_match_asset_tool_output() {
    let t = FramePathTemplate::default();
    t.validate().unwrap();
    assert_eq!(t.file_name(1), "frame_0001.jpg");
    assert_eq!(t.path_for("", 7), "video-frames/frame_0007.jpg");
    assert_eq!(t.path_for("mobile-low", 79), "video-frames/mobile-low/frame_0079.jpg");
    assert_eq!(t.path_for("/mobile/", 12), "video-frames/mobile/frame_0012.jpg");
}

#[test]
fn full_tier_maps_slots_one_to_one() {
    let t = FramePathTemplate::default();
    let table = TierTable::default();
    let paths = t.paths_for_tier(&table.full);
    assert_eq!(paths.len(), 79);
    assert_eq!(paths[0], "video-frames/frame_0001.jpg");
    assert_eq!(paths[78], "video-frames/frame_0079.jpg");
}

#[test]
fn reduced_counts_sample_evenly_and_keep_endpoints() {
    let t = FramePathTemplate::default();
    assert_eq!(t.source_number(FrameIndex(0), 30), 1);
    assert_eq!(t.source_number(FrameIndex(29), 30), 79);

    let mut prev = 0;
    for i in 0..30 {
        let n = t.source_number(FrameIndex(i), 30);
        assert!(n > prev, "slot {i} did not advance");
        prev = n;
    }
}

#[test]
fn single_frame_tier_uses_first_source_frame() {
    let t = FramePathTemplate::default();
    assert_eq!(t.source_number(FrameIndex(0), 1), 1);
}

#[test]
fn validation_rejects_narrow_padding_and_traversal() {
    let narrow = FramePathTemplate {
        pad_width: 1,
        ..FramePathTemplate::default()
    };
    assert!(narrow.validate().is_err());

    let traversal = FramePathTemplate {
        base: "../secrets".to_string(),
        ..FramePathTemplate::default()
    };
    assert!(traversal.validate().is_err());
}
