use super::*;

fn solid(origin: FrameOrigin) -> PreparedFrame {
    PreparedFrame {
        width: 2,
        height: 1,
        rgba8_premul: Arc::new(vec![9, 9, 9, 255, 9, 9, 9, 255]),
        origin,
    }
}

#[test]
fn builder_tracks_progress_and_placeholders() {
    let mut b = FrameSetBuilder::new(3).unwrap();
    assert_eq!(b.progress().settled, 0);
    assert_eq!(b.progress().percent(), 0);

    b.fill(FrameIndex(2), solid(FrameOrigin::Decoded)).unwrap();
    b.fill(FrameIndex(0), solid(FrameOrigin::Placeholder)).unwrap();
    let p = b.progress();
    assert_eq!((p.settled, p.total, p.placeholders), (2, 3, 1));
    assert_eq!(p.percent(), 66);
    assert!(!p.is_complete());
    assert_eq!(p.overlay_label(), "Loading 3D Animation... 2/3");
}

#[test]
fn finish_requires_every_slot() {
    let mut b = FrameSetBuilder::new(2).unwrap();
    b.fill(FrameIndex(0), solid(FrameOrigin::Decoded)).unwrap();
    assert!(b.finish().is_err());
}

#[test]
fn slots_are_written_once_and_in_range() {
    let mut b = FrameSetBuilder::new(2).unwrap();
    b.fill(FrameIndex(1), solid(FrameOrigin::Decoded)).unwrap();
    assert!(b.fill(FrameIndex(1), solid(FrameOrigin::Decoded)).is_err());
    assert!(b.fill(FrameIndex(2), solid(FrameOrigin::Decoded)).is_err());
}

#[test]
fn finished_set_is_dense_and_clamps_reads() {
    let mut b = FrameSetBuilder::new(2).unwrap();
    b.fill(FrameIndex(0), solid(FrameOrigin::Decoded)).unwrap();
    b.fill(FrameIndex(1), solid(FrameOrigin::Placeholder)).unwrap();
    let set = b.finish().unwrap();

    assert_eq!(set.len(), 2);
    assert_eq!(set.placeholder_count(), 1);
    assert!(set.get(FrameIndex(2)).is_none());
    assert!(set.get_clamped(FrameIndex(99)).is_placeholder());
    assert_eq!(set.get_clamped(FrameIndex(0)).pixel(1, 0), [9, 9, 9, 255]);
}

#[test]
fn empty_builder_is_rejected() {
    assert!(FrameSetBuilder::new(0).is_err());
}

#[test]
fn empty_progress_reads_as_complete() {
    let p = LoadProgress::default();
    assert_eq!(p.fraction(), 1.0);
    assert_eq!(p.percent(), 100);
}
