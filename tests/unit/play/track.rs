use super::*;

fn cont(frame: u32, x: f64) -> ContinuationSample {
    ContinuationSample {
        frame_id: FrameIndex(frame),
        pos: Point::new(x, 0.0),
    }
}

#[test]
fn samples_are_sorted_on_construction() {
    let t = Track::from_samples(vec![cont(3, 3.0), cont(1, 1.0), cont(2, 2.0)]).unwrap();
    let ids: Vec<u32> = t.samples().iter().map(|s| s.frame_id.0).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(t.first().unwrap().pos.x, 1.0);
    assert_eq!(t.last().unwrap().pos.x, 3.0);
    assert_eq!(t.max_frame_id(), Some(FrameIndex(3)));
}

#[test]
fn duplicate_frame_ids_are_rejected() {
    let err = Track::from_samples(vec![cont(2, 0.0), cont(2, 1.0)]).unwrap_err();
    assert!(err.to_string().contains("duplicate frame_id 2"));
}

#[test]
fn get_misses_gaps() {
    let t = Track::from_samples(vec![cont(1, 1.0), cont(4, 4.0)]).unwrap();
    assert!(t.get(FrameIndex(2)).is_none());
    assert_eq!(t.get(FrameIndex(4)).unwrap().pos.x, 4.0);
    assert!(t.get(FrameIndex(5)).is_none());
}

#[test]
fn through_is_inclusive_prefix() {
    let t = Track::from_samples(vec![cont(1, 1.0), cont(2, 2.0), cont(4, 4.0)]).unwrap();
    assert_eq!(t.through(FrameIndex(0)).len(), 0);
    assert_eq!(t.through(FrameIndex(2)).len(), 2);
    assert_eq!(t.through(FrameIndex(3)).len(), 2);
    assert_eq!(t.through(FrameIndex(9)).len(), 3);
}

#[test]
fn empty_track_has_no_bounds() {
    let t: Track<PrimarySample> = Track::default();
    assert!(t.is_empty());
    assert_eq!(t.len(), 0);
    assert!(t.max_frame_id().is_none());
    assert!(t.last().is_none());
}
