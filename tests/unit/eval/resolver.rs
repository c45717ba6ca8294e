use super::*;
use crate::play::store::EntityId;
use crate::test_fixtures::{full_play, short_play};

fn at(play: &Play, id: &str, frame: u32) -> Option<ResolvedPosition> {
    let entity = play.entity(&EntityId::from(id)).unwrap();
    resolve_position(play, entity, FrameIndex(frame))
}

#[test]
fn throw_frame_uses_primary_sample() {
    let play = short_play();
    let r = at(&play, "100", 30).unwrap();
    assert_eq!(r.provenance, Provenance::Primary);
    assert_eq!(r.pos, Point::new(50.0, 20.0));
    assert_eq!(r.dir, 90.0);
    assert_eq!(r.speed, 5.0);
}

#[test]
fn last_frame_uses_continuation_relative_to_throw() {
    let play = short_play();
    let r = at(&play, "100", 35).unwrap();
    assert_eq!(r.provenance, Provenance::Continuation);
    assert!((r.pos.x - 55.0).abs() < 1e-9);
    assert!((r.pos.y - 22.0).abs() < 1e-9);
    assert_eq!(r.dir, 0.0);
    assert!(!r.has_heading());
}

#[test]
fn primary_wins_over_continuation_while_both_exist() {
    // throw at 6, primary tracked to 10: frames 7..=10 still read primary.
    let play = full_play();
    let r = at(&play, "2", 8).unwrap();
    assert_eq!(r.provenance, Provenance::Primary);
    assert_eq!(r.pos, Point::new(51.0, 30.0));
}

#[test]
fn exhausted_continuation_freezes_on_its_last_sample() {
    let play = full_play();
    let r = at(&play, "3", 11).unwrap();
    assert_eq!(r.provenance, Provenance::ContinuationFrozen);
    assert_eq!(r.pos, Point::new(47.5, 16.5));
    assert!(r.provenance.is_frozen());
    assert!(r.provenance.is_continuation());
}

#[test]
fn player_without_continuation_freezes_on_last_primary() {
    let play = full_play();
    let r = at(&play, "1", 12).unwrap();
    assert_eq!(r.provenance, Provenance::PrimaryFrozen);
    assert_eq!(r.pos, Point::new(35.5, 26.0));
    assert_eq!(r.dir, 45.0);
    assert!(r.has_heading());
}

#[test]
fn output_only_player_is_absent_until_after_throw() {
    let play = full_play();
    assert!(at(&play, "9", 1).is_none());
    assert!(at(&play, "9", 6).is_none());

    let r = at(&play, "9", 7).unwrap();
    assert_eq!(r.provenance, Provenance::Continuation);
    assert_eq!(r.pos, Point::new(59.0, 30.0));

    let r = at(&play, "9", 14).unwrap();
    assert_eq!(r.provenance, Provenance::ContinuationFrozen);
    assert_eq!(r.pos, Point::new(57.0, 30.0));
}

#[test]
fn gap_before_throw_resolves_to_nothing() {
    let mut v = crate::test_fixtures::short_play_json();
    let frames = v["players"]["100"]["frames"].as_array_mut().unwrap();
    frames.retain(|f| f["frame_id"] != 10);
    let play = Play::from_json_str(&v.to_string()).unwrap();
    assert!(at(&play, "100", 10).is_none());
    assert!(at(&play, "100", 11).is_some());
}

#[test]
fn gap_inside_continuation_falls_back_to_primary() {
    let mut v = crate::test_fixtures::short_play_json();
    let frames = v["output_players"]["100"]["frames"].as_array_mut().unwrap();
    frames.retain(|f| f["frame_id"] != 2);
    let play = Play::from_json_str(&v.to_string()).unwrap();

    // rel 2 is missing but rel 5 still exists, so the track has not run out.
    let r = at(&play, "100", 32).unwrap();
    assert_eq!(r.provenance, Provenance::PrimaryFrozen);
    assert_eq!(r.pos, Point::new(50.0, 20.0));
}

#[test]
fn primary_only_player_holds_still_for_every_post_throw_frame() {
    let play = full_play();
    let entity = play.entity(&EntityId::from("1")).unwrap();
    let last = entity.primary.last().unwrap().pos;
    let post: Vec<u32> = (play.max_frame().0 + 1..=play.total_frames().0).collect();
    assert!(post.len() >= 2);

    for (i, &f1) in post.iter().enumerate() {
        for &f2 in &post[i + 1..] {
            let a = at(&play, "1", f1).unwrap();
            let b = at(&play, "1", f2).unwrap();
            assert_eq!(a, b, "frames {f1} and {f2}");
            assert_eq!(a.pos, last);
            assert_eq!(a.provenance, Provenance::PrimaryFrozen);
        }
    }
}
