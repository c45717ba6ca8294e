use super::*;
use crate::play::store::EntityId;
use crate::test_fixtures::{full_play, short_play};

fn trail(play: &Play, id: &str, frame: u32) -> Trail {
    let entity = play.entity(&EntityId::from(id)).unwrap();
    trail_at(play, entity, FrameIndex(frame))
}

#[test]
fn single_point_draws_nothing() {
    let play = short_play();
    assert!(trail(&play, "100", 1).is_empty());

    let t = trail(&play, "100", 2);
    assert_eq!(t.primary.len(), 2);
    assert!(t.continuation.is_empty());
}

#[test]
fn primary_trail_stops_at_max_frame() {
    let play = short_play();
    let t = trail(&play, "100", 35);
    assert_eq!(t.primary.len(), 30);
    assert_eq!(*t.primary.last().unwrap(), Point::new(50.0, 20.0));
}

#[test]
fn continuation_trail_grows_after_throw_and_is_kept_apart() {
    let play = short_play();
    assert!(trail(&play, "100", 30).continuation.is_empty());
    assert!(trail(&play, "100", 31).continuation.is_empty());

    let t = trail(&play, "100", 33);
    assert_eq!(t.continuation.len(), 3);
    assert_eq!(t.continuation[0], Point::new(51.0, 20.4));
    // never joined: the primary path ends where it ends
    assert_eq!(*t.primary.last().unwrap(), Point::new(50.0, 20.0));
}

#[test]
fn output_only_player_has_only_a_continuation_trail() {
    let play = full_play();
    let t = trail(&play, "9", 14);
    assert!(t.primary.is_empty());
    assert_eq!(t.continuation.len(), 3);
}

#[test]
fn pieces_match_the_combined_trail() {
    let play = full_play();
    let e = play.entity(&EntityId::from("2")).unwrap();
    let f = FrameIndex(9);
    let t = trail_at(&play, e, f);
    assert_eq!(t.primary, primary_trail(&play, e, f));
    assert_eq!(t.continuation, continuation_trail(&play, e, f));
    assert_eq!(t.primary.len(), 9);
    assert_eq!(t.continuation.len(), 3);
}
