use super::*;
use crate::test_fixtures::{full_play, full_play_json, short_play, short_play_json};

fn load(v: serde_json::Value) -> SnaplineResult<Play> {
    Play::from_json_str(&v.to_string())
}

#[test]
fn total_frames_extends_past_max_frame_by_longest_continuation() {
    let play = short_play();
    assert_eq!(play.max_frame(), FrameIndex(30));
    assert_eq!(play.throw_frame(), FrameIndex(30));
    assert_eq!(play.total_frames(), FrameIndex(35));
    assert_eq!(play.landing_frame(), FrameIndex(35));
    assert_eq!(play.frames().len_frames(), 35);

    let play = full_play();
    assert_eq!(play.total_frames(), FrameIndex(14));
}

#[test]
fn output_only_players_become_entities_without_roster() {
    let play = full_play();
    assert_eq!(play.entity_count(), 5);

    let safety = play.entity(&EntityId::from("9")).unwrap();
    assert!(safety.is_continuation_only());
    assert!(safety.primary.is_empty());
    assert_eq!(safety.side(), None);
    assert_eq!(safety.label(), "P9");

    let wr = play.entity(&EntityId::from("2")).unwrap();
    assert!(!wr.is_continuation_only());
    assert_eq!(wr.side(), Some(Side::Offense));
    assert_eq!(wr.label(), "Receiver");
    assert_eq!(wr.continuation.as_ref().unwrap().len(), 4);

    let qb = play.entity(&EntityId::from("1")).unwrap();
    assert!(qb.continuation.is_none());
}

#[test]
fn last_name_falls_back_to_full_name() {
    let r = Roster {
        name: "Madonna".to_owned(),
        position: "WR".to_owned(),
        side: Side::Offense,
    };
    assert_eq!(r.last_name(), "Madonna");
}

#[test]
fn no_continuation_data_keeps_total_at_max_frame() {
    let mut v = short_play_json();
    v["output_players"] = serde_json::json!({});
    let play = load(v).unwrap();
    assert_eq!(play.total_frames(), FrameIndex(30));
}

#[test]
fn empty_output_frames_are_treated_as_absent() {
    let mut v = short_play_json();
    v["output_players"]["100"]["frames"] = serde_json::json!([]);
    let play = load(v).unwrap();
    assert!(play.entity(&EntityId::from("100")).unwrap().continuation.is_none());
}

#[test]
fn throw_frame_must_be_inside_primary_window() {
    let mut v = short_play_json();
    v["throw_frame"] = serde_json::json!(31);
    let err = load(v).unwrap_err();
    assert!(matches!(err, SnaplineError::Validation(_)));

    let mut v = short_play_json();
    v["throw_frame"] = serde_json::json!(0);
    assert!(load(v).is_err());
}

#[test]
fn zero_max_frame_is_rejected() {
    let mut v = short_play_json();
    v["max_frame"] = serde_json::json!(0);
    v["throw_frame"] = serde_json::json!(0);
    v["players"] = serde_json::json!({});
    assert!(matches!(load(v).unwrap_err(), SnaplineError::Validation(_)));
}

#[test]
fn primary_frames_past_max_frame_are_rejected() {
    let mut v = short_play_json();
    v["max_frame"] = serde_json::json!(29);
    v["throw_frame"] = serde_json::json!(29);
    let err = load(v).unwrap_err();
    assert!(err.to_string().contains("player 100"));
}

#[test]
fn duplicate_primary_frames_are_rejected() {
    let mut v = short_play_json();
    v["players"]["100"]["frames"][1]["frame_id"] = serde_json::json!(1);
    let err = load(v).unwrap_err();
    assert!(matches!(err, SnaplineError::Validation(_)));
    let msg = err.to_string();
    assert!(msg.starts_with("validation error: player 100: duplicate frame_id 1"));
    assert_eq!(msg.matches("validation error").count(), 1);

    let mut v = short_play_json();
    v["output_players"]["100"]["frames"][1]["frame_id"] = serde_json::json!(1);
    let msg = load(v).unwrap_err().to_string();
    assert!(msg.starts_with("validation error: output player 100: duplicate frame_id 1"));
}

#[test]
fn continuation_that_overflows_the_frame_limit_is_rejected() {
    let mut v = short_play_json();
    v["output_players"]["100"]["frames"][4]["frame_id"] = serde_json::json!(u32::MAX);
    let err = load(v).unwrap_err();
    assert!(matches!(err, SnaplineError::Validation(_)));
    assert!(err.to_string().contains("exceeds the frame limit"));

    // max_frame 30 + continuation reaching u32::MAX - 30 lands exactly on u32::MAX.
    let mut v = short_play_json();
    v["output_players"]["100"]["frames"][4]["frame_id"] = serde_json::json!(u32::MAX - 30);
    assert!(matches!(load(v).unwrap_err(), SnaplineError::Validation(_)));
}

#[test]
fn longest_allowed_play_builds_its_last_frame() {
    let mut v = short_play_json();
    v["output_players"]["100"]["frames"][4]["frame_id"] = serde_json::json!(u32::MAX - 31);
    let play = load(v).unwrap();
    assert_eq!(play.total_frames(), FrameIndex(u32::MAX - 1));
    assert!(play.frames().contains(play.total_frames()));
}

#[test]
fn continuation_frame_zero_is_rejected() {
    let mut v = short_play_json();
    v["output_players"]["100"]["frames"][0]["frame_id"] = serde_json::json!(0);
    assert!(load(v).is_err());
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = Play::from_json_str("{ not json").unwrap_err();
    assert!(matches!(err, SnaplineError::Serde(_)));

    let mut v = full_play_json();
    v["play_direction"] = serde_json::json!("sideways");
    assert!(matches!(load(v).unwrap_err(), SnaplineError::Serde(_)));
}

#[test]
fn missing_file_reports_path() {
    let err = Play::from_path("/definitely/not/here/play.json").unwrap_err();
    assert!(err.to_string().contains("play.json"));
}

#[test]
fn supplementary_is_optional_and_sparse() {
    let play = short_play();
    assert!(play.supplementary().is_none());

    let play = full_play();
    let supp = play.supplementary().unwrap();
    assert_eq!(supp.down, Some(3));
    assert_eq!(supp.offense_formation, None);
}

#[test]
fn from_reader_matches_from_json_str() {
    let text = full_play_json().to_string();
    let a = Play::from_reader(text.as_bytes()).unwrap();
    let b = Play::from_json_str(&text).unwrap();
    assert_eq!(a.total_frames(), b.total_frames());
    assert_eq!(a.entity_count(), b.entity_count());
    assert_eq!(a.ball_land(), b.ball_land());
}
