use super::*;
use crate::test_fixtures::{full_play, full_play_json, short_play};

fn with_supp(patch: serde_json::Value) -> Play {
    let mut v = full_play_json();
    for (k, val) in patch.as_object().unwrap() {
        v["supplementary"][k] = val.clone();
    }
    Play::from_json_str(&v.to_string()).unwrap()
}

#[test]
fn pass_result_codes_are_classified() {
    assert_eq!(classify_pass_result("C"), Some(PassOutcome::Complete));
    assert_eq!(classify_pass_result(" complete "), Some(PassOutcome::Complete));
    assert_eq!(classify_pass_result("I"), Some(PassOutcome::Incomplete));
    assert_eq!(classify_pass_result("INCOMPLETE"), Some(PassOutcome::Incomplete));
    assert_eq!(
        classify_pass_result("PASS INCOMPLETE DEEP"),
        Some(PassOutcome::Incomplete)
    );
    assert_eq!(classify_pass_result("S"), None);
    assert_eq!(classify_pass_result(""), None);
}

#[test]
fn coverage_arrows_only_on_first_frame_for_defenders() {
    let play = full_play();
    let arrows = coverage_arrows(&play, FrameIndex(1));
    assert_eq!(arrows.len(), 1);
    assert_eq!(arrows[0].entity, EntityId::from("4"));
    assert_eq!(arrows[0].target, Point::new(47.0, 31.0));

    assert!(coverage_arrows(&play, FrameIndex(2)).is_empty());
}

#[test]
fn coverage_arrows_need_supplementary_data() {
    let mut v = full_play_json();
    v.as_object_mut().unwrap().remove("supplementary");
    let play = Play::from_json_str(&v.to_string()).unwrap();
    assert!(coverage_arrows(&play, FrameIndex(1)).is_empty());
}

#[test]
fn line_of_scrimmage_derives_from_relative_yardline() {
    assert_eq!(line_of_scrimmage(&full_play()), Some(45.0));
    assert_eq!(
        line_of_scrimmage(&with_supp(serde_json::json!({ "yardline_number": 50 }))),
        Some(60.0)
    );
    assert!(line_of_scrimmage(&short_play()).is_none());
}

#[test]
fn absolute_yardline_takes_precedence() {
    let mut v = full_play_json();
    v["absolute_yardline"] = serde_json::json!(72.5);
    let play = Play::from_json_str(&v.to_string()).unwrap();
    assert_eq!(line_of_scrimmage(&play), Some(72.5));
}

#[test]
fn line_of_scrimmage_needs_yardline_side() {
    let play = with_supp(serde_json::json!({ "yardline_side": null }));
    assert!(line_of_scrimmage(&play).is_none());
}

#[test]
fn pass_marker_only_on_last_frame() {
    let play = full_play();
    let ball = Point::new(52.0, 30.0);
    assert!(pass_marker(&play, FrameIndex(13), ball).is_none());
    let m = pass_marker(&play, FrameIndex(14), ball).unwrap();
    assert_eq!(m.outcome, PassOutcome::Complete);
    assert_eq!(m.anchor, ball);

    let play = with_supp(serde_json::json!({ "pass_result": "I" }));
    let m = pass_marker(&play, FrameIndex(14), ball).unwrap();
    assert_eq!(m.outcome, PassOutcome::Incomplete);

    let play = with_supp(serde_json::json!({ "pass_result": "IN" }));
    assert!(pass_marker(&play, FrameIndex(14), ball).is_none());
}
