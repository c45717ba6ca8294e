use super::*;
use crate::test_fixtures::{full_play, short_play};

#[test]
fn frame_label_shows_total() {
    assert_eq!(frame_label(FrameIndex(7), FrameIndex(35)), "Frame: 7 / 35");
}

#[test]
fn time_to_throw_counts_tenths_and_freezes_at_throw() {
    let play = full_play();
    assert_eq!(time_to_throw_secs(&play, FrameIndex(1)), 0.0);
    assert!((time_to_throw_secs(&play, FrameIndex(4)) - 0.3).abs() < 1e-9);
    assert!((time_to_throw_secs(&play, FrameIndex(6)) - 0.5).abs() < 1e-9);
    assert!((time_to_throw_secs(&play, FrameIndex(14)) - 0.5).abs() < 1e-9);

    let c = captions(&play, FrameIndex(12));
    assert_eq!(c.time_to_throw, "Time to Throw: 0.5s");
    assert_eq!(c.frame, "Frame: 12 / 14");
}

#[test]
fn codes_are_title_cased() {
    assert_eq!(title_case_code("COVER_3_ZONE"), "Cover 3 Zone");
    assert_eq!(title_case_code("man"), "Man");
    assert_eq!(title_case_code("2_MAN__X"), "2 Man  X");
}

#[test]
fn coverage_prefers_type_then_man_zone() {
    let mut supp = Supplementary {
        team_coverage_type: Some("COVER_1_MAN".to_owned()),
        team_coverage_man_zone: Some("MAN_COVERAGE".to_owned()),
        ..Default::default()
    };
    assert_eq!(coverage_label(&supp), "Coverage: Cover 1 Man");

    supp.team_coverage_type = Some(String::new());
    assert_eq!(coverage_label(&supp), "Coverage: Man Coverage");

    supp.team_coverage_man_zone = None;
    assert_eq!(coverage_label(&supp), "Coverage: Unknown");
}

#[test]
fn ordinals() {
    let got: Vec<String> = [1, 2, 3, 4, 11, 12, 13, 21, 22, 101].map(ordinal).to_vec();
    assert_eq!(
        got,
        ["1st", "2nd", "3rd", "4th", "11th", "12th", "13th", "21st", "22nd", "101st"]
    );
}

#[test]
fn scoreboard_from_supplementary() {
    let play = full_play();
    let board = captions(&play, FrameIndex(1)).scoreboard.unwrap();
    assert_eq!(
        board.visitor,
        Some(TeamScore {
            abbr: "PHI".to_owned(),
            score: 10
        })
    );
    assert_eq!(board.home.unwrap().score, 7);
    assert_eq!(board.down_distance.as_deref(), Some("3rd & 7"));
    assert_eq!(board.quarter.as_deref(), Some("Q2"));
    assert_eq!(board.game_clock.as_deref(), Some("04:12"));
}

#[test]
fn sparse_scoreboard_leaves_gaps() {
    let supp = Supplementary {
        home_team_abbr: Some("KC".to_owned()),
        down: Some(2),
        ..Default::default()
    };
    let board = scoreboard(&supp);
    assert_eq!(board.home.unwrap().score, 0);
    assert!(board.visitor.is_none());
    assert!(board.down_distance.is_none());
    assert!(board.quarter.is_none());
}

#[test]
fn plays_without_metadata_have_only_frame_captions() {
    let c = captions(&short_play(), FrameIndex(35));
    assert_eq!(c.frame, "Frame: 35 / 35");
    assert_eq!(c.time_to_throw, "Time to Throw: 2.9s");
    assert!(c.coverage.is_none());
    assert!(c.description.is_none());
    assert!(c.scoreboard.is_none());
}
