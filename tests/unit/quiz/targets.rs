use super::*;
use crate::test_fixtures::{full_play, full_play_json, short_play};

#[test]
fn eligible_receivers_exclude_quarterback_defense_and_unrostered() {
    let play = full_play();
    let ids: Vec<String> = eligible_receivers(&play)
        .into_iter()
        .map(|r| r.id.0)
        .collect();
    assert_eq!(ids, vec!["2", "3"]);
}

#[test]
fn eligible_receivers_carry_name_and_position() {
    let play = full_play();
    let r = &eligible_receivers(&play)[1];
    assert_eq!(r.name, "Sam Wideout");
    assert_eq!(r.position, "TE");
}

#[test]
fn target_is_nearest_final_position_to_landing() {
    let play = full_play();
    let t = targeted_receiver(&play).unwrap();
    assert_eq!(t.id, EntityId::from("2"));
    assert_eq!(t.name, "Alex Receiver");
}

#[test]
fn unrostered_target_gets_placeholder_name() {
    let mut v = full_play_json();
    v["ball_land_x"] = serde_json::json!(57.0);
    let play = Play::from_json_str(&v.to_string()).unwrap();
    let t = targeted_receiver(&play).unwrap();
    assert_eq!(t.id, EntityId::from("9"));
    assert_eq!(t.name, "Player 9");
    assert_eq!(t.position, "Unknown");
}

#[test]
fn description_is_used_without_post_throw_data() {
    let mut v = full_play_json();
    v["output_players"] = serde_json::json!({});
    let play = Play::from_json_str(&v.to_string()).unwrap();
    let t = targeted_receiver(&play).unwrap();
    assert_eq!(t.id, EntityId::from("2"));
}

#[test]
fn no_data_means_no_target() {
    let mut v = crate::test_fixtures::short_play_json();
    v["output_players"] = serde_json::json!({});
    let play = Play::from_json_str(&v.to_string()).unwrap();
    assert!(targeted_receiver(&play).is_none());
    assert!(targeted_receiver(&short_play()).is_some());
}

#[test]
fn pass_target_parsing() {
    assert_eq!(
        parse_pass_target("(Shotgun) J.Hurts pass short right to D.Smith to PHI 40 for 5 yards"),
        Some("D.Smith")
    );
    assert_eq!(
        parse_pass_target("J.Allen pass deep left intended for S.Diggs INTERCEPTED"),
        None
    );
    assert_eq!(parse_pass_target("pass incomplete short middle to T.Kelce."), Some("T.Kelce"));
    // "to" must be followed by whitespace and an initial
    assert_eq!(parse_pass_target("pass toward the sideline to 12"), None);
    assert_eq!(parse_pass_target("J.Love sacked at GB 20"), None);
}
