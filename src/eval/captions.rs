use crate::foundation::core::{FrameIndex, Fps};
use crate::play::model::Supplementary;
use crate::play::store::Play;

/// Display strings a renderer may show verbatim.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct Captions {
    /// `"Frame: N / Total"`.
    pub frame: String,
    /// `"Time to Throw: X.Xs"`, stops counting at the throw frame.
    pub time_to_throw: String,
    pub coverage: Option<String>,
    pub description: Option<String>,
    pub scoreboard: Option<Scoreboard>,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct Scoreboard {
    pub visitor: Option<TeamScore>,
    pub home: Option<TeamScore>,
    /// e.g. `"3rd & 7"`.
    pub down_distance: Option<String>,
    /// e.g. `"Q2"`.
    pub quarter: Option<String>,
    pub game_clock: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct TeamScore {
    pub abbr: String,
    pub score: u32,
}

pub fn captions(play: &Play, frame: FrameIndex) -> Captions {
    let supp = play.supplementary();
    Captions {
        frame: frame_label(frame, play.total_frames()),
        time_to_throw: format!("Time to Throw: {:.1}s", time_to_throw_secs(play, frame)),
        coverage: supp.map(coverage_label),
        description: supp.and_then(|s| s.play_description.clone()),
        scoreboard: supp.map(scoreboard),
    }
}

pub fn frame_label(frame: FrameIndex, total: FrameIndex) -> String {
    format!("Frame: {frame} / {total}")
}

/// Seconds elapsed since the snap, frozen once the ball is thrown.
pub fn time_to_throw_secs(play: &Play, frame: FrameIndex) -> f64 {
    let effective = frame.min(play.throw_frame());
    Fps::TRACKING.frames_to_secs(effective.0.saturating_sub(1))
}

/// `COVER_3_ZONE` -> `Cover 3 Zone`.
pub fn title_case_code(code: &str) -> String {
    code.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn coverage_label(supp: &Supplementary) -> String {
    fn non_empty(c: &Option<String>) -> Option<&str> {
        c.as_deref().filter(|c| !c.is_empty())
    }

    let code = non_empty(&supp.team_coverage_type)
        .or(non_empty(&supp.team_coverage_man_zone))
        .unwrap_or("Unknown");
    format!("Coverage: {}", title_case_code(code))
}

/// English ordinal: 1st, 2nd, 3rd, 4th, 11th, 22nd, ...
pub fn ordinal(n: u32) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

pub fn scoreboard(supp: &Supplementary) -> Scoreboard {
    let team = |abbr: &Option<String>, score: Option<u32>| {
        abbr.as_ref().map(|abbr| TeamScore {
            abbr: abbr.clone(),
            score: score.unwrap_or(0),
        })
    };
    Scoreboard {
        visitor: team(&supp.visitor_team_abbr, supp.pre_snap_visitor_score),
        home: team(&supp.home_team_abbr, supp.pre_snap_home_score),
        down_distance: match (supp.down, supp.yards_to_go) {
            (Some(down), Some(togo)) => Some(format!("{} & {togo}", ordinal(down))),
            _ => None,
        },
        quarter: supp.quarter.map(|q| format!("Q{q}")),
        game_clock: supp.game_clock.clone().filter(|c| !c.is_empty()),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/captions.rs"]
mod tests;
