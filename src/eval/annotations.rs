use crate::foundation::core::{FrameIndex, Point};
use crate::play::model::Side;
use crate::play::store::{EntityId, Play};

/// Arrow from the coverage caption to a defender, shown on the first frame only.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct CoverageArrow {
    pub entity: EntityId,
    pub target: Point,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PassOutcome {
    Complete,
    Incomplete,
}

/// Result badge drawn above the ball on the last frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct PassMarker {
    pub outcome: PassOutcome,
    pub anchor: Point,
}

/// Classify a free-form `pass_result` code.
pub fn classify_pass_result(code: &str) -> Option<PassOutcome> {
    let code = code.trim().to_ascii_uppercase();
    match code.as_str() {
        "C" | "COMP" | "COMPLETE" | "COMPLETION" => return Some(PassOutcome::Complete),
        "I" | "INC" | "INCOMPLETE" | "INCOMPLETION" => return Some(PassOutcome::Incomplete),
        _ => {}
    }
    if code.contains("INCOMPLETE") {
        Some(PassOutcome::Incomplete)
    } else if code.contains("COMPLETE") {
        Some(PassOutcome::Complete)
    } else {
        None
    }
}

pub fn coverage_arrows(play: &Play, frame: FrameIndex) -> Vec<CoverageArrow> {
    if frame != FrameIndex::FIRST || play.supplementary().is_none() {
        return Vec::new();
    }
    play.entities()
        .filter(|e| e.side() == Some(Side::Defense))
        .filter_map(|e| {
            let s = e.primary.get(FrameIndex::FIRST)?;
            Some(CoverageArrow {
                entity: e.id.clone(),
                target: s.pos,
            })
        })
        .collect()
}

/// Line of scrimmage in absolute field x (0..120).
///
/// Prefers the play's absolute yardline; otherwise derives it from the relative yardline number,
/// counting from the left goal line below midfield and from the right one at or above it.
pub fn line_of_scrimmage(play: &Play) -> Option<f64> {
    let supp = play.supplementary()?;
    supp.yardline_side.as_ref()?;
    let number = supp.yardline_number?;
    if let Some(abs) = play.absolute_yardline() {
        return Some(abs);
    }
    let number = f64::from(number);
    Some(if number < 50.0 {
        10.0 + number
    } else {
        110.0 - number
    })
}

pub fn pass_marker(play: &Play, frame: FrameIndex, ball_pos: Point) -> Option<PassMarker> {
    if frame != play.total_frames() {
        return None;
    }
    let code = play.supplementary()?.pass_result.as_deref()?;
    Some(PassMarker {
        outcome: classify_pass_result(code)?,
        anchor: ball_pos,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/eval/annotations.rs"]
mod tests;
