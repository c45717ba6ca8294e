use crate::foundation::core::Point;
use crate::play::model::Side;
use crate::play::store::{Entity, EntityId, Play};

/// A player the quarterback could throw to.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Receiver {
    pub id: EntityId,
    pub name: String,
    pub position: String,
}

impl Receiver {
    fn from_entity(e: &Entity) -> Self {
        match &e.roster {
            Some(r) => Self {
                id: e.id.clone(),
                name: r.name.clone(),
                position: r.position.clone(),
            },
            None => Self {
                id: e.id.clone(),
                name: format!("Player {}", e.id),
                position: "Unknown".to_owned(),
            },
        }
    }
}

/// Offensive players other than the quarterback, in entity order.
pub fn eligible_receivers(play: &Play) -> Vec<Receiver> {
    play.entities()
        .filter(|e| {
            e.roster
                .as_ref()
                .is_some_and(|r| r.side == Side::Offense && r.position != "QB")
        })
        .map(Receiver::from_entity)
        .collect()
}

/// The player the ball was actually thrown to.
///
/// Picks the post-throw player whose final position is nearest the landing point. When no
/// post-throw data exists, falls back to the `pass ... to X.Name` phrase of the play description.
pub fn targeted_receiver(play: &Play) -> Option<Receiver> {
    nearest_to_landing(play).or_else(|| from_description(play))
}

fn nearest_to_landing(play: &Play) -> Option<Receiver> {
    let land = play.ball_land();
    let mut best: Option<(&Entity, f64)> = None;
    for entity in play.entities() {
        let Some(last) = entity.continuation.as_ref().and_then(|c| c.last()) else {
            continue;
        };
        let d = distance(last.pos, land);
        if best.is_none_or(|(_, bd)| d < bd) {
            best = Some((entity, d));
        }
    }
    best.map(|(e, _)| Receiver::from_entity(e))
}

fn distance(a: Point, b: Point) -> f64 {
    (a - b).hypot()
}

fn from_description(play: &Play) -> Option<Receiver> {
    let desc = play.supplementary()?.play_description.as_deref()?;
    let target = parse_pass_target(desc)?;
    let mut found = None;
    for entity in play.entities() {
        let Some(r) = &entity.roster else { continue };
        if r.side != Side::Offense {
            continue;
        }
        let last_name = r.name.split(' ').next_back().unwrap_or("");
        if !last_name.is_empty() && target.contains(last_name) {
            found = Some(Receiver::from_entity(entity));
        }
    }
    found
}

/// Extract the abbreviated receiver name from `"... pass short left to J.Smith ..."`.
///
/// Looks for the first `to` after the first `pass` that is followed by whitespace and an
/// `X.Name` token (capital initial, dot, letters).
pub fn parse_pass_target(desc: &str) -> Option<&str> {
    let start = desc.find("pass")? + "pass".len();
    let rest = &desc[start..];
    for (i, _) in rest.match_indices("to") {
        if let Some(token) = name_token_after(&rest[i + 2..]) {
            return Some(token);
        }
    }
    None
}

fn name_token_after(s: &str) -> Option<&str> {
    let trimmed = s.trim_start();
    if trimmed.len() == s.len() {
        return None;
    }
    let bytes = trimmed.as_bytes();
    if bytes.len() < 3 || !bytes[0].is_ascii_uppercase() || bytes[1] != b'.' {
        return None;
    }
    let letters = bytes[2..]
        .iter()
        .take_while(|b| b.is_ascii_alphabetic())
        .count();
    if letters == 0 {
        return None;
    }
    Some(&trimmed[..2 + letters])
}

#[cfg(test)]
#[path = "../../tests/unit/quiz/targets.rs"]
mod tests;
