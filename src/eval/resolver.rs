use crate::foundation::core::{FrameIndex, Point};
use crate::play::store::{Entity, Play};
use crate::play::track::{PrimarySample, Sample};

/// Which data source produced a resolved position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Provenance {
    /// Exact primary sample at the requested frame.
    Primary,
    /// Exact continuation sample at `frame - throw_frame`.
    Continuation,
    /// Last continuation sample, held after the continuation track ran out.
    ContinuationFrozen,
    /// Last primary sample, held after the throw.
    PrimaryFrozen,
}

impl Provenance {
    pub fn is_frozen(self) -> bool {
        matches!(self, Self::ContinuationFrozen | Self::PrimaryFrozen)
    }

    pub fn is_continuation(self) -> bool {
        matches!(self, Self::Continuation | Self::ContinuationFrozen)
    }
}

/// Position of one entity at one frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ResolvedPosition {
    pub pos: Point,
    /// Heading in degrees; `0.0` when the source carries none.
    pub dir: f64,
    /// Speed in yards per second; `0.0` when the source carries none.
    pub speed: f64,
    pub provenance: Provenance,
}

impl ResolvedPosition {
    fn from_primary(s: &PrimarySample, provenance: Provenance) -> Self {
        Self {
            pos: s.pos,
            dir: s.dir.unwrap_or(0.0),
            speed: s.speed.unwrap_or(0.0),
            provenance,
        }
    }

    fn from_point(pos: Point, provenance: Provenance) -> Self {
        Self {
            pos,
            dir: 0.0,
            speed: 0.0,
            provenance,
        }
    }

    /// Whether a heading indicator is meaningful for this position.
    pub fn has_heading(&self) -> bool {
        self.dir != 0.0
    }
}

/// Resolve `entity` at global `frame`.
///
/// Precedence, first match wins:
/// 1. a primary sample recorded at exactly `frame`;
/// 2. after the throw, the continuation sample at `frame - throw_frame`;
/// 3. after the throw, the last continuation sample once the track has run out;
/// 4. after the throw, the last primary sample.
///
/// Returns `None` when nothing applies; the entity is simply not drawn at that frame.
pub fn resolve_position(play: &Play, entity: &Entity, frame: FrameIndex) -> Option<ResolvedPosition> {
    if let Some(s) = entity.primary.get(frame) {
        return Some(ResolvedPosition::from_primary(s, Provenance::Primary));
    }

    let throw = play.throw_frame();
    if frame <= throw {
        return None;
    }

    if let Some(cont) = &entity.continuation {
        let rel = FrameIndex(frame.0 - throw.0);
        if let Some(s) = cont.get(rel) {
            return Some(ResolvedPosition::from_point(
                s.point(),
                Provenance::Continuation,
            ));
        }
        match cont.last() {
            Some(last) if last.frame_id < rel => {
                return Some(ResolvedPosition::from_point(
                    last.point(),
                    Provenance::ContinuationFrozen,
                ));
            }
            _ => {}
        }
    }

    entity
        .primary
        .last()
        .map(|s| ResolvedPosition::from_primary(s, Provenance::PrimaryFrozen))
}

#[cfg(test)]
#[path = "../../tests/unit/eval/resolver.rs"]
mod tests;
