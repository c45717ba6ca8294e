use crate::foundation::core::{FrameIndex, Point};
use crate::play::store::{Entity, Play};
use crate::play::track::Sample;

/// Fewer points than this draw nothing.
pub const MIN_TRAIL_POINTS: usize = 2;

/// Movement history of one entity up to a frame.
///
/// The two paths come from different data sources and are never joined.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct Trail {
    /// Primary samples with `frame_id <= min(frame, max_frame)`.
    pub primary: Vec<Point>,
    /// Continuation samples with relative id in `[1, frame - throw_frame]`.
    pub continuation: Vec<Point>,
}

impl Trail {
    pub fn is_empty(&self) -> bool {
        self.primary.is_empty() && self.continuation.is_empty()
    }
}

pub fn primary_trail(play: &Play, entity: &Entity, frame: FrameIndex) -> Vec<Point> {
    let until = frame.min(play.max_frame());
    collect_path(entity.primary.through(until).iter().map(Sample::point))
}

pub fn continuation_trail(play: &Play, entity: &Entity, frame: FrameIndex) -> Vec<Point> {
    let throw = play.throw_frame();
    let Some(cont) = &entity.continuation else {
        return Vec::new();
    };
    if frame <= throw {
        return Vec::new();
    }
    let rel = FrameIndex(frame.0 - throw.0);
    collect_path(cont.through(rel).iter().map(Sample::point))
}

pub fn trail_at(play: &Play, entity: &Entity, frame: FrameIndex) -> Trail {
    Trail {
        primary: primary_trail(play, entity, frame),
        continuation: continuation_trail(play, entity, frame),
    }
}

fn collect_path(points: impl Iterator<Item = Point>) -> Vec<Point> {
    let path: Vec<Point> = points.collect();
    if path.len() < MIN_TRAIL_POINTS {
        return Vec::new();
    }
    path
}

#[cfg(test)]
#[path = "../../tests/unit/eval/trail.rs"]
mod tests;
