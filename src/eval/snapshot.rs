use std::collections::BTreeMap;

use crate::eval::annotations::{
    CoverageArrow, PassMarker, coverage_arrows, line_of_scrimmage, pass_marker,
};
use crate::eval::ball::{BallFlight, BallState};
use crate::eval::captions::{Captions, captions};
use crate::eval::resolver::{ResolvedPosition, resolve_position};
use crate::eval::trail::{Trail, trail_at};
use crate::foundation::core::{FrameIndex, Point};
use crate::foundation::error::{SnaplineError, SnaplineResult};
use crate::play::model::{PlayDirection, Side};
use crate::play::store::{EntityId, Play};

/// Frames of ball path kept behind the throw when drawing the trajectory.
pub const BALL_TRAJECTORY_MAX_FRAMES: u32 = 10;

/// Display toggles. They only filter what a snapshot contains; resolved positions never change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DisplayToggles {
    pub show_trails: bool,
    pub show_names: bool,
    pub show_ball_trajectory: bool,
    pub show_output_players: bool,
}

impl Default for DisplayToggles {
    fn default() -> Self {
        Self {
            show_trails: true,
            show_names: true,
            show_ball_trajectory: true,
            show_output_players: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// One entity as it should be drawn at the snapshot frame.
pub struct EntityView {
    pub id: EntityId,
    /// `None` for players that only appear after the throw.
    pub side: Option<Side>,
    pub position: Option<String>,
    pub resolved: ResolvedPosition,
    /// Present when names are toggled on.
    pub label: Option<String>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Fully resolved, renderer-ready world state for one frame.
pub struct SceneSnapshot {
    pub game_id: u64,
    pub play_id: u64,
    pub direction: PlayDirection,
    pub frame: FrameIndex,
    pub total_frames: FrameIndex,
    pub throw_frame: FrameIndex,
    /// Entities with a resolvable position at this frame.
    pub entities: BTreeMap<EntityId, EntityView>,
    pub ball: BallState,
    /// Non-empty trails, only when trails are toggled on.
    pub trails: BTreeMap<EntityId, Trail>,
    /// Ball path since release, only when trails and the trajectory are toggled on.
    pub ball_trajectory: Vec<Point>,
    pub coverage_arrows: Vec<CoverageArrow>,
    pub line_of_scrimmage: Option<f64>,
    pub pass_marker: Option<PassMarker>,
    pub captions: Captions,
}

/// Stateless builder from play data to per-frame snapshots.
pub struct SceneBuilder;

impl SceneBuilder {
    #[tracing::instrument(skip(play, toggles), fields(play_id = play.play_id()))]
    /// Build the snapshot for `frame`, which must lie in `[1, total_frames]`.
    pub fn build(
        play: &Play,
        frame: FrameIndex,
        toggles: &DisplayToggles,
    ) -> SnaplineResult<SceneSnapshot> {
        if !play.frames().contains(frame) {
            return Err(SnaplineError::validation(format!(
                "frame {frame} is out of bounds [1, {}]",
                play.total_frames()
            )));
        }

        let mut entities = BTreeMap::new();
        let mut trails = BTreeMap::new();
        for entity in play.entities() {
            if entity.is_continuation_only() && !toggles.show_output_players {
                continue;
            }

            if let Some(resolved) = resolve_position(play, entity, frame) {
                let view = EntityView {
                    id: entity.id.clone(),
                    side: entity.side(),
                    position: entity.roster.as_ref().map(|r| r.position.clone()),
                    resolved,
                    label: toggles.show_names.then(|| entity.label()),
                };
                entities.insert(entity.id.clone(), view);
            }

            if toggles.show_trails {
                let trail = trail_at(play, entity, frame);
                if !trail.is_empty() {
                    trails.insert(entity.id.clone(), trail);
                }
            }
        }

        let flight = BallFlight::for_play(play);
        let ball = flight.sample(frame);
        let ball_trajectory = if toggles.show_trails && toggles.show_ball_trajectory {
            let path = flight.path_until(frame, BALL_TRAJECTORY_MAX_FRAMES);
            if path.len() >= 2 { path } else { Vec::new() }
        } else {
            Vec::new()
        };

        Ok(SceneSnapshot {
            game_id: play.game_id(),
            play_id: play.play_id(),
            direction: play.direction(),
            frame,
            total_frames: play.total_frames(),
            throw_frame: play.throw_frame(),
            entities,
            ball,
            trails,
            ball_trajectory,
            coverage_arrows: coverage_arrows(play, frame),
            line_of_scrimmage: line_of_scrimmage(play),
            pass_marker: pass_marker(play, frame, ball.pos),
            captions: captions(play, frame),
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/snapshot.rs"]
mod tests;
