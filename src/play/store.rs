use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context as _;

use crate::foundation::core::{FrameIndex, FrameRange, Point};
use crate::foundation::error::{SnaplineError, SnaplineResult};
use crate::play::model::{
    OutputPlayerDef, PlayDef, PlayDirection, PlayerDef, Side, Supplementary,
};
use crate::play::track::{ContinuationSample, PrimarySample, Track};

/// Stable tracked-player identifier (the feed's `nfl_id`, kept as text).
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct EntityId(pub String);

impl EntityId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntityId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// Roster metadata. Players introduced only after the throw have none.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Roster {
    pub name: String,
    pub position: String,
    pub side: Side,
}

impl Roster {
    /// Second whitespace-separated token of the name, or the whole name.
    pub fn last_name(&self) -> &str {
        self.name.split(' ').nth(1).unwrap_or(&self.name)
    }
}

/// One tracked player and its two data sources.
#[derive(Clone, Debug)]
pub struct Entity {
    pub id: EntityId,
    pub roster: Option<Roster>,
    pub primary: Track<PrimarySample>,
    /// `None` when the player has no post-throw samples at all.
    pub continuation: Option<Track<ContinuationSample>>,
}

impl Entity {
    pub fn side(&self) -> Option<Side> {
        self.roster.as_ref().map(|r| r.side)
    }

    /// True for players that only exist in post-throw data.
    pub fn is_continuation_only(&self) -> bool {
        self.roster.is_none()
    }

    /// Short on-field label: last name for rostered players, `P<id>` otherwise.
    pub fn label(&self) -> String {
        match &self.roster {
            Some(r) => r.last_name().to_owned(),
            None => format!("P{}", self.id),
        }
    }
}

/// A loaded, validated play. Immutable for the duration of playback.
#[derive(Clone, Debug)]
pub struct Play {
    game_id: u64,
    play_id: u64,
    direction: PlayDirection,
    max_frame: FrameIndex,
    throw_frame: FrameIndex,
    total_frames: FrameIndex,
    ball_throw: Point,
    ball_land: Point,
    absolute_yardline: Option<f64>,
    supplementary: Option<Supplementary>,
    entities: BTreeMap<EntityId, Entity>,
}

impl Play {
    /// Parse a play from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> SnaplineResult<Self> {
        let def: PlayDef = serde_json::from_reader(r)
            .map_err(|e| SnaplineError::serde(format!("parse play JSON: {e}")))?;
        Self::from_def(def)
    }

    /// Parse a play from a JSON string.
    pub fn from_json_str(s: &str) -> SnaplineResult<Self> {
        let def: PlayDef = serde_json::from_str(s)
            .map_err(|e| SnaplineError::serde(format!("parse play JSON: {e}")))?;
        Self::from_def(def)
    }

    /// Parse a play from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> SnaplineResult<Self> {
        let path = path.as_ref();
        let f = File::open(path)
            .with_context(|| format!("open play JSON '{}'", path.display()))?;
        Self::from_reader(BufReader::new(f))
    }

    /// Validate a raw play document and build the entity store.
    #[tracing::instrument(skip(def), fields(game_id = def.game_id, play_id = def.play_id))]
    pub fn from_def(def: PlayDef) -> SnaplineResult<Self> {
        if def.max_frame == 0 {
            return Err(SnaplineError::validation("max_frame must be >= 1"));
        }
        if def.throw_frame == 0 || def.throw_frame > def.max_frame {
            return Err(SnaplineError::validation(format!(
                "throw_frame {} must be in [1, max_frame={}]",
                def.throw_frame, def.max_frame
            )));
        }
        let ball_throw = finite_point(def.ball_throw_x, def.ball_throw_y, "ball_throw")?;
        let ball_land = finite_point(def.ball_land_x, def.ball_land_y, "ball_land")?;
        if def.absolute_yardline.is_some_and(|y| !y.is_finite()) {
            return Err(SnaplineError::validation("absolute_yardline must be finite"));
        }

        let max_frame = FrameIndex(def.max_frame);
        let mut entities = BTreeMap::new();
        for (id, player) in &def.players {
            let id = EntityId(id.clone());
            let entity = Entity {
                roster: Some(Roster {
                    name: player.name.clone(),
                    position: player.position.clone(),
                    side: player.side,
                }),
                primary: build_primary(&id, player, max_frame)?,
                continuation: None,
                id: id.clone(),
            };
            entities.insert(id, entity);
        }

        for (id, output) in &def.output_players {
            let id = EntityId(id.clone());
            let continuation = build_continuation(&id, output)?;
            match entities.get_mut(&id) {
                Some(entity) => entity.continuation = continuation,
                None => {
                    entities.insert(
                        id.clone(),
                        Entity {
                            id,
                            roster: None,
                            primary: Track::default(),
                            continuation,
                        },
                    );
                }
            }
        }

        let max_continuation = entities
            .values()
            .filter_map(|e| e.continuation.as_ref()?.max_frame_id())
            .map(|f| f.0)
            .max()
            .unwrap_or(0);
        // Frame ranges are half-open, so u32::MAX itself is never a playable frame.
        let total_frames = max_frame
            .0
            .checked_add(max_continuation)
            .filter(|t| *t < u32::MAX)
            .map(FrameIndex)
            .ok_or_else(|| {
                SnaplineError::validation(format!(
                    "max_frame {max_frame} plus continuation length {max_continuation} exceeds the frame limit"
                ))
            })?;

        tracing::debug!(
            entities = entities.len(),
            total_frames = total_frames.0,
            "play loaded"
        );

        Ok(Self {
            game_id: def.game_id,
            play_id: def.play_id,
            direction: def.play_direction,
            max_frame,
            throw_frame: FrameIndex(def.throw_frame),
            total_frames,
            ball_throw,
            ball_land,
            absolute_yardline: def.absolute_yardline,
            supplementary: def.supplementary,
            entities,
        })
    }

    pub fn game_id(&self) -> u64 {
        self.game_id
    }

    pub fn play_id(&self) -> u64 {
        self.play_id
    }

    pub fn direction(&self) -> PlayDirection {
        self.direction
    }

    /// Last primary frame.
    pub fn max_frame(&self) -> FrameIndex {
        self.max_frame
    }

    pub fn throw_frame(&self) -> FrameIndex {
        self.throw_frame
    }

    /// `max_frame` plus the longest continuation track across all entities.
    pub fn total_frames(&self) -> FrameIndex {
        self.total_frames
    }

    /// Frame at which the ball reaches its landing point.
    pub fn landing_frame(&self) -> FrameIndex {
        self.total_frames
    }

    /// Every playable frame, `[1, total_frames]`.
    pub fn frames(&self) -> FrameRange {
        FrameRange::through(self.total_frames)
    }

    pub fn ball_throw(&self) -> Point {
        self.ball_throw
    }

    pub fn ball_land(&self) -> Point {
        self.ball_land
    }

    pub fn absolute_yardline(&self) -> Option<f64> {
        self.absolute_yardline
    }

    pub fn supplementary(&self) -> Option<&Supplementary> {
        self.supplementary.as_ref()
    }

    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.entities.values()
    }

    pub fn entity(&self, id: &EntityId) -> Option<&Entity> {
        self.entities.get(id)
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }
}

fn finite_point(x: f64, y: f64, what: &str) -> SnaplineResult<Point> {
    if !x.is_finite() || !y.is_finite() {
        return Err(SnaplineError::validation(format!(
            "{what} coordinates must be finite"
        )));
    }
    Ok(Point::new(x, y))
}

fn build_primary(
    id: &EntityId,
    player: &PlayerDef,
    max_frame: FrameIndex,
) -> SnaplineResult<Track<PrimarySample>> {
    let mut samples = Vec::with_capacity(player.frames.len());
    for f in &player.frames {
        if f.frame_id == 0 || f.frame_id > max_frame.0 {
            return Err(SnaplineError::validation(format!(
                "player {id}: frame_id {} outside [1, {max_frame}]",
                f.frame_id
            )));
        }
        let pos = finite_point(f.x, f.y, "player frame")?;
        samples.push(PrimarySample {
            frame_id: FrameIndex(f.frame_id),
            pos,
            dir: f.dir.filter(|v| v.is_finite()),
            speed: f.s.filter(|v| v.is_finite()),
        });
    }
    Track::from_samples(samples).map_err(|e| in_track(format!("player {id}"), e))
}

fn build_continuation(
    id: &EntityId,
    output: &OutputPlayerDef,
) -> SnaplineResult<Option<Track<ContinuationSample>>> {
    if output.frames.is_empty() {
        return Ok(None);
    }
    let mut samples = Vec::with_capacity(output.frames.len());
    for f in &output.frames {
        if f.frame_id == 0 {
            return Err(SnaplineError::validation(format!(
                "output player {id}: frame_id must be >= 1"
            )));
        }
        samples.push(ContinuationSample {
            frame_id: FrameIndex(f.frame_id),
            pos: finite_point(f.x, f.y, "output frame")?,
        });
    }
    Track::from_samples(samples)
        .map(Some)
        .map_err(|e| in_track(format!("output player {id}"), e))
}

/// Prefix a track error with its owner, keeping the variant.
fn in_track(owner: String, err: SnaplineError) -> SnaplineError {
    match err {
        SnaplineError::Validation(msg) => SnaplineError::validation(format!("{owner}: {msg}")),
        other => other,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/play/store.rs"]
mod tests;
