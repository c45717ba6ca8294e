//! Snapline is a frame-indexed playback engine for recorded football passing plays.
//!
//! A play carries per-player tracking samples up to the throw, post-throw samples for a subset of
//! players, and a straight-line ball flight. The public API is snapshot-oriented:
//!
//! - Load and validate a [`Play`]
//! - Build a [`SceneSnapshot`] for any frame with [`SceneBuilder`]
//! - Drive a [`PlaybackEngine`] that presents snapshots to a [`SceneSink`]
//! - Run the "pick the receiver" [`QuizSession`] on top of the engine
#![forbid(unsafe_code)]

mod foundation;

pub(crate) mod eval;
pub(crate) mod play;
pub(crate) mod playback;
pub(crate) mod quiz;
pub(crate) mod render;

#[cfg(test)]
#[path = "../tests/unit/fixtures.rs"]
pub(crate) mod test_fixtures;

pub use crate::foundation::core::{Fps, FrameIndex, FrameRange, Point};
pub use crate::foundation::error::{SnaplineError, SnaplineResult};

pub use crate::play::model::{
    FrameDef, OutputFrameDef, OutputPlayerDef, PlayDef, PlayDirection, PlayerDef, Side,
    Supplementary,
};
pub use crate::play::store::{Entity, EntityId, Play, Roster};
pub use crate::play::track::{ContinuationSample, PrimarySample, Sample, Track};

pub use crate::eval::annotations::{
    CoverageArrow, PassMarker, PassOutcome, classify_pass_result, coverage_arrows,
    line_of_scrimmage, pass_marker,
};
pub use crate::eval::ball::{BallFlight, BallPhase, BallState};
pub use crate::eval::captions::{
    Captions, Scoreboard, TeamScore, captions, coverage_label, frame_label, ordinal, scoreboard,
    time_to_throw_secs, title_case_code,
};
pub use crate::eval::resolver::{Provenance, ResolvedPosition, resolve_position};
pub use crate::eval::snapshot::{
    BALL_TRAJECTORY_MAX_FRAMES, DisplayToggles, EntityView, SceneBuilder, SceneSnapshot,
};
pub use crate::eval::trail::{
    MIN_TRAIL_POINTS, Trail, continuation_trail, primary_trail, trail_at,
};

pub use crate::playback::clock::{DEFAULT_TICK_INTERVAL, FrameClock, TickOutcome};
pub use crate::playback::engine::{EngineOpts, PlaybackEngine};
pub use crate::playback::scheduler::{ManualScheduler, Scheduler, TimerHandle};

pub use crate::quiz::session::{QuizAnswer, QuizRound, QuizSession, RoundPhase, decision_frame};
pub use crate::quiz::stats::{
    LEAGUE_ACCURACY_PCT, LEAGUE_DECISION_SECS, LeagueComparison, QuizStats,
};
pub use crate::quiz::targets::{
    Receiver, eligible_receivers, parse_pass_target, targeted_receiver,
};

pub use crate::render::raster::{RasterImage, rasterize_svg, rasterize_svg_to_png};
pub use crate::render::sink::{InMemorySink, SceneSink, SinkConfig};
pub use crate::render::svg::{FIELD_LENGTH, FIELD_WIDTH, SvgRenderOpts, SvgRenderer, SvgSink};
