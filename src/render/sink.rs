use crate::eval::snapshot::SceneSnapshot;
use crate::foundation::core::FrameIndex;
use crate::foundation::error::SnaplineResult;
use crate::play::model::PlayDirection;
use crate::play::store::Play;

/// Play-level facts handed to a [`SceneSink`] when a play is loaded.
#[derive(Clone, Debug, PartialEq)]
pub struct SinkConfig {
    pub game_id: u64,
    pub play_id: u64,
    pub direction: PlayDirection,
    pub total_frames: FrameIndex,
    pub throw_frame: FrameIndex,
}

impl SinkConfig {
    pub fn for_play(play: &Play) -> Self {
        Self {
            game_id: play.game_id(),
            play_id: play.play_id(),
            direction: play.direction(),
            total_frames: play.total_frames(),
            throw_frame: play.throw_frame(),
        }
    }
}

/// Renderer adapter fed by the playback engine.
///
/// `begin` is called once per loaded play, then `present` once per frame change. Sinks only
/// receive plain data; they never reach back into the engine.
pub trait SceneSink {
    /// Called when a new play replaces the previous one.
    fn begin(&mut self, cfg: SinkConfig) -> SnaplineResult<()>;
    /// Draw one snapshot.
    fn present(&mut self, snapshot: &SceneSnapshot) -> SnaplineResult<()>;
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    pub(crate) snapshots: Vec<SceneSnapshot>,
}

impl InMemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration captured by the last `begin`, if any.
    pub fn config(&self) -> Option<&SinkConfig> {
        self.cfg.as_ref()
    }

    /// Snapshots presented since the last `begin`, in order.
    pub fn snapshots(&self) -> &[SceneSnapshot] {
        &self.snapshots
    }

    /// Frame numbers presented since the last `begin`, in order.
    pub fn frames(&self) -> Vec<FrameIndex> {
        self.snapshots.iter().map(|s| s.frame).collect()
    }
}

impl SceneSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> SnaplineResult<()> {
        self.cfg = Some(cfg);
        self.snapshots.clear();
        Ok(())
    }

    fn present(&mut self, snapshot: &SceneSnapshot) -> SnaplineResult<()> {
        self.snapshots.push(snapshot.clone());
        Ok(())
    }
}

impl<K: SceneSink + ?Sized> SceneSink for &mut K {
    fn begin(&mut self, cfg: SinkConfig) -> SnaplineResult<()> {
        (**self).begin(cfg)
    }

    fn present(&mut self, snapshot: &SceneSnapshot) -> SnaplineResult<()> {
        (**self).present(snapshot)
    }
}
