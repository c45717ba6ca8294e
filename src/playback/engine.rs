use std::time::Duration;

use crate::eval::snapshot::{DisplayToggles, SceneBuilder, SceneSnapshot};
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{SnaplineError, SnaplineResult};
use crate::play::store::Play;
use crate::playback::clock::{DEFAULT_TICK_INTERVAL, FrameClock, TickOutcome};
use crate::playback::scheduler::{ManualScheduler, Scheduler, TimerHandle};
use crate::render::sink::{SceneSink, SinkConfig};

/// Options controlling a [`PlaybackEngine`].
#[derive(Clone, Debug)]
pub struct EngineOpts {
    /// Wall time between frames while playing.
    pub tick_interval: Duration,
    /// Initial display toggles.
    pub toggles: DisplayToggles,
}

impl Default for EngineOpts {
    fn default() -> Self {
        Self {
            tick_interval: DEFAULT_TICK_INTERVAL,
            toggles: DisplayToggles::default(),
        }
    }
}

/// Owns one active play, its frame clock and the renderer adapter.
///
/// Every change of the current frame (tick, seek, reset, load) or of the display toggles rebuilds
/// the scene snapshot and hands it to the sink. The snapshot is the only observable state.
pub struct PlaybackEngine<S: Scheduler, K: SceneSink> {
    play: Play,
    clock: FrameClock,
    toggles: DisplayToggles,
    interval: Duration,
    scheduler: S,
    sink: K,
    snapshot: SceneSnapshot,
}

impl<S: Scheduler, K: SceneSink> PlaybackEngine<S, K> {
    #[tracing::instrument(skip_all, fields(play_id = play.play_id()))]
    /// Create an engine positioned on frame 1 and present that frame.
    pub fn new(play: Play, scheduler: S, mut sink: K, opts: EngineOpts) -> SnaplineResult<Self> {
        if opts.tick_interval.is_zero() {
            return Err(SnaplineError::validation("tick_interval must be > 0"));
        }
        let clock = FrameClock::new(play.total_frames(), opts.tick_interval);
        let snapshot = SceneBuilder::build(&play, clock.current(), &opts.toggles)?;
        sink.begin(SinkConfig::for_play(&play))?;
        sink.present(&snapshot)?;
        Ok(Self {
            play,
            clock,
            toggles: opts.toggles,
            interval: opts.tick_interval,
            scheduler,
            sink,
            snapshot,
        })
    }

    #[tracing::instrument(skip_all, fields(play_id = play.play_id()))]
    /// Replace the active play. Any running timer is cancelled and the clock restarts at frame 1.
    pub fn load(&mut self, play: Play) -> SnaplineResult<()> {
        self.clock.pause(&mut self.scheduler);
        self.clock = FrameClock::new(play.total_frames(), self.interval);
        self.snapshot = SceneBuilder::build(&play, self.clock.current(), &self.toggles)?;
        self.play = play;
        self.sink.begin(SinkConfig::for_play(&self.play))?;
        self.sink.present(&self.snapshot)
    }

    /// Start playback. Returns `false` when already at the last frame or a hold point.
    pub fn play(&mut self) -> bool {
        self.clock.play(&mut self.scheduler)
    }

    pub fn pause(&mut self) {
        self.clock.pause(&mut self.scheduler);
    }

    /// Play when paused, pause when playing. Returns whether playback is now running.
    pub fn toggle_playback(&mut self) -> bool {
        if self.clock.is_playing() {
            self.pause();
            false
        } else {
            self.play()
        }
    }

    /// Stop and rewind to frame 1.
    pub fn reset(&mut self) -> SnaplineResult<()> {
        self.clock.reset(&mut self.scheduler);
        self.refresh()
    }

    /// Jump to `frame`, clamped to `[1, total_frames]`. Returns the frame actually shown.
    pub fn seek(&mut self, frame: FrameIndex) -> SnaplineResult<FrameIndex> {
        let before = self.clock.current();
        let shown = self.clock.seek(frame);
        if shown != before {
            self.refresh()?;
        }
        Ok(shown)
    }

    pub fn set_toggles(&mut self, toggles: DisplayToggles) -> SnaplineResult<()> {
        if toggles == self.toggles {
            return Ok(());
        }
        self.toggles = toggles;
        self.refresh()
    }

    /// Stop automatic advancement on reaching `frame` (or clear with `None`).
    pub fn set_hold(&mut self, frame: Option<FrameIndex>) {
        self.clock.set_hold(frame);
    }

    /// Deliver a timer firing. Handles from cancelled timers are ignored.
    pub fn on_timer(&mut self, handle: TimerHandle) -> SnaplineResult<TickOutcome> {
        let before = self.clock.current();
        let outcome = self.clock.on_tick(handle, &mut self.scheduler);
        if self.clock.current() != before {
            self.refresh()?;
        }
        Ok(outcome)
    }

    fn refresh(&mut self) -> SnaplineResult<()> {
        self.snapshot = SceneBuilder::build(&self.play, self.clock.current(), &self.toggles)?;
        self.sink.present(&self.snapshot)
    }

    pub fn play_data(&self) -> &Play {
        &self.play
    }

    pub fn current_frame(&self) -> FrameIndex {
        self.clock.current()
    }

    pub fn is_playing(&self) -> bool {
        self.clock.is_playing()
    }

    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    /// Snapshot of the current frame.
    pub fn snapshot(&self) -> &SceneSnapshot {
        &self.snapshot
    }

    pub fn toggles(&self) -> DisplayToggles {
        self.toggles
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    pub fn sink(&self) -> &K {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut K {
        &mut self.sink
    }

    pub fn into_parts(self) -> (Play, S, K) {
        (self.play, self.scheduler, self.sink)
    }
}

impl<K: SceneSink> PlaybackEngine<ManualScheduler, K> {
    /// Move virtual time forward by `dt`, delivering every timer firing that falls inside it.
    pub fn advance(&mut self, dt: Duration) -> SnaplineResult<Vec<TickOutcome>> {
        let until = self.scheduler.now() + dt;
        let mut outcomes = Vec::new();
        while let Some(handle) = self.scheduler.pop_due(until) {
            outcomes.push(self.on_timer(handle)?);
        }
        self.scheduler.advance_to(until);
        Ok(outcomes)
    }

    /// Play until the clock stops on its own (last frame or hold point).
    pub fn run_until_stopped(&mut self) -> SnaplineResult<FrameIndex> {
        if !self.is_playing() && !self.play() {
            return Ok(self.current_frame());
        }
        while self.is_playing() {
            self.advance(self.interval)?;
        }
        Ok(self.current_frame())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/playback/engine.rs"]
mod tests;
