use std::time::Duration;

use crate::foundation::core::{FrameIndex, FrameRange};
use crate::playback::scheduler::{Scheduler, TimerHandle};

/// Default wall time between frames during playback.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(200);

/// What a timer callback did to the clock.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Moved forward one frame and keeps playing.
    Advanced(FrameIndex),
    /// Reached the last frame and stopped.
    Finished(FrameIndex),
    /// Stopped at the hold frame.
    Held(FrameIndex),
    /// Handle does not belong to the running timer; nothing changed.
    Stale,
}

/// Current frame plus the single playback timer.
///
/// Frames outside `[1, total]` are clamped at the boundary; nothing ever wraps around.
#[derive(Debug)]
pub struct FrameClock {
    range: FrameRange,
    current: FrameIndex,
    interval: Duration,
    timer: Option<TimerHandle>,
    hold_at: Option<FrameIndex>,
}

impl FrameClock {
    pub fn new(total: FrameIndex, interval: Duration) -> Self {
        Self {
            range: FrameRange::through(total),
            current: FrameIndex::FIRST,
            interval,
            timer: None,
            hold_at: None,
        }
    }

    pub fn current(&self) -> FrameIndex {
        self.current
    }

    pub fn total(&self) -> FrameIndex {
        self.range.last().unwrap_or(FrameIndex::FIRST)
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_playing(&self) -> bool {
        self.timer.is_some()
    }

    pub fn timer(&self) -> Option<TimerHandle> {
        self.timer
    }

    pub fn hold_at(&self) -> Option<FrameIndex> {
        self.hold_at
    }

    /// Stop automatic advancement once the clock reaches `frame`.
    pub fn set_hold(&mut self, frame: Option<FrameIndex>) {
        self.hold_at = frame.map(|f| self.range.clamp(f));
    }

    fn is_held(&self) -> bool {
        self.hold_at.is_some_and(|h| self.current >= h)
    }

    /// Start ticking. Any previous timer is cancelled first, so at most one clock ever runs.
    ///
    /// Returns `false` without starting when already at the last frame or a hold point.
    pub fn play(&mut self, sched: &mut dyn Scheduler) -> bool {
        self.stop(sched);
        if self.current >= self.total() || self.is_held() {
            tracing::debug!(frame = self.current.0, "play ignored at stop point");
            return false;
        }
        self.timer = Some(sched.start_repeating(self.interval));
        true
    }

    pub fn pause(&mut self, sched: &mut dyn Scheduler) {
        self.stop(sched);
    }

    pub fn reset(&mut self, sched: &mut dyn Scheduler) {
        self.stop(sched);
        self.current = FrameIndex::FIRST;
    }

    /// Jump to `frame`, clamped to `[1, total]`. Playback state is untouched.
    pub fn seek(&mut self, frame: FrameIndex) -> FrameIndex {
        let clamped = self.range.clamp(frame);
        if clamped != frame {
            tracing::debug!(requested = frame.0, clamped = clamped.0, "seek clamped");
        }
        self.current = clamped;
        clamped
    }

    /// Handle one firing of `handle`.
    pub fn on_tick(&mut self, handle: TimerHandle, sched: &mut dyn Scheduler) -> TickOutcome {
        if self.timer != Some(handle) {
            tracing::debug!(handle = handle.0, "stale timer tick ignored");
            sched.cancel(handle);
            return TickOutcome::Stale;
        }
        if self.is_held() {
            self.stop(sched);
            return TickOutcome::Held(self.current);
        }
        if self.current >= self.total() {
            self.stop(sched);
            return TickOutcome::Finished(self.current);
        }

        self.current = self.current.offset(1);
        if self.is_held() {
            tracing::debug!(frame = self.current.0, "playback reached hold point");
            self.stop(sched);
            return TickOutcome::Held(self.current);
        }
        if self.current >= self.total() {
            tracing::debug!(frame = self.current.0, "playback reached last frame");
            self.stop(sched);
            return TickOutcome::Finished(self.current);
        }
        TickOutcome::Advanced(self.current)
    }

    fn stop(&mut self, sched: &mut dyn Scheduler) {
        if let Some(handle) = self.timer.take() {
            sched.cancel(handle);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/playback/clock.rs"]
mod tests;
