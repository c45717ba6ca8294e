use std::time::Duration;

/// Opaque handle to a repeating timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerHandle(pub u64);

/// Source of repeating ticks with explicit cancellation.
///
/// The scheduler only hands out handles; whoever drives it reports due handles back to the
/// owner of the timer (see [`crate::PlaybackEngine::on_timer`]).
pub trait Scheduler {
    /// Monotonic time since the scheduler was created.
    fn now(&self) -> Duration;
    /// Start a timer that fires every `interval`, first at `now + interval`.
    fn start_repeating(&mut self, interval: Duration) -> TimerHandle;
    /// Stop a timer. Cancelling an unknown or already cancelled handle is a no-op.
    fn cancel(&mut self, handle: TimerHandle);
}

#[derive(Clone, Copy, Debug)]
struct ActiveTimer {
    handle: TimerHandle,
    interval: Duration,
    next_due: Duration,
}

/// Deterministic virtual-time scheduler.
///
/// Time only moves when the driver calls [`ManualScheduler::pop_due`] or
/// [`ManualScheduler::advance_to`], so tests can step playback without wall-clock delays.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    now: Duration,
    next_id: u64,
    timers: Vec<ActiveTimer>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_timers(&self) -> usize {
        self.timers.len()
    }

    pub fn is_active(&self, handle: TimerHandle) -> bool {
        self.timers.iter().any(|t| t.handle == handle)
    }

    /// Fire the earliest timer due at or before `until`, moving time to its due instant.
    ///
    /// Ties go to the timer started first. The fired timer is rescheduled one interval later.
    pub fn pop_due(&mut self, until: Duration) -> Option<TimerHandle> {
        let timer = self
            .timers
            .iter_mut()
            .filter(|t| t.next_due <= until)
            .min_by_key(|t| (t.next_due, t.handle))?;
        self.now = self.now.max(timer.next_due);
        timer.next_due += timer.interval;
        Some(timer.handle)
    }

    /// Move time forward without firing anything. Never moves backwards.
    pub fn advance_to(&mut self, t: Duration) {
        self.now = self.now.max(t);
    }
}

impl Scheduler for ManualScheduler {
    fn now(&self) -> Duration {
        self.now
    }

    fn start_repeating(&mut self, interval: Duration) -> TimerHandle {
        let interval = interval.max(Duration::from_millis(1));
        self.next_id += 1;
        let handle = TimerHandle(self.next_id);
        self.timers.push(ActiveTimer {
            handle,
            interval,
            next_due: self.now + interval,
        });
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.timers.retain(|t| t.handle != handle);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/playback/scheduler.rs"]
mod tests;
