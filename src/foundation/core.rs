pub use kurbo::Point;

/// One-based frame number within a play.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u32);

impl FrameIndex {
    /// The first frame of every play.
    pub const FIRST: Self = Self(1);

    /// Frame `n` frames later, saturating at `u32::MAX`.
    pub fn offset(self, n: u32) -> Self {
        Self(self.0.saturating_add(n))
    }
}

impl std::fmt::Display for FrameIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Half-open frame range `[start, end)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FrameRange {
    pub start: FrameIndex,
    pub end: FrameIndex, // exclusive
}

impl FrameRange {
    /// Every frame from 1 through `last`.
    pub fn through(last: FrameIndex) -> Self {
        Self {
            start: FrameIndex::FIRST,
            end: last.max(FrameIndex::FIRST).offset(1),
        }
    }

    pub fn len_frames(self) -> u32 {
        self.end.0.saturating_sub(self.start.0)
    }

    pub fn is_empty(self) -> bool {
        self.start.0 == self.end.0
    }

    pub fn contains(self, f: FrameIndex) -> bool {
        self.start.0 <= f.0 && f.0 < self.end.0
    }

    pub fn last(self) -> Option<FrameIndex> {
        if self.is_empty() {
            return None;
        }
        Some(FrameIndex(self.end.0 - 1))
    }

    pub fn clamp(self, f: FrameIndex) -> FrameIndex {
        if self.is_empty() {
            return self.start;
        }
        let max_inclusive = self.end.0.saturating_sub(1);
        FrameIndex(f.0.clamp(self.start.0, max_inclusive))
    }

    pub fn iter(self) -> impl Iterator<Item = FrameIndex> {
        (self.start.0..self.end.0).map(FrameIndex)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    pub num: u32,
    pub den: u32,
}

impl Fps {
    /// Sampling rate of the player-tracking feed.
    pub const TRACKING: Self = Self { num: 10, den: 1 };

    pub fn frame_duration_secs(self) -> f64 {
        f64::from(self.den) / f64::from(self.num)
    }

    pub fn frames_to_secs(self, frames: u32) -> f64 {
        f64::from(frames) * self.frame_duration_secs()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
