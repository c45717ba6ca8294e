use crate::foundation::core::{FrameIndex, Point};
use crate::foundation::error::{SnaplineError, SnaplineResult};

/// A position sample keyed by frame id.
pub trait Sample {
    /// Frame id this sample was recorded at.
    fn frame_id(&self) -> FrameIndex;
    /// Field position in yards.
    fn point(&self) -> Point;
}

/// Pre-throw tracking sample.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct PrimarySample {
    pub frame_id: FrameIndex,
    pub pos: Point,
    pub dir: Option<f64>,
    pub speed: Option<f64>,
}

impl Sample for PrimarySample {
    fn frame_id(&self) -> FrameIndex {
        self.frame_id
    }

    fn point(&self) -> Point {
        self.pos
    }
}

/// Post-throw sample; `frame_id` is relative to the throw frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ContinuationSample {
    pub frame_id: FrameIndex,
    pub pos: Point,
}

impl Sample for ContinuationSample {
    fn frame_id(&self) -> FrameIndex {
        self.frame_id
    }

    fn point(&self) -> Point {
        self.pos
    }
}

/// Samples sorted by strictly increasing frame id.
#[derive(Clone, Debug, PartialEq)]
pub struct Track<S> {
    samples: Vec<S>,
}

impl<S> Default for Track<S> {
    fn default() -> Self {
        Self {
            samples: Vec::new(),
        }
    }
}

impl<S: Sample> Track<S> {
    /// Sort samples by frame id, rejecting duplicate ids.
    pub fn from_samples(mut samples: Vec<S>) -> SnaplineResult<Self> {
        samples.sort_by_key(|s| s.frame_id());
        if let Some(w) = samples
            .windows(2)
            .find(|w| w[0].frame_id() == w[1].frame_id())
        {
            return Err(SnaplineError::validation(format!(
                "duplicate frame_id {} in track",
                w[0].frame_id()
            )));
        }
        Ok(Self { samples })
    }

    /// Sample recorded exactly at `frame`. A miss is normal for sparse data.
    pub fn get(&self, frame: FrameIndex) -> Option<&S> {
        self.samples
            .binary_search_by_key(&frame, |s| s.frame_id())
            .ok()
            .map(|i| &self.samples[i])
    }

    pub fn first(&self) -> Option<&S> {
        self.samples.first()
    }

    pub fn last(&self) -> Option<&S> {
        self.samples.last()
    }

    /// Largest frame id in the track.
    pub fn max_frame_id(&self) -> Option<FrameIndex> {
        self.last().map(Sample::frame_id)
    }

    /// All samples with `frame_id <= frame`, in order.
    pub fn through(&self, frame: FrameIndex) -> &[S] {
        let end = self.samples.partition_point(|s| s.frame_id() <= frame);
        &self.samples[..end]
    }

    pub fn samples(&self) -> &[S] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/play/track.rs"]
mod tests;
