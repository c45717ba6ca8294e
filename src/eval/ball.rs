use crate::foundation::core::{FrameIndex, Point};
use crate::play::store::Play;

/// Phase of the ball's straight-line flight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BallPhase {
    /// Still in the thrower's hands; hidden.
    PreThrow,
    /// Between release and landing.
    InFlight,
    /// At or past the landing frame.
    Landed,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// Ball position at one frame.
pub struct BallState {
    pub pos: Point,
    pub visible: bool,
    pub phase: BallPhase,
    /// Fraction of the flight completed, in `[0, 1]`.
    pub progress: f64,
}

/// Straight-line ball flight between two endpoints over a frame window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BallFlight {
    pub throw_frame: FrameIndex,
    pub landing_frame: FrameIndex,
    pub from: Point,
    pub to: Point,
}

impl BallFlight {
    /// Flight from the play's release point to its landing point, landing on the last frame.
    pub fn for_play(play: &Play) -> Self {
        Self {
            throw_frame: play.throw_frame(),
            landing_frame: play.landing_frame(),
            from: play.ball_throw(),
            to: play.ball_land(),
        }
    }

    /// Flight progress at `frame`, clamped to `[0, 1]`.
    ///
    /// A zero-length window (`landing_frame <= throw_frame`) lands immediately.
    pub fn progress(&self, frame: FrameIndex) -> f64 {
        if self.landing_frame <= self.throw_frame {
            return 1.0;
        }
        let elapsed = f64::from(frame.0) - f64::from(self.throw_frame.0);
        let window = f64::from(self.landing_frame.0 - self.throw_frame.0);
        (elapsed / window).clamp(0.0, 1.0)
    }

    pub fn sample(&self, frame: FrameIndex) -> BallState {
        if frame < self.throw_frame {
            return BallState {
                pos: self.from,
                visible: false,
                phase: BallPhase::PreThrow,
                progress: 0.0,
            };
        }
        if frame >= self.landing_frame {
            return BallState {
                pos: self.to,
                visible: true,
                phase: BallPhase::Landed,
                progress: 1.0,
            };
        }
        let progress = self.progress(frame);
        BallState {
            pos: self.from.lerp(self.to, progress),
            visible: true,
            phase: BallPhase::InFlight,
            progress,
        }
    }

    /// Visible ball positions for each frame in `[throw_frame, min(frame, throw_frame + max_frames)]`.
    pub fn path_until(&self, frame: FrameIndex, max_frames: u32) -> Vec<Point> {
        if frame < self.throw_frame {
            return Vec::new();
        }
        let last = frame.min(self.throw_frame.offset(max_frames));
        (self.throw_frame.0..=last.0)
            .map(|f| self.sample(FrameIndex(f)))
            .filter(|b| b.visible)
            .map(|b| b.pos)
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/ball.rs"]
mod tests;
