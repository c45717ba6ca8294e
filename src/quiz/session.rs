use std::time::Duration;

use crate::foundation::core::FrameIndex;
use crate::foundation::error::{SnaplineError, SnaplineResult};
use crate::play::store::{EntityId, Play};
use crate::playback::clock::TickOutcome;
use crate::playback::engine::{EngineOpts, PlaybackEngine};
use crate::playback::scheduler::{ManualScheduler, Scheduler, TimerHandle};
use crate::quiz::stats::QuizStats;
use crate::quiz::targets::{Receiver, eligible_receivers, targeted_receiver};
use crate::render::sink::SceneSink;

/// Where a quiz round stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundPhase {
    /// Pre-throw playback; no answer possible yet.
    Watching,
    /// Held just before the throw, waiting for a receiver pick.
    AwaitingSelection,
    /// Answer recorded; playback is free to run to the end.
    Answered,
}

/// Result of one submitted pick.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct QuizAnswer {
    pub selected: EntityId,
    pub correct: bool,
    pub decision_time: Duration,
}

/// Per-play quiz state.
#[derive(Clone, Debug)]
pub struct QuizRound {
    decision_frame: FrameIndex,
    eligible: Vec<Receiver>,
    target: Option<Receiver>,
    phase: RoundPhase,
    started_at: Option<Duration>,
    answer: Option<QuizAnswer>,
}

impl QuizRound {
    pub fn for_play(play: &Play) -> Self {
        Self {
            decision_frame: decision_frame(play),
            eligible: eligible_receivers(play),
            target: targeted_receiver(play),
            phase: RoundPhase::Watching,
            started_at: None,
            answer: None,
        }
    }

    /// Frame on which playback holds for the pick.
    pub fn decision_frame(&self) -> FrameIndex {
        self.decision_frame
    }

    pub fn eligible(&self) -> &[Receiver] {
        &self.eligible
    }

    /// The receiver that actually got the ball, if it can be determined.
    pub fn target(&self) -> Option<&Receiver> {
        self.target.as_ref()
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn answer(&self) -> Option<&QuizAnswer> {
        self.answer.as_ref()
    }

    /// Time elapsed since the first `play` of this round, if it has started.
    pub fn elapsed(&self, now: Duration) -> Option<Duration> {
        self.started_at.map(|t| now.saturating_sub(t))
    }
}

/// The frame just before the throw, never earlier than frame 1.
pub fn decision_frame(play: &Play) -> FrameIndex {
    FrameIndex(play.throw_frame().0.saturating_sub(1).max(1))
}

/// "Pick the receiver" mode on top of a [`PlaybackEngine`].
///
/// Playback holds on the decision frame until an answer is submitted. The decision timer starts
/// with the first `play` of a round and stops on submit. Stats accumulate across loaded plays.
pub struct QuizSession<S: Scheduler, K: SceneSink> {
    engine: PlaybackEngine<S, K>,
    round: QuizRound,
    stats: QuizStats,
}

impl<S: Scheduler, K: SceneSink> QuizSession<S, K> {
    pub fn new(play: Play, scheduler: S, sink: K, opts: EngineOpts) -> SnaplineResult<Self> {
        let round = QuizRound::for_play(&play);
        let mut engine = PlaybackEngine::new(play, scheduler, sink, opts)?;
        engine.set_hold(Some(round.decision_frame));
        Ok(Self {
            engine,
            round,
            stats: QuizStats::new(),
        })
    }

    /// Start a fresh round on another play. Stats carry over.
    pub fn load(&mut self, play: Play) -> SnaplineResult<()> {
        let round = QuizRound::for_play(&play);
        self.engine.load(play)?;
        self.engine.set_hold(Some(round.decision_frame));
        self.round = round;
        Ok(())
    }

    /// Start playback. The first call of a round also starts the decision timer.
    pub fn play(&mut self) -> bool {
        if self.round.phase != RoundPhase::Answered && self.round.started_at.is_none() {
            self.round.started_at = Some(self.engine.scheduler().now());
        }
        let started = self.engine.play();
        if !started && self.at_hold() {
            self.round.phase = RoundPhase::AwaitingSelection;
        }
        started
    }

    pub fn pause(&mut self) {
        self.engine.pause();
    }

    /// Rewind to frame 1. An unanswered round goes back to watching with its timer cleared.
    pub fn reset(&mut self) -> SnaplineResult<()> {
        self.engine.reset()?;
        if self.round.phase != RoundPhase::Answered {
            self.round.phase = RoundPhase::Watching;
            self.round.started_at = None;
        }
        Ok(())
    }

    /// Deliver a timer firing to the engine and track arrival at the decision frame.
    pub fn on_timer(&mut self, handle: TimerHandle) -> SnaplineResult<TickOutcome> {
        let outcome = self.engine.on_timer(handle)?;
        if matches!(outcome, TickOutcome::Held(_)) && self.round.phase == RoundPhase::Watching {
            tracing::debug!(frame = self.engine.current_frame().0, "waiting for receiver pick");
            self.round.phase = RoundPhase::AwaitingSelection;
        }
        Ok(outcome)
    }

    /// Record a receiver pick, release the hold and resume playback through the throw.
    ///
    /// Only one answer per round is accepted, and only while the round is awaiting a pick.
    pub fn submit(&mut self, receiver: &EntityId) -> SnaplineResult<&QuizAnswer> {
        match self.round.phase {
            RoundPhase::Answered => {
                return Err(SnaplineError::playback("answer already submitted for this play"));
            }
            RoundPhase::Watching => {
                return Err(SnaplineError::playback("receiver selection is not open yet"));
            }
            RoundPhase::AwaitingSelection => {}
        }
        if !self.round.eligible.iter().any(|r| &r.id == receiver) {
            return Err(SnaplineError::validation(format!(
                "'{receiver}' is not an eligible receiver"
            )));
        }

        let now = self.engine.scheduler().now();
        let decision_time = self.round.elapsed(now).unwrap_or_default();
        let correct = self.round.target.as_ref().is_some_and(|t| &t.id == receiver);
        self.stats.record(correct, decision_time);
        tracing::info!(
            receiver = receiver.as_str(),
            correct,
            decision_secs = decision_time.as_secs_f64(),
            "quiz answer recorded"
        );

        self.round.phase = RoundPhase::Answered;
        self.round.started_at = None;
        self.engine.set_hold(None);
        self.engine.play();

        let answer: &QuizAnswer = self.round.answer.insert(QuizAnswer {
            selected: receiver.clone(),
            correct,
            decision_time,
        });
        Ok(answer)
    }

    fn at_hold(&self) -> bool {
        self.engine
            .clock()
            .hold_at()
            .is_some_and(|h| self.engine.current_frame() >= h)
    }

    pub fn round(&self) -> &QuizRound {
        &self.round
    }

    pub fn stats(&self) -> &QuizStats {
        &self.stats
    }

    pub fn engine(&self) -> &PlaybackEngine<S, K> {
        &self.engine
    }

    /// Direct engine access for seeking and toggles.
    pub fn engine_mut(&mut self) -> &mut PlaybackEngine<S, K> {
        &mut self.engine
    }
}

impl<K: SceneSink> QuizSession<ManualScheduler, K> {
    /// Move virtual time forward, routing every firing through [`QuizSession::on_timer`].
    pub fn advance(&mut self, dt: Duration) -> SnaplineResult<Vec<TickOutcome>> {
        let until = self.engine.scheduler().now() + dt;
        let mut outcomes = Vec::new();
        while let Some(handle) = self.engine.scheduler_mut().pop_due(until) {
            outcomes.push(self.on_timer(handle)?);
        }
        self.engine.scheduler_mut().advance_to(until);
        Ok(outcomes)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/quiz/session.rs"]
mod tests;
