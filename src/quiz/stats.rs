use std::time::Duration;

/// League-wide completion rate used as the accuracy baseline, in percent.
pub const LEAGUE_ACCURACY_PCT: f64 = 46.98;
/// League-wide average time to throw, in seconds.
pub const LEAGUE_DECISION_SECS: f64 = 2.66;

/// Running tally across quiz rounds.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QuizStats {
    correct: u32,
    total: u32,
    decision_times: Vec<Duration>,
}

impl QuizStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, correct: bool, decision_time: Duration) {
        self.total += 1;
        if correct {
            self.correct += 1;
        }
        self.decision_times.push(decision_time);
    }

    pub fn correct(&self) -> u32 {
        self.correct
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn decision_times(&self) -> &[Duration] {
        &self.decision_times
    }

    /// Share of correct answers in percent, or `None` before the first answer.
    pub fn accuracy(&self) -> Option<f64> {
        if self.total == 0 {
            return None;
        }
        Some(f64::from(self.correct) / f64::from(self.total) * 100.0)
    }

    /// [`QuizStats::accuracy`] rounded to a whole percent, as shown on the scoreboard.
    pub fn accuracy_pct(&self) -> Option<u32> {
        self.accuracy().map(|a| a.round() as u32)
    }

    /// Mean decision time in seconds, or `None` before the first answer.
    pub fn avg_decision_secs(&self) -> Option<f64> {
        if self.decision_times.is_empty() {
            return None;
        }
        let sum: f64 = self.decision_times.iter().map(Duration::as_secs_f64).sum();
        Some(sum / self.decision_times.len() as f64)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Compare against league averages.
    pub fn compare(&self) -> LeagueComparison {
        LeagueComparison {
            accuracy: self.accuracy(),
            avg_decision_secs: self.avg_decision_secs(),
        }
    }
}

/// User numbers lined up against the league baselines.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LeagueComparison {
    pub accuracy: Option<f64>,
    pub avg_decision_secs: Option<f64>,
}

impl LeagueComparison {
    /// Percentage points above (positive) or below the league completion rate.
    pub fn accuracy_diff(&self) -> Option<f64> {
        self.accuracy.map(|pct| pct - LEAGUE_ACCURACY_PCT)
    }

    /// Seconds faster (negative) or slower than the league time to throw.
    pub fn time_diff(&self) -> Option<f64> {
        self.avg_decision_secs.map(|s| s - LEAGUE_DECISION_SECS)
    }

    pub fn accuracy_summary(&self) -> String {
        match self.accuracy_diff() {
            None => "Make at least one decision to compare".to_owned(),
            Some(d) if d > 0.0 => format!("+{d:.1}% better than NFL average"),
            Some(d) if d < 0.0 => format!("{:.1}% below NFL average", d.abs()),
            Some(_) => "Matching NFL average!".to_owned(),
        }
    }

    pub fn time_summary(&self) -> String {
        match self.time_diff() {
            None => "Make at least one decision to compare".to_owned(),
            Some(d) if d < 0.0 => format!("{:.1}s faster than NFL average", d.abs()),
            Some(d) if d > 0.0 => format!("{d:.1}s slower than NFL average"),
            Some(_) => "Matching NFL average!".to_owned(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/quiz/stats.rs"]
mod tests;
