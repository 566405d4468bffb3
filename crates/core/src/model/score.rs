use serde::{Deserialize, Serialize};

use crate::model::SessionPolicy;

/// Running tally for a session, shaped by the session policy.
///
/// Counts are monotonically non-decreasing within a session and are reset
/// only when a new session starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreTracker {
    /// Correct/total counts for a fixed-duration counted session.
    Counted { correct: u32, total: u32 },
    /// Running score for a repeat-until-correct session; misses do not count.
    Streak { score: u32 },
}

impl ScoreTracker {
    /// A fresh correct/total tracker.
    #[must_use]
    pub fn counted() -> Self {
        Self::Counted {
            correct: 0,
            total: 0,
        }
    }

    /// A fresh streak tracker.
    #[must_use]
    pub fn streak() -> Self {
        Self::Streak { score: 0 }
    }

    /// Picks the tracker shape that matches the session policy.
    #[must_use]
    pub fn for_policy(policy: &SessionPolicy) -> Self {
        match policy {
            SessionPolicy::FixedDurationCounted { .. } => Self::counted(),
            SessionPolicy::RepeatUntilCorrect => Self::streak(),
        }
    }

    /// Records one answered question.
    pub fn record(&mut self, is_correct: bool) {
        match self {
            Self::Counted { correct, total } => {
                *total = total.saturating_add(1);
                if is_correct {
                    *correct = correct.saturating_add(1);
                }
            }
            Self::Streak { score } => {
                if is_correct {
                    *score = score.saturating_add(1);
                }
            }
        }
    }

    /// Resets all counts, keeping the policy shape.
    pub fn reset(&mut self) {
        *self = match self {
            Self::Counted { .. } => Self::counted(),
            Self::Streak { .. } => Self::streak(),
        };
    }

    /// Human-readable summary: `"correct/total"` or the running score.
    #[must_use]
    pub fn summary(&self) -> String {
        match self {
            Self::Counted { correct, total } => format!("{correct}/{total}"),
            Self::Streak { score } => score.to_string(),
        }
    }

    /// Number of correctly answered questions.
    #[must_use]
    pub fn correct(&self) -> u32 {
        match self {
            Self::Counted { correct, .. } => *correct,
            Self::Streak { score } => *score,
        }
    }

    /// Total recorded answers (counted policy) or the running score (streak).
    #[must_use]
    pub fn total(&self) -> u32 {
        match self {
            Self::Counted { total, .. } => *total,
            Self::Streak { score } => *score,
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
