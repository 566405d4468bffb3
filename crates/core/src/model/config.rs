use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// Errors that can occur when validating a session configuration.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("timed session duration must be positive")]
    ZeroSessionDuration,
}

//
// ─── CONFIGURATION ─────────────────────────────────────────────────────────────
//

/// Delay between scoring an answer and advancing to the next question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvanceDelays {
    pub correct: Duration,
    pub incorrect: Duration,
}

impl AdvanceDelays {
    /// The same delay regardless of whether the answer was right.
    #[must_use]
    pub fn uniform(delay: Duration) -> Self {
        Self {
            correct: delay,
            incorrect: delay,
        }
    }
}

/// How a session selects questions and when it ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPolicy {
    /// Fixed-duration session counting correct/total answers; every answer
    /// advances to a fresh random note.
    FixedDurationCounted { duration: Duration },
    /// Open-ended session that re-asks the same note after a miss and only
    /// advances once the player names it correctly.
    RepeatUntilCorrect,
}

/// Construction-time configuration for a quiz session.
///
/// Every value is supplied by the host; there are no hidden defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    pub policy: SessionPolicy,
    /// Under the repeat policy, replay the target note automatically when
    /// the question is re-asked after a miss.
    pub auto_replay_on_miss: bool,
    pub advance_delays: AdvanceDelays,
}

impl SessionConfig {
    /// Checks that the configuration can drive a session.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ZeroSessionDuration` if a timed policy has a
    /// zero duration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let SessionPolicy::FixedDurationCounted { duration } = self.policy {
            if duration.is_zero() {
                return Err(ConfigError::ZeroSessionDuration);
            }
        }
        Ok(())
    }

    /// The session duration for timed policies, `None` for open-ended ones.
    #[must_use]
    pub fn session_duration(&self) -> Option<Duration> {
        match self.policy {
            SessionPolicy::FixedDurationCounted { duration } => Some(duration),
            SessionPolicy::RepeatUntilCorrect => None,
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn timed(duration: Duration) -> SessionConfig {
        SessionConfig {
            policy: SessionPolicy::FixedDurationCounted { duration },
            auto_replay_on_miss: false,
            advance_delays: AdvanceDelays::uniform(Duration::from_secs(1)),
        }
    }

    #[test]
    fn timed_config_requires_a_positive_duration() {
        let err = timed(Duration::ZERO).validate().unwrap_err();
        assert_eq!(err, ConfigError::ZeroSessionDuration);

        assert!(timed(Duration::from_secs(30)).validate().is_ok());
    }

    #[test]
    fn open_ended_config_has_no_duration() {
        let config = SessionConfig {
            policy: SessionPolicy::RepeatUntilCorrect,
            auto_replay_on_miss: true,
            advance_delays: AdvanceDelays::uniform(Duration::ZERO),
        };

        assert!(config.validate().is_ok());
        assert_eq!(config.session_duration(), None);
    }

    #[test]
    fn timed_config_reports_its_duration() {
        let config = timed(Duration::from_secs(30));
        assert_eq!(config.session_duration(), Some(Duration::from_secs(30)));
    }
}
