//! The quiz session state machine.
//!
//! One type drives both shipped configurations: the fixed-duration counted
//! session and the open-ended repeat-until-correct session differ only in
//! the policy value they are built with, never in transition mechanism.

use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, warn};

use pitch_core::{Clock, Note, Phase, ScoreTracker, SessionConfig, SessionPolicy, label_of};

use crate::capability::{ButtonPanel, FeedbackSink, NotePlayer};
use crate::error::SessionError;
use crate::scheduler::{ActionHandle, ActionScheduler};
use crate::session_clock::SessionClock;

const PROMPT_MESSAGE: &str = "Listen and choose a note";

//
// ─── OUTCOMES ──────────────────────────────────────────────────────────────────
//

/// Outcome of a submitted answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerVerdict {
    Correct,
    Incorrect,
    /// The input arrived outside the answering phase, or after the session
    /// ended, and was dropped without touching score or phase.
    Ignored,
}

/// Delayed self-transition scheduled after an answer is scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AdvanceAction {
    /// Pick a fresh random note and reset to the playback phase.
    NextQuestion { auto_play: bool },
    /// Keep the same target note and reopen the answer controls.
    RepeatSameNote { auto_play: bool },
}

//
// ─── QUIZ SESSION ──────────────────────────────────────────────────────────────
//

/// A single-screen ear-training quiz session.
///
/// The session owns its phase, target note, score and pending advance
/// exclusively; effects reach the outside world only through the optional
/// capability collaborators. It is driven by the host's input calls
/// ([`QuizSession::request_playback`], [`QuizSession::submit_answer`]) and a
/// per-frame [`QuizSession::tick`].
pub struct QuizSession {
    config: SessionConfig,
    phase: Phase,
    target: Note,
    active: bool,
    score: ScoreTracker,
    scheduler: ActionScheduler<AdvanceAction>,
    pending_advance: Option<ActionHandle>,
    session_clock: Option<SessionClock>,
    clock: Clock,
    started_at: Option<DateTime<Utc>>,
    ended_at: Option<DateTime<Utc>>,
    rng: StdRng,
    player: Option<Rc<dyn NotePlayer>>,
    panel: Option<Rc<dyn ButtonPanel>>,
    feedback: Option<Rc<dyn FeedbackSink>>,
}

impl QuizSession {
    /// Creates an inactive session; call [`QuizSession::start`] to begin.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Config` if the configuration is invalid.
    pub fn new(config: SessionConfig, clock: Clock) -> Result<Self, SessionError> {
        config.validate()?;
        let mut rng = StdRng::from_os_rng();
        let target = Note::random(&mut rng);
        Ok(Self {
            score: ScoreTracker::for_policy(&config.policy),
            config,
            phase: Phase::AwaitingPlayback,
            target,
            active: false,
            scheduler: ActionScheduler::new(),
            pending_advance: None,
            session_clock: None,
            clock,
            started_at: None,
            ended_at: None,
            rng,
            player: None,
            panel: None,
            feedback: None,
        })
    }

    #[must_use]
    pub fn with_player(mut self, player: Rc<dyn NotePlayer>) -> Self {
        self.player = Some(player);
        self
    }

    #[must_use]
    pub fn with_panel(mut self, panel: Rc<dyn ButtonPanel>) -> Self {
        self.panel = Some(panel);
        self
    }

    #[must_use]
    pub fn with_feedback(mut self, feedback: Rc<dyn FeedbackSink>) -> Self {
        self.feedback = Some(feedback);
        self
    }

    /// Seeds the note picker for deterministic tests.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    //
    // ─── PUBLIC SURFACE ────────────────────────────────────────────────────
    //

    /// Begins a new session: fresh target note, zeroed score, full clock.
    ///
    /// Idempotent reset when called mid-session; any in-flight advance is
    /// cancelled so it cannot fire into the new question.
    pub fn start(&mut self) {
        self.cancel_pending_advance();
        self.active = true;
        self.started_at = Some(self.clock.now());
        self.ended_at = None;
        self.score.reset();
        self.session_clock = self.config.session_duration().map(SessionClock::new);
        self.prepare_next_question(true);
        self.publish_score();
    }

    /// The player asks to hear the current note.
    ///
    /// From `AwaitingPlayback` this opens the answer controls; from
    /// `AwaitingAnswer` it replays the same note without a phase change.
    /// Anywhere else it is a logged no-op.
    pub fn request_playback(&mut self) {
        if !self.active {
            debug!("ignoring playback request: session inactive");
            return;
        }
        match self.phase {
            Phase::AwaitingPlayback => {
                self.play_current_note();
                self.phase = Phase::AwaitingAnswer;
                self.set_buttons(true);
            }
            Phase::AwaitingAnswer => self.play_current_note(),
            _ => debug!(phase = ?self.phase, "ignoring playback request"),
        }
    }

    /// The player names a note.
    ///
    /// Outside `AwaitingAnswer`, or once the session ended, the input is
    /// dropped without touching score or phase; rapid double-clicks and late
    /// key presses cannot double-score a question.
    pub fn submit_answer(&mut self, note: Note) -> AnswerVerdict {
        if !self.active || !self.phase.accepts_answer() {
            debug!(phase = ?self.phase, active = self.active, "ignoring answer");
            return AnswerVerdict::Ignored;
        }

        self.set_buttons(false);
        if let Some(player) = &self.player {
            player.stop();
        }

        let correct = note == self.target;
        self.score.record(correct);
        self.phase = Phase::ShowingFeedback;
        self.publish_score();

        let delays = self.config.advance_delays;
        let (message, action, delay) = match (correct, self.config.policy) {
            (true, SessionPolicy::FixedDurationCounted { .. }) => (
                "Correct! Next note is coming...".to_owned(),
                AdvanceAction::NextQuestion { auto_play: true },
                delays.correct,
            ),
            (false, SessionPolicy::FixedDurationCounted { .. }) => (
                format!(
                    "Almost! The answer was {}. Next note is coming...",
                    self.target.label()
                ),
                AdvanceAction::NextQuestion { auto_play: true },
                delays.incorrect,
            ),
            (true, SessionPolicy::RepeatUntilCorrect) => (
                "Correct! Next note is coming...".to_owned(),
                AdvanceAction::NextQuestion { auto_play: false },
                delays.correct,
            ),
            (false, SessionPolicy::RepeatUntilCorrect) => (
                "Almost! Listen again...".to_owned(),
                AdvanceAction::RepeatSameNote {
                    auto_play: self.config.auto_replay_on_miss,
                },
                delays.incorrect,
            ),
        };

        self.show_message(&message);
        self.schedule_advance(delay, action);

        if correct {
            AnswerVerdict::Correct
        } else {
            AnswerVerdict::Incorrect
        }
    }

    /// Drives the session clock and the advance scheduler.
    ///
    /// Called once per host frame while the session is active. Clock expiry
    /// wins over an advance due in the same tick.
    pub fn tick(&mut self, delta: Duration) {
        if !self.active {
            return;
        }

        let expired = match &mut self.session_clock {
            Some(clock) => clock.tick(delta),
            None => false,
        };
        if expired {
            self.finish_timed();
            return;
        }
        if self.session_clock.is_some() {
            self.publish_score();
        }

        for action in self.scheduler.advance(delta) {
            self.pending_advance = None;
            self.apply_advance(action);
        }
    }

    /// Tears the session down when the host closes the screen.
    ///
    /// Cancels any pending advance so no scheduled transition can fire into
    /// a dead session. Safe to call repeatedly.
    pub fn end(&mut self) {
        if self.phase.is_ended() {
            return;
        }
        let summary = self.score.summary();
        self.finish(&format!("Session over. Score: {summary}"));
    }

    /// Display label for a raw note index; empty when out of range.
    #[must_use]
    pub fn note_label(&self, index: u8) -> &'static str {
        label_of(index)
    }

    #[must_use]
    pub fn is_session_active(&self) -> bool {
        self.active
    }

    /// Current score as display text: `"correct/total"` or a running score.
    #[must_use]
    pub fn current_score_summary(&self) -> String {
        self.score.summary()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn target_note(&self) -> Note {
        self.target
    }

    /// Remaining session time; `None` for open-ended sessions.
    #[must_use]
    pub fn remaining_time(&self) -> Option<Duration> {
        self.session_clock.as_ref().map(SessionClock::remaining)
    }

    #[must_use]
    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    #[must_use]
    pub fn ended_at(&self) -> Option<DateTime<Utc>> {
        self.ended_at
    }

    //
    // ─── TRANSITIONS ───────────────────────────────────────────────────────
    //

    fn prepare_next_question(&mut self, pick_new_note: bool) {
        if pick_new_note {
            self.target = Note::random(&mut self.rng);
        }
        self.phase = Phase::AwaitingPlayback;
        self.set_buttons(false);
        self.show_message(PROMPT_MESSAGE);
    }

    fn apply_advance(&mut self, action: AdvanceAction) {
        match action {
            AdvanceAction::NextQuestion { auto_play } => {
                self.prepare_next_question(true);
                if auto_play {
                    self.request_playback();
                }
            }
            AdvanceAction::RepeatSameNote { auto_play } => {
                self.phase = Phase::AwaitingAnswer;
                self.set_buttons(true);
                self.show_message(PROMPT_MESSAGE);
                if auto_play {
                    self.play_current_note();
                }
            }
        }
    }

    /// Registers a delayed advance, cancelling the previous one first so two
    /// advances can never be in flight for the same question.
    fn schedule_advance(&mut self, delay: Duration, action: AdvanceAction) {
        self.cancel_pending_advance();
        self.pending_advance = Some(self.scheduler.schedule(delay, action));
    }

    fn cancel_pending_advance(&mut self) {
        if let Some(handle) = self.pending_advance.take() {
            self.scheduler.cancel(handle);
        }
    }

    fn finish_timed(&mut self) {
        let summary = self.score.summary();
        self.finish(&format!("Time's up! Score: {summary}"));
    }

    fn finish(&mut self, message: &str) {
        self.cancel_pending_advance();
        self.active = false;
        self.phase = Phase::Ended;
        self.ended_at = Some(self.clock.now());
        self.set_buttons(false);
        if let Some(player) = &self.player {
            player.stop();
        }
        self.show_message(message);
        self.publish_score();
    }

    //
    // ─── EFFECTS ───────────────────────────────────────────────────────────
    //

    fn play_current_note(&self) {
        match &self.player {
            Some(player) => player.play(self.target),
            None => warn!("no note player wired, skipping playback"),
        }
    }

    fn set_buttons(&self, interactable: bool) {
        match &self.panel {
            Some(panel) => panel.set_interactable(interactable),
            None => debug!("no button panel wired"),
        }
    }

    fn show_message(&self, text: &str) {
        if let Some(sink) = &self.feedback {
            sink.show_message(text);
        }
    }

    fn publish_score(&self) {
        let Some(sink) = &self.feedback else {
            return;
        };
        let summary = self.score.summary();
        match &self.session_clock {
            Some(clock) => sink.show_score(&format!(
                "SCORE: {summary}  TIME: {}s",
                clock.remaining_display_secs()
            )),
            None => sink.show_score(&format!("SCORE: {summary}")),
        }
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("phase", &self.phase)
            .field("target", &self.target)
            .field("active", &self.active)
            .field("score", &self.score)
            .field("pending_advance", &self.pending_advance)
            .field("started_at", &self.started_at)
            .field("ended_at", &self.ended_at)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
