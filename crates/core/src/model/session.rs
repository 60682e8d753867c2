use std::sync::Arc;

use thiserror::Error;

use crate::model::Logo;
use crate::normalize::is_accepted;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("session needs at least one round")]
    EmptyRounds,
}

//
// ─── EVENTS ────────────────────────────────────────────────────────────────────
//

/// Player actions fed into [`Session::transition`].
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// Replace the in-progress guess text.
    SetGuess(String),
    /// Judge the current guess against the round's accepted answers.
    Submit,
    /// Move to the next round (also the skip path), or finish at the last one.
    Advance,
    /// Replace the whole session with a freshly drawn round sequence.
    ///
    /// The caller draws the sample so the transition stays deterministic.
    Reset(Arc<[Logo]>),
}

/// Judgment shown for the last submitted guess.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Feedback {
    #[default]
    None,
    Correct,
    Incorrect,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// Mutable state of one quiz play-through.
///
/// Only [`Session::transition`] produces new states. The machine has two
/// states, playing and finished; once finished, every event except
/// `Reset` is a no-op and position/score stay frozen.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    rounds: Arc<[Logo]>,
    position: usize,
    score: u32,
    input_text: String,
    answered: bool,
    feedback: Feedback,
    finished: bool,
}

impl Session {
    /// Creates a session over a fixed round sequence.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::EmptyRounds` when no rounds are provided. An
    /// undersized catalog is a configuration problem surfaced here, at
    /// session start, never mid-session.
    pub fn new(rounds: Arc<[Logo]>) -> Result<Self, SessionError> {
        if rounds.is_empty() {
            return Err(SessionError::EmptyRounds);
        }
        Ok(Self {
            rounds,
            position: 0,
            score: 0,
            input_text: String::new(),
            answered: false,
            feedback: Feedback::None,
            finished: false,
        })
    }

    /// Pure transition function: consumes the current state and an event,
    /// returns the next state.
    #[must_use]
    pub fn transition(self, event: SessionEvent) -> Self {
        let next = self.apply(event);
        debug_assert!(next.position < next.rounds.len());
        debug_assert!(u64::from(next.score) <= next.position as u64 + 1);
        next
    }

    fn apply(self, event: SessionEvent) -> Self {
        // Terminal state: only a reset leaves it.
        if self.finished && !matches!(event, SessionEvent::Reset(_)) {
            return self;
        }

        match event {
            SessionEvent::SetGuess(text) => Self {
                input_text: text,
                ..self
            },
            SessionEvent::Submit => self.submit(),
            SessionEvent::Advance => self.advance(),
            SessionEvent::Reset(rounds) => self.reset(rounds),
        }
    }

    fn submit(self) -> Self {
        // A correct guess locks the round; repeated submits must not
        // re-increment the score.
        if self.answered {
            return self;
        }

        let correct = is_accepted(&self.input_text, self.current_round().accepted_answers());
        if correct {
            Self {
                score: self.score + 1,
                answered: true,
                feedback: Feedback::Correct,
                input_text: String::new(),
                ..self
            }
        } else {
            Self {
                feedback: Feedback::Incorrect,
                ..self
            }
        }
    }

    fn advance(self) -> Self {
        if self.position + 1 == self.rounds.len() {
            return Self {
                finished: true,
                ..self
            };
        }
        Self {
            position: self.position + 1,
            input_text: String::new(),
            answered: false,
            feedback: Feedback::None,
            ..self
        }
    }

    fn reset(self, rounds: Arc<[Logo]>) -> Self {
        // Callers validate the draw at session-start time; an empty payload
        // here is ignored rather than producing an unplayable session.
        if rounds.is_empty() {
            return self;
        }
        Self {
            rounds,
            position: 0,
            score: 0,
            input_text: String::new(),
            answered: false,
            feedback: Feedback::None,
            finished: false,
        }
    }

    #[must_use]
    pub fn rounds(&self) -> &[Logo] {
        &self.rounds
    }

    /// Number of rounds in this session.
    #[must_use]
    pub fn total_rounds(&self) -> usize {
        self.rounds.len()
    }

    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn input_text(&self) -> &str {
        &self.input_text
    }

    #[must_use]
    pub fn answered(&self) -> bool {
        self.answered
    }

    #[must_use]
    pub fn feedback(&self) -> Feedback {
        self.feedback
    }

    #[must_use]
    pub fn finished(&self) -> bool {
        self.finished
    }

    /// The round at the current position. Still the last round once finished,
    /// since the position freezes there.
    #[must_use]
    pub fn current_round(&self) -> &Logo {
        &self.rounds[self.position]
    }
}
