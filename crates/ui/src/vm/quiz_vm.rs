use std::sync::Arc;

use quiz_core::model::{Feedback, Logo, Session, SessionEvent};

/// Session state plus a round epoch for deferred-callback cancellation.
///
/// Every deferred action (hint tick loop, auto-advance after a correct
/// guess) captures `epoch()` at scheduling time and must no-op if the epoch
/// has moved, so a callback armed for one round can never mutate a later
/// one. The epoch bumps whenever the round identity changes: on advance,
/// on finishing, and on reset.
pub struct QuizVm {
    session: Session,
    epoch: u64,
}

impl QuizVm {
    #[must_use]
    pub fn new(session: Session) -> Self {
        Self { session, epoch: 0 }
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Feeds one event through the pure transition function.
    pub fn dispatch(&mut self, event: SessionEvent) {
        let is_reset = matches!(event, SessionEvent::Reset(_));
        let before = (self.session.position(), self.session.finished());
        self.session = self.session.clone().transition(event);
        let after = (self.session.position(), self.session.finished());
        if before != after || is_reset {
            self.epoch += 1;
        }
    }

    pub fn set_guess(&mut self, text: String) {
        self.dispatch(SessionEvent::SetGuess(text));
    }

    pub fn submit(&mut self) {
        self.dispatch(SessionEvent::Submit);
    }

    pub fn advance(&mut self) {
        self.dispatch(SessionEvent::Advance);
    }

    pub fn reset(&mut self, rounds: Arc<[Logo]>) {
        self.dispatch(SessionEvent::Reset(rounds));
    }

    #[must_use]
    pub fn current_logo(&self) -> &Logo {
        self.session.current_round()
    }

    #[must_use]
    pub fn answered(&self) -> bool {
        self.session.answered()
    }

    #[must_use]
    pub fn finished(&self) -> bool {
        self.session.finished()
    }

    #[must_use]
    pub fn input_text(&self) -> &str {
        self.session.input_text()
    }

    #[must_use]
    pub fn progress_label(&self) -> String {
        format!(
            "Logo #{}/{}",
            self.session.position() + 1,
            self.session.total_rounds()
        )
    }

    #[must_use]
    pub fn score_label(&self) -> String {
        format!(
            "Score: {} / {}",
            self.session.score(),
            self.session.total_rounds()
        )
    }

    #[must_use]
    pub fn final_score_label(&self) -> String {
        format!("{}/{}", self.session.score(), self.session.total_rounds())
    }

    /// User-facing judgment for the last submitted guess, if any.
    #[must_use]
    pub fn feedback_message(&self) -> Option<String> {
        match self.session.feedback() {
            Feedback::None => None,
            Feedback::Correct => Some(format!("Correct! This is {}!", self.current_logo().name())),
            Feedback::Incorrect => Some("Incorrect! Try again.".to_string()),
        }
    }
}
