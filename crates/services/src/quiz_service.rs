use std::sync::Arc;

use tracing::{debug, info};

use quiz_core::model::{Logo, Session};

use crate::catalog::LogoCatalog;
use crate::error::QuizError;
use crate::sampler::draw_rounds;

/// Rounds per session unless configured otherwise.
pub const DEFAULT_ROUND_COUNT: usize = 30;

/// Seconds before the hint for a round unlocks.
pub const DEFAULT_HINT_SECONDS: u32 = 10;

/// Starts and restarts quiz sessions over a fixed catalog.
///
/// The service owns the only source of randomness; the session state machine
/// itself stays deterministic and is fed pre-drawn round sequences.
#[derive(Debug, Clone)]
pub struct QuizService {
    catalog: Arc<LogoCatalog>,
    round_count: usize,
    hint_seconds: u32,
}

impl QuizService {
    #[must_use]
    pub fn new(catalog: Arc<LogoCatalog>) -> Self {
        info!(logos = catalog.len(), "quiz service ready");
        Self {
            catalog,
            round_count: DEFAULT_ROUND_COUNT,
            hint_seconds: DEFAULT_HINT_SECONDS,
        }
    }

    /// Overrides the per-session round count. Zero is bumped to one round.
    #[must_use]
    pub fn with_round_count(mut self, round_count: usize) -> Self {
        self.round_count = round_count.max(1);
        self
    }

    /// Overrides the hint unlock delay.
    #[must_use]
    pub fn with_hint_seconds(mut self, hint_seconds: u32) -> Self {
        self.hint_seconds = hint_seconds;
        self
    }

    #[must_use]
    pub fn catalog(&self) -> &LogoCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn round_count(&self) -> usize {
        self.round_count
    }

    #[must_use]
    pub fn hint_seconds(&self) -> u32 {
        self.hint_seconds
    }

    /// Draws a fresh round sequence, for session start and for "play again".
    ///
    /// The draw is clamped to the catalog size, so it is never empty for a
    /// validated catalog.
    #[must_use]
    pub fn draw(&self) -> Arc<[Logo]> {
        let rounds = draw_rounds(&self.catalog, self.round_count);
        debug!(
            requested = self.round_count,
            drawn = rounds.len(),
            "drew session rounds"
        );
        rounds
    }

    /// Starts a new session over a freshly drawn sample.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Session` when the draw comes up empty, which only
    /// happens for an invalid catalog.
    pub fn start_session(&self) -> Result<Session, QuizError> {
        let rounds = self.draw();
        let session = Session::new(rounds)?;
        info!(rounds = session.total_rounds(), "started quiz session");
        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::Logo;

    fn small_catalog() -> Arc<LogoCatalog> {
        let logos = vec![
            Logo::new("DBS", "dbs.png", "a bank", vec!["DBS".into()]).unwrap(),
            Logo::new(
                "OCBC",
                "ocbc.png",
                "another bank",
                vec!["OCBC".into(), "Oversea-Chinese Banking Corporation".into()],
            )
            .unwrap(),
            Logo::new("Singtel", "singtel.png", "a telco", vec!["Singtel".into()]).unwrap(),
        ];
        Arc::new(LogoCatalog::new(logos).unwrap())
    }

    #[test]
    fn session_size_clamps_to_catalog() {
        let service = QuizService::new(small_catalog());
        let session = service.start_session().unwrap();
        assert_eq!(session.total_rounds(), 3);
    }

    #[test]
    fn configured_round_count_is_honored() {
        let service = QuizService::new(small_catalog()).with_round_count(2);
        let session = service.start_session().unwrap();
        assert_eq!(session.total_rounds(), 2);
    }

    #[test]
    fn zero_round_count_is_bumped_to_one() {
        let service = QuizService::new(small_catalog()).with_round_count(0);
        assert_eq!(service.round_count(), 1);
    }

    #[test]
    fn fresh_draw_covers_whole_small_catalog() {
        let service = QuizService::new(small_catalog());
        let rounds = service.draw();
        assert_eq!(rounds.len(), 3);
    }
}
