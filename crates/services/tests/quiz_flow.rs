use std::sync::Arc;

use quiz_core::model::{Feedback, Logo, SessionEvent};
use services::{LogoCatalog, QuizService};

fn catalog() -> Arc<LogoCatalog> {
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
fn full_session_tallies_correct_guesses() {
    let service = QuizService::new(catalog());
    let mut session = service.start_session().unwrap();
    assert_eq!(session.total_rounds(), 3);

    while !session.finished() {
        // Answer every round with its display name; each is an accepted
        // answer in this catalog.
        let guess = session.current_round().name().to_string();
        session = session
            .transition(SessionEvent::SetGuess(guess))
            .transition(SessionEvent::Submit);
        assert!(session.answered());
        assert_eq!(session.feedback(), Feedback::Correct);
        session = session.transition(SessionEvent::Advance);
    }

    assert_eq!(session.score(), 3);
}

#[test]
fn skipping_everything_ends_with_zero_score() {
    let service = QuizService::new(catalog());
    let mut session = service.start_session().unwrap();

    for _ in 0..session.total_rounds() {
        session = session.transition(SessionEvent::Advance);
    }

    assert!(session.finished());
    assert_eq!(session.score(), 0);
}

#[test]
fn play_again_draws_a_fresh_non_exhausted_session() {
    let service = QuizService::new(catalog());
    let mut session = service.start_session().unwrap();
    for _ in 0..session.total_rounds() {
        session = session.transition(SessionEvent::Advance);
    }
    assert!(session.finished());

    let session = session.transition(SessionEvent::Reset(service.draw()));
    assert!(!session.finished());
    assert_eq!(session.position(), 0);
    assert_eq!(session.score(), 0);
    assert_eq!(session.total_rounds(), 3);
}

#[test]
fn builtin_catalog_supports_default_round_count() {
    let service = QuizService::new(Arc::new(LogoCatalog::builtin().unwrap()));
    let session = service.start_session().unwrap();
    assert_eq!(session.total_rounds(), services::DEFAULT_ROUND_COUNT);
}
