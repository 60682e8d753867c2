use std::time::Duration;

use dioxus::prelude::*;
use keyboard_types::Key;

use quiz_core::Countdown;
use quiz_core::model::Feedback;

use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::QuizVm;

/// Pause between a correct judgment and moving to the next round.
const AUTO_ADVANCE_DELAY: Duration = Duration::from_secs(1);

/// Length of the (purely presentational) wrong-guess shake.
const SHAKE_DURATION: Duration = Duration::from_millis(300);

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let quiz = ctx.quiz();
    let images = ctx.images();
    let hint_seconds = quiz.hint_seconds();

    let vm = use_signal(|| None::<QuizVm>);
    let countdown = use_signal(|| Countdown::start(hint_seconds));
    let hint_open = use_signal(|| false);
    let shake = use_signal(|| false);

    let quiz_for_resource = quiz.clone();
    let resource = use_resource(move || {
        let quiz = quiz_for_resource.clone();
        let mut vm = vm;
        async move {
            let session = quiz.start_session().map_err(|_| ViewError::EmptyCatalog)?;
            vm.set(Some(QuizVm::new(session)));
            Ok::<_, ViewError>(())
        }
    });
    let state = view_state_from_resource(&resource);

    // The round key changes exactly when the round identity does, so typing
    // and submitting never restart the countdown.
    let round_key = use_memo(move || {
        vm.read()
            .as_ref()
            .map(|vm| (vm.epoch(), vm.finished()))
    });

    // Re-arm the hint countdown for each new round. The spawned loop is the
    // single tick source for its epoch: as soon as the session moves on it
    // observes the mismatch and stops, so countdowns never double-decrement.
    use_effect(move || {
        let Some((epoch, finished)) = round_key() else {
            return;
        };
        let mut countdown = countdown;
        let mut hint_open = hint_open;
        countdown.set(Countdown::start(hint_seconds));
        hint_open.set(false);
        if finished {
            return;
        }
        spawn(async move {
            loop {
                tokio::time::sleep(Duration::from_secs(1)).await;
                let still_current = vm.read().as_ref().is_some_and(|vm| vm.epoch() == epoch);
                if !still_current {
                    break;
                }
                let mut next = *countdown.read();
                next.tick();
                countdown.set(next);
                if !next.is_active() {
                    break;
                }
            }
        });
    });

    let on_guess_input = use_callback(move |text: String| {
        let mut vm = vm;
        if let Some(vm) = vm.write().as_mut() {
            vm.set_guess(text);
        }
    });

    let submit_guess = use_callback(move |()| {
        let mut vm = vm;
        let mut shake = shake;

        let judged = {
            let mut guard = vm.write();
            let Some(vm) = guard.as_mut() else {
                return;
            };
            if vm.answered() || vm.finished() {
                return;
            }
            vm.submit();
            (vm.session().feedback(), vm.epoch())
        };

        match judged {
            (Feedback::Correct, epoch) => {
                // Deferred advance; no-ops if the session has already moved
                // to a different round (or was reset) in the meantime.
                spawn(async move {
                    tokio::time::sleep(AUTO_ADVANCE_DELAY).await;
                    let mut vm = vm;
                    let still_current =
                        vm.read().as_ref().is_some_and(|vm| vm.epoch() == epoch);
                    if still_current {
                        if let Some(vm) = vm.write().as_mut() {
                            vm.advance();
                        }
                    }
                });
            }
            (Feedback::Incorrect, _) => {
                shake.set(true);
                spawn(async move {
                    let mut shake = shake;
                    tokio::time::sleep(SHAKE_DURATION).await;
                    shake.set(false);
                });
            }
            (Feedback::None, _) => {}
        }
    });

    let skip_round = use_callback(move |()| {
        let mut vm = vm;
        if let Some(vm) = vm.write().as_mut() {
            if !vm.answered() {
                vm.advance();
            }
        }
    });

    let quiz_for_restart = quiz.clone();
    let play_again = use_callback(move |()| {
        let mut vm = vm;
        let rounds = quiz_for_restart.draw();
        if let Some(vm) = vm.write().as_mut() {
            vm.reset(rounds);
        }
    });

    let toggle_hint = use_callback(move |()| {
        let mut hint_open = hint_open;
        let open = *hint_open.read();
        hint_open.set(!open);
    });

    let vm_guard = vm.read();
    let finished = vm_guard.as_ref().is_some_and(QuizVm::finished);
    let answered = vm_guard.as_ref().is_some_and(QuizVm::answered);
    let progress_label = vm_guard
        .as_ref()
        .map_or_else(String::new, QuizVm::progress_label);
    let score_label = vm_guard
        .as_ref()
        .map_or_else(String::new, QuizVm::score_label);
    let final_score_label = vm_guard
        .as_ref()
        .map_or_else(String::new, QuizVm::final_score_label);
    let feedback_message = vm_guard.as_ref().and_then(QuizVm::feedback_message);
    let input_text = vm_guard
        .as_ref()
        .map_or_else(String::new, |vm| vm.input_text().to_string());
    let logo_src = vm_guard.as_ref().map(|vm| images.url_for(vm.current_logo()));
    let hint_text = vm_guard
        .as_ref()
        .map(|vm| vm.current_logo().hint().to_string());
    drop(vm_guard);

    let countdown_state = *countdown.read();
    let hint_locked = countdown_state.is_active();
    let hint_label = if hint_locked {
        format!("Hint ({})", countdown_state.remaining())
    } else {
        "Hint".to_string()
    };
    let hint_revealed = *hint_open.read() && !hint_locked;
    let card_class = if *shake.read() {
        "card quiz-card shake"
    } else {
        "card quiz-card"
    };

    rsx! {
        div { class: "page quiz-page",
            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                },
                ViewState::Ready(()) => rsx! {
                    if finished {
                        div { class: "card score-card",
                            p { class: "score-lead", "Your final score:" }
                            p { class: "score-value", "{final_score_label}" }
                            button {
                                class: "btn btn-primary",
                                r#type: "button",
                                onclick: move |_| play_again.call(()),
                                "Play Again"
                            }
                        }
                    } else {
                        div { class: "{card_class}",
                            header { class: "quiz-card__header",
                                h2 { "{progress_label}" }
                            }
                            div { class: "quiz-card__body",
                                if let Some(src) = logo_src.as_deref() {
                                    img { class: "logo-image", src: "{src}", alt: "Logo" }
                                } else {
                                    div { class: "logo-placeholder" }
                                }
                                div { class: "guess-row",
                                    input {
                                        class: "guess-input",
                                        r#type: "text",
                                        value: "{input_text}",
                                        placeholder: "Enter your guess",
                                        autofocus: true,
                                        oninput: move |evt| on_guess_input.call(evt.value()),
                                        onkeydown: move |evt: KeyboardEvent| {
                                            if evt.data.key() == Key::Enter {
                                                evt.prevent_default();
                                                submit_guess.call(());
                                            }
                                        },
                                    }
                                    button {
                                        class: "btn btn-primary",
                                        r#type: "button",
                                        disabled: answered,
                                        onclick: move |_| submit_guess.call(()),
                                        "Guess"
                                    }
                                }
                                if let Some(message) = feedback_message.as_deref() {
                                    p { class: "feedback", "{message}" }
                                }
                                div { class: "round-actions",
                                    button {
                                        class: "btn",
                                        r#type: "button",
                                        disabled: answered,
                                        onclick: move |_| skip_round.call(()),
                                        "Skip"
                                    }
                                    button {
                                        class: "btn btn-outline",
                                        r#type: "button",
                                        disabled: hint_locked || answered,
                                        onclick: move |_| toggle_hint.call(()),
                                        "{hint_label}"
                                    }
                                }
                                if hint_revealed {
                                    if let Some(hint) = hint_text.as_deref() {
                                        div { class: "hint-panel",
                                            h3 { "Hint" }
                                            p { "{hint}" }
                                        }
                                    }
                                }
                            }
                            footer { class: "quiz-card__footer",
                                p { "{score_label}" }
                            }
                        }
                    }
                },
            }
        }
    }
}
