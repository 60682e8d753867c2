use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::routes::Route;

#[component]
pub fn HomeView() -> Element {
    let navigator = use_navigator();

    rsx! {
        div { class: "page",
            div { class: "card instructions",
                h2 { "Welcome, here are some general information about the quiz:" }
                ol {
                    li { "Thirty randomly-chosen obscured logos will be shown to you." }
                    li { "All logos are from a Singapore-based entity." }
                    li { "You make a guess by typing into the text box below the logo and pressing the \"Enter\" key or clicking the \"Guess\" button." }
                    li { "Depending on the logo, abbreviations are also accepted as answers. For example, both BMW and Bayerische Motoren Werke are accepted as answers." }
                    li { "A hint is available after 10 seconds for every logo." }
                    li { "You are able to skip an unlimited number of times." }
                    li { "No answers will be provided if you choose to skip." }
                }
            }
            button {
                class: "btn btn-primary",
                r#type: "button",
                onclick: move |_| {
                    let _ = navigator.push(Route::Quiz {});
                },
                "Start Quiz"
            }
        }
    }
}
