//! Replay view - recorded and simulated datasets

use super::shell::{PAGE_CLASS, PAGE_TITLE_CLASS};
use dioxus::prelude::*;

pub const REPLAY_TITLE: &str = "🔁 Replay Datasets";
pub const REPLAY_DESCRIPTION: &str =
    "Switch between previously recorded datasets or simulated data.";

#[component]
pub fn Replay() -> Element {
    rsx! {
        main { class: PAGE_CLASS,
            h1 { class: PAGE_TITLE_CLASS, "{REPLAY_TITLE}" }
            p { "{REPLAY_DESCRIPTION}" }
        }
    }
}
