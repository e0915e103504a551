//! Monitor view - frequency band activity

use super::shell::{PAGE_CLASS, PAGE_TITLE_CLASS};
use dioxus::prelude::*;

pub const MONITOR_TITLE: &str = "📡 Frequency Band Monitor";
pub const MONITOR_DESCRIPTION: &str =
    "Select a frequency range and view activity/interference in that band.";

#[component]
pub fn Monitor() -> Element {
    rsx! {
        main { class: PAGE_CLASS,
            h1 { class: PAGE_TITLE_CLASS, "{MONITOR_TITLE}" }
            p { "{MONITOR_DESCRIPTION}" }
        }
    }
}
