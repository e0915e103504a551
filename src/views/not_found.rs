//! Fallback for paths with no matching view

use super::shell::{PAGE_CLASS, PAGE_TITLE_CLASS};
use dioxus::prelude::*;

/// Rebuild the requested path from router segments
pub fn requested_path(segments: &[String]) -> String {
    format!("/{}", segments.join("/"))
}

#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    let path = requested_path(&segments);
    tracing::debug!("No view for {path}");

    rsx! {
        main { class: PAGE_CLASS,
            h1 { class: PAGE_TITLE_CLASS, "Page not found" }
            p { class: "mb-6",
                "Nothing lives at "
                code { "{path}" }
                " yet."
            }
            Link {
                to: crate::Route::Home {},
                class: "bg-gray-700 text-white px-4 py-2 rounded",
                "Back to SpecScope"
            }
        }
    }
}
