//! Home view - landing banner and entry points into the app

use super::shell::{NavLink, HERO_TITLE_CLASS, PAGE_CLASS};
use dioxus::prelude::*;

pub const HOME_TITLE: &str = "Welcome to SpecScope";
pub const HOME_SUBTITLE: &str = "Explore RF spectrum activity, detect interference, and more.";

/// Links shown under the banner, in display order
pub const HOME_LINKS: [NavLink; 2] = [
    NavLink {
        label: "Go to Dashboard",
        target: "/dashboard",
        class: "bg-blue-600 text-white px-4 py-2 rounded",
    },
    NavLink {
        label: "Upload Data",
        target: "/upload",
        class: "bg-gray-700 text-white px-4 py-2 rounded",
    },
];

/// Landing page
#[component]
pub fn Home() -> Element {
    rsx! {
        main { class: PAGE_CLASS,
            h1 { class: HERO_TITLE_CLASS, "{HOME_TITLE}" }
            p { class: "mb-6", "{HOME_SUBTITLE}" }
            div { class: "space-x-4",
                for link in HOME_LINKS {
                    a { key: "{link.target}", href: link.target, class: link.class, "{link.label}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::render;

    #[test]
    fn renders_title_and_subtitle() {
        let html = render(Home);
        assert!(html.contains(HOME_TITLE));
        assert!(html.contains("Explore RF spectrum activity"));
    }

    #[test]
    fn renders_two_links_in_order() {
        let html = render(Home);
        assert_eq!(html.matches("<a").count(), 2);

        let dashboard = html.find(r#"href="/dashboard""#).unwrap();
        let upload = html.find(r#"href="/upload""#).unwrap();
        assert!(dashboard < upload);
    }

    #[test]
    fn link_targets() {
        let targets: Vec<_> = HOME_LINKS.iter().map(|l| l.target).collect();
        assert_eq!(targets, ["/dashboard", "/upload"]);
    }

    #[test]
    fn render_is_idempotent() {
        assert_eq!(render(Home), render(Home));
    }
}
