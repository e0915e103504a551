use dioxus::prelude::*;

mod config;
mod logging;
mod views;

use config::Config;
use views::{Home, Monitor, PageNotFound, Replay};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/monitor")]
    Monitor {},
    #[route("/replay")]
    Replay {},
    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/styling/main.css");

/// Renderer compiled into this build, in the order dioxus picks them
fn renderer() -> Option<&'static str> {
    if cfg!(feature = "desktop") {
        Some("desktop")
    } else if cfg!(feature = "mobile") {
        Some("mobile")
    } else if cfg!(feature = "web") {
        Some("web")
    } else {
        None
    }
}

fn main() {
    let loaded = Config::load();
    let config = loaded.as_ref().cloned().unwrap_or_default();
    let log_guard = logging::init(&config);

    let Some(renderer) = renderer() else {
        tracing::error!("No renderer enabled; build with `--features desktop`, `web` or `mobile`");
        drop(log_guard);
        std::process::exit(1);
    };

    tracing::info!(renderer, "SpecScope starting");
    if let Err(e) = &loaded {
        tracing::warn!("{e}; using default config");
    }
    tracing::debug!(?config, "Loaded config");

    // Unreachable without a renderer, see above
    #[allow(deprecated)]
    dioxus::LaunchBuilder::new().with_context(config).launch(App);
}

#[component]
fn App() -> Element {
    let config = use_context::<Config>();

    rsx! {
        document::Title { "{config.title}" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}
