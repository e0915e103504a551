//! Views module - all page components

mod home;
pub use home::Home;

mod monitor;
pub use monitor::Monitor;

mod not_found;
pub use not_found::PageNotFound;

mod replay;
pub use replay::Replay;

mod shell;

#[cfg(test)]
pub(crate) fn render(view: fn() -> dioxus::prelude::Element) -> String {
    let mut dom = dioxus::prelude::VirtualDom::new(view);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}
