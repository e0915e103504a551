//! Page shell conventions shared by every view

/// Outer `main` element padding
pub const PAGE_CLASS: &str = "p-8";

/// Landing page banner
pub const HERO_TITLE_CLASS: &str = "text-4xl font-bold mb-4";

/// Banner for the feature pages
pub const PAGE_TITLE_CLASS: &str = "text-3xl font-bold mb-4";

/// A navigation link rendered as a button-styled anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub target: &'static str,
    pub class: &'static str,
}
