//! Shared UI crate for My Digital Life: the timeline state model, its seed,
//! localization and every view. The platform crates only launch it.

use dioxus::prelude::*;

pub mod core;
pub mod i18n;
pub mod timeline;
pub mod views;

pub mod components {
    pub mod app_navbar;
    pub use app_navbar::AppNavbar;
}

/// Shared theme, linked by the web launcher and inlined by the desktop one.
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");
