//! Internationalization (i18n) support for `digitalday-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (language selection + asset loading)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile‑time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/digitalday-ui.ftl   (fallback/reference)
//!   es-ES/digitalday-ui.ftl
//!   fr-FR/digitalday-ui.ftl
//! ```
//!
//! Only interface chrome is translated. Timeline content (position labels,
//! descriptions, category names) comes from the seed document as-is.
//!
//! Usage in a component:
//! ```ignore
//! use crate::t;
//! let _lang = crate::i18n::use_language_marker();
//! let title = t!("summary-title");
//! ```
//!
//! Platform notes:
//! - Desktop: uses `DesktopLanguageRequester` (OS locale list).
//! - Web/WASM: uses `WebLanguageRequester` (`navigator.languages`).
use std::sync::Once;

use dioxus::prelude::*;
use i18n_embed::fluent::FluentLanguageLoader;
use i18n_embed::{I18nEmbedError, LanguageLoader};
use once_cell::sync::Lazy;
use rust_embed::Embed;
use tracing::{info, warn};
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl;

/// Ergonomic translation macro routing every lookup through [`LOADER`].
///
/// ```ignore
/// t!("summary-title")
/// t!("detail-time", time = "6:00 AM")
/// ```
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent domain; the fallback file is `i18n/en-US/{DOMAIN}.ftl`.
const DOMAIN: &str = "digitalday-ui";

pub const FALLBACK_LANGUAGE: &str = "en-US";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = FALLBACK_LANGUAGE
        .parse()
        .expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Initialize i18n (idempotent).
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        match select_languages(&requested) {
            Ok(selected) => info!(?selected, "localization loaded"),
            Err(err) => warn!(%err, "failed selecting languages; continuing with fallback"),
        }
    });
}

/// Switch language at runtime. Unparseable tags are ignored (Ok returned).
pub fn set_language(tag: &str) -> Result<(), I18nEmbedError> {
    let lang: LanguageIdentifier = match tag.parse() {
        Ok(l) => l,
        Err(_) => return Ok(()),
    };
    let selected = select_languages(&[lang])?;
    info!(?selected, "language switched");
    Ok(())
}

/// Load bundles for `requested`. Selecting rebuilds the bundles, so isolation
/// is switched off afterwards; bidi marks would otherwise wrap every argument.
fn select_languages(
    requested: &[LanguageIdentifier],
) -> Result<Vec<LanguageIdentifier>, I18nEmbedError> {
    let selected = i18n_embed::select(&*LOADER, &Localizations, requested)?;
    LOADER.set_use_isolating(false);
    Ok(selected)
}

/// Tag of the language the loader currently resolves messages in.
pub fn current_language() -> String {
    LOADER.current_language().to_string()
}

/// Embedded language identifiers, sorted (for the picker).
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

/// Subscribe the calling component to the global language code signal, if the
/// platform provided one, so it re-renders after a language switch.
pub fn use_language_marker() -> String {
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    lang_code.map(|code| code()).unwrap_or_default()
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}

#[cfg(test)]
mod tests {
    use std::sync::{Mutex, MutexGuard};

    use super::*;
    use crate::i18n::fl;

    // The loader is global; tests that switch or read the language run one at a time.
    static LANGUAGE: Mutex<()> = Mutex::new(());

    fn language_lock() -> MutexGuard<'static, ()> {
        LANGUAGE.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    #[test]
    fn fallback_language_is_present() {
        assert!(available_languages().iter().any(|l| l == FALLBACK_LANGUAGE));
    }

    #[test]
    fn all_shipped_locales_are_listed() {
        assert_eq!(available_languages(), vec!["en-US", "es-ES", "fr-FR"]);
    }

    #[test]
    fn basic_lookup_works() {
        let _guard = language_lock();
        init();
        set_language(FALLBACK_LANGUAGE).unwrap();
        let s = fl!(&*LOADER, "summary-reset-all");
        assert_eq!(s, "Reset All Scores");
    }

    #[test]
    fn arguments_render_without_isolation_marks() {
        let _guard = language_lock();
        init();
        set_language(FALLBACK_LANGUAGE).unwrap();
        let s = fl!(&*LOADER, "detail-time", time = "6:00 AM");
        assert_eq!(s, "Time: 6:00 AM");
    }

    #[test]
    fn language_switch_keeps_arguments_unisolated() {
        let _guard = language_lock();
        init();

        set_language("fr-FR").unwrap();
        assert_eq!(current_language(), "fr-FR");
        let s = fl!(&*LOADER, "detail-time", time = "6:00 AM");
        assert_eq!(s, "Heure : 6:00 AM");

        set_language(FALLBACK_LANGUAGE).unwrap();
        let s = fl!(&*LOADER, "timeline-load-error", error = "boom");
        assert_eq!(s, "Couldn't load the timeline: boom");
        assert!(!s.contains('\u{2068}') && !s.contains('\u{2069}'));
    }

    #[test]
    fn current_language_is_an_embedded_locale() {
        let _guard = language_lock();
        init();
        assert!(available_languages().contains(&current_language()));
    }

    thread_local! {
        static MARKER_SEEN: std::cell::RefCell<Option<String>> = const { std::cell::RefCell::new(None) };
    }

    #[component]
    fn MarkerReader() -> Element {
        let lang = use_language_marker();
        MARKER_SEEN.with(|seen| *seen.borrow_mut() = Some(lang));
        rsx! { div {} }
    }

    #[component]
    fn MarkerHost() -> Element {
        let code = use_signal(|| "fr-FR".to_string());
        use_context_provider(|| code);
        rsx! { MarkerReader {} }
    }

    #[test]
    fn language_marker_reads_the_context_signal() {
        let mut dom = VirtualDom::new(MarkerHost);
        dom.rebuild_in_place();
        assert_eq!(MARKER_SEEN.with(|seen| seen.borrow().clone()), Some("fr-FR".to_string()));
    }

    #[test]
    fn language_marker_is_empty_without_a_provider() {
        let mut dom = VirtualDom::new(MarkerReader);
        dom.rebuild_in_place();
        assert_eq!(MARKER_SEEN.with(|seen| seen.borrow().clone()), Some(String::new()));
    }

    #[test]
    fn invalid_tag_is_ignored() {
        let _guard = language_lock();
        init();
        assert!(set_language("not a language tag!").is_ok());
    }
}
