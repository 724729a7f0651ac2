use dioxus::prelude::*;

use crate::i18n::use_language_marker;
use crate::timeline::TimelineView;

#[component]
pub fn Home() -> Element {
    let _lang = use_language_marker();

    rsx! {
        section { class: "page page-home",
            TimelineView {}
        }
    }
}
