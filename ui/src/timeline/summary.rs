use dioxus::prelude::*;

use crate::core::format;
use crate::i18n::use_language_marker;
use crate::t;

use super::TimelineAction;

/// Aggregate score across every position, with the "reset all" action.
#[component]
pub fn SummaryView(
    total: usize,
    max: usize,
    progress: f64,
    on_action: EventHandler<TimelineAction>,
) -> Element {
    let _lang = use_language_marker();
    let score = format::format_score(total, max);
    let width = format::format_percent(progress);
    let progress_label = t!("summary-progress-label");

    rsx! {
        section { class: "timeline-summary",
            div { class: "timeline-summary__header",
                h2 { {t!("summary-title")} }
                button {
                    r#type: "button",
                    class: "button button--danger timeline-summary__reset",
                    onclick: move |_| on_action.call(TimelineAction::ResetAll),
                    {t!("summary-reset-all")}
                }
            }

            div { class: "timeline-summary__total",
                span { class: "timeline-summary__total-label", {t!("summary-total-label")} }
                span { class: "timeline-summary__total-value", "{score}" }
            }

            div {
                class: "timeline-summary__track",
                role: "progressbar",
                aria_label: "{progress_label}",
                aria_valuemin: "0",
                aria_valuemax: "{max}",
                aria_valuenow: "{total}",
                div { class: "timeline-summary__fill", style: "width: {width}" }
            }
        }
    }
}
