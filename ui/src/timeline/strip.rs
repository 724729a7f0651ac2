use dioxus::prelude::*;

use crate::core::format;
use crate::i18n::use_language_marker;
use crate::t;

use super::{Position, TimelineAction};

/// Every position in seed order; clicking one opens its detail overlay.
#[component]
pub fn TimelineStrip(
    positions: Vec<Position>,
    active: Option<usize>,
    on_action: EventHandler<TimelineAction>,
) -> Element {
    let _lang = use_language_marker();
    let strip_label = t!("strip-aria-label");
    let score_label = t!("strip-score-label");

    rsx! {
        nav { class: "timeline-strip", aria_label: "{strip_label}",
            div { class: "timeline-strip__bar", aria_hidden: "true" }
            ol { class: "timeline-strip__positions",
                for (index, position) in positions.iter().enumerate() {
                    {render_marker(index, position, active == Some(index), &score_label, on_action)}
                }
            }
        }
    }
}

fn render_marker(
    index: usize,
    position: &Position,
    is_active: bool,
    score_label: &str,
    on_action: EventHandler<TimelineAction>,
) -> Element {
    let item_class = if is_active {
        "timeline-strip__item timeline-strip__item--active"
    } else {
        "timeline-strip__item"
    };
    let score = format::format_fraction(position.score(), position.max_score());

    rsx! {
        li { key: "{index}", class: "{item_class}",
            button {
                r#type: "button",
                class: "timeline-strip__button",
                aria_pressed: "{is_active}",
                onclick: move |_| on_action.call(TimelineAction::OpenPosition(index)),
                span { class: "timeline-strip__marker" }
                span { class: "timeline-strip__label", "{position.label}" }
                span { class: "timeline-strip__time", "{position.time}" }
                span { class: "timeline-strip__score", "{score_label} {score}" }
            }
        }
    }
}
