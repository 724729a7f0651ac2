use dioxus::prelude::*;

use crate::core::format;
use crate::i18n::use_language_marker;
use crate::t;

use super::{Category, Position, TimelineAction};

/// Checklist for the active position. Scored categories render as disabled
/// buttons, so a second click never reaches the state.
#[component]
pub fn DetailOverlay(position: Position, on_action: EventHandler<TimelineAction>) -> Element {
    let _lang = use_language_marker();
    let time_line = t!("detail-time", time = position.time.clone());
    let close_label = t!("detail-close");
    let score = format::format_score(position.score(), position.max_score());

    rsx! {
        div { class: "timeline-detail",
            div {
                class: "timeline-detail__card",
                role: "dialog",
                aria_modal: "true",
                aria_label: "{position.label}",

                div { class: "timeline-detail__header",
                    div {
                        h2 { "{position.label}" }
                        p { class: "timeline-detail__time", "{time_line}" }
                    }
                    button {
                        r#type: "button",
                        class: "button button--ghost timeline-detail__close",
                        aria_label: "{close_label}",
                        title: "{close_label}",
                        onclick: move |_| on_action.call(TimelineAction::ClosePosition),
                        "×"
                    }
                }

                p { class: "timeline-detail__description", "{position.description}" }

                h3 { {t!("detail-categories")} }
                div { class: "timeline-detail__categories",
                    for (index, category) in position.categories().iter().enumerate() {
                        {render_category(index, category, on_action)}
                    }
                }

                div { class: "timeline-detail__footer",
                    p { class: "timeline-detail__total",
                        {t!("detail-total-label")}
                        " "
                        span { class: "timeline-detail__total-value", "{score}" }
                    }
                    button {
                        r#type: "button",
                        class: "button button--accent timeline-detail__reset",
                        onclick: move |_| on_action.call(TimelineAction::ResetPosition),
                        {t!("detail-reset")}
                    }
                }
            }
        }
    }
}

fn render_category(
    index: usize,
    category: &Category,
    on_action: EventHandler<TimelineAction>,
) -> Element {
    let class = if category.scored {
        "timeline-detail__category timeline-detail__category--scored"
    } else {
        "timeline-detail__category"
    };

    rsx! {
        button {
            key: "{index}",
            r#type: "button",
            class: "{class}",
            disabled: category.scored,
            onclick: move |_| on_action.call(TimelineAction::MarkCategory(index)),
            span { class: "timeline-detail__category-name", "{category.name}" }
            if category.scored {
                span { class: "timeline-detail__check", aria_hidden: "true", "✓" }
            }
        }
    }
}
