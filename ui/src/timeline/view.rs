use dioxus::prelude::*;
use tracing::{debug, info, warn};

use crate::i18n::use_language_marker;
use crate::t;

use super::{DetailOverlay, SummaryView, Timeline, TimelineAction, TimelineStrip};

const HERO_IMAGE_URL: &str = "https://hebbkx1anhila5yf.public.blob.vercel-storage.com/myDigitalLife_002-FLgvhgqgQLGf4kiTeGoFrYIsOSgFOL.png";

/// Loads the bundled seed once and renders the interactive timeline, or an
/// error banner if the seed cannot be built.
#[component]
pub fn TimelineView() -> Element {
    let _lang = use_language_marker();
    let loaded = use_hook(|| match Timeline::bundled() {
        Ok(timeline) => {
            info!(
                positions = timeline.positions().len(),
                max_score = timeline.max_score(),
                "timeline seed loaded"
            );
            Ok(timeline)
        }
        Err(err) => {
            warn!(%err, "timeline seed failed to load");
            Err(err.to_string())
        }
    });

    match loaded {
        Ok(initial) => rsx! {
            TimelineBoard { initial }
        },
        Err(error) => rsx! {
            div { class: "timeline__error", role: "alert",
                "⚠️ "
                {t!("timeline-load-error", error = error)}
            }
        },
    }
}

/// Owns the session state. Children receive snapshots and report interactions
/// back as [`TimelineAction`]s; each one is applied before the next render.
#[component]
fn TimelineBoard(initial: Timeline) -> Element {
    let _lang = use_language_marker();
    let mut timeline = use_signal(move || initial);

    let on_action = use_callback(move |action: TimelineAction| {
        let changed = timeline.with_mut(|state| state.apply(action));
        if changed {
            debug!(?action, "timeline action applied");
        } else {
            debug!(?action, "timeline action ignored");
        }
    });

    let state = timeline();
    let hero_alt = t!("home-hero-alt");

    rsx! {
        article { class: "timeline",
            div { class: "timeline__main",
                SummaryView {
                    total: state.total_score(),
                    max: state.max_score(),
                    progress: state.progress(),
                    on_action,
                }

                figure { class: "timeline__hero",
                    img { src: HERO_IMAGE_URL, alt: "{hero_alt}" }
                }
            }

            div { class: "timeline__footer",
                TimelineStrip {
                    positions: state.positions().to_vec(),
                    active: state.active_index(),
                    on_action,
                }
            }

            if let Some(position) = state.active_position() {
                DetailOverlay { position: position.clone(), on_action }
            }
        }
    }
}
