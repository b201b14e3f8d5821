//! Source palette view
//!
//! Renders the component catalog. Clicking an entry hands a copy of it to
//! `on_choose`; the palette itself never changes.

use crate::stores::builder::{BuilderUiState, BuilderUiStateStoreExt};
use dioxus::prelude::*;
use mockup_common::PaletteEntry;

pub const PALETTE_LIST_ID: &str = "source-list";

#[component]
pub fn PaletteView(state: ReadStore<BuilderUiState>, on_choose: EventHandler<PaletteEntry>) -> Element {
    let entries = state.palette().read().clone();

    rsx! {
        section { class: "palette",
            h2 { class: "h6 text-uppercase text-muted mb-3", "Components" }
            if entries.is_empty() {
                div { class: "text-muted small", "No components available" }
            } else {
                ul { id: PALETTE_LIST_ID, class: "row list-unstyled g-2",
                    for entry in entries {
                        PaletteItem { key: "{entry.key}", entry: entry.clone(), on_choose }
                    }
                }
            }
        }
    }
}

#[component]
fn PaletteItem(entry: PaletteEntry, on_choose: EventHandler<PaletteEntry>) -> Element {
    let class = if entry.classes.is_empty() {
        "item col-6".to_string()
    } else {
        format!("item col-6 {}", entry.classes.join(" "))
    };
    let label = entry.display_text().to_string();
    let clicked = entry.clone();

    rsx! {
        li {
            class,
            title: "Add {label}",
            onclick: move |_| on_choose.call(clicked.clone()),
            div { class: "palette-card",
                if let Some(ref image) = entry.image {
                    img {
                        src: "{image.src}",
                        alt: "{image.alt}",
                        class: "img-fluid",
                    }
                }
                div { class: "small fw-semibold mt-1", "{label}" }
            }
        }
    }
}
