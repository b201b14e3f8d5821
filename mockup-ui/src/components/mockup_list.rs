//! Mockup list view
//!
//! The sortable list of chosen components. Each entry carries its pair id in
//! `data-pair-id` so the drag library's reported order can be mapped back to
//! pairs. Reordering itself is done by the drag library on the DOM.

use crate::stores::builder::{BuilderUiState, BuilderUiStateStoreExt};
use dioxus::prelude::*;
use mockup_common::entry::REMOVE_AFFORDANCE_LABEL;
use mockup_common::{ClickTarget, MockupEntry, PairId, RemovalMode, REMOVE_AFFORDANCE_CLASS};

pub const MOCKUP_LIST_ID: &str = "selected-list";

/// Attribute carrying the pair id on rendered entries
pub const PAIR_ID_ATTRIBUTE: &str = "data-pair-id";

#[component]
pub fn MockupListView(
    state: ReadStore<BuilderUiState>,
    on_entry_click: EventHandler<(PairId, ClickTarget)>,
) -> Element {
    let items = state.mockup_items().read().clone();
    let removal_mode = *state.removal_mode().read();

    rsx! {
        section { class: "mockup",
            h2 { class: "h6 text-uppercase text-muted mb-3", "Mockup" }
            if items.is_empty() {
                div { class: "text-muted small mb-2", "Click a component to add it here" }
            }
            // Always rendered: the drag library stays attached to this element
            ul { id: MOCKUP_LIST_ID, class: "list-unstyled mockup-list",
                for item in items {
                    MockupItem {
                        key: "{item.id}",
                        item: item.clone(),
                        removal_mode,
                        on_entry_click,
                    }
                }
            }
        }
    }
}

#[component]
fn MockupItem(
    item: MockupEntry,
    removal_mode: RemovalMode,
    on_entry_click: EventHandler<(PairId, ClickTarget)>,
) -> Element {
    let id = item.id;
    let mut class = String::from("item");
    for extra in item.classes.iter().filter(|c| c.as_str() != "item") {
        class.push(' ');
        class.push_str(extra);
    }
    if removal_mode == RemovalMode::WholeEntry {
        class.push_str(" removable");
    }
    let affordance_class = format!("{REMOVE_AFFORDANCE_CLASS} btn btn-danger btn-sm ms-2");

    rsx! {
        li {
            class,
            "data-pair-id": item.dom_id(),
            onclick: move |_| on_entry_click.call((id, ClickTarget::EntryBody)),
            div { class: "d-flex align-items-center",
                if let Some(ref image) = item.image {
                    img { src: "{image.src}", alt: "{image.alt}" }
                } else {
                    span { class: "mockup-label", "{item.display_text}" }
                }
                span {
                    class: affordance_class,
                    role: "button",
                    aria_label: "Remove {item.display_text}",
                    onclick: move |e: MouseEvent| {
                        e.stop_propagation();
                        on_entry_click.call((id, ClickTarget::RemoveAffordance));
                    },
                    "{REMOVE_AFFORDANCE_LABEL}"
                }
            }
        }
    }
}
