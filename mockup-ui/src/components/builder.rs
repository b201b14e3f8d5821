//! Builder page view
//!
//! Lays out palette, mockup list and code list side by side. Pure view: every
//! interaction is reported through a callback.

use crate::components::{BuilderToolbar, CodeListView, MockupListView, PaletteView};
use crate::stores::builder::BuilderUiState;
use dioxus::prelude::*;
use mockup_common::{ClickTarget, PaletteEntry, PairId};

#[component]
pub fn BuilderView(
    state: ReadStore<BuilderUiState>,
    on_choose: EventHandler<PaletteEntry>,
    on_entry_click: EventHandler<(PairId, ClickTarget)>,
    on_download: EventHandler<()>,
    on_copy: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "container-fluid py-3",
            BuilderToolbar { state, on_download, on_copy }
            div { class: "row g-4",
                div { class: "col-md-4",
                    PaletteView { state, on_choose }
                }
                div { class: "col-md-4",
                    MockupListView { state, on_entry_click }
                }
                div { class: "col-md-4",
                    CodeListView { state }
                }
            }
        }
    }
}
