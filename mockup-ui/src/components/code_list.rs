use crate::stores::builder::{BuilderUiState, BuilderUiStateStoreExt};
use dioxus::prelude::*;
use mockup_common::{CodeEntry, CodeLayout};

pub const CODE_LIST_ID: &str = "selected-code-list";

/// Code list view - the markup of every mockup entry, in mockup order
#[component]
pub fn CodeListView(state: ReadStore<BuilderUiState>) -> Element {
    let items = state.code_items().read().clone();

    rsx! {
        section { class: "code",
            h2 { class: "h6 text-uppercase text-muted mb-3", "Code" }
            ul { id: CODE_LIST_ID, class: "list-unstyled",
                for item in items {
                    CodeItem { key: "{item.id}", item: item.clone() }
                }
            }
        }
    }
}

#[component]
fn CodeItem(item: CodeEntry) -> Element {
    rsx! {
        li { class: "item col-12", "data-pair-id": item.id.to_string(),
            if item.layout == CodeLayout::Block {
                code { class: "code-block", "{item.source_content}" }
            } else {
                "{item.source_content}"
            }
        }
    }
}
