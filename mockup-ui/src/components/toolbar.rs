use crate::components::icons::{CopyIcon, DownloadIcon};
use crate::components::{Button, ButtonVariant};
use crate::stores::builder::{BuilderUiState, BuilderUiStateStoreExt};
use dioxus::prelude::*;

pub const DOWNLOAD_BUTTON_ID: &str = "download-mockup-btn";

/// Export and copy actions
#[component]
pub fn BuilderToolbar(
    state: ReadStore<BuilderUiState>,
    on_download: EventHandler<()>,
    on_copy: EventHandler<()>,
) -> Element {
    let exporting = *state.export_in_flight().read();

    rsx! {
        div { class: "d-flex gap-2 mb-3",
            Button {
                variant: ButtonVariant::Primary,
                id: Some(DOWNLOAD_BUTTON_ID.to_string()),
                disabled: exporting,
                title: Some("Download the mockup as a JPEG image".to_string()),
                onclick: move |_| on_download.call(()),
                DownloadIcon {}
                if exporting {
                    "Exporting..."
                } else {
                    "Download mockup"
                }
            }
            Button {
                variant: ButtonVariant::Secondary,
                title: Some("Copy the code list to the clipboard".to_string()),
                onclick: move |_| on_copy.call(()),
                CopyIcon {}
                "Copy code"
            }
        }
    }
}
