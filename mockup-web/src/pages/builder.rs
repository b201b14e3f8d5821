use crate::browser::{AlertNotifier, AnchorDownloader, NavigatorClipboard};
use crate::builder::WebBuilderService;
use crate::catalog;
use crate::html2canvas::Html2CanvasRasterizer;
use crate::sortable::SortableHandle;
use dioxus::prelude::*;
use dioxus_core::{Runtime, RuntimeGuard};
use mockup_common::clipboard::copy_text;
use mockup_common::collaborators::Notifier;
use mockup_common::export::{export_mockup, today};
use mockup_common::{BuilderEvent, ClickTarget, PaletteEntry, PairId};
use mockup_ui::stores::builder::BuilderUiState;
use mockup_ui::{BuilderView, MOCKUP_LIST_ID};
use tracing::warn;

#[component]
pub fn BuilderPage() -> Element {
    let state = use_store(BuilderUiState::default);
    let mut service = use_signal(|| {
        WebBuilderService::new(state, catalog::load_config(), catalog::load_palette())
    });
    let mut sortable: Signal<Option<SortableHandle>> = use_signal(|| None);

    // Runs after the first render so the mockup list element exists.
    use_effect(move || {
        if sortable.peek().is_some() {
            return;
        }
        let Some(document) = web_sys_x::window().and_then(|w| w.document()) else {
            return;
        };
        let Some(container) = document.get_element_by_id(MOCKUP_LIST_ID) else {
            warn!("Mockup list not mounted, drag reordering disabled");
            return;
        };

        // Sortable calls back from outside the Dioxus runtime
        let runtime = Runtime::current();
        let config = service.peek().config().sortable.clone();
        let attached = SortableHandle::attach(&container, &config, move |order: Vec<PairId>| {
            let _guard = RuntimeGuard::new(runtime.clone());
            match service.try_write() {
                Ok(mut service) => {
                    service.dispatch(BuilderEvent::ReorderCompleted(order));
                }
                Err(e) => warn!("Dropped reorder, builder state unavailable: {e:?}"),
            }
        });
        match attached {
            Ok(handle) => sortable.set(Some(handle)),
            Err(e) => warn!("Failed to attach drag reordering: {e:?}"),
        }
    });

    use_drop(move || {
        // Destroying the instance calls into JS, so keep it out of the diff cycle
        if let Some(handle) = sortable.write().take() {
            spawn(async move {
                drop(handle);
            });
        }
    });

    rsx! {
        BuilderView {
            state,
            on_choose: move |entry: PaletteEntry| {
                service.write().dispatch(BuilderEvent::ItemChosen(entry));
            },
            on_entry_click: move |(id, target): (PairId, ClickTarget)| {
                service.write().dispatch(BuilderEvent::RemovalRequested { id, target });
            },
            on_download: move |_| {
                let job = service.read().export_job();
                service.read().set_exporting(true);
                spawn(async move {
                    let rasterizer = Html2CanvasRasterizer::new(MOCKUP_LIST_ID);
                    let result = export_mockup(
                        &job.mockup,
                        &job.config,
                        &job.gate,
                        today(),
                        &rasterizer,
                        &AnchorDownloader,
                    )
                    .await;
                    service.read().sync_export_status();
                    if let Err(e) = result {
                        warn!("Export failed: {e}");
                        if let Some(notice) = e.notice() {
                            AlertNotifier.notify(&notice);
                        }
                    }
                });
            },
            on_copy: move |_| {
                let text = service.read().code_text();
                spawn(async move {
                    let notice = copy_text(&text, &NavigatorClipboard).await;
                    AlertNotifier.notify(&notice);
                });
            },
        }
    }
}
