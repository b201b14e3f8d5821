use mockup_common::{
    clipboard, BuilderConfig, BuilderEvent, DispatchOutcome, EntryList, ExportConfig, ExportGate,
    ListSynchronizer, MockupEntry, Palette,
};
use mockup_ui::stores::builder::{BuilderUiState, BuilderUiStateStoreExt};
use dioxus::prelude::*;
use tracing::{debug, info};

/// What an export task needs, detached from the service so no borrow is held
/// across the rasterizer's await
pub struct ExportJob {
    pub mockup: EntryList<MockupEntry>,
    pub config: ExportConfig,
    pub gate: ExportGate,
}

/// Owns the builder lists and mirrors them into the UI store after every change
pub struct WebBuilderService {
    lists: ListSynchronizer,
    config: BuilderConfig,
    export_gate: ExportGate,
    store: Store<BuilderUiState>,
}

impl WebBuilderService {
    pub fn new(store: Store<BuilderUiState>, config: BuilderConfig, palette: Palette) -> Self {
        info!(
            "Builder ready with {} palette entries ({:?}, {:?})",
            palette.len(),
            config.duplicate_policy,
            config.removal_mode
        );
        store.palette().set(palette.entries);
        store.removal_mode().set(config.removal_mode);

        let service = Self {
            lists: ListSynchronizer::from_config(&config),
            config,
            export_gate: ExportGate::new(),
            store,
        };
        service.sync_lists_to_store();
        service
    }

    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    pub fn dispatch(&mut self, event: BuilderEvent) -> DispatchOutcome {
        let outcome = self.lists.dispatch(event);
        debug!("Dispatch outcome: {outcome:?}");
        if outcome.changed() {
            self.sync_lists_to_store();
        }
        outcome
    }

    pub fn export_job(&self) -> ExportJob {
        ExportJob {
            mockup: self.lists.mockup().clone(),
            config: self.config.export.clone(),
            gate: self.export_gate.clone(),
        }
    }

    pub fn set_exporting(&self, exporting: bool) {
        self.store.export_in_flight().set(exporting);
    }

    /// Mirror the gate into the store once an export task has finished
    pub fn sync_export_status(&self) {
        self.set_exporting(self.export_gate.is_running());
    }

    pub fn code_text(&self) -> String {
        clipboard::code_list_text(self.lists.code())
    }

    fn sync_lists_to_store(&self) {
        let mockup_items = self.lists.mockup().iter().cloned().collect();
        let code_items = self.lists.code().iter().cloned().collect();
        self.store.mockup_items().set(mockup_items);
        self.store.code_items().set(code_items);
    }
}
