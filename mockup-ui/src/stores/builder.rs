//! Builder state store (palette, both mirrored lists, export status)

use dioxus::prelude::*;
use mockup_common::{CodeEntry, MockupEntry, PaletteEntry, RemovalMode};

/// Render state of the builder page.
///
/// Filled by the app's builder service after every dispatched event; views
/// only read it.
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct BuilderUiState {
    /// Catalog shown in the source palette
    pub palette: Vec<PaletteEntry>,
    /// Mockup list entries in visual order
    pub mockup_items: Vec<MockupEntry>,
    /// Code list entries, mirroring `mockup_items`
    pub code_items: Vec<CodeEntry>,
    /// Whether the entry body removes on click, or only the "X"
    pub removal_mode: RemovalMode,
    /// An image export is running; the download trigger is disabled meanwhile
    pub export_in_flight: bool,
}
