//! Rendering state for the two sides of a pair

use serde::{Deserialize, Serialize};

use crate::pair::{Entry, PairId};
use crate::palette::{ImageRef, PaletteEntry, SELECTED_CLASS};

/// Class of the removal affordance. Also excluded from image export.
pub const REMOVE_AFFORDANCE_CLASS: &str = "remove-item";

/// Label drawn on the removal affordance
pub const REMOVE_AFFORDANCE_LABEL: &str = "X";

/// Entry in the mockup list: the component's preview plus a removal control
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MockupEntry {
    pub id: PairId,
    /// Key of the palette entry this was cloned from
    pub palette_key: String,
    pub display_text: String,
    pub image: Option<ImageRef>,
    pub classes: Vec<String>,
}

impl MockupEntry {
    /// Clone a palette entry into the mockup list, dropping its selected styling.
    pub fn from_palette(id: PairId, source: &PaletteEntry) -> Self {
        Self {
            id,
            palette_key: source.key.clone(),
            display_text: source.display_text().to_string(),
            image: source.image.clone(),
            classes: source
                .classes
                .iter()
                .filter(|c| c.as_str() != SELECTED_CLASS)
                .cloned()
                .collect(),
        }
    }

    /// Data attribute value used to tag the rendered element
    pub fn dom_id(&self) -> String {
        self.id.to_string()
    }
}

impl Entry for MockupEntry {
    fn pair_id(&self) -> PairId {
        self.id
    }
}

/// How a code entry is laid out
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CodeLayout {
    /// Whitespace-preserving `<code>` block
    Block,
    /// Fallback plain text when the palette entry had no snippet
    Plain,
}

/// Entry in the code list: the literal markup of one selected component
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeEntry {
    pub id: PairId,
    /// Text captured at creation time, never modified afterwards
    pub source_content: String,
    pub layout: CodeLayout,
}

impl CodeEntry {
    pub fn from_palette(id: PairId, source: &PaletteEntry) -> Self {
        match source.snippet_text() {
            Some(snippet) => Self {
                id,
                source_content: snippet.to_string(),
                layout: CodeLayout::Block,
            },
            None => Self {
                id,
                source_content: source.display_text().to_string(),
                layout: CodeLayout::Plain,
            },
        }
    }
}

impl Entry for CodeEntry {
    fn pair_id(&self) -> PairId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mockup_entry_drops_selected_class() {
        let source = PaletteEntry::new("btn", "  Button ")
            .with_class("item")
            .with_class(SELECTED_CLASS)
            .with_image("/img/button.png", "Button");
        let entry = MockupEntry::from_palette(PairId::new(3), &source);
        assert_eq!(entry.classes, vec!["item".to_string()]);
        assert_eq!(entry.display_text, "Button");
        assert_eq!(entry.image.as_ref().unwrap().src, "/img/button.png");
        assert_eq!(entry.dom_id(), "3");
    }

    #[test]
    fn test_code_entry_uses_snippet_block() {
        let source = PaletteEntry::new("btn", "Button").with_snippet("  <button>\n  Go\n</button>  ");
        let entry = CodeEntry::from_palette(PairId::new(0), &source);
        assert_eq!(entry.layout, CodeLayout::Block);
        assert_eq!(entry.source_content, "<button>\n  Go\n</button>");
    }

    #[test]
    fn test_code_entry_falls_back_to_label() {
        let source = PaletteEntry::new("hr", " Divider ");
        let entry = CodeEntry::from_palette(PairId::new(0), &source);
        assert_eq!(entry.layout, CodeLayout::Plain);
        assert_eq!(entry.source_content, "Divider");
    }
}
