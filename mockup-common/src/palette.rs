//! Source palette: the fixed catalog of components a user picks from

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Styling class marking an entry as selected in the palette
pub const SELECTED_CLASS: &str = "item-selected";

/// Image shown for a component (thumbnail in the palette, preview in the mockup)
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    pub src: String,
    #[serde(default)]
    pub alt: String,
}

/// A single palette entry
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteEntry {
    /// Stable key within the catalog, used for rendering only
    pub key: String,
    /// Visible text of the entry
    pub label: String,
    #[serde(default)]
    pub image: Option<ImageRef>,
    /// Markup snippet shown in the code list
    #[serde(default)]
    pub snippet: Option<String>,
    #[serde(default)]
    pub classes: Vec<String>,
}

impl PaletteEntry {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            image: None,
            snippet: None,
            classes: Vec::new(),
        }
    }

    pub fn with_snippet(mut self, snippet: impl Into<String>) -> Self {
        self.snippet = Some(snippet.into());
        self
    }

    pub fn with_image(mut self, src: impl Into<String>, alt: impl Into<String>) -> Self {
        self.image = Some(ImageRef {
            src: src.into(),
            alt: alt.into(),
        });
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Display content used for duplicate detection
    pub fn display_text(&self) -> &str {
        self.label.trim()
    }

    /// Snippet content, or `None` when the entry carries no (non-blank) snippet
    pub fn snippet_text(&self) -> Option<&str> {
        self.snippet
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

/// The whole catalog, in display order
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub entries: Vec<PaletteEntry>,
}

impl Palette {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let palette: Palette = serde_json::from_str(json)?;
        let mut seen = std::collections::HashSet::new();
        for entry in &palette.entries {
            if !seen.insert(entry.key.as_str()) {
                return Err(ConfigError::DuplicatePaletteKey(entry.key.clone()));
            }
        }
        Ok(palette)
    }

    pub fn get(&self, key: &str) -> Option<&PaletteEntry> {
        self.entries.iter().find(|e| e.key == key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snippet_is_trimmed() {
        let entry = PaletteEntry::new("btn", "Button").with_snippet("\n  <button>Go</button>\n");
        assert_eq!(entry.snippet_text(), Some("<button>Go</button>"));
    }

    #[test]
    fn test_blank_snippet_counts_as_missing() {
        let entry = PaletteEntry::new("btn", "Button").with_snippet("   ");
        assert_eq!(entry.snippet_text(), None);
    }

    #[test]
    fn test_from_json_defaults_optional_fields() {
        let palette = Palette::from_json(
            r#"{"entries": [{"key": "nav", "label": "Navbar"}, {"key": "card", "label": "Card", "snippet": "<div class=\"card\"></div>"}]}"#,
        )
        .unwrap();
        assert_eq!(palette.len(), 2);
        assert_eq!(palette.get("nav").unwrap().image, None);
        assert_eq!(
            palette.get("card").unwrap().snippet_text(),
            Some("<div class=\"card\"></div>")
        );
    }

    #[test]
    fn test_from_json_rejects_duplicate_keys() {
        let err = Palette::from_json(
            r#"{"entries": [{"key": "a", "label": "A"}, {"key": "a", "label": "B"}]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::DuplicatePaletteKey(ref k) if k == "a"));
    }

    #[test]
    fn test_from_json_rejects_malformed_input() {
        assert!(matches!(
            Palette::from_json("{not json"),
            Err(ConfigError::InvalidJson(_))
        ));
    }
}
