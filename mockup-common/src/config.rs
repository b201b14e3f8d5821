//! Builder configuration
//!
//! Every field has a default matching the stock builder; a JSON document only
//! needs to name what it overrides.

use serde::{Deserialize, Serialize};

use crate::entry::REMOVE_AFFORDANCE_CLASS;
use crate::error::ConfigError;

/// What happens when a palette entry is chosen that is already in the mockup list
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Every click creates a new pair
    #[default]
    AlwaysAppend,
    /// Skip the click if an entry with identical display text already exists
    SuppressIdenticalDisplay,
}

/// Which clicks inside a mockup entry remove it
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemovalMode {
    /// The affordance and the entry body both remove
    #[default]
    WholeEntry,
    /// Only the affordance removes
    AffordanceOnly,
}

/// Options handed to the sortable-list library on the mockup container
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SortableConfig {
    pub animation_ms: u32,
    pub ghost_class: String,
    pub chosen_class: String,
    pub drag_class: String,
}

impl Default for SortableConfig {
    fn default() -> Self {
        Self {
            animation_ms: 150,
            ghost_class: "sortable-ghost".to_string(),
            chosen_class: "sortable-chosen".to_string(),
            drag_class: "sortable-drag".to_string(),
        }
    }
}

/// Image export settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Elements carrying this class are left out of the image
    pub exclude_class: String,
    /// Opaque fill behind the mockup (JPEG has no alpha)
    pub background: String,
    pub use_cors: bool,
    pub mime_type: String,
    pub quality: f64,
    pub filename_prefix: String,
    pub filename_extension: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            exclude_class: REMOVE_AFFORDANCE_CLASS.to_string(),
            background: "#ffffff".to_string(),
            use_cors: true,
            mime_type: "image/jpeg".to_string(),
            quality: 0.9,
            filename_prefix: "mockup".to_string(),
            filename_extension: "jpg".to_string(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuilderConfig {
    pub duplicate_policy: DuplicatePolicy,
    pub removal_mode: RemovalMode,
    pub sortable: SortableConfig,
    pub export: ExportConfig,
}

impl BuilderConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: BuilderConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let quality = self.export.quality;
        if !(0.0..=1.0).contains(&quality) {
            return Err(ConfigError::InvalidQuality(quality));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BuilderConfig::default();
        assert_eq!(config.duplicate_policy, DuplicatePolicy::AlwaysAppend);
        assert_eq!(config.removal_mode, RemovalMode::WholeEntry);
        assert_eq!(config.sortable.animation_ms, 150);
        assert_eq!(config.sortable.ghost_class, "sortable-ghost");
        assert_eq!(config.export.exclude_class, "remove-item");
        assert_eq!(config.export.background, "#ffffff");
        assert!(config.export.use_cors);
        assert_eq!(config.export.quality, 0.9);
    }

    #[test]
    fn test_partial_override() {
        let config = BuilderConfig::from_json(
            r#"{"duplicate_policy": "suppress_identical_display", "sortable": {"animation_ms": 300}}"#,
        )
        .unwrap();
        assert_eq!(
            config.duplicate_policy,
            DuplicatePolicy::SuppressIdenticalDisplay
        );
        assert_eq!(config.sortable.animation_ms, 300);
        assert_eq!(config.sortable.drag_class, "sortable-drag");
        assert_eq!(config.removal_mode, RemovalMode::WholeEntry);
    }

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(
            BuilderConfig::from_json("{}").unwrap(),
            BuilderConfig::default()
        );
    }

    #[test]
    fn test_rejects_out_of_range_quality() {
        let err = BuilderConfig::from_json(r#"{"export": {"quality": 1.5}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidQuality(q) if q == 1.5));
    }

    #[test]
    fn test_rejects_unknown_policy() {
        assert!(matches!(
            BuilderConfig::from_json(r#"{"duplicate_policy": "sometimes"}"#),
            Err(ConfigError::InvalidJson(_))
        ));
    }
}
