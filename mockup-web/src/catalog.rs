//! Bundled palette and builder settings

use mockup_common::{BuilderConfig, Palette};
use tracing::{error, info};

const PALETTE_JSON: &str = include_str!("../assets/palette.json");
const BUILDER_JSON: &str = include_str!("../assets/builder.json");

/// Falls back to an empty palette if the bundled file is broken.
pub fn load_palette() -> Palette {
    match Palette::from_json(PALETTE_JSON) {
        Ok(palette) => palette,
        Err(e) => {
            error!("Bundled palette is invalid: {e}");
            Palette::default()
        }
    }
}

/// Falls back to the default settings if the bundled file is broken.
pub fn load_config() -> BuilderConfig {
    match BuilderConfig::from_json(BUILDER_JSON) {
        Ok(config) => {
            info!("Loaded builder settings");
            config
        }
        Err(e) => {
            error!("Bundled builder settings are invalid, using defaults: {e}");
            BuilderConfig::default()
        }
    }
}
