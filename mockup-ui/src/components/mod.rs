//! Shared UI components

pub mod builder;
pub mod button;
pub mod code_list;
pub mod icons;
pub mod mockup_list;
pub mod palette;
pub mod toolbar;

pub use builder::BuilderView;
pub use button::{Button, ButtonVariant};
pub use code_list::{CodeListView, CODE_LIST_ID};
pub use icons::{CopyIcon, DownloadIcon};
pub use mockup_list::{MockupListView, MOCKUP_LIST_ID, PAIR_ID_ATTRIBUTE};
pub use palette::{PaletteView, PALETTE_LIST_ID};
pub use toolbar::{BuilderToolbar, DOWNLOAD_BUTTON_ID};
