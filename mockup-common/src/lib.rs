//! mockup-common - pure data structures for the mockup builder
//!
//! Pair identity, the two mirrored lists and the event dispatcher, plus the
//! export and clipboard flows expressed against collaborator traits. No I/O.

pub mod clipboard;
pub mod collaborators;
pub mod config;
pub mod container;
pub mod dispatcher;
pub mod entry;
pub mod error;
pub mod export;
pub mod notice;
pub mod pair;
pub mod pair_registry;
pub mod palette;
pub mod synchronizer;

pub use config::{BuilderConfig, DuplicatePolicy, ExportConfig, RemovalMode, SortableConfig};
pub use container::EntryList;
pub use dispatcher::{BuilderEvent, DispatchOutcome};
pub use entry::{CodeEntry, CodeLayout, MockupEntry, REMOVE_AFFORDANCE_CLASS};
pub use error::{CollaboratorError, ConfigError, ExportError};
pub use export::{ExportGate, ExportPlan, RasterizeOptions};
pub use notice::Notice;
pub use pair::{Entry, Pair, PairId};
pub use pair_registry::PairRegistry;
pub use palette::{ImageRef, Palette, PaletteEntry};
pub use synchronizer::{AddOutcome, ClickTarget, ListSynchronizer, RemoveOutcome};
