//! Mockup image export
//!
//! [`export_mockup`] is the whole flow: [`plan_export`] checks the mockup list
//! synchronously, the [`ExportGate`] keeps exports single-flight, then
//! [`run_export`] drives the rasterizer and the download with the plan alone.

use std::cell::Cell;
use std::rc::Rc;

use chrono::{NaiveDate, Utc};
use tracing::{info, warn};

use crate::collaborators::{Downloader, Rasterizer};
use crate::config::ExportConfig;
use crate::container::EntryList;
use crate::entry::MockupEntry;
use crate::error::ExportError;
use crate::notice::Notice;

/// Options handed to the rasterizer
#[derive(Clone, Debug, PartialEq)]
pub struct RasterizeOptions {
    pub exclude_class: String,
    pub background: String,
    pub use_cors: bool,
}

/// Everything needed to finish an export without touching the lists again
#[derive(Clone, Debug, PartialEq)]
pub struct ExportPlan {
    pub options: RasterizeOptions,
    pub mime_type: String,
    pub quality: f64,
    pub filename: String,
    pub item_count: usize,
}

/// `mockup-2024-05-01.jpg` for the default config
pub fn export_filename(config: &ExportConfig, date: NaiveDate) -> String {
    format!(
        "{}-{}.{}",
        config.filename_prefix,
        date.format("%Y-%m-%d"),
        config.filename_extension
    )
}

/// Today's date in UTC, which is what the filename uses
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Check the precondition and build the plan. Fails on an empty mockup list.
pub fn plan_export(
    mockup: &EntryList<MockupEntry>,
    config: &ExportConfig,
    date: NaiveDate,
) -> Result<ExportPlan, ExportError> {
    if mockup.is_empty() {
        return Err(ExportError::EmptyMockup);
    }
    Ok(ExportPlan {
        options: RasterizeOptions {
            exclude_class: config.exclude_class.clone(),
            background: config.background.clone(),
            use_cors: config.use_cors,
        },
        mime_type: config.mime_type.clone(),
        quality: config.quality,
        filename: export_filename(config, date),
        item_count: mockup.len(),
    })
}

/// Rasterize, encode, then trigger the download.
pub async fn run_export<R, D>(
    plan: &ExportPlan,
    rasterizer: &R,
    downloader: &D,
) -> Result<(), ExportError>
where
    R: Rasterizer,
    D: Downloader,
{
    let image = rasterizer
        .rasterize(&plan.options)
        .await
        .map_err(ExportError::Rasterize)?;
    let payload = rasterizer
        .encode(&image, &plan.mime_type, plan.quality)
        .map_err(ExportError::Encode)?;
    downloader
        .download(&payload, &plan.filename)
        .map_err(ExportError::Download)?;

    info!(
        "Exported {} mockup entries to {}",
        plan.item_count, plan.filename
    );
    Ok(())
}

/// Plan, claim the gate, then rasterize and download.
///
/// An empty mockup list or a held gate fails before either collaborator is
/// called. The gate is released again when this returns.
pub async fn export_mockup<R, D>(
    mockup: &EntryList<MockupEntry>,
    config: &ExportConfig,
    gate: &ExportGate,
    date: NaiveDate,
    rasterizer: &R,
    downloader: &D,
) -> Result<(), ExportError>
where
    R: Rasterizer,
    D: Downloader,
{
    let plan = plan_export(mockup, config, date)?;
    let _ticket = gate.try_begin()?;
    run_export(&plan, rasterizer, downloader).await
}

impl ExportError {
    /// Notice to show for this failure. A rejected concurrent export is only logged.
    pub fn notice(&self) -> Option<Notice> {
        match self {
            ExportError::EmptyMockup => Some(Notice::EmptyMockup),
            ExportError::AlreadyRunning => None,
            other => Some(Notice::ExportFailed(other.to_string())),
        }
    }
}

/// Allows one export in flight at a time.
#[derive(Clone, Debug, Default)]
pub struct ExportGate {
    in_flight: Rc<Cell<bool>>,
}

impl ExportGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.in_flight.get()
    }

    /// Claim the gate. The export counts as running until the ticket is dropped.
    pub fn try_begin(&self) -> Result<ExportTicket, ExportError> {
        if self.in_flight.replace(true) {
            warn!("Export requested while another export is running");
            return Err(ExportError::AlreadyRunning);
        }
        Ok(ExportTicket {
            in_flight: Rc::clone(&self.in_flight),
        })
    }
}

#[derive(Debug)]
pub struct ExportTicket {
    in_flight: Rc<Cell<bool>>,
}

impl Drop for ExportTicket {
    fn drop(&mut self) {
        self.in_flight.set(false);
    }
}
