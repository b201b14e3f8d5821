/// Failure reported by an external collaborator (drag library, rasterizer,
/// clipboard, download trigger)
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CollaboratorError {
    #[error("{0} is not available")]
    Unavailable(String),
    #[error("{0}")]
    Rejected(String),
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ExportError {
    #[error("the mockup list is empty")]
    EmptyMockup,
    #[error("an export is already in progress")]
    AlreadyRunning,
    #[error("failed to rasterize mockup: {0}")]
    Rasterize(CollaboratorError),
    #[error("failed to encode image: {0}")]
    Encode(CollaboratorError),
    #[error("failed to start download: {0}")]
    Download(CollaboratorError),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("duplicate palette key: {0}")]
    DuplicatePaletteKey(String),
    #[error("jpeg quality must be within 0.0..=1.0, got {0}")]
    InvalidQuality(f64),
}
