//! Seams to the external collaborators.
//!
//! The browser implementations live in `mockup-web`; tests use in-memory fakes.
//! Futures here are not `Send`: every collaborator runs on the UI thread.

use async_trait::async_trait;

use crate::error::CollaboratorError;
use crate::export::RasterizeOptions;
use crate::notice::Notice;

/// DOM-to-image library
#[async_trait(?Send)]
pub trait Rasterizer {
    /// Handle to the rendered image (a canvas in the browser)
    type Image;

    /// Render the mockup container.
    async fn rasterize(&self, options: &RasterizeOptions) -> Result<Self::Image, CollaboratorError>;

    /// Encode `image` into a data payload of `mime_type`.
    fn encode(
        &self,
        image: &Self::Image,
        mime_type: &str,
        quality: f64,
    ) -> Result<String, CollaboratorError>;
}

/// Triggers a save of an encoded payload under a filename
pub trait Downloader {
    fn download(&self, payload: &str, filename: &str) -> Result<(), CollaboratorError>;
}

#[async_trait(?Send)]
pub trait ClipboardWriter {
    async fn write_text(&self, text: &str) -> Result<(), CollaboratorError>;
}

/// Shows a notice and waits for the user to acknowledge it
pub trait Notifier {
    fn notify(&self, notice: &Notice);
}
