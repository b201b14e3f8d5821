use tracing::{info, warn};

use crate::collaborators::ClipboardWriter;
use crate::container::EntryList;
use crate::entry::CodeEntry;
use crate::notice::Notice;

/// Plain text of the code list as it reads on screen, one entry per line
pub fn code_list_text(code: &EntryList<CodeEntry>) -> String {
    code.iter()
        .map(|entry| entry.source_content.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write `text` to the clipboard and report the result as a notice.
pub async fn copy_text<W: ClipboardWriter>(text: &str, writer: &W) -> Notice {
    match writer.write_text(text).await {
        Ok(()) => {
            info!("Copied {} bytes of code to clipboard", text.len());
            Notice::CopySucceeded
        }
        Err(e) => {
            warn!("Failed to copy text: {e}");
            Notice::CopyFailed
        }
    }
}
