/// User-visible notices that need an acknowledgement
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    EmptyMockup,
    CopySucceeded,
    CopyFailed,
    ExportFailed(String),
}

impl Notice {
    pub fn message(&self) -> String {
        match self {
            Notice::EmptyMockup => {
                "The Mockup list is empty. Add some components first!".to_string()
            }
            Notice::CopySucceeded => "Text copied to clipboard!".to_string(),
            Notice::CopyFailed => "Failed to copy text.".to_string(),
            Notice::ExportFailed(reason) => format!("Failed to export mockup: {reason}"),
        }
    }

    pub fn is_error(&self) -> bool {
        !matches!(self, Notice::CopySucceeded)
    }
}
