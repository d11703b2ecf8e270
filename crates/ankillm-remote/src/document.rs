//! Documents handed to the note generator

use std::path::Path;

use ankillm_core::prelude::*;

/// MIME type sent with every upload
pub const PDF_MIME_TYPE: &str = "application/pdf";

/// An in-memory document plus the name it is uploaded under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub display_name: String,
    pub bytes: Vec<u8>,
}

impl Document {
    pub fn new(display_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            display_name: display_name.into(),
            bytes,
        }
    }

    /// Read a document from disk, naming it after the file
    pub async fn read(path: &Path) -> Result<Self> {
        let bytes = match tokio::fs::read(path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(Error::document_not_found(path));
            }
            Err(e) => return Err(e).with_context(|| format!("Failed to read {}", path.display())),
        };
        let display_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        debug!("Read {} ({} bytes)", display_name, bytes.len());
        Ok(Self::new(display_name, bytes))
    }
}
