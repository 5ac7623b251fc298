use crate::error::{FolioError, Result};
use std::sync::Mutex;

/// The host's "write text to clipboard" capability. A write either fully
/// succeeds or fails; there is no partial state.
#[allow(async_fn_in_trait)]
pub trait Clipboard {
    async fn write_text(&self, text: &str) -> Result<()>;
}

/// In-process clipboard that remembers the last text written. Can be built
/// to refuse every write, standing in for a denied permission.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Mutex<Option<String>>,
    refuse: bool,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn refusing() -> Self {
        Self {
            contents: Mutex::new(None),
            refuse: true,
        }
    }

    pub fn contents(&self) -> Option<String> {
        self.contents.lock().ok().and_then(|c| c.clone())
    }
}

impl Clipboard for MemoryClipboard {
    async fn write_text(&self, text: &str) -> Result<()> {
        if self.refuse {
            return Err(FolioError::Clipboard("permission denied".to_string()));
        }
        let mut contents = self
            .contents
            .lock()
            .map_err(|_| FolioError::Clipboard("clipboard lock poisoned".to_string()))?;
        *contents = Some(text.to_string());
        Ok(())
    }
}
