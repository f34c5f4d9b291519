// Clipboard sink for the per-link copy action
use std::sync::Mutex;

pub trait ClipboardSink: Send + Sync {
    fn write_text(&self, text: &str);
    fn read_text(&self) -> Option<String>;
}

/// Process-local clipboard holding the most recently copied text.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Mutex<Option<String>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClipboardSink for MemoryClipboard {
    fn write_text(&self, text: &str) {
        *self
            .contents
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(text.to_string());
    }

    fn read_text(&self) -> Option<String> {
        self.contents
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}
