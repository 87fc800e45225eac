//! Clipboard collaborator contract.
//!
//! ## Usage
//!
//! Enable copy, cut and paste in text boxes. The widget consumes the
//! [`ClipboardProvider`] trait; hosts supply an implementation (the
//! `quillbox-platform` crate ships a native one).

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::trace;

/// Plain-text clipboard service.
///
/// `get_text` returns `None` when the clipboard is empty, holds non-text
/// content, or the platform has no clipboard at all. `set_text` replaces
/// the previous content and never fails from the widget's point of view.
pub trait ClipboardProvider: Send {
    /// Returns the clipboard text when available.
    fn get_text(&mut self) -> Option<String>;

    /// Sets the clipboard text, replacing previous content.
    fn set_text(&mut self, text: &str);
}

/// No-op provider for hosts without a clipboard service.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullClipboard;

impl ClipboardProvider for NullClipboard {
    fn get_text(&mut self) -> Option<String> {
        trace!("clipboard get_text ignored: no clipboard service");
        None
    }

    fn set_text(&mut self, _text: &str) {
        trace!("clipboard set_text ignored: no clipboard service");
    }
}

/// In-memory provider backed by shared storage.
///
/// Clones share one buffer, so a host (or a test) can keep a handle and
/// observe what the widget copied. Useful for headless hosts as well.
#[derive(Clone, Debug, Default)]
pub struct MemoryClipboard {
    text: Arc<Mutex<Option<String>>>,
}

impl MemoryClipboard {
    /// Creates an empty in-memory clipboard.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClipboardProvider for MemoryClipboard {
    fn get_text(&mut self) -> Option<String> {
        self.text.lock().clone()
    }

    fn set_text(&mut self, text: &str) {
        *self.text.lock() = Some(text.to_string());
    }
}
