//! System clipboard provider.
//!
//! ## Usage
//!
//! Enable copy and paste against the real system clipboard in text boxes.

use quillbox::ClipboardProvider;
use tracing::warn;

/// Clipboard provider backed by the system clipboard.
///
/// On platforms without clipboard support (Android, wasm), or when the
/// system clipboard cannot be initialized (headless environments,
/// permission issues), every operation degrades to a logged no-op instead
/// of failing.
pub struct NativeClipboard {
    #[cfg(all(not(target_os = "android"), not(target_family = "wasm")))]
    manager: Option<arboard::Clipboard>,
}

impl NativeClipboard {
    /// Connects to the system clipboard.
    pub fn new() -> Self {
        #[cfg(all(not(target_os = "android"), not(target_family = "wasm")))]
        {
            let manager = match arboard::Clipboard::new() {
                Ok(manager) => Some(manager),
                Err(err) => {
                    warn!("failed to initialize clipboard: {err}");
                    None
                }
            };
            Self { manager }
        }
        #[cfg(any(target_os = "android", target_family = "wasm"))]
        {
            Self {}
        }
    }
}

impl Default for NativeClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl ClipboardProvider for NativeClipboard {
    fn get_text(&mut self) -> Option<String> {
        #[cfg(all(not(target_os = "android"), not(target_family = "wasm")))]
        {
            self.manager.as_mut()?.get_text().ok()
        }
        #[cfg(any(target_os = "android", target_family = "wasm"))]
        {
            warn!("clipboard operations are not supported on this platform");
            None
        }
    }

    fn set_text(&mut self, text: &str) {
        #[cfg(all(not(target_os = "android"), not(target_family = "wasm")))]
        {
            if let Some(manager) = self.manager.as_mut() {
                let _ = manager.set_text(text.to_string());
            }
        }
        #[cfg(any(target_os = "android", target_family = "wasm"))]
        {
            let _ = text;
            warn!("clipboard operations are not supported on this platform");
        }
    }
}
