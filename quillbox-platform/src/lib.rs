//! Native collaborator implementations for quillbox widgets.
//!
//! ## Usage
//!
//! Hand a [`NativeClipboard`] to text boxes that should talk to the system
//! clipboard.
#![deny(missing_docs, clippy::unwrap_used)]

pub mod clipboard;

pub use clipboard::NativeClipboard;
