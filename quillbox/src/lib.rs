//! A frame-driven, single-line text box widget for game UIs.
//!
//! The widget owns keyboard-driven editing state: insertion, grapheme-aware
//! backspace, whole-buffer selection, clipboard shortcuts, a blinking caret,
//! a fading selection highlight, and submit / stopped-typing callbacks. It
//! composes with four collaborators it does not implement: the host's
//! render/layout layer (which shapes text and reports the glyph run), a
//! polled keyboard-state source, a clipboard service, and a pool of
//! key-click samples.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use quillbox::{
//!     GlyphRun, Key, KeyClickPool, KeyboardSource, MemoryClipboard, TextBox,
//!     TextBoxArgsBuilder, TextInputBus, TextInputEvent,
//! };
//!
//! // A host-side keyboard source; a real one polls the window's state.
//! struct IdleKeyboard;
//!
//! impl KeyboardSource for IdleKeyboard {
//!     fn is_key_down(&self, _key: Key) -> bool {
//!         false
//!     }
//!     fn is_unique_key_press(&self, _key: Key) -> bool {
//!         false
//!     }
//! }
//!
//! let bus = TextInputBus::new();
//! let args = TextBoxArgsBuilder::default()
//!     .placeholder_text("say something")
//!     .on_submit_fn(|text| println!("submitted: {text}"))
//!     .build()
//!     .expect("builder construction failed");
//! let mut text_box = TextBox::new(
//!     args,
//!     &bus,
//!     Arc::new(IdleKeyboard),
//!     Box::new(MemoryClipboard::new()),
//!     KeyClickPool::new(),
//! );
//! text_box.set_focused(true);
//!
//! // The host feeds character events and ticks the widget every frame.
//! bus.dispatch(TextInputEvent {
//!     character: 'h',
//!     key: Key::Other(0),
//! });
//! text_box.update(16.0, GlyphRun::new(0.0, 12.0));
//! assert_eq!(text_box.raw_text(), "h");
//! ```

pub mod audio;
pub mod clipboard;
pub mod input_bus;
pub mod keyboard;
pub mod layout;
pub mod pattern;
pub mod text_box;

pub use audio::{KeyClickPool, KeyClickSample};
pub use clipboard::{ClipboardProvider, MemoryClipboard, NullClipboard};
pub use input_bus::{TextInputBus, TextInputEvent, TextInputSubscription};
pub use keyboard::{Key, KeyboardSource};
pub use layout::{Caret, GlyphRun, SelectionHighlight};
pub use pattern::{AllowedPattern, PatternError};
pub use text_box::{DisplayContent, TextBox, TextBoxArgs, TextBoxArgsBuilder, TextCallback};
