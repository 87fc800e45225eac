//! Single-line text box state machine.
//!
//! ## Usage
//!
//! Create a [`TextBox`] with a [`TextInputBus`], a keyboard source, a
//! clipboard provider and a key-click pool, then drive it once per frame
//! with [`TextBox::update`]. The host window feeds character events into
//! the bus; the widget handles editing, shortcuts, submission and the
//! stopped-typing idle callback, and exposes caret and selection-highlight
//! geometry for the host to draw.
//!
//! The widget deliberately has no interior cursor position: the caret is
//! always at the end of the buffer, and the only selection is whole-buffer
//! select-all. Reintroducing an indexed caret would change the editing
//! semantics, so the simplification is part of the contract, not an
//! implementation shortcut.

mod caret;
mod highlight;

use std::sync::Arc;

use derive_builder::Builder;
use parking_lot::Mutex;
use tracing::debug;
use unicode_segmentation::UnicodeSegmentation;

use crate::{
    audio::KeyClickPool,
    clipboard::ClipboardProvider,
    input_bus::{TextInputBus, TextInputSubscription},
    keyboard::{Key, KeyboardSource},
    layout::{Caret, GlyphRun, SelectionHighlight},
    pattern::AllowedPattern,
    text_box::{caret::CaretState, highlight::HighlightState},
};

/// Callback invoked with the current buffer value.
pub type TextCallback = Arc<dyn Fn(&str) + Send + Sync>;

/// Opacity used when the placeholder text is displayed.
const PLACEHOLDER_ALPHA: f32 = 0.5;

/// Arguments for configuring a [`TextBox`].
#[derive(Builder, Clone)]
#[builder(pattern = "owned")]
pub struct TextBoxArgs {
    /// Initial buffer content. Not validated against the allow-list.
    #[builder(default, setter(into))]
    pub initial_text: String,
    /// Text displayed at reduced alpha while the buffer is empty.
    #[builder(default, setter(into))]
    pub placeholder_text: String,
    /// Maximum buffer length in characters. Defaults to unlimited.
    #[builder(default = "usize::MAX")]
    pub max_characters: usize,
    /// Allow-list the whole buffer value must match. Defaults to match-all.
    #[builder(default)]
    pub allowed_characters: AllowedPattern,
    /// Whether Enter invokes the submit callback. Defaults to `true`.
    #[builder(default = "true")]
    pub allow_submission: bool,
    /// Whether a submission clears the buffer. Defaults to `true`.
    #[builder(default = "true")]
    pub clear_on_submission: bool,
    /// Idle time after the last edit before the stopped-typing callback
    /// fires, in milliseconds. Defaults to 500.
    #[builder(default = "500.0")]
    pub stopped_typing_calltime_ms: f64,
    /// When set, the widget behaves as focused regardless of the focus
    /// flag toggled by the host.
    #[builder(default)]
    pub always_focused: bool,
    /// Whether edits trigger a key-click sample. Defaults to `true`.
    #[builder(default = "true")]
    pub enable_key_click_sounds: bool,
    /// Called with the buffer value when the user submits with Enter.
    #[builder(default, setter(strip_option))]
    pub on_submit: Option<TextCallback>,
    /// Called with the buffer value once the user has stopped typing.
    #[builder(default, setter(strip_option))]
    pub on_stopped_typing: Option<TextCallback>,
}

impl TextBoxArgsBuilder {
    /// Sets the submit handler from a plain closure.
    pub fn on_submit_fn(self, handler: impl Fn(&str) + Send + Sync + 'static) -> Self {
        self.on_submit(Arc::new(handler))
    }

    /// Sets the stopped-typing handler from a plain closure.
    pub fn on_stopped_typing_fn(self, handler: impl Fn(&str) + Send + Sync + 'static) -> Self {
        self.on_stopped_typing(Arc::new(handler))
    }
}

impl Default for TextBoxArgs {
    fn default() -> Self {
        TextBoxArgsBuilder::default()
            .build()
            .expect("builder construction failed")
    }
}

/// What the host should render in place of the text run.
#[derive(Clone, Debug, PartialEq)]
pub struct DisplayContent {
    /// The text to shape and draw: the buffer, or the placeholder while
    /// the buffer is empty.
    pub text: String,
    /// Alpha to draw the text with. Reduced while showing the placeholder.
    pub alpha: f32,
}

/// Mutable editing core, shared between the per-frame update and the
/// text-input callback. Both run on the host's update thread; the mutex
/// exists for the sharing, not for concurrency.
struct EditState {
    raw_text: String,
    selected: bool,
    focused: bool,
    always_focused: bool,
    max_characters: usize,
    allowed_characters: AllowedPattern,
    ms_since_last_edit: f64,
    // Starts armed-off so an untouched widget never fires the idle
    // callback before its first edit.
    fired_stopped_typing: bool,
    caret: CaretState,
    highlight: HighlightState,
    click_pool: KeyClickPool,
    enable_key_click_sounds: bool,
}

impl EditState {
    fn is_focused(&self) -> bool {
        self.always_focused || self.focused
    }

    /// Marks an edit: caret forced visible, idle timer restarted, idle
    /// callback re-armed.
    fn readjust(&mut self) {
        self.caret.reveal();
        self.ms_since_last_edit = 0.0;
        self.fired_stopped_typing = false;
    }

    /// Handles one character event from the input bus.
    fn submit_character(&mut self, character: char, key: Key, control_down: bool) {
        if !self.is_focused() {
            return;
        }

        // Some hosts send NUL on keyboard layout switches.
        if character == '\0' {
            return;
        }

        // With a control modifier held the event belongs to the shortcut
        // handler, which runs in the per-frame update.
        if control_down {
            return;
        }

        // Enter is polled per frame so the numeric-pad Enter, which never
        // produces a character event, submits too.
        if matches!(key, Key::Enter | Key::NumpadEnter) {
            return;
        }

        if self.selected {
            // A keystroke on a full selection replaces everything.
            self.raw_text.clear();
            match key {
                Key::Backspace | Key::Tab | Key::Delete | Key::VolumeUp | Key::VolumeDown => {}
                _ => {
                    let _ = self.try_append(character);
                }
            }
            self.selected = false;
            self.readjust();
            return;
        }

        match key {
            Key::Tab | Key::Delete | Key::Escape | Key::VolumeUp | Key::VolumeDown => {}
            Key::Backspace => {
                if self.raw_text.is_empty() {
                    return;
                }
                self.backspace_grapheme();
                self.play_key_click();
                self.readjust();
            }
            _ => {
                if self.try_append(character) {
                    self.play_key_click();
                    self.readjust();
                }
            }
        }
    }

    /// Appends `character` when the proposed full buffer value passes the
    /// length and allow-list checks. Rejection is silent.
    fn try_append(&mut self, character: char) -> bool {
        if self.raw_text.chars().count() + 1 > self.max_characters {
            debug!("character rejected: buffer at max_characters");
            return false;
        }

        let mut proposed = self.raw_text.clone();
        proposed.push(character);

        // The allow-list is matched against the whole proposed value, not
        // the new character, so anchored patterns behave correctly.
        if !self.allowed_characters.matches(&proposed) {
            debug!("character rejected by allow-list");
            return false;
        }

        self.raw_text = proposed;
        true
    }

    /// Removes the last grapheme cluster, keeping combining sequences
    /// intact.
    fn backspace_grapheme(&mut self) {
        if let Some((index, _)) = self.raw_text.grapheme_indices(true).last() {
            self.raw_text.truncate(index);
        }
    }

    /// Replaces or extends the buffer with already-normalized pasted text.
    fn paste(&mut self, pasted: &str) {
        if !pasted.is_empty() {
            let proposed = if self.selected {
                pasted.to_string()
            } else {
                let mut value = self.raw_text.clone();
                value.push_str(pasted);
                value
            };

            if !self.allowed_characters.matches(&proposed) {
                debug!("paste rejected by allow-list");
                return;
            }
            if proposed.chars().count() > self.max_characters {
                debug!("paste rejected: exceeds max_characters");
                return;
            }

            self.raw_text = proposed;
        }

        // Even an empty paste counts as user intent: timers restart and
        // the selection collapses.
        self.selected = false;
        self.readjust();
    }

    /// Deletes trailing whitespace, then the trailing word. On a full
    /// selection the whole buffer goes.
    fn kill_word_backward(&mut self) {
        if self.selected {
            self.raw_text.clear();
        } else {
            let trimmed = self.raw_text.trim_end().len();
            self.raw_text.truncate(trimmed);
            let without_word = self
                .raw_text
                .trim_end_matches(|c: char| !c.is_whitespace())
                .len();
            self.raw_text.truncate(without_word);
        }

        self.selected = false;
        self.readjust();
    }

    /// Clears the whole buffer. With no interior caret there is no partial
    /// line to kill.
    fn kill_line_backward(&mut self) {
        self.raw_text.clear();
        self.selected = false;
        self.readjust();
    }

    fn play_key_click(&self) {
        if self.enable_key_click_sounds {
            self.click_pool.play_random();
        }
    }
}

/// Frame-driven single-line text box.
///
/// The widget owns its editing state and collaborator handles; the host
/// owns rendering, layout and focus routing. All mutation happens either
/// inside [`TextBox::update`] or inside the text-input callback, both on
/// the host's update thread.
///
/// Dropping the widget drops its input-bus subscription, so the character
/// callback can never fire against a destroyed instance.
pub struct TextBox {
    state: Arc<Mutex<EditState>>,
    keyboard: Arc<dyn KeyboardSource>,
    clipboard: Box<dyn ClipboardProvider>,
    /// Text displayed at reduced alpha while the buffer is empty.
    pub placeholder_text: String,
    /// Whether Enter invokes the submit callback.
    pub allow_submission: bool,
    /// Whether a submission clears the buffer.
    pub clear_on_submission: bool,
    /// Idle time after the last edit before the stopped-typing callback
    /// fires, in milliseconds.
    pub stopped_typing_calltime_ms: f64,
    /// Called with the buffer value when the user submits with Enter.
    pub on_submit: Option<TextCallback>,
    /// Called with the buffer value once the user has stopped typing.
    pub on_stopped_typing: Option<TextCallback>,
    // Dropping this deregisters the character callback.
    _subscription: TextInputSubscription,
}

impl TextBox {
    /// Creates a text box and registers it with `bus` for character
    /// events. The registration lives exactly as long as the widget.
    pub fn new(
        args: TextBoxArgs,
        bus: &TextInputBus,
        keyboard: Arc<dyn KeyboardSource>,
        clipboard: Box<dyn ClipboardProvider>,
        click_pool: KeyClickPool,
    ) -> Self {
        let state = Arc::new(Mutex::new(EditState {
            raw_text: args.initial_text,
            selected: false,
            focused: false,
            always_focused: args.always_focused,
            max_characters: args.max_characters,
            allowed_characters: args.allowed_characters,
            ms_since_last_edit: 0.0,
            fired_stopped_typing: true,
            caret: CaretState::default(),
            highlight: HighlightState::default(),
            click_pool,
            enable_key_click_sounds: args.enable_key_click_sounds,
        }));

        let subscription = {
            let state = Arc::clone(&state);
            let keyboard = Arc::clone(&keyboard);
            bus.subscribe(move |event| {
                let control_down = keyboard.control_down();
                state
                    .lock()
                    .submit_character(event.character, event.key, control_down);
            })
        };

        Self {
            state,
            keyboard,
            clipboard,
            placeholder_text: args.placeholder_text,
            allow_submission: args.allow_submission,
            clear_on_submission: args.clear_on_submission,
            stopped_typing_calltime_ms: args.stopped_typing_calltime_ms,
            on_submit: args.on_submit,
            on_stopped_typing: args.on_stopped_typing,
            _subscription: subscription,
        }
    }

    /// Advances the widget by one frame.
    ///
    /// `glyph_run` describes where the host laid out the shaped text this
    /// frame; the caret and selection-highlight geometry are derived from
    /// it. Order per frame: idle detection, control shortcuts, Enter,
    /// caret geometry, caret blink, selection fade.
    pub fn update(&mut self, delta_ms: f64, glyph_run: GlyphRun) {
        // Callbacks run after the state lock is released so they may call
        // back into the widget.
        let mut deferred: Vec<(TextCallback, String)> = Vec::new();

        {
            let mut state = self.state.lock();

            state.ms_since_last_edit += delta_ms;
            if state.ms_since_last_edit >= self.stopped_typing_calltime_ms
                && !state.fired_stopped_typing
            {
                if let Some(handler) = &self.on_stopped_typing {
                    deferred.push((Arc::clone(handler), state.raw_text.clone()));
                }
                state.fired_stopped_typing = true;
            }

            handle_control_shortcuts(self.keyboard.as_ref(), self.clipboard.as_mut(), &mut state);

            if let Some(submitted) = self.handle_enter(&mut state)
                && let Some(handler) = &self.on_submit
            {
                deferred.push((Arc::clone(handler), submitted));
            }

            // The caret sits right after the rendered text; on an empty
            // buffer it rests at the text origin.
            state.caret.x = if state.raw_text.is_empty() {
                glyph_run.origin_x
            } else {
                glyph_run.origin_x + glyph_run.advance
            };
            state.highlight.width = state.caret.x;

            let focused = state.is_focused();
            state.caret.tick(delta_ms, focused);
            let selected = state.selected;
            state.highlight.tick(delta_ms, selected);
        }

        for (handler, text) in deferred {
            handler(&text);
        }
    }

    // Polled per frame rather than handled in the character callback so
    // the numeric-pad Enter submits as well. Returns the submitted value.
    fn handle_enter(&self, state: &mut EditState) -> Option<String> {
        let pressed = self.keyboard.is_unique_key_press(Key::Enter)
            || self.keyboard.is_unique_key_press(Key::NumpadEnter);
        if !pressed || !self.allow_submission || state.raw_text.is_empty() {
            return None;
        }

        let submitted = state.raw_text.clone();
        if self.clear_on_submission {
            state.raw_text.clear();
            state.selected = false;
            state.readjust();
        }
        Some(submitted)
    }

    /// Returns the current buffer value.
    pub fn raw_text(&self) -> String {
        self.state.lock().raw_text.clone()
    }

    /// Replaces the buffer value directly.
    ///
    /// This is the host-facing escape hatch: the value bypasses the
    /// length and allow-list checks. The placeholder display state is
    /// derived from the new value on the next [`TextBox::display`] call.
    pub fn set_raw_text(&mut self, text: impl Into<String>) {
        self.state.lock().raw_text = text.into();
    }

    /// Returns the effective focus, including the always-focused override.
    pub fn is_focused(&self) -> bool {
        self.state.lock().is_focused()
    }

    /// Sets the focus flag. The host calls this from its click and
    /// click-outside handling.
    pub fn set_focused(&mut self, focused: bool) {
        self.state.lock().focused = focused;
    }

    /// Returns the always-focused override.
    pub fn always_focused(&self) -> bool {
        self.state.lock().always_focused
    }

    /// Sets the always-focused override.
    pub fn set_always_focused(&mut self, always_focused: bool) {
        self.state.lock().always_focused = always_focused;
    }

    /// Returns whether the whole buffer is currently selected.
    pub fn selected(&self) -> bool {
        self.state.lock().selected
    }

    /// Returns the maximum buffer length in characters.
    pub fn max_characters(&self) -> usize {
        self.state.lock().max_characters
    }

    /// Sets the maximum buffer length in characters.
    pub fn set_max_characters(&mut self, max_characters: usize) {
        self.state.lock().max_characters = max_characters;
    }

    /// Returns the current allow-list pattern.
    pub fn allowed_characters(&self) -> AllowedPattern {
        self.state.lock().allowed_characters.clone()
    }

    /// Sets the allow-list pattern.
    pub fn set_allowed_characters(&mut self, pattern: AllowedPattern) {
        self.state.lock().allowed_characters = pattern;
    }

    /// Returns whether edits trigger key-click samples.
    pub fn key_click_sounds_enabled(&self) -> bool {
        self.state.lock().enable_key_click_sounds
    }

    /// Enables or disables key-click samples.
    pub fn set_key_click_sounds_enabled(&mut self, enabled: bool) {
        self.state.lock().enable_key_click_sounds = enabled;
    }

    /// Returns what the host should render this frame: the buffer, or the
    /// placeholder at reduced alpha while the buffer is empty.
    pub fn display(&self) -> DisplayContent {
        let state = self.state.lock();
        if state.raw_text.is_empty() && !self.placeholder_text.is_empty() {
            DisplayContent {
                text: self.placeholder_text.clone(),
                alpha: PLACEHOLDER_ALPHA,
            }
        } else {
            DisplayContent {
                text: state.raw_text.clone(),
                alpha: 1.0,
            }
        }
    }

    /// Returns the caret geometry computed by the last update.
    pub fn caret(&self) -> Caret {
        let state = self.state.lock();
        Caret {
            x: state.caret.x,
            visible: state.caret.visible,
        }
    }

    /// Returns the selection-highlight geometry computed by the last
    /// update.
    pub fn selection_highlight(&self) -> SelectionHighlight {
        let state = self.state.lock();
        SelectionHighlight {
            width: state.highlight.width,
            alpha: state.highlight.alpha,
        }
    }
}

/// Control-modifier shortcut handling, polled once per frame. Every
/// shortcut is gated on a unique key press so holding the chord does not
/// repeat it.
fn handle_control_shortcuts(
    keyboard: &dyn KeyboardSource,
    clipboard: &mut dyn ClipboardProvider,
    state: &mut EditState,
) {
    if !state.is_focused() || !keyboard.control_down() {
        return;
    }

    // Select the whole buffer.
    if keyboard.is_unique_key_press(Key::A) && !state.raw_text.is_empty() {
        state.selected = true;
    }

    // Copy leaves the buffer untouched.
    if keyboard.is_unique_key_press(Key::C) && state.selected {
        clipboard.set_text(&state.raw_text);
    }

    // Cut copies, then clears.
    if keyboard.is_unique_key_press(Key::X) && state.selected {
        clipboard.set_text(&state.raw_text);
        state.raw_text.clear();
        state.selected = false;
        state.readjust();
    }

    if keyboard.is_unique_key_press(Key::V) {
        // The buffer never holds line breaks, so they are stripped from
        // the pasted text up front.
        let pasted: String = clipboard
            .get_text()
            .unwrap_or_default()
            .chars()
            .filter(|c| *c != '\n' && *c != '\r')
            .collect();
        state.paste(&pasted);
    }

    if keyboard.is_unique_key_press(Key::W) || keyboard.is_unique_key_press(Key::Backspace) {
        state.kill_word_backward();
    }

    if keyboard.is_unique_key_press(Key::U) {
        state.kill_line_backward();
    }
}
