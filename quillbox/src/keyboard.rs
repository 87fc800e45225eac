//! # Keyboard State Contract
//!
//! This module defines the polled keyboard-state collaborator the widget
//! queries every frame. The host owns the actual keyboard plumbing; the
//! widget only needs level-triggered ("is this key held?") and
//! edge-triggered ("did this key go down this frame?") queries.

/// Logical identity of a key the widget reacts to.
///
/// Only the keys the text box actually distinguishes get their own variant;
/// everything else the host reports arrives as [`Key::Other`] with the
/// host's raw key code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// The main Enter key.
    Enter,
    /// The numeric-pad Enter key. It does not produce a character event on
    /// most hosts, which is why submission is polled per frame instead of
    /// being handled in the character callback.
    NumpadEnter,
    /// Backspace.
    Backspace,
    /// Tab.
    Tab,
    /// Forward delete.
    Delete,
    /// Escape.
    Escape,
    /// The volume-up media key.
    VolumeUp,
    /// The volume-down media key.
    VolumeDown,
    /// Left control modifier.
    LeftControl,
    /// Right control modifier.
    RightControl,
    /// The `A` key (select-all shortcut).
    A,
    /// The `C` key (copy shortcut).
    C,
    /// The `V` key (paste shortcut).
    V,
    /// The `X` key (cut shortcut).
    X,
    /// The `W` key (kill-word shortcut).
    W,
    /// The `U` key (kill-line shortcut).
    U,
    /// Any other key, carrying the host's raw key code.
    Other(u32),
}

/// Polled keyboard-state source.
///
/// Implemented by the host's input layer. `is_unique_key_press` must be
/// edge-triggered: it returns `true` only on the frame the key transitions
/// from up to down, so shortcut handling never repeats while a key is held.
pub trait KeyboardSource: Send + Sync {
    /// Returns whether `key` is currently held down.
    fn is_key_down(&self, key: Key) -> bool;

    /// Returns whether `key` went down this frame.
    fn is_unique_key_press(&self, key: Key) -> bool;

    /// Returns whether either control modifier is held down.
    fn control_down(&self) -> bool {
        self.is_key_down(Key::LeftControl) || self.is_key_down(Key::RightControl)
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::ScriptedKeyboard;
    use super::*;

    #[test]
    fn control_down_checks_both_modifiers() {
        let keyboard = ScriptedKeyboard::new();
        assert!(!keyboard.control_down());

        keyboard.hold(Key::LeftControl);
        assert!(keyboard.control_down());

        keyboard.release_all();
        keyboard.hold(Key::RightControl);
        assert!(keyboard.control_down());
    }

    #[test]
    fn unique_press_is_edge_triggered() {
        let keyboard = ScriptedKeyboard::new();
        keyboard.press(Key::A);
        assert!(keyboard.is_unique_key_press(Key::A));
        assert!(keyboard.is_key_down(Key::A));

        keyboard.end_frame();
        assert!(!keyboard.is_unique_key_press(Key::A));
        assert!(keyboard.is_key_down(Key::A));
    }
}
