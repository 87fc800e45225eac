//! Caret blink state for the text box.

/// Focused idle time between visibility toggles.
pub(crate) const BLINK_INTERVAL_MS: f64 = 500.0;

/// Blinking caret sub-state.
///
/// The caret toggles visibility every [`BLINK_INTERVAL_MS`] of focused
/// idle time, becomes invisible instantly when focus is lost, and is
/// forced visible (with its phase reset) by every edit.
#[derive(Debug, Default)]
pub(crate) struct CaretState {
    /// Current caret x offset, recomputed from the glyph run each frame.
    pub(crate) x: f32,
    /// Whether the caret is drawn this frame.
    pub(crate) visible: bool,
    phase_ms: f64,
}

impl CaretState {
    /// Forces the caret visible and restarts the blink cycle.
    pub(crate) fn reveal(&mut self) {
        self.visible = true;
        self.phase_ms = 0.0;
    }

    /// Advances the blink phase by `delta_ms`.
    pub(crate) fn tick(&mut self, delta_ms: f64, focused: bool) {
        if !focused {
            self.visible = false;
            return;
        }

        self.phase_ms += delta_ms;
        if self.phase_ms < BLINK_INTERVAL_MS {
            return;
        }

        self.visible = !self.visible;
        self.phase_ms = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggles_every_interval_while_focused() {
        let mut caret = CaretState::default();
        caret.reveal();
        assert!(caret.visible);

        caret.tick(499.0, true);
        assert!(caret.visible);

        caret.tick(1.0, true);
        assert!(!caret.visible);

        caret.tick(500.0, true);
        assert!(caret.visible);
    }

    #[test]
    fn hides_instantly_without_focus() {
        let mut caret = CaretState::default();
        caret.reveal();
        caret.tick(0.0, false);
        assert!(!caret.visible);
    }

    #[test]
    fn reveal_restarts_the_cycle() {
        let mut caret = CaretState::default();
        caret.reveal();
        caret.tick(400.0, true);
        caret.reveal();

        // The earlier 400ms no longer counts toward the next toggle.
        caret.tick(400.0, true);
        assert!(caret.visible);
    }
}
