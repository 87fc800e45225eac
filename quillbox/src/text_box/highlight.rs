//! Selection-highlight fade state.

/// Target opacity while the buffer is selected.
const SELECTED_ALPHA: f32 = 0.25;

/// Milliseconds over which a full fade step completes.
const FADE_WINDOW_MS: f64 = 60.0;

/// Damped fade of the selection-highlight opacity.
///
/// The alpha approaches its target exponentially at a rate bounded by the
/// elapsed frame time. The per-frame factor is clamped to 1, so one very
/// long frame converges to the target in a single step instead of
/// overshooting it.
#[derive(Debug, Default)]
pub(crate) struct HighlightState {
    /// Highlight rectangle width; tracks the caret x offset.
    pub(crate) width: f32,
    /// Current opacity.
    pub(crate) alpha: f32,
}

impl HighlightState {
    /// Advances the fade by `delta_ms` toward the selection state.
    pub(crate) fn tick(&mut self, delta_ms: f64, selected: bool) {
        let target = if selected { SELECTED_ALPHA } else { 0.0 };
        let factor = (delta_ms / FADE_WINDOW_MS).min(1.0) as f32;
        self.alpha += (target - self.alpha) * factor;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fades_toward_the_selected_target() {
        let mut highlight = HighlightState::default();
        highlight.tick(30.0, true);
        assert!(highlight.alpha > 0.0);
        assert!(highlight.alpha < SELECTED_ALPHA);

        for _ in 0..200 {
            highlight.tick(30.0, true);
        }
        assert!((highlight.alpha - SELECTED_ALPHA).abs() < 1e-4);
    }

    #[test]
    fn a_very_long_frame_never_overshoots() {
        let mut highlight = HighlightState::default();
        highlight.tick(10_000.0, true);
        assert!((highlight.alpha - SELECTED_ALPHA).abs() < f32::EPSILON);

        highlight.tick(10_000.0, false);
        assert!(highlight.alpha.abs() < f32::EPSILON);
    }

    #[test]
    fn fades_back_out_when_deselected() {
        let mut highlight = HighlightState::default();
        for _ in 0..100 {
            highlight.tick(16.0, true);
        }
        for _ in 0..400 {
            highlight.tick(16.0, false);
        }
        assert!(highlight.alpha < 1e-3);
    }
}
