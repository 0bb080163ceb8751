use serde::{Deserialize, Serialize};

/// Scroll progress animation state owned by a single `ProgressAnimator`.
///
/// `target` is written only by `measure`, `displayed` only by `tick`. The
/// out-of-view reset is the one exception and zeroes both.
/// `running` mirrors whether a frame is requested and not yet delivered.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ProgressState {
    target: f64,
    displayed: f64,
    running: bool,
}

impl ProgressState {
    #[must_use]
    pub fn new(target: f64, displayed: f64) -> Self {
        Self {
            target: target.clamp(0.0, 1.0),
            displayed: displayed.clamp(0.0, 1.0),
            running: false,
        }
    }

    #[must_use]
    pub fn target(self) -> f64 {
        self.target
    }

    #[must_use]
    pub fn displayed(self) -> f64 {
        self.displayed
    }

    #[must_use]
    pub fn running(self) -> bool {
        self.running
    }

    pub(crate) fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    pub(crate) fn set_displayed(&mut self, displayed: f64) {
        self.displayed = displayed;
    }

    pub(crate) fn set_running(&mut self, running: bool) {
        self.running = running;
    }
}

/// Public state of the name-pill navigation menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NavMenuState {
    /// Mobile toggle is open.
    pub expanded: bool,
    /// Desktop reveal triggered by a section change.
    pub temporarily_open: bool,
    pub aria_expanded: bool,
}

/// CSS transform for hover-lifted cards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CardTransform {
    pub translate_y_px: f64,
    pub scale: f64,
}

impl Default for CardTransform {
    fn default() -> Self {
        Self {
            translate_y_px: 0.0,
            scale: 1.0,
        }
    }
}

impl CardTransform {
    /// Renders the value assigned to `style.transform`.
    #[must_use]
    pub fn to_css(self) -> String {
        format!("translateY({}px) scale({})", self.translate_y_px, self.scale)
    }
}

/// Transform of the marker icon riding the timeline progress line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProgressIconTransform {
    pub offset_px: f64,
    pub scale: f64,
}

impl ProgressIconTransform {
    /// Icon travels `travel_px` and grows from `min_scale` to 1 over the
    /// full progress range.
    #[must_use]
    pub fn from_progress(displayed: f64, travel_px: f64, min_scale: f64) -> Self {
        Self {
            offset_px: displayed * travel_px,
            scale: min_scale + displayed * (1.0 - min_scale),
        }
    }

    #[must_use]
    pub fn to_css(self) -> String {
        format!(
            "translate(-50%, -50%) translateY({:.2}px) scale({:.4})",
            self.offset_px, self.scale
        )
    }
}
