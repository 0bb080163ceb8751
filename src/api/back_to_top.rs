use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{ScrollStart, SmoothScroll};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackToTopConfig {
    /// Button appears once the page is scrolled past this offset.
    pub visible_after_px: f64,
}

impl Default for BackToTopConfig {
    fn default() -> Self {
        Self {
            visible_after_px: 300.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BackToTop {
    config: BackToTopConfig,
    visible: bool,
}

impl BackToTop {
    #[must_use]
    pub fn new(config: BackToTopConfig) -> Self {
        Self {
            config,
            visible: false,
        }
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Returns `true` when visibility flipped.
    pub fn on_scroll(&mut self, scroll_y: f64) -> bool {
        let visible = scroll_y > self.config.visible_after_px;
        let changed = visible != self.visible;
        if changed {
            debug!(visible, scroll_y, "back-to-top visibility changed");
        }
        self.visible = visible;
        changed
    }

    pub fn on_click(&self, scroll_y: f64, reduced_motion: bool, scroll: &mut SmoothScroll) -> ScrollStart {
        scroll.start(scroll_y, 0.0, reduced_motion)
    }
}
