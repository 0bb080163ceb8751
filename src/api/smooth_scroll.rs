use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{ease_in_out_cubic, lerp};
use crate::error::MotionResult;

use super::config_validation::validate_smooth_scroll_config;

/// Tuning for eased anchor scrolling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmoothScrollConfig {
    pub duration_ms: f64,
    /// Navbar height assumed when the host cannot measure it.
    pub fallback_navbar_height_px: f64,
    /// Extra breathing room left above the section title.
    pub anchor_gap_px: f64,
}

impl Default for SmoothScrollConfig {
    fn default() -> Self {
        Self {
            duration_ms: 700.0,
            fallback_navbar_height_px: 70.0,
            anchor_gap_px: 12.0,
        }
    }
}

impl SmoothScrollConfig {
    /// Document offset that lands a section just below the fixed navbar.
    #[must_use]
    pub fn anchor_target_y(
        &self,
        page_y_offset: f64,
        section_top_in_viewport: f64,
        navbar_height_px: Option<f64>,
    ) -> f64 {
        let navbar = navbar_height_px
            .filter(|height| height.is_finite() && *height > 0.0)
            .unwrap_or(self.fallback_navbar_height_px);
        page_y_offset + section_top_in_viewport - navbar - self.anchor_gap_px
    }
}

/// How a scroll request starts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ScrollStart {
    /// Host should scroll straight to `y`; no frames needed.
    Jump { y: f64 },
    /// Host should request frames and feed them to `SmoothScroll::sample`.
    Animating,
}

/// Scroll position to apply for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollStep {
    pub y: f64,
    pub finished: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Tween {
    from: f64,
    to: f64,
    start_ms: Option<f64>,
}

impl Tween {
    fn position(self, elapsed_ms: f64, duration_ms: f64) -> (f64, bool) {
        let t = (elapsed_ms / duration_ms).min(1.0);
        let y = lerp(self.from, self.to, ease_in_out_cubic(t)).round();
        (y, elapsed_ms >= duration_ms)
    }
}

/// Eased scroll toward an anchor, one sample per frame.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SmoothScroll {
    config: SmoothScrollConfig,
    tween: Option<Tween>,
}

impl SmoothScroll {
    pub fn new(config: SmoothScrollConfig) -> MotionResult<Self> {
        validate_smooth_scroll_config(config)?;
        Ok(Self {
            config,
            tween: None,
        })
    }

    #[must_use]
    pub fn config(&self) -> SmoothScrollConfig {
        self.config
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.tween.is_some()
    }

    /// Starts scrolling from `from_y` to `to_y`.
    ///
    /// The clock starts at the first sampled frame, matching frame-callback
    /// timestamps rather than the time of the click.
    pub fn start(&mut self, from_y: f64, to_y: f64, reduced_motion: bool) -> ScrollStart {
        if reduced_motion || self.config.duration_ms <= 0.0 || !from_y.is_finite() {
            self.tween = None;
            debug!(to_y, reduced_motion, "scroll jump");
            return ScrollStart::Jump { y: to_y };
        }
        self.tween = Some(Tween {
            from: from_y,
            to: to_y,
            start_ms: None,
        });
        debug!(from_y, to_y, "smooth scroll started");
        ScrollStart::Animating
    }

    /// Samples the position for a frame timestamp.
    ///
    /// Returns `None` when no scroll is in flight.
    pub fn sample(&mut self, now_ms: f64) -> Option<ScrollStep> {
        let tween = self.tween.as_mut()?;
        let start_ms = *tween.start_ms.get_or_insert(now_ms);
        let elapsed = (now_ms - start_ms).max(0.0);
        let (y, finished) = tween.position(elapsed, self.config.duration_ms);
        trace!(y, elapsed, "smooth scroll frame");
        if finished {
            self.tween = None;
            debug!(y, "smooth scroll finished");
        }
        Some(ScrollStep { y, finished })
    }

    /// Redirects an in-flight scroll, continuing from where it currently is.
    pub fn retarget(&mut self, now_ms: f64, to_y: f64) -> ScrollStart {
        let current = match self.tween {
            Some(tween) => match tween.start_ms {
                Some(start_ms) => {
                    tween
                        .position((now_ms - start_ms).max(0.0), self.config.duration_ms)
                        .0
                }
                None => tween.from,
            },
            None => return ScrollStart::Jump { y: to_y },
        };
        self.start(current, to_y, false)
    }

    pub fn cancel(&mut self) {
        self.tween = None;
    }
}
