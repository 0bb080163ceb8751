use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::MotionResult;

use super::config_validation::validate_carousel_config;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    pub interval_ms: f64,
    pub wrap: bool,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            interval_ms: 5000.0,
            wrap: true,
        }
    }
}

/// Auto-cycling project carousel that pauses while hovered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectCarousel {
    config: CarouselConfig,
    slide_count: usize,
    index: usize,
    paused: bool,
    next_advance_ms: Option<f64>,
}

impl ProjectCarousel {
    pub fn new(config: CarouselConfig, slide_count: usize, now_ms: f64) -> MotionResult<Self> {
        validate_carousel_config(config)?;
        let next_advance_ms = (slide_count > 1).then_some(now_ms + config.interval_ms);
        Ok(Self {
            config,
            slide_count,
            index: 0,
            paused: false,
            next_advance_ms,
        })
    }

    #[must_use]
    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn pointer_enter(&mut self) {
        self.paused = true;
        self.next_advance_ms = None;
    }

    pub fn pointer_leave(&mut self, now_ms: f64) {
        self.paused = false;
        self.restart_interval(now_ms);
    }

    /// Advances the slide for every interval that elapsed; returns the new
    /// index when it changed.
    pub fn poll(&mut self, now_ms: f64) -> Option<usize> {
        let before = self.index;
        while let Some(due) = self.next_advance_ms {
            if now_ms < due {
                break;
            }
            if !self.step_forward() {
                self.next_advance_ms = None;
                break;
            }
            self.next_advance_ms = Some(due + self.config.interval_ms);
        }
        (self.index != before).then_some(self.index)
    }

    pub fn next(&mut self, now_ms: f64) -> usize {
        if self.step_forward() {
            self.restart_interval(now_ms);
        }
        self.index
    }

    pub fn prev(&mut self, now_ms: f64) -> usize {
        if self.slide_count == 0 {
            return self.index;
        }
        if self.index > 0 {
            self.index -= 1;
        } else if self.config.wrap {
            self.index = self.slide_count - 1;
        } else {
            return self.index;
        }
        self.restart_interval(now_ms);
        self.index
    }

    fn step_forward(&mut self) -> bool {
        if self.slide_count < 2 {
            return false;
        }
        if self.index + 1 < self.slide_count {
            self.index += 1;
        } else if self.config.wrap {
            self.index = 0;
        } else {
            return false;
        }
        debug!(index = self.index, "carousel advanced");
        true
    }

    fn restart_interval(&mut self, now_ms: f64) {
        self.next_advance_ms =
            (!self.paused && self.slide_count > 1).then_some(now_ms + self.config.interval_ms);
    }
}
