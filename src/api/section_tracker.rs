use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::SectionBounds;
use crate::error::{MotionError, MotionResult};

use super::config_validation::validate_section_tracker_config;

/// Tuning for scroll-based active section detection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionTrackerConfig {
    /// Offset of the detection line below the scroll position.
    pub marker_offset_px: f64,
    /// How long the nav name stays open after the active section changes.
    pub reveal_duration_ms: f64,
    /// Minimum viewport width treated as desktop.
    pub desktop_min_width_px: f64,
    /// Visible ratio at which an observed section claims the active link.
    pub intersection_threshold: f64,
    /// Visible ratio at which an observed section briefly reveals the nav name.
    pub reveal_intersection_threshold: f64,
}

impl Default for SectionTrackerConfig {
    fn default() -> Self {
        Self {
            marker_offset_px: 120.0,
            reveal_duration_ms: 1800.0,
            desktop_min_width_px: 992.0,
            intersection_threshold: 0.4,
            reveal_intersection_threshold: 0.7,
        }
    }
}

impl SectionTrackerConfig {
    #[must_use]
    pub fn is_desktop_width(&self, viewport_width: f64) -> bool {
        viewport_width >= self.desktop_min_width_px
    }
}

/// Tracks which page section owns the active nav link.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SectionTracker {
    config: SectionTrackerConfig,
    sections: IndexMap<String, SectionBounds>,
    active: Option<String>,
    last_revealed: Option<String>,
    reveal_until_ms: Option<f64>,
}

impl SectionTracker {
    pub fn new(config: SectionTrackerConfig) -> MotionResult<Self> {
        validate_section_tracker_config(config)?;
        Ok(Self {
            config,
            ..Self::default()
        })
    }

    #[must_use]
    pub fn config(&self) -> SectionTrackerConfig {
        self.config
    }

    /// Registers a section, or updates its bounds after a layout change.
    ///
    /// New sections are appended, so registration order should follow the
    /// document.
    pub fn register(&mut self, id: impl Into<String>, bounds: SectionBounds) -> MotionResult<()> {
        let id = id.into();
        if id.is_empty() {
            return Err(MotionError::InvalidConfig(
                "section id must not be empty".to_owned(),
            ));
        }
        if !bounds.top.is_finite() || !bounds.height.is_finite() || bounds.height < 0.0 {
            return Err(MotionError::InvalidGeometry {
                top: bounds.top,
                height: bounds.height,
            });
        }
        self.sections.insert(id, bounds);
        Ok(())
    }

    #[must_use]
    pub fn section_ids(&self) -> Vec<&str> {
        self.sections.keys().map(String::as_str).collect()
    }

    #[must_use]
    pub fn active_section(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// `href` of the nav link that should carry the active class.
    #[must_use]
    pub fn active_href(&self) -> Option<String> {
        self.active.as_ref().map(|id| format!("#{id}"))
    }

    /// Updates the active section for a scroll position.
    ///
    /// When several sections contain the marker line the last one in document
    /// order wins. If none does, the previous active section is kept.
    pub fn on_scroll(&mut self, scroll_y: f64, now_ms: f64, is_desktop: bool) -> Option<&str> {
        if !scroll_y.is_finite() {
            warn!(scroll_y, "ignoring non-finite scroll position");
            return self.active.as_deref();
        }
        let marker = scroll_y + self.config.marker_offset_px;
        let hit = self
            .sections
            .iter()
            .rev()
            .find(|(_, bounds)| bounds.contains(marker))
            .map(|(id, _)| id.clone());

        if let Some(id) = hit {
            if is_desktop && self.last_revealed.as_deref() != Some(id.as_str()) {
                self.last_revealed = Some(id.clone());
                self.reveal_until_ms = Some(now_ms + self.config.reveal_duration_ms);
                debug!(section = %id, "nav name revealed for section change");
            }
            if self.active.as_deref() != Some(id.as_str()) {
                debug!(section = %id, "active section changed");
            }
            self.active = Some(id);
        }
        self.active.as_deref()
    }

    /// Applies an intersection report for one section.
    ///
    /// On desktop a section that is mostly in view also restarts the
    /// temporary nav reveal.
    pub fn on_intersection(&mut self, id: &str, visible_ratio: f64, now_ms: f64, is_desktop: bool) {
        if !self.sections.contains_key(id) || !visible_ratio.is_finite() {
            return;
        }
        if visible_ratio >= self.config.intersection_threshold {
            self.active = Some(id.to_owned());
        } else if self.active.as_deref() == Some(id) {
            self.active = None;
        }
        if is_desktop && visible_ratio >= self.config.reveal_intersection_threshold {
            self.reveal_until_ms = Some(now_ms + self.config.reveal_duration_ms);
            debug!(section = id, "nav name revealed for visible section");
        }
    }

    /// Marks a section active after an explicit nav-link click.
    pub fn activate(&mut self, id: &str) -> bool {
        if !self.sections.contains_key(id) {
            warn!(section = id, "nav link points at an unknown section");
            return false;
        }
        self.active = Some(id.to_owned());
        true
    }

    /// Expires the temporary nav reveal; returns whether it is still open.
    pub fn poll(&mut self, now_ms: f64) -> bool {
        match self.reveal_until_ms {
            Some(until) if now_ms >= until => {
                self.reveal_until_ms = None;
                false
            }
            Some(_) => true,
            None => false,
        }
    }

    /// Closes the temporary reveal right away, e.g. after link navigation.
    pub fn dismiss_reveal(&mut self) {
        if self.reveal_until_ms.take().is_some() {
            debug!("temporary nav reveal dismissed");
        }
    }

    #[must_use]
    pub fn is_temporarily_open(&self) -> bool {
        self.reveal_until_ms.is_some()
    }
}
