use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::SectionBounds;
use crate::error::{MotionError, MotionResult};

use super::config_validation::validate_dot_nav_config;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DotNavConfig {
    /// Reference line as a fraction of the viewport height.
    pub pivot_ratio: f64,
    /// A section activates this far before its top reaches the pivot line.
    pub activation_lead_px: f64,
    /// Within this distance of the page bottom the last section wins.
    pub bottom_tolerance_px: f64,
}

impl Default for DotNavConfig {
    fn default() -> Self {
        Self {
            pivot_ratio: 0.28,
            activation_lead_px: 140.0,
            bottom_tolerance_px: 16.0,
        }
    }
}

/// Side dot navigation: one dot per section, exactly one active.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DotNav {
    config: DotNavConfig,
    sections: IndexMap<String, SectionBounds>,
    active: Option<String>,
}

impl DotNav {
    pub fn new(config: DotNavConfig) -> MotionResult<Self> {
        validate_dot_nav_config(config)?;
        Ok(Self {
            config,
            ..Self::default()
        })
    }

    /// Registers a section; sections are kept sorted by their document top.
    pub fn register(&mut self, id: impl Into<String>, bounds: SectionBounds) -> MotionResult<()> {
        let id = id.into();
        if id.is_empty() {
            return Err(MotionError::InvalidConfig(
                "dot nav section id must not be empty".to_owned(),
            ));
        }
        if !bounds.top.is_finite() || !bounds.height.is_finite() {
            return Err(MotionError::InvalidGeometry {
                top: bounds.top,
                height: bounds.height,
            });
        }
        self.sections.insert(id, bounds);
        self.sections.sort_by(|_, a, _, b| a.top.total_cmp(&b.top));
        Ok(())
    }

    #[must_use]
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Picks the active dot for a scroll position.
    ///
    /// The last section whose top, less the activation lead, has crossed the
    /// pivot line wins. Near the bottom of the document the last section wins
    /// regardless. With no candidate the previous dot stays active.
    pub fn choose(&mut self, scroll_y: f64, viewport_height: f64, document_height: Option<f64>) -> Option<&str> {
        if !scroll_y.is_finite() || !viewport_height.is_finite() {
            warn!(scroll_y, viewport_height, "ignoring non-finite dot nav geometry");
            return self.active.as_deref();
        }
        let pivot = viewport_height * self.config.pivot_ratio;
        let mut candidate = None;
        for (id, bounds) in &self.sections {
            let top_in_viewport = bounds.top - scroll_y;
            if top_in_viewport - self.config.activation_lead_px <= pivot {
                candidate = Some(id);
            } else {
                break;
            }
        }

        let near_bottom = document_height.is_some_and(|height| {
            scroll_y + viewport_height >= height - self.config.bottom_tolerance_px
        });
        if near_bottom {
            candidate = self.sections.last().map(|(id, _)| id);
        }

        if let Some(id) = candidate {
            if self.active.as_ref() != Some(id) {
                debug!(section = %id, "active dot changed");
                self.active = Some(id.clone());
            }
        }
        self.active.as_deref()
    }

    /// Marks a dot active after it was clicked.
    pub fn activate(&mut self, id: &str) -> bool {
        if !self.sections.contains_key(id) {
            warn!(section = id, "dot points at an unknown section");
            return false;
        }
        self.active = Some(id.to_owned());
        true
    }
}
