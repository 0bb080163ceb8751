use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{ElementRect, Viewport, visible_ratio};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub threshold: f64,
    /// Viewport bottom is pulled up by this much before testing visibility.
    pub bottom_margin_px: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            bottom_margin_px: 50.0,
        }
    }
}

/// One-shot fade-in for cards, timeline items and section titles.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RevealObserver {
    config: RevealConfig,
    elements: IndexMap<String, bool>,
}

impl RevealObserver {
    #[must_use]
    pub fn new(config: RevealConfig) -> Self {
        Self {
            config,
            elements: IndexMap::new(),
        }
    }

    /// Starts observing an element in the hidden (`fade-in`) state.
    pub fn observe(&mut self, id: impl Into<String>) {
        self.elements.entry(id.into()).or_insert(false);
    }

    /// Feeds fresh geometry; returns `true` the first time the element shows.
    pub fn on_geometry(&mut self, id: &str, rect: ElementRect, viewport: Viewport) -> bool {
        let Some(revealed) = self.elements.get_mut(id) else {
            return false;
        };
        if *revealed {
            return false;
        }
        let band_bottom = viewport.height - self.config.bottom_margin_px;
        let ratio = visible_ratio(rect, 0.0, band_bottom);
        if ratio > 0.0 && ratio >= self.config.threshold {
            *revealed = true;
            trace!(element = id, ratio, "element revealed");
            return true;
        }
        false
    }

    #[must_use]
    pub fn is_revealed(&self, id: &str) -> bool {
        self.elements.get(id).copied().unwrap_or(false)
    }

    #[must_use]
    pub fn pending(&self) -> Vec<&str> {
        self.elements
            .iter()
            .filter(|(_, revealed)| !**revealed)
            .map(|(id, _)| id.as_str())
            .collect()
    }
}
