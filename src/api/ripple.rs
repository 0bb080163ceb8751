use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::ElementRect;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RippleConfig {
    pub lifetime_ms: f64,
}

impl Default for RippleConfig {
    fn default() -> Self {
        Self { lifetime_ms: 600.0 }
    }
}

/// Square ripple positioned relative to the clicked button.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ripple {
    pub size: f64,
    pub left: f64,
    pub top: f64,
    pub expires_at_ms: f64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RippleEffect {
    config: RippleConfig,
    active: SmallVec<[Ripple; 4]>,
}

impl RippleEffect {
    #[must_use]
    pub fn new(config: RippleConfig) -> Self {
        Self {
            config,
            active: SmallVec::new(),
        }
    }

    /// Spawns a ripple centred on the click point.
    pub fn spawn(&mut self, button: ElementRect, client_x: f64, client_y: f64, now_ms: f64) -> Ripple {
        let size = button.width.max(button.height);
        let ripple = Ripple {
            size,
            left: client_x - button.left - size / 2.0,
            top: client_y - button.top - size / 2.0,
            expires_at_ms: now_ms + self.config.lifetime_ms,
        };
        self.active.push(ripple);
        ripple
    }

    /// Drops expired ripples and returns how many were removed.
    pub fn poll(&mut self, now_ms: f64) -> usize {
        let before = self.active.len();
        self.active.retain(|ripple| ripple.expires_at_ms > now_ms);
        before - self.active.len()
    }

    #[must_use]
    pub fn active(&self) -> &[Ripple] {
        &self.active
    }
}
