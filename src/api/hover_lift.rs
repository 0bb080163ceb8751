use serde::{Deserialize, Serialize};

use crate::interaction::CardTransform;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HoverLiftConfig {
    pub lift_px: f64,
    pub scale: f64,
}

impl Default for HoverLiftConfig {
    fn default() -> Self {
        Self {
            lift_px: 10.0,
            scale: 1.02,
        }
    }
}

/// Lift-and-grow hover effect for skill cards.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HoverLift {
    config: HoverLiftConfig,
}

impl HoverLift {
    #[must_use]
    pub fn new(config: HoverLiftConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn pointer_enter(&self, reduced_motion: bool) -> CardTransform {
        if reduced_motion {
            return CardTransform::default();
        }
        CardTransform {
            translate_y_px: -self.config.lift_px,
            scale: self.config.scale,
        }
    }

    #[must_use]
    pub fn pointer_leave(&self) -> CardTransform {
        CardTransform::default()
    }
}
