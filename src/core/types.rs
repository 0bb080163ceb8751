use serde::{Deserialize, Serialize};

use crate::error::{MotionError, MotionResult};

/// Visible viewport size in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// Element bounding box relative to the viewport's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElementRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ElementRect {
    #[must_use]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Vertical-only rect, which is all the progress mapping looks at.
    #[must_use]
    pub fn vertical(top: f64, height: f64) -> Self {
        Self::new(0.0, top, 0.0, height)
    }

    /// Builds a rect and rejects non-finite or negative extents.
    pub fn try_new(left: f64, top: f64, width: f64, height: f64) -> MotionResult<Self> {
        let rect = Self::new(left, top, width, height);
        if !rect.is_finite() || width < 0.0 || height < 0.0 {
            return Err(MotionError::InvalidGeometry { top, height });
        }
        Ok(rect)
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.left.is_finite() && self.top.is_finite() && self.width.is_finite() && self.height.is_finite()
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.top + self.height
    }
}

/// Section extent in document coordinates (`offsetTop` / `offsetHeight`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionBounds {
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    #[must_use]
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    /// Half-open containment: `top <= y < top + height`.
    #[must_use]
    pub fn contains(self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}
