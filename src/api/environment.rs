use serde::{Deserialize, Serialize};

use crate::core::{ElementRect, Viewport};

/// Read-only view of the host page consumed by the motion components.
///
/// A browser host answers these from `window`, the reference element's
/// bounding rect and the `prefers-reduced-motion` media query.
pub trait ScrollEnvironment {
    fn viewport(&self) -> Viewport;

    /// Document scroll offset (`window.scrollY`).
    fn scroll_y(&self) -> f64;

    /// Bounding rect of the element driving scroll progress, if it exists.
    fn reference_rect(&self) -> Option<ElementRect>;

    fn prefers_reduced_motion(&self) -> bool;

    /// Bounding rect of the section enclosing the reference element.
    ///
    /// When present, progress is only measured while this section overlaps
    /// the viewport.
    fn section_rect(&self) -> Option<ElementRect> {
        None
    }

    /// Full scrollable height of the document (`scrollHeight`), when known.
    fn document_height(&self) -> Option<f64> {
        None
    }
}

/// Host hook that delivers exactly one frame callback per request.
pub trait FrameScheduler {
    fn request_frame(&mut self);
}

impl<S: FrameScheduler + ?Sized> FrameScheduler for &mut S {
    fn request_frame(&mut self) {
        (**self).request_frame();
    }
}

/// Environment with fixed geometry, for tests and offline traces.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FixedEnvironment {
    pub viewport: Viewport,
    pub scroll_y: f64,
    pub reference_rect: Option<ElementRect>,
    #[serde(default)]
    pub section_rect: Option<ElementRect>,
    #[serde(default)]
    pub document_height: Option<f64>,
    pub reduced_motion: bool,
}

impl FixedEnvironment {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            scroll_y: 0.0,
            reference_rect: None,
            section_rect: None,
            document_height: None,
            reduced_motion: false,
        }
    }

    #[must_use]
    pub fn with_reference_rect(mut self, rect: ElementRect) -> Self {
        self.reference_rect = Some(rect);
        self
    }

    #[must_use]
    pub fn with_section_rect(mut self, rect: ElementRect) -> Self {
        self.section_rect = Some(rect);
        self
    }

    #[must_use]
    pub fn with_document_height(mut self, height: f64) -> Self {
        self.document_height = Some(height);
        self
    }

    #[must_use]
    pub fn with_reduced_motion(mut self, reduced: bool) -> Self {
        self.reduced_motion = reduced;
        self
    }

    #[must_use]
    pub fn with_scroll_y(mut self, scroll_y: f64) -> Self {
        self.scroll_y = scroll_y;
        self
    }

    /// Scrolls the document, moving the reference and section rects by the
    /// same amount.
    pub fn scroll_to(&mut self, scroll_y: f64) {
        let delta = scroll_y - self.scroll_y;
        self.scroll_y = scroll_y;
        for rect in [&mut self.reference_rect, &mut self.section_rect]
            .into_iter()
            .flatten()
        {
            rect.top -= delta;
        }
    }
}

impl ScrollEnvironment for FixedEnvironment {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    fn reference_rect(&self) -> Option<ElementRect> {
        self.reference_rect
    }

    fn prefers_reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    fn section_rect(&self) -> Option<ElementRect> {
        self.section_rect
    }

    fn document_height(&self) -> Option<f64> {
        self.document_height
    }
}

/// Scheduler that only counts requests; the caller delivers frames by hand.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CountingScheduler {
    pub requested: usize,
}

impl FrameScheduler for CountingScheduler {
    fn request_frame(&mut self) {
        self.requested += 1;
    }
}
