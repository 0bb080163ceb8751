use crate::core::types::ElementRect;

/// Maps element geometry to a normalized scroll progress.
///
/// Progress is how far the element has travelled past an anchor line placed at
/// `viewport_height * anchor_ratio`, measured in element heights and clamped to
/// `[0, 1]`. Returns `None` for non-finite input so callers can treat it like an
/// absent element.
#[must_use]
pub fn scroll_progress(viewport_height: f64, anchor_ratio: f64, element: ElementRect) -> Option<f64> {
    if !viewport_height.is_finite() || !anchor_ratio.is_finite() || !element.is_finite() {
        return None;
    }

    let anchor = viewport_height * anchor_ratio;
    let travelled = anchor - element.top;
    if element.height <= 0.0 {
        // Collapsed element: it is either fully passed or not reached.
        return Some(if travelled >= 0.0 { 1.0 } else { 0.0 });
    }

    Some((travelled / element.height).clamp(0.0, 1.0))
}
