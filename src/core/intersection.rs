use crate::core::types::ElementRect;

/// Fraction of `rect`'s height inside the vertical band `[band_top, band_bottom)`.
///
/// Zero-height rects count as fully visible when they sit inside the band.
#[must_use]
pub fn visible_ratio(rect: ElementRect, band_top: f64, band_bottom: f64) -> f64 {
    if !rect.is_finite() || band_bottom <= band_top {
        return 0.0;
    }
    if rect.height <= 0.0 {
        return if rect.top >= band_top && rect.top < band_bottom {
            1.0
        } else {
            0.0
        };
    }
    let overlap = rect.bottom().min(band_bottom) - rect.top.max(band_top);
    (overlap / rect.height).clamp(0.0, 1.0)
}
