pub mod easing;
pub mod intersection;
pub mod progress;
pub mod smoothing;
pub mod types;

pub use easing::{ease_in_out_cubic, lerp};
pub use intersection::visible_ratio;
pub use progress::scroll_progress;
pub use smoothing::{is_converged, smoothing_step, steps_to_converge};
pub use types::{ElementRect, SectionBounds, Viewport};
