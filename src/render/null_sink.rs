use tracing::warn;

use crate::render::PresentationSink;

/// Sink for headless use and tests that only need counts.
///
/// It still flags non-finite values so tests catch broken math early.
#[derive(Debug, Default)]
pub struct NullSink {
    pub write_count: usize,
    pub last_value: Option<f64>,
}

impl PresentationSink for NullSink {
    fn set_property(&mut self, name: &str, value: f64) {
        if !value.is_finite() {
            warn!(property = name, value, "non-finite presentation value");
        }
        self.write_count += 1;
        self.last_value = Some(value);
    }
}
