mod null_sink;
mod recording_sink;

pub use null_sink::NullSink;
pub use recording_sink::{PropertyWrite, RecordingSink};

/// Contract implemented by whatever applies motion output to the page.
///
/// Components only ever hand over plain numeric presentation properties
/// (CSS custom properties in a browser host) so rendering stays outside the
/// state machines.
pub trait PresentationSink {
    fn set_property(&mut self, name: &str, value: f64);
}

impl<S: PresentationSink + ?Sized> PresentationSink for &mut S {
    fn set_property(&mut self, name: &str, value: f64) {
        (**self).set_property(name, value);
    }
}
