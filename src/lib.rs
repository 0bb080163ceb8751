//! folio-motion: headless scroll-driven motion for portfolio pages.
//!
//! Every behavior is a small state machine fed by explicit host events
//! (scroll, resize, animation frames, clicks, timers). The page itself is an
//! injected read-only `ScrollEnvironment`, and numeric output goes through a
//! `PresentationSink`, so the same code runs in a browser glue layer, a native
//! UI or a unit test.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{MotionConfig, MotionEngine, ProgressAnimator};
pub use error::{MotionError, MotionResult};
