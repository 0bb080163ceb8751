use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{is_converged, scroll_progress, smoothing_step};
use crate::error::MotionResult;
use crate::interaction::{ProgressIconTransform, ProgressState};
use crate::render::PresentationSink;

use super::config_validation::validate_progress_animator_config;
use super::{FrameScheduler, ScrollEnvironment};

pub const DEFAULT_PROGRESS_PROPERTY: &str = "--timeline-progress";
pub const DEFAULT_ICON_OFFSET_PROPERTY: &str = "--timeline-icon-offset";
pub const DEFAULT_ICON_SCALE_PROPERTY: &str = "--timeline-icon-scale";

/// Marker icon that slides and grows along with the progress line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressIconConfig {
    /// Vertical travel at full progress.
    pub travel_px: f64,
    /// Scale at zero progress; full progress always reaches 1.
    pub min_scale: f64,
    pub offset_property: String,
    pub scale_property: String,
}

impl Default for ProgressIconConfig {
    fn default() -> Self {
        Self {
            travel_px: 100.0,
            min_scale: 0.5,
            offset_property: DEFAULT_ICON_OFFSET_PROPERTY.to_owned(),
            scale_property: DEFAULT_ICON_SCALE_PROPERTY.to_owned(),
        }
    }
}

impl ProgressIconConfig {
    #[must_use]
    pub fn transform(&self, displayed: f64) -> ProgressIconTransform {
        ProgressIconTransform::from_progress(displayed, self.travel_px, self.min_scale)
    }
}

/// Tuning for the scroll progress animation loop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressAnimatorConfig {
    /// Fraction of the remaining gap closed per frame.
    pub smoothing_factor: f64,
    /// The loop stops once `|target - displayed|` drops below this.
    pub epsilon: f64,
    /// Position of the anchor line as a fraction of the viewport height.
    pub anchor_ratio: f64,
    /// Presentation property receiving the displayed progress.
    pub property: String,
    /// `None` disables the marker icon outputs.
    pub icon: Option<ProgressIconConfig>,
}

impl Default for ProgressAnimatorConfig {
    fn default() -> Self {
        Self {
            smoothing_factor: 0.12,
            epsilon: 0.001,
            anchor_ratio: 0.5,
            property: DEFAULT_PROGRESS_PROPERTY.to_owned(),
            icon: Some(ProgressIconConfig::default()),
        }
    }
}

/// Result of delivering one animation frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FrameStatus {
    /// Reference element missing; nothing changed and no frame was requested.
    Skipped,
    /// Displayed value moved and another frame was requested.
    Scheduled,
    /// Displayed value reached the target; the loop stopped.
    Settled,
}

/// How a gated measurement was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MeasureOutcome {
    /// Target recomputed and the loop armed.
    Measured,
    /// Enclosing section left the viewport; progress was reset to zero.
    OutOfView,
    /// Reference element absent or geometry unusable.
    Skipped,
}

/// Drives the displayed scroll progress toward its measured target.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProgressAnimator {
    config: ProgressAnimatorConfig,
    state: ProgressState,
}

impl ProgressAnimator {
    pub fn new(config: ProgressAnimatorConfig) -> MotionResult<Self> {
        validate_progress_animator_config(&config)?;
        Ok(Self {
            config,
            state: ProgressState::default(),
        })
    }

    /// Starts from an existing state, e.g. one restored after a page transition.
    pub fn with_state(config: ProgressAnimatorConfig, state: ProgressState) -> MotionResult<Self> {
        let mut animator = Self::new(config)?;
        animator.state = ProgressState::new(state.target(), state.displayed());
        Ok(animator)
    }

    #[must_use]
    pub fn config(&self) -> &ProgressAnimatorConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> ProgressState {
        self.state
    }

    /// Recomputes the target from current geometry and arms the frame loop.
    ///
    /// Returns `false` when the reference element is absent or its geometry is
    /// unusable; the state is left untouched in that case.
    pub fn measure<E, F>(&mut self, env: &E, scheduler: &mut F) -> bool
    where
        E: ScrollEnvironment + ?Sized,
        F: FrameScheduler + ?Sized,
    {
        let Some(rect) = env.reference_rect() else {
            trace!("progress measure skipped: reference element absent");
            return false;
        };
        let viewport = env.viewport();
        if !viewport.is_valid() {
            debug!(
                width = viewport.width,
                height = viewport.height,
                "progress measure skipped: degenerate viewport"
            );
            return false;
        }
        let Some(target) = scroll_progress(viewport.height, self.config.anchor_ratio, rect) else {
            debug!(
                top = rect.top,
                height = rect.height,
                viewport_height = viewport.height,
                "progress measure skipped: non-finite geometry"
            );
            return false;
        };

        self.state.set_target(target);
        trace!(target, "progress target measured");
        self.ensure_loop_running(scheduler);
        true
    }

    /// Measures only while the enclosing section overlaps the viewport.
    ///
    /// Once the section is entirely above or below the viewport, target and
    /// displayed progress drop to zero and the zero is published, so the
    /// next entry animates from the start.
    pub fn gated_measure<E, F, S>(&mut self, env: &E, scheduler: &mut F, sink: &mut S) -> MeasureOutcome
    where
        E: ScrollEnvironment + ?Sized,
        F: FrameScheduler + ?Sized,
        S: PresentationSink + ?Sized,
    {
        if env.reference_rect().is_none() {
            return MeasureOutcome::Skipped;
        }
        if let Some(section) = env.section_rect() {
            let viewport_height = env.viewport().height;
            let overlaps = section.bottom() > 0.0 && section.top < viewport_height;
            if section.is_finite() && !overlaps {
                self.reset(sink);
                return MeasureOutcome::OutOfView;
            }
        }
        if self.measure(env, scheduler) {
            MeasureOutcome::Measured
        } else {
            MeasureOutcome::Skipped
        }
    }

    /// Zeroes target and displayed progress and publishes the zero.
    ///
    /// A pending frame stays pending and settles immediately.
    pub fn reset<S>(&mut self, sink: &mut S)
    where
        S: PresentationSink + ?Sized,
    {
        if self.state.target() != 0.0 || self.state.displayed() != 0.0 {
            debug!("progress reset: section out of view");
        }
        self.state.set_target(0.0);
        self.state.set_displayed(0.0);
        self.publish(sink, 0.0);
    }

    /// Icon transform for the current displayed progress.
    #[must_use]
    pub fn icon_transform(&self) -> Option<ProgressIconTransform> {
        self.config
            .icon
            .as_ref()
            .map(|icon| icon.transform(self.state.displayed()))
    }

    /// Requests a frame unless one is already pending.
    pub fn ensure_loop_running<F>(&mut self, scheduler: &mut F)
    where
        F: FrameScheduler + ?Sized,
    {
        if self.state.running() {
            return;
        }
        self.state.set_running(true);
        scheduler.request_frame();
    }

    /// Handles one delivered frame.
    pub fn tick<E, F, S>(&mut self, env: &E, scheduler: &mut F, sink: &mut S) -> FrameStatus
    where
        E: ScrollEnvironment + ?Sized,
        F: FrameScheduler + ?Sized,
        S: PresentationSink + ?Sized,
    {
        // The pending frame is consumed whatever happens below.
        self.state.set_running(false);

        if env.reference_rect().is_none() {
            trace!("progress tick skipped: reference element absent");
            return FrameStatus::Skipped;
        }

        let target = self.state.target();
        let next = if env.prefers_reduced_motion() {
            target
        } else {
            smoothing_step(
                self.state.displayed(),
                target,
                self.config.smoothing_factor,
            )
        };

        if is_converged(next, target, self.config.epsilon) {
            self.state.set_displayed(target);
            self.publish(sink, target);
            debug!(progress = target, "progress settled");
            return FrameStatus::Settled;
        }

        self.state.set_displayed(next);
        self.publish(sink, next);
        trace!(displayed = next, target, "progress tick");
        self.ensure_loop_running(scheduler);
        FrameStatus::Scheduled
    }

    /// Forgets a pending frame, e.g. when the host tears the page down.
    pub fn cancel(&mut self) {
        if self.state.running() {
            debug!("progress loop cancelled");
        }
        self.state.set_running(false);
    }

    /// Icon outputs go first so the progress property is the frame's last write.
    fn publish<S>(&self, sink: &mut S, displayed: f64)
    where
        S: PresentationSink + ?Sized,
    {
        if let Some(icon) = &self.config.icon {
            let transform = icon.transform(displayed);
            sink.set_property(&icon.offset_property, transform.offset_px);
            sink.set_property(&icon.scale_property, transform.scale);
        }
        sink.set_property(&self.config.property, displayed);
    }
}
