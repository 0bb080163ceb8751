use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{ElementRect, SectionBounds};
use crate::error::MotionResult;
use crate::interaction::{CardTransform, NavMenuState, ProgressState};
use crate::render::PresentationSink;

use super::{
    BackToTop, BannerState, DotNav, FormKind, FormSubmitFlow, FrameScheduler, FrameStatus,
    HoverLift, MeasureOutcome, MotionConfig, NavClickTarget, NavMenu, ProgressAnimator,
    ProjectCarousel, RevealObserver, Ripple, RippleEffect, ScrollEnvironment, ScrollStart,
    ScrollStep, SectionBanner, SectionTracker, SmoothScroll, TimelineRows, ValidatedForm,
};

pub const BACK_TO_TOP_PROPERTY: &str = "--back-to-top-visible";

/// Everything a host needs to apply after a scroll or resize event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrollUpdate {
    pub active_href: Option<String>,
    /// Section whose side dot is active.
    pub active_dot: Option<String>,
    pub back_to_top_visible: bool,
    pub nav: NavMenuState,
}

/// Outcome of one delivered animation frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameReport {
    /// `None` when the progress loop had no pending frame.
    pub progress: Option<FrameStatus>,
    /// Scroll position to apply, when an anchor scroll is in flight.
    pub scroll: Option<ScrollStep>,
}

/// Collapses frame requests from several components into one per frame.
#[derive(Debug, Default)]
struct FrameGate {
    requested: bool,
}

impl FrameScheduler for FrameGate {
    fn request_frame(&mut self) {
        self.requested = true;
    }
}

/// Page-level facade wiring every motion component to one host.
///
/// The host forwards scroll, resize, frame and pointer events; the engine
/// writes numeric presentation properties to its sink and returns the class
/// and attribute state the host should reflect.
pub struct MotionEngine<S: PresentationSink> {
    sink: S,
    config: MotionConfig,
    progress: ProgressAnimator,
    timeline_rows: TimelineRows,
    smooth_scroll: SmoothScroll,
    sections: SectionTracker,
    dot_nav: DotNav,
    banner: SectionBanner,
    back_to_top: BackToTop,
    nav_menu: NavMenu,
    reveal: RevealObserver,
    ripple: RippleEffect,
    hover_lift: HoverLift,
    frame_pending: bool,
}

impl<S: PresentationSink> MotionEngine<S> {
    pub fn new(sink: S, config: MotionConfig) -> MotionResult<Self> {
        config.validate()?;
        Ok(Self {
            sink,
            progress: ProgressAnimator::new(config.progress.clone())?,
            timeline_rows: TimelineRows::new(config.timeline_rows)?,
            smooth_scroll: SmoothScroll::new(config.smooth_scroll)?,
            sections: SectionTracker::new(config.section_tracker)?,
            dot_nav: DotNav::new(config.dot_nav)?,
            banner: SectionBanner::new(config.banner)?,
            back_to_top: BackToTop::new(config.back_to_top),
            nav_menu: NavMenu::new(config.nav_menu),
            reveal: RevealObserver::new(config.reveal),
            ripple: RippleEffect::new(config.ripple),
            hover_lift: HoverLift::new(config.hover_lift),
            frame_pending: false,
            config,
        })
    }

    #[must_use]
    pub fn config(&self) -> &MotionConfig {
        &self.config
    }

    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    #[must_use]
    pub fn into_sink(self) -> S {
        self.sink
    }

    #[must_use]
    pub fn progress_state(&self) -> ProgressState {
        self.progress.state()
    }

    #[must_use]
    pub fn nav_state(&self) -> NavMenuState {
        self.nav_menu.state()
    }

    #[must_use]
    pub fn banner_state(&self) -> BannerState {
        self.banner.state()
    }

    #[must_use]
    pub fn active_href(&self) -> Option<String> {
        self.sections.active_href()
    }

    #[must_use]
    pub fn active_dot(&self) -> Option<&str> {
        self.dot_nav.active()
    }

    #[must_use]
    pub fn timeline_rows(&self) -> &TimelineRows {
        &self.timeline_rows
    }

    #[must_use]
    pub fn is_scrolling(&self) -> bool {
        self.smooth_scroll.is_active()
    }

    /// Registers a page section for both the nav links and the side dots.
    pub fn register_section(&mut self, id: impl Into<String>, bounds: SectionBounds) -> MotionResult<()> {
        let id = id.into();
        self.sections.register(id.clone(), bounds)?;
        self.dot_nav.register(id, bounds)
    }

    /// Registers a timeline row by its dot centre below the timeline top.
    pub fn register_timeline_row(&mut self, id: impl Into<String>, dot_center_px: f64) -> MotionResult<()> {
        self.timeline_rows.register(id, dot_center_px)
    }

    pub fn reveal_mut(&mut self) -> &mut RevealObserver {
        &mut self.reveal
    }

    /// Handles a scroll notification.
    pub fn on_scroll<E, F>(&mut self, env: &E, scheduler: &mut F, now_ms: f64) -> ScrollUpdate
    where
        E: ScrollEnvironment + ?Sized,
        F: FrameScheduler + ?Sized,
    {
        let mut gate = FrameGate::default();
        if self.progress.gated_measure(env, &mut gate, &mut self.sink) == MeasureOutcome::OutOfView {
            self.timeline_rows.reset();
        }
        self.forward_frame_request(gate, scheduler);

        let scroll_y = env.scroll_y();
        let viewport = env.viewport();
        let is_desktop = self.sections.config().is_desktop_width(viewport.width);
        self.sections.on_scroll(scroll_y, now_ms, is_desktop);
        self.nav_menu
            .set_temporarily_open(self.sections.is_temporarily_open());
        self.dot_nav
            .choose(scroll_y, viewport.height, env.document_height());

        if self.back_to_top.on_scroll(scroll_y) {
            let visible = if self.back_to_top.is_visible() { 1.0 } else { 0.0 };
            self.sink.set_property(BACK_TO_TOP_PROPERTY, visible);
        }

        ScrollUpdate {
            active_href: self.sections.active_href(),
            active_dot: self.dot_nav.active().map(str::to_owned),
            back_to_top_visible: self.back_to_top.is_visible(),
            nav: self.nav_menu.state(),
        }
    }

    /// Handles a resize; geometry is re-read exactly like on scroll.
    pub fn on_resize<E, F>(&mut self, env: &E, scheduler: &mut F, now_ms: f64) -> ScrollUpdate
    where
        E: ScrollEnvironment + ?Sized,
        F: FrameScheduler + ?Sized,
    {
        self.on_scroll(env, scheduler, now_ms)
    }

    /// Handles one delivered animation frame.
    pub fn on_frame<E, F>(&mut self, env: &E, scheduler: &mut F, now_ms: f64) -> FrameReport
    where
        E: ScrollEnvironment + ?Sized,
        F: FrameScheduler + ?Sized,
    {
        self.frame_pending = false;
        let mut gate = FrameGate::default();

        let progress = self
            .progress
            .state()
            .running()
            .then(|| self.progress.tick(env, &mut gate, &mut self.sink));
        if matches!(progress, Some(FrameStatus::Scheduled | FrameStatus::Settled)) {
            if let Some(rect) = env.reference_rect() {
                self.timeline_rows
                    .update(self.progress.state().displayed(), rect.height, now_ms);
            }
        }

        let scroll = self.smooth_scroll.sample(now_ms);
        if scroll.is_some_and(|step| !step.finished) {
            gate.request_frame();
        }

        trace!(?progress, ?scroll, now_ms, "motion frame");
        self.forward_frame_request(gate, scheduler);
        FrameReport { progress, scroll }
    }

    /// Advances wall-clock timers (nav reveal, banner, ripples, timeline rows).
    pub fn poll(&mut self, now_ms: f64) {
        let open = self.sections.poll(now_ms);
        self.nav_menu.set_temporarily_open(open);
        self.banner.poll(now_ms);
        self.ripple.poll(now_ms);
        self.timeline_rows.poll(now_ms);
    }

    /// Reports that a section crossed into view; returns whether the banner
    /// announced it.
    pub fn on_section_visible<E>(
        &mut self,
        env: &E,
        id: &str,
        title: Option<&str>,
        visible_ratio: f64,
        now_ms: f64,
    ) -> bool
    where
        E: ScrollEnvironment + ?Sized,
    {
        let is_desktop = self
            .sections
            .config()
            .is_desktop_width(env.viewport().width);
        self.sections
            .on_intersection(id, visible_ratio, now_ms, is_desktop);
        self.nav_menu
            .set_temporarily_open(self.sections.is_temporarily_open());
        self.banner.on_section_visible(id, title, visible_ratio, now_ms)
    }

    /// Handles a click on a nav link targeting `section_id`.
    ///
    /// `section_top_in_viewport` is the section's current bounding-rect top.
    pub fn on_nav_link_click<E, F>(
        &mut self,
        env: &E,
        scheduler: &mut F,
        section_id: &str,
        section_top_in_viewport: f64,
        navbar_height_px: Option<f64>,
    ) -> ScrollStart
    where
        E: ScrollEnvironment + ?Sized,
        F: FrameScheduler + ?Sized,
    {
        let from_y = env.scroll_y();
        let to_y = self.smooth_scroll.config().anchor_target_y(
            from_y,
            section_top_in_viewport,
            navbar_height_px,
        );
        let start = self
            .smooth_scroll
            .start(from_y, to_y, env.prefers_reduced_motion());
        self.request_for_start(start, scheduler);

        self.sections.activate(section_id);
        self.sections.dismiss_reveal();
        self.nav_menu.on_link_navigated();
        self.banner.restore_name();
        debug!(section = section_id, to_y, "nav link navigation");
        start
    }

    /// Handles a click on a side dot; the section is scrolled to the top of
    /// the viewport.
    pub fn on_dot_click<E, F>(
        &mut self,
        env: &E,
        scheduler: &mut F,
        section_id: &str,
        section_top_in_viewport: f64,
    ) -> ScrollStart
    where
        E: ScrollEnvironment + ?Sized,
        F: FrameScheduler + ?Sized,
    {
        let from_y = env.scroll_y();
        let start = self.smooth_scroll.start(
            from_y,
            from_y + section_top_in_viewport,
            env.prefers_reduced_motion(),
        );
        self.request_for_start(start, scheduler);
        self.dot_nav.activate(section_id);
        start
    }

    pub fn on_back_to_top_click<E, F>(&mut self, env: &E, scheduler: &mut F) -> ScrollStart
    where
        E: ScrollEnvironment + ?Sized,
        F: FrameScheduler + ?Sized,
    {
        let start = self.back_to_top.on_click(
            env.scroll_y(),
            env.prefers_reduced_motion(),
            &mut self.smooth_scroll,
        );
        self.request_for_start(start, scheduler);
        start
    }

    pub fn on_nav_click(&mut self, target: NavClickTarget, viewport_width: f64) -> NavMenuState {
        self.nav_menu.on_click(target, viewport_width);
        self.nav_menu.state()
    }

    pub fn on_nav_focus(&mut self, focused: bool, to_inside: bool) -> NavMenuState {
        if focused {
            self.nav_menu.focus_in();
        } else {
            self.nav_menu.focus_out(to_inside);
        }
        self.nav_menu.state()
    }

    pub fn on_button_click(&mut self, button: ElementRect, client_x: f64, client_y: f64, now_ms: f64) -> Ripple {
        self.ripple.spawn(button, client_x, client_y, now_ms)
    }

    #[must_use]
    pub fn active_ripples(&self) -> &[Ripple] {
        self.ripple.active()
    }

    #[must_use]
    pub fn card_hover<E>(&self, env: &E, entered: bool) -> CardTransform
    where
        E: ScrollEnvironment + ?Sized,
    {
        if entered {
            self.hover_lift.pointer_enter(env.prefers_reduced_motion())
        } else {
            self.hover_lift.pointer_leave()
        }
    }

    /// Creates a submission flow for one form on the page.
    pub fn form_flow(&self, in_modal: bool) -> MotionResult<FormSubmitFlow> {
        Ok(FormSubmitFlow::new(self.config.form_submit)?.in_modal(in_modal))
    }

    /// Creates the validated contact or newsletter form.
    pub fn validated_form(&self, kind: FormKind) -> MotionResult<ValidatedForm> {
        ValidatedForm::new(kind, self.config.form_validation.clone())
    }

    pub fn carousel(&self, slide_count: usize, now_ms: f64) -> MotionResult<ProjectCarousel> {
        ProjectCarousel::new(self.config.carousel, slide_count, now_ms)
    }

    /// Drops pending animation work, e.g. before the page unloads.
    pub fn cancel(&mut self) {
        self.progress.cancel();
        self.smooth_scroll.cancel();
        self.frame_pending = false;
    }

    fn request_for_start<F>(&mut self, start: ScrollStart, scheduler: &mut F)
    where
        F: FrameScheduler + ?Sized,
    {
        if start == ScrollStart::Animating {
            self.forward_frame_request(FrameGate { requested: true }, scheduler);
        }
    }

    fn forward_frame_request<F>(&mut self, gate: FrameGate, scheduler: &mut F)
    where
        F: FrameScheduler + ?Sized,
    {
        if gate.requested && !self.frame_pending {
            self.frame_pending = true;
            scheduler.request_frame();
        }
    }
}
