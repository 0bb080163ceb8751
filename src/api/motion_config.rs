use serde::{Deserialize, Serialize};

use crate::error::MotionResult;

use super::config_validation::{
    validate_back_to_top_config, validate_carousel_config, validate_dot_nav_config,
    validate_form_submit_config, validate_form_validation_config, validate_hover_lift_config,
    validate_nav_menu_config, validate_progress_animator_config, validate_reveal_config,
    validate_ripple_config, validate_section_banner_config, validate_section_tracker_config,
    validate_smooth_scroll_config, validate_timeline_rows_config,
};
use super::{
    BackToTopConfig, CarouselConfig, DotNavConfig, FormSubmitConfig, FormValidationConfig,
    HoverLiftConfig, NavMenuConfig, ProgressAnimatorConfig, RevealConfig, RippleConfig,
    SectionBannerConfig, SectionTrackerConfig, SmoothScrollConfig, TimelineRowsConfig,
};

/// Page-level configuration for every motion component.
///
/// Serializable so hosts can ship tuning as JSON next to the page. Missing
/// fields fall back to defaults.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    pub progress: ProgressAnimatorConfig,
    pub timeline_rows: TimelineRowsConfig,
    pub smooth_scroll: SmoothScrollConfig,
    pub section_tracker: SectionTrackerConfig,
    pub dot_nav: DotNavConfig,
    pub banner: SectionBannerConfig,
    pub back_to_top: BackToTopConfig,
    pub nav_menu: NavMenuConfig,
    pub form_submit: FormSubmitConfig,
    pub form_validation: FormValidationConfig,
    pub carousel: CarouselConfig,
    pub reveal: RevealConfig,
    pub ripple: RippleConfig,
    pub hover_lift: HoverLiftConfig,
}

impl MotionConfig {
    pub fn from_json_str(raw: &str) -> MotionResult<Self> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_string(&self) -> MotionResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> MotionResult<()> {
        validate_progress_animator_config(&self.progress)?;
        validate_timeline_rows_config(self.timeline_rows)?;
        validate_smooth_scroll_config(self.smooth_scroll)?;
        validate_section_tracker_config(self.section_tracker)?;
        validate_dot_nav_config(self.dot_nav)?;
        validate_section_banner_config(self.banner)?;
        validate_back_to_top_config(self.back_to_top)?;
        validate_nav_menu_config(self.nav_menu)?;
        validate_form_submit_config(self.form_submit)?;
        validate_form_validation_config(&self.form_validation)?;
        validate_carousel_config(self.carousel)?;
        validate_reveal_config(self.reveal)?;
        validate_ripple_config(self.ripple)?;
        validate_hover_lift_config(self.hover_lift)
    }

    /// Sets the smoothing constants of the scroll progress loop.
    #[must_use]
    pub fn with_progress_smoothing(mut self, smoothing_factor: f64, epsilon: f64) -> Self {
        self.progress.smoothing_factor = smoothing_factor;
        self.progress.epsilon = epsilon;
        self
    }

    /// Sets the presentation property receiving scroll progress.
    #[must_use]
    pub fn with_progress_property(mut self, property: impl Into<String>) -> Self {
        self.progress.property = property.into();
        self
    }

    /// Disables the marker icon riding the progress line.
    #[must_use]
    pub fn without_progress_icon(mut self) -> Self {
        self.progress.icon = None;
        self
    }

    #[must_use]
    pub fn with_smooth_scroll_duration_ms(mut self, duration_ms: f64) -> Self {
        self.smooth_scroll.duration_ms = duration_ms;
        self
    }

    #[must_use]
    pub fn with_carousel(mut self, interval_ms: f64, wrap: bool) -> Self {
        self.carousel = CarouselConfig { interval_ms, wrap };
        self
    }
}
