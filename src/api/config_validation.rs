use regex::Regex;

use crate::error::{MotionError, MotionResult};

use super::{
    BackToTopConfig, CarouselConfig, DotNavConfig, FormSubmitConfig, FormValidationConfig,
    HoverLiftConfig, NavMenuConfig, ProgressAnimatorConfig, RevealConfig, RippleConfig,
    SectionBannerConfig, SectionTrackerConfig, SmoothScrollConfig, TimelineRowsConfig,
};

fn require_finite(value: f64, name: &str) -> MotionResult<()> {
    if !value.is_finite() {
        return Err(MotionError::InvalidConfig(format!("{name} must be finite")));
    }
    Ok(())
}

fn require_non_negative(value: f64, name: &str) -> MotionResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(MotionError::InvalidConfig(format!(
            "{name} must be finite and >= 0"
        )));
    }
    Ok(())
}

fn require_ratio(value: f64, name: &str) -> MotionResult<()> {
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        return Err(MotionError::InvalidConfig(format!(
            "{name} must be finite and in [0, 1]"
        )));
    }
    Ok(())
}

pub(super) fn validate_progress_animator_config(config: &ProgressAnimatorConfig) -> MotionResult<()> {
    if !config.smoothing_factor.is_finite()
        || config.smoothing_factor <= 0.0
        || config.smoothing_factor > 1.0
    {
        return Err(MotionError::InvalidConfig(
            "progress smoothing_factor must be finite and in (0, 1]".to_owned(),
        ));
    }
    if !config.epsilon.is_finite() || config.epsilon <= 0.0 {
        return Err(MotionError::InvalidConfig(
            "progress epsilon must be finite and > 0".to_owned(),
        ));
    }
    require_finite(config.anchor_ratio, "progress anchor_ratio")?;
    if config.property.trim().is_empty() {
        return Err(MotionError::InvalidConfig(
            "progress property name must not be empty".to_owned(),
        ));
    }
    if let Some(icon) = &config.icon {
        require_finite(icon.travel_px, "progress icon travel_px")?;
        if !icon.min_scale.is_finite() || icon.min_scale <= 0.0 {
            return Err(MotionError::InvalidConfig(
                "progress icon min_scale must be finite and > 0".to_owned(),
            ));
        }
        if icon.offset_property.trim().is_empty() || icon.scale_property.trim().is_empty() {
            return Err(MotionError::InvalidConfig(
                "progress icon property names must not be empty".to_owned(),
            ));
        }
    }
    Ok(())
}

pub(super) fn validate_smooth_scroll_config(config: SmoothScrollConfig) -> MotionResult<()> {
    require_non_negative(config.duration_ms, "smooth scroll duration_ms")?;
    require_non_negative(
        config.fallback_navbar_height_px,
        "smooth scroll fallback_navbar_height_px",
    )?;
    require_finite(config.anchor_gap_px, "smooth scroll anchor_gap_px")
}

pub(super) fn validate_section_tracker_config(config: SectionTrackerConfig) -> MotionResult<()> {
    require_finite(config.marker_offset_px, "section tracker marker_offset_px")?;
    require_non_negative(config.reveal_duration_ms, "section tracker reveal_duration_ms")?;
    require_non_negative(
        config.desktop_min_width_px,
        "section tracker desktop_min_width_px",
    )?;
    require_ratio(
        config.intersection_threshold,
        "section tracker intersection_threshold",
    )?;
    require_ratio(
        config.reveal_intersection_threshold,
        "section tracker reveal_intersection_threshold",
    )
}

pub(super) fn validate_section_banner_config(config: SectionBannerConfig) -> MotionResult<()> {
    require_ratio(config.visibility_threshold, "banner visibility_threshold")?;
    require_non_negative(config.banner_duration_ms, "banner banner_duration_ms")?;
    require_non_negative(config.name_swap_duration_ms, "banner name_swap_duration_ms")
}

pub(super) fn validate_back_to_top_config(config: BackToTopConfig) -> MotionResult<()> {
    require_finite(config.visible_after_px, "back-to-top visible_after_px")
}

pub(super) fn validate_nav_menu_config(config: NavMenuConfig) -> MotionResult<()> {
    require_non_negative(config.small_screen_below_px, "nav menu small_screen_below_px")
}

pub(super) fn validate_form_submit_config(config: FormSubmitConfig) -> MotionResult<()> {
    require_non_negative(config.sending_duration_ms, "form sending_duration_ms")?;
    require_non_negative(config.sent_duration_ms, "form sent_duration_ms")?;
    require_non_negative(config.modal_hide_delay_ms, "form modal_hide_delay_ms")
}

pub(super) fn validate_carousel_config(config: CarouselConfig) -> MotionResult<()> {
    if !config.interval_ms.is_finite() || config.interval_ms <= 0.0 {
        return Err(MotionError::InvalidConfig(
            "carousel interval_ms must be finite and > 0".to_owned(),
        ));
    }
    Ok(())
}

pub(super) fn validate_reveal_config(config: RevealConfig) -> MotionResult<()> {
    require_ratio(config.threshold, "reveal threshold")?;
    require_finite(config.bottom_margin_px, "reveal bottom_margin_px")
}

pub(super) fn validate_ripple_config(config: RippleConfig) -> MotionResult<()> {
    require_non_negative(config.lifetime_ms, "ripple lifetime_ms")
}

pub(super) fn validate_hover_lift_config(config: HoverLiftConfig) -> MotionResult<()> {
    require_finite(config.lift_px, "hover lift_px")?;
    if !config.scale.is_finite() || config.scale <= 0.0 {
        return Err(MotionError::InvalidConfig(
            "hover scale must be finite and > 0".to_owned(),
        ));
    }
    Ok(())
}

pub(super) fn validate_timeline_rows_config(config: TimelineRowsConfig) -> MotionResult<()> {
    require_non_negative(config.leave_duration_ms, "timeline rows leave_duration_ms")?;
    require_finite(config.line_nudge_px, "timeline rows line_nudge_px")
}

pub(super) fn validate_dot_nav_config(config: DotNavConfig) -> MotionResult<()> {
    require_ratio(config.pivot_ratio, "dot nav pivot_ratio")?;
    require_finite(config.activation_lead_px, "dot nav activation_lead_px")?;
    require_non_negative(config.bottom_tolerance_px, "dot nav bottom_tolerance_px")
}

pub(super) fn compile_email_pattern(pattern: &str) -> MotionResult<Regex> {
    Regex::new(pattern)
        .map_err(|err| MotionError::InvalidConfig(format!("form email_pattern: {err}")))
}

pub(super) fn validate_form_validation_config(config: &FormValidationConfig) -> MotionResult<()> {
    require_non_negative(config.contact_confirm_ms, "form contact_confirm_ms")?;
    require_non_negative(config.newsletter_confirm_ms, "form newsletter_confirm_ms")?;
    compile_email_pattern(&config.email_pattern).map(|_| ())
}
