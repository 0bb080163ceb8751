use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::MotionResult;

use super::config_validation::validate_section_banner_config;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionBannerConfig {
    /// Visible ratio a section needs before its title is announced.
    pub visibility_threshold: f64,
    pub banner_duration_ms: f64,
    pub name_swap_duration_ms: f64,
}

impl Default for SectionBannerConfig {
    fn default() -> Self {
        Self {
            visibility_threshold: 0.65,
            banner_duration_ms: 2000.0,
            name_swap_duration_ms: 1800.0,
        }
    }
}

/// Snapshot of what the navbar should display.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BannerState {
    pub visible: bool,
    pub text: Option<String>,
    /// Navbar slides down to make room for the banner.
    pub navbar_scrolled: bool,
    /// Section title temporarily replacing the navbar name.
    pub swapped_name: Option<String>,
}

/// Announces the section the reader scrolled into.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SectionBanner {
    config: SectionBannerConfig,
    text: Option<String>,
    banner_until_ms: Option<f64>,
    swapped_name: Option<String>,
    swap_until_ms: Option<f64>,
}

impl SectionBanner {
    pub fn new(config: SectionBannerConfig) -> MotionResult<Self> {
        validate_section_banner_config(config)?;
        Ok(Self {
            config,
            ..Self::default()
        })
    }

    /// Handles a visibility report for a section.
    ///
    /// `title` is the section heading text; the id is announced when it is
    /// missing or blank. Returns whether the banner was (re)shown.
    pub fn on_section_visible(
        &mut self,
        id: &str,
        title: Option<&str>,
        visible_ratio: f64,
        now_ms: f64,
    ) -> bool {
        if visible_ratio < self.config.visibility_threshold {
            return false;
        }
        let text = title
            .map(str::trim)
            .filter(|title| !title.is_empty())
            .unwrap_or_else(|| id.trim());
        if text.is_empty() {
            return false;
        }

        debug!(section = id, text, "section banner shown");
        self.text = Some(text.to_owned());
        self.banner_until_ms = Some(now_ms + self.config.banner_duration_ms);
        self.swapped_name = Some(text.to_owned());
        self.swap_until_ms = Some(now_ms + self.config.name_swap_duration_ms);
        true
    }

    /// Expires the banner and name swap timers.
    pub fn poll(&mut self, now_ms: f64) {
        if self.banner_until_ms.is_some_and(|until| now_ms >= until) {
            self.banner_until_ms = None;
            self.text = None;
        }
        if self.swap_until_ms.is_some_and(|until| now_ms >= until) {
            self.restore_name();
        }
    }

    /// Puts the original navbar name back immediately.
    pub fn restore_name(&mut self) {
        self.swapped_name = None;
        self.swap_until_ms = None;
    }

    #[must_use]
    pub fn state(&self) -> BannerState {
        let visible = self.banner_until_ms.is_some();
        BannerState {
            visible,
            text: self.text.clone(),
            navbar_scrolled: visible,
            swapped_name: self.swapped_name.clone(),
        }
    }
}
