use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::interaction::NavMenuState;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavMenuConfig {
    /// Widths below this use the tap-to-toggle menu.
    pub small_screen_below_px: f64,
}

impl Default for NavMenuConfig {
    fn default() -> Self {
        Self {
            small_screen_below_px: 992.0,
        }
    }
}

/// Where a click on the page landed relative to the name pill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavClickTarget {
    Pill,
    LinkInsidePill,
    Outside,
}

/// Name-pill navigation: mobile toggle, focus reveal and aria state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NavMenu {
    config: NavMenuConfig,
    state: NavMenuState,
}

impl NavMenu {
    #[must_use]
    pub fn new(config: NavMenuConfig) -> Self {
        Self {
            config,
            state: NavMenuState::default(),
        }
    }

    #[must_use]
    pub fn state(&self) -> NavMenuState {
        self.state
    }

    #[must_use]
    pub fn is_small_screen(&self, viewport_width: f64) -> bool {
        viewport_width < self.config.small_screen_below_px
    }

    pub fn focus_in(&mut self) {
        self.state.aria_expanded = true;
    }

    /// Focus left an element of the pill; `to_inside` tells whether it moved
    /// to another element inside it.
    pub fn focus_out(&mut self, to_inside: bool) {
        if !to_inside {
            self.state.aria_expanded = false;
        }
    }

    /// Handles a click; toggling only happens on small screens.
    pub fn on_click(&mut self, target: NavClickTarget, viewport_width: f64) {
        if !self.is_small_screen(viewport_width) {
            return;
        }
        match target {
            NavClickTarget::Pill => {
                if self.state.expanded {
                    self.close();
                } else {
                    self.open();
                }
            }
            NavClickTarget::LinkInsidePill | NavClickTarget::Outside => self.close(),
        }
    }

    /// Collapses every open state after navigation, on any screen size.
    pub fn on_link_navigated(&mut self) {
        self.state = NavMenuState::default();
        debug!("nav menu collapsed after link navigation");
    }

    pub fn set_temporarily_open(&mut self, open: bool) {
        self.state.temporarily_open = open;
    }

    fn open(&mut self) {
        self.state.expanded = true;
        self.state.aria_expanded = true;
    }

    fn close(&mut self) {
        self.state.expanded = false;
        self.state.aria_expanded = false;
    }
}
