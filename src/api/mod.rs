mod back_to_top;
mod carousel;
mod config_validation;
mod dot_nav;
mod environment;
mod form_submit;
mod form_validation;
mod hover_lift;
mod motion_config;
mod motion_engine;
mod nav_menu;
mod progress_animator;
mod reveal;
mod ripple;
mod section_banner;
mod section_tracker;
mod skill_label;
mod smooth_scroll;
mod timeline_rows;

pub use back_to_top::{BackToTop, BackToTopConfig};
pub use carousel::{CarouselConfig, ProjectCarousel};
pub use dot_nav::{DotNav, DotNavConfig};
pub use environment::{CountingScheduler, FixedEnvironment, FrameScheduler, ScrollEnvironment};
pub use form_submit::{FormEffect, FormEffects, FormPhase, FormSubmitConfig, FormSubmitFlow};
pub use form_validation::{
    CONTACT_SENDING, CONTACT_SENT, FieldError, FieldErrors, FormField, FormFields, FormKind,
    FormValidationConfig, FormValidator, INVALID_EMAIL, NEWSLETTER_DONE, NEWSLETTER_PENDING,
    SubmitOutcome, ValidatedForm,
};
pub use hover_lift::{HoverLift, HoverLiftConfig};
pub use motion_config::MotionConfig;
pub use motion_engine::{BACK_TO_TOP_PROPERTY, FrameReport, MotionEngine, ScrollUpdate};
pub use nav_menu::{NavClickTarget, NavMenu, NavMenuConfig};
pub use progress_animator::{
    DEFAULT_ICON_OFFSET_PROPERTY, DEFAULT_ICON_SCALE_PROPERTY, DEFAULT_PROGRESS_PROPERTY,
    FrameStatus, MeasureOutcome, ProgressAnimator, ProgressAnimatorConfig, ProgressIconConfig,
};
pub use reveal::{RevealConfig, RevealObserver};
pub use ripple::{Ripple, RippleConfig, RippleEffect};
pub use section_banner::{BannerState, SectionBanner, SectionBannerConfig};
pub use section_tracker::{SectionTracker, SectionTrackerConfig};
pub use skill_label::{SkillAttributes, SkillLabel};
pub use smooth_scroll::{ScrollStart, ScrollStep, SmoothScroll, SmoothScrollConfig};
pub use timeline_rows::{RowPhase, TimelineRows, TimelineRowsConfig};
