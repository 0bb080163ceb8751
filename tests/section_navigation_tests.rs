use folio_motion::api::{
    DotNav, DotNavConfig, SectionBanner, SectionBannerConfig, SectionTracker,
    SectionTrackerConfig,
};
use folio_motion::core::SectionBounds;

fn tracker() -> SectionTracker {
    let mut tracker = SectionTracker::new(SectionTrackerConfig::default()).expect("tracker");
    tracker
        .register("about", SectionBounds::new(0.0, 600.0))
        .expect("about");
    tracker
        .register("experience", SectionBounds::new(600.0, 900.0))
        .expect("experience");
    tracker
        .register("projects", SectionBounds::new(1500.0, 700.0))
        .expect("projects");
    tracker
}

#[test]
fn marker_line_sits_below_scroll_position() {
    let mut tracker = tracker();
    assert_eq!(tracker.on_scroll(0.0, 0.0, true), Some("about"));
    assert_eq!(tracker.on_scroll(479.0, 10.0, true), Some("about"));
    assert_eq!(tracker.on_scroll(480.0, 20.0, true), Some("experience"));
    assert_eq!(tracker.active_href().as_deref(), Some("#experience"));
}

#[test]
fn active_section_is_kept_past_the_last_section() {
    let mut tracker = tracker();
    tracker.on_scroll(1500.0, 0.0, false);
    assert_eq!(tracker.on_scroll(9000.0, 10.0, false), Some("projects"));
}

#[test]
fn desktop_section_change_reveals_nav_temporarily() {
    let mut tracker = tracker();
    tracker.on_scroll(0.0, 0.0, true);
    assert!(tracker.is_temporarily_open());
    assert!(tracker.poll(1000.0));
    assert!(!tracker.poll(1800.0));

    // Scrolling inside the same section does not reopen.
    tracker.on_scroll(100.0, 2000.0, true);
    assert!(!tracker.is_temporarily_open());

    tracker.on_scroll(700.0, 3000.0, true);
    assert!(tracker.poll(4700.0));
    assert!(!tracker.poll(4800.0));
}

#[test]
fn mobile_never_reveals_nav() {
    let mut tracker = tracker();
    tracker.on_scroll(700.0, 0.0, false);
    assert!(!tracker.is_temporarily_open());
}

#[test]
fn explicit_activation_and_intersections() {
    let mut tracker = tracker();
    assert!(tracker.activate("projects"));
    assert!(!tracker.activate("contact"));
    assert_eq!(tracker.active_section(), Some("projects"));

    tracker.on_intersection("experience", 0.5, 0.0, true);
    assert_eq!(tracker.active_section(), Some("experience"));
    tracker.on_intersection("experience", 0.1, 0.0, true);
    assert_eq!(tracker.active_section(), None);
}

#[test]
fn mostly_visible_section_reveals_nav_on_desktop_only() {
    let mut tracker = tracker();
    tracker.on_intersection("projects", 0.69, 0.0, true);
    assert!(!tracker.is_temporarily_open());

    tracker.on_intersection("projects", 0.8, 0.0, false);
    assert!(!tracker.is_temporarily_open());

    tracker.on_intersection("projects", 0.7, 100.0, true);
    assert!(tracker.is_temporarily_open());
    tracker.on_intersection("about", 1.0, 1000.0, true);
    assert!(tracker.poll(2799.0), "second reveal restarts the timer");
    assert!(!tracker.poll(2800.0));
}

#[test]
fn dismissed_reveal_stays_closed_until_next_section_change() {
    let mut tracker = tracker();
    tracker.on_scroll(700.0, 0.0, true);
    assert!(tracker.is_temporarily_open());

    tracker.dismiss_reveal();
    assert!(!tracker.is_temporarily_open());
    assert!(!tracker.poll(100.0));
    tracker.on_scroll(720.0, 200.0, true);
    assert!(!tracker.is_temporarily_open());

    tracker.on_scroll(1500.0, 300.0, true);
    assert!(tracker.is_temporarily_open());
}

#[test]
fn registration_rejects_bad_sections_and_keeps_order_on_update() {
    let mut tracker = tracker();
    assert!(tracker.register("", SectionBounds::new(0.0, 10.0)).is_err());
    assert!(tracker
        .register("bad", SectionBounds::new(f64::NAN, 10.0))
        .is_err());
    tracker
        .register("about", SectionBounds::new(0.0, 650.0))
        .expect("resize");
    assert_eq!(tracker.section_ids(), vec!["about", "experience", "projects"]);
}

#[test]
fn banner_announces_title_and_expires() {
    let mut banner = SectionBanner::new(SectionBannerConfig::default()).expect("banner");
    assert!(!banner.on_section_visible("skills", Some("Skills"), 0.5, 0.0));
    assert!(banner.on_section_visible("skills", Some("  Skills  "), 0.7, 0.0));

    let state = banner.state();
    assert!(state.visible);
    assert!(state.navbar_scrolled);
    assert_eq!(state.text.as_deref(), Some("Skills"));
    assert_eq!(state.swapped_name.as_deref(), Some("Skills"));

    banner.poll(1800.0);
    let state = banner.state();
    assert!(state.visible);
    assert_eq!(state.swapped_name, None);

    banner.poll(2000.0);
    assert!(!banner.state().visible);
    assert_eq!(banner.state().text, None);
}

#[test]
fn banner_falls_back_to_section_id_and_restarts_timer() {
    let mut banner = SectionBanner::default();
    assert!(banner.on_section_visible("contact", Some("   "), 1.0, 0.0));
    assert_eq!(banner.state().text.as_deref(), Some("contact"));

    assert!(banner.on_section_visible("contact", None, 1.0, 1500.0));
    banner.poll(2500.0);
    assert!(banner.state().visible);
    banner.poll(3500.0);
    assert!(!banner.state().visible);
}

#[test]
fn restoring_name_keeps_banner() {
    let mut banner = SectionBanner::default();
    banner.on_section_visible("about", Some("About"), 1.0, 0.0);
    banner.restore_name();
    assert_eq!(banner.state().swapped_name, None);
    assert!(banner.state().visible);
}

fn dots() -> DotNav {
    let mut dots = DotNav::new(DotNavConfig::default()).expect("dots");
    // Registered out of order; the dot nav sorts by document position.
    dots.register("contact", SectionBounds::new(2000.0, 600.0))
        .expect("contact");
    dots.register("hero", SectionBounds::new(0.0, 900.0)).expect("hero");
    dots.register("work", SectionBounds::new(900.0, 1100.0))
        .expect("work");
    dots
}

#[test]
fn dot_activates_when_section_top_nears_the_pivot_line() {
    let mut dots = dots();
    // Viewport 1000: pivot at 280, so a top activates at 420 in the viewport.
    assert_eq!(dots.choose(0.0, 1000.0, Some(2600.0)), Some("hero"));
    assert_eq!(dots.choose(479.0, 1000.0, Some(2600.0)), Some("hero"));
    assert_eq!(dots.choose(480.0, 1000.0, Some(2600.0)), Some("work"));
    assert_eq!(dots.choose(1579.0, 1000.0, Some(2600.0)), Some("work"));
    assert_eq!(dots.choose(1580.0, 1000.0, Some(2600.0)), Some("contact"));
}

#[test]
fn page_bottom_selects_the_last_dot() {
    let mut dots = dots();
    // Contact top is still below the pivot, but the page ends 10px further.
    assert_eq!(dots.choose(1390.0, 1000.0, Some(2400.0)), Some("contact"));
    assert_eq!(dots.choose(1380.0, 1000.0, Some(2400.0)), Some("work"));
    let mut short_page = crate::dots();
    assert_eq!(short_page.choose(0.0, 1000.0, Some(1016.0)), Some("contact"));
    let mut unknown_height = crate::dots();
    assert_eq!(unknown_height.choose(0.0, 1000.0, None), Some("hero"));
}

#[test]
fn dot_click_and_invalid_input() {
    let mut dots = dots();
    assert_eq!(dots.active(), None);
    assert!(dots.activate("work"));
    assert!(!dots.activate("blog"));
    assert_eq!(dots.active(), Some("work"));
    assert_eq!(dots.choose(f64::NAN, 1000.0, None), Some("work"));

    assert!(dots.register("", SectionBounds::new(0.0, 1.0)).is_err());
    assert!(
        DotNav::new(DotNavConfig {
            pivot_ratio: 1.5,
            ..DotNavConfig::default()
        })
        .is_err()
    );
}
