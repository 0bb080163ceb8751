use folio_motion::api::{
    HoverLift, NavClickTarget, NavMenu, NavMenuConfig, RevealConfig, RevealObserver, RippleConfig,
    RippleEffect, SkillAttributes, SkillLabel,
};
use folio_motion::core::{ElementRect, Viewport};
use folio_motion::interaction::{CardTransform, NavMenuState};

#[test]
fn ripple_is_centred_on_click_and_expires() {
    let mut ripple = RippleEffect::new(RippleConfig::default());
    let button = ElementRect::new(100.0, 50.0, 120.0, 40.0);
    let spawned = ripple.spawn(button, 130.0, 60.0, 1000.0);

    assert_eq!(spawned.size, 120.0);
    assert_eq!(spawned.left, -30.0);
    assert_eq!(spawned.top, -50.0);
    assert_eq!(ripple.active().len(), 1);

    assert_eq!(ripple.poll(1599.0), 0);
    assert_eq!(ripple.poll(1600.0), 1);
    assert!(ripple.active().is_empty());
}

#[test]
fn hover_lift_respects_reduced_motion() {
    let lift = HoverLift::default();
    let lifted = lift.pointer_enter(false);
    assert_eq!(lifted.translate_y_px, -10.0);
    assert_eq!(lifted.scale, 1.02);
    assert_eq!(lifted.to_css(), "translateY(-10px) scale(1.02)");

    assert_eq!(lift.pointer_enter(true), CardTransform::default());
    assert_eq!(lift.pointer_leave().to_css(), "translateY(0px) scale(1)");
}

#[test]
fn reveal_uses_bottom_margin_and_is_one_shot() {
    let mut reveal = RevealObserver::new(RevealConfig::default());
    let viewport = Viewport::new(1280.0, 800.0);
    reveal.observe("card-1");
    reveal.observe("card-2");

    // Top 760 is inside the viewport but below the 50px margin band.
    assert!(!reveal.on_geometry("card-1", ElementRect::vertical(760.0, 200.0), viewport));
    // 20px of 200 inside the band is exactly the 0.1 threshold.
    assert!(reveal.on_geometry("card-1", ElementRect::vertical(730.0, 200.0), viewport));
    assert!(!reveal.on_geometry("card-1", ElementRect::vertical(-900.0, 200.0), viewport));
    assert!(reveal.is_revealed("card-1"));

    assert_eq!(reveal.pending(), vec!["card-2"]);
    assert!(!reveal.on_geometry("unknown", ElementRect::vertical(0.0, 10.0), viewport));
}

#[test]
fn nav_menu_toggles_only_on_small_screens() {
    let mut menu = NavMenu::new(NavMenuConfig::default());
    menu.on_click(NavClickTarget::Pill, 1200.0);
    assert!(!menu.state().expanded);

    menu.on_click(NavClickTarget::Pill, 600.0);
    assert!(menu.state().expanded);
    assert!(menu.state().aria_expanded);

    menu.on_click(NavClickTarget::Pill, 600.0);
    assert!(!menu.state().expanded);

    menu.on_click(NavClickTarget::Pill, 600.0);
    menu.on_click(NavClickTarget::Outside, 600.0);
    assert!(!menu.state().expanded);

    menu.on_click(NavClickTarget::Pill, 600.0);
    menu.on_click(NavClickTarget::LinkInsidePill, 600.0);
    assert!(!menu.state().expanded);
}

#[test]
fn nav_menu_focus_tracks_aria_and_link_navigation_collapses() {
    let mut menu = NavMenu::default();
    menu.focus_in();
    assert!(menu.state().aria_expanded);
    menu.focus_out(true);
    assert!(menu.state().aria_expanded);
    menu.focus_out(false);
    assert!(!menu.state().aria_expanded);

    menu.set_temporarily_open(true);
    menu.on_click(NavClickTarget::Pill, 500.0);
    menu.on_link_navigated();
    assert_eq!(menu.state(), NavMenuState::default());
}

#[test]
fn skill_label_names_hovered_skill_from_first_present_attribute() {
    let mut label = SkillLabel::new();
    let rust = SkillAttributes {
        data_brand: Some(String::new()),
        title: Some("Rust".to_owned()),
        aria_label: Some("Rust language".to_owned()),
    };
    assert!(label.show(&rust));
    assert_eq!(label.text(), Some("Rust"));
    assert!(label.is_visible());

    label.hide();
    assert!(!label.is_visible());
    assert_eq!(label.text(), Some("Rust"));

    assert!(!label.show(&SkillAttributes::default()));
    assert!(!label.is_visible());
    assert!(label.show(&SkillAttributes::brand("Docker")));
    assert_eq!(label.text(), Some("Docker"));
}
