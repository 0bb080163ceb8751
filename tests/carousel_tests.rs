use folio_motion::api::{CarouselConfig, ProjectCarousel};

#[test]
fn auto_advances_and_wraps() {
    let mut carousel = ProjectCarousel::new(CarouselConfig::default(), 3, 0.0).expect("carousel");
    assert_eq!(carousel.poll(4999.0), None);
    assert_eq!(carousel.poll(5000.0), Some(1));
    assert_eq!(carousel.poll(10_000.0), Some(2));
    assert_eq!(carousel.poll(15_000.0), Some(0));
}

#[test]
fn catches_up_missed_intervals() {
    let mut carousel = ProjectCarousel::new(CarouselConfig::default(), 4, 0.0).expect("carousel");
    assert_eq!(carousel.poll(15_500.0), Some(3));
}

#[test]
fn hover_pauses_and_leave_restarts_interval() {
    let mut carousel = ProjectCarousel::new(CarouselConfig::default(), 3, 0.0).expect("carousel");
    carousel.pointer_enter();
    assert!(carousel.is_paused());
    assert_eq!(carousel.poll(20_000.0), None);

    carousel.pointer_leave(20_000.0);
    assert_eq!(carousel.poll(24_999.0), None);
    assert_eq!(carousel.poll(25_000.0), Some(1));
}

#[test]
fn manual_navigation_wraps_both_ways() {
    let mut carousel = ProjectCarousel::new(CarouselConfig::default(), 3, 0.0).expect("carousel");
    assert_eq!(carousel.prev(100.0), 2);
    assert_eq!(carousel.next(200.0), 0);
    assert_eq!(carousel.poll(5199.0), None);
    assert_eq!(carousel.poll(5200.0), Some(1));
}

#[test]
fn without_wrap_cycling_stops_at_the_end() {
    let config = CarouselConfig {
        interval_ms: 1000.0,
        wrap: false,
    };
    let mut carousel = ProjectCarousel::new(config, 2, 0.0).expect("carousel");
    assert_eq!(carousel.poll(1000.0), Some(1));
    assert_eq!(carousel.poll(5000.0), None);
    assert_eq!(carousel.next(5000.0), 1);
    assert_eq!(carousel.prev(5000.0), 0);
    assert_eq!(carousel.prev(5000.0), 0);
}

#[test]
fn empty_carousel_is_inert() {
    let mut carousel = ProjectCarousel::new(CarouselConfig::default(), 0, 0.0).expect("carousel");
    assert_eq!(carousel.poll(50_000.0), None);
    assert_eq!(carousel.next(0.0), 0);
    assert_eq!(carousel.prev(0.0), 0);
}

#[test]
fn zero_interval_is_rejected() {
    let config = CarouselConfig {
        interval_ms: 0.0,
        wrap: true,
    };
    assert!(ProjectCarousel::new(config, 3, 0.0).is_err());
}
