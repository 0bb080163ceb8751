use folio_motion::api::{CountingScheduler, FixedEnvironment, FrameStatus, ProgressAnimator};
use folio_motion::core::{ElementRect, Viewport, scroll_progress, smoothing_step};
use folio_motion::interaction::ProgressState;
use folio_motion::render::NullSink;
use proptest::prelude::*;

proptest! {
    #[test]
    fn measured_target_is_always_clamped(
        viewport_height in 1.0f64..10_000.0,
        top in -1.0e7f64..1.0e7,
        height in 0.0f64..1.0e6
    ) {
        let env = FixedEnvironment::new(Viewport::new(1024.0, viewport_height))
            .with_reference_rect(ElementRect::vertical(top, height));
        let mut animator = ProgressAnimator::default();
        let mut scheduler = CountingScheduler::default();

        prop_assert!(animator.measure(&env, &mut scheduler));
        let target = animator.state().target();
        prop_assert!((0.0..=1.0).contains(&target));
    }

    #[test]
    fn progress_mapping_is_monotonic_in_scroll(
        viewport_height in 100.0f64..4_000.0,
        top in -5_000.0f64..5_000.0,
        delta in 0.0f64..2_000.0,
        height in 1.0f64..5_000.0
    ) {
        let before = scroll_progress(viewport_height, 0.5, ElementRect::vertical(top, height))
            .expect("finite");
        let after = scroll_progress(viewport_height, 0.5, ElementRect::vertical(top - delta, height))
            .expect("finite");
        prop_assert!(after >= before);
    }

    #[test]
    fn smoothing_approaches_target_strictly(
        target in 0.0f64..=1.0,
        start in 0.0f64..=1.0
    ) {
        prop_assume!((target - start).abs() > 1e-6);
        let mut displayed = start;
        let mut gap = (target - displayed).abs();
        for _ in 0..20 {
            displayed = smoothing_step(displayed, target, 0.12);
            let next_gap = (target - displayed).abs();
            prop_assert!(next_gap < gap);
            gap = next_gap;
        }
    }

    #[test]
    fn loop_settles_within_bounded_frames(
        target_top in -1_000.0f64..1_000.0,
        start in 0.0f64..=1.0
    ) {
        let env = FixedEnvironment::new(Viewport::new(1024.0, 800.0))
            .with_reference_rect(ElementRect::vertical(target_top, 1000.0));
        let mut animator = ProgressAnimator::with_state(
            Default::default(),
            ProgressState::new(0.0, start),
        ).expect("animator");
        let mut scheduler = CountingScheduler::default();
        let mut sink = NullSink::default();

        animator.measure(&env, &mut scheduler);
        let mut settled_after = None;
        for frame in 1..=60 {
            if animator.tick(&env, &mut scheduler, &mut sink) == FrameStatus::Settled {
                settled_after = Some(frame);
                break;
            }
        }
        prop_assert!(settled_after.is_some());
        prop_assert_eq!(animator.state().displayed(), animator.state().target());
        prop_assert!(!animator.state().running());
    }
}
