use folio_motion::api::{
    CountingScheduler, FixedEnvironment, FrameStatus, MotionConfig, MotionEngine,
    ProgressAnimator, SmoothScroll,
};
use folio_motion::core::{ElementRect, SectionBounds, Viewport, scroll_progress};
use folio_motion::render::NullSink;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_scroll_progress_mapping(c: &mut Criterion) {
    c.bench_function("scroll_progress_mapping", |b| {
        b.iter(|| {
            let _ = scroll_progress(
                black_box(800.0),
                black_box(0.5),
                black_box(ElementRect::vertical(-123.0, 1_000.0)),
            );
        })
    });
}

fn bench_progress_loop_to_settle(c: &mut Criterion) {
    let env = FixedEnvironment::new(Viewport::new(1_280.0, 800.0))
        .with_reference_rect(ElementRect::vertical(-600.0, 1_000.0));

    c.bench_function("progress_loop_to_settle", |b| {
        b.iter(|| {
            let mut animator = ProgressAnimator::default();
            let mut scheduler = CountingScheduler::default();
            let mut sink = NullSink::default();
            animator.measure(&env, &mut scheduler);
            while animator.tick(&env, &mut scheduler, &mut sink) == FrameStatus::Scheduled {}
            black_box(animator.state());
        })
    });
}

fn bench_smooth_scroll_frames(c: &mut Criterion) {
    c.bench_function("smooth_scroll_frames", |b| {
        b.iter(|| {
            let mut scroll = SmoothScroll::default();
            scroll.start(black_box(0.0), black_box(4_800.0), false);
            let mut now = 0.0;
            while let Some(step) = scroll.sample(now) {
                if step.finished {
                    break;
                }
                now += 16.0;
            }
        })
    });
}

fn bench_engine_scroll_event_50_sections(c: &mut Criterion) {
    let mut engine =
        MotionEngine::new(NullSink::default(), MotionConfig::default()).expect("engine init");
    for i in 0..50 {
        engine
            .register_section(format!("section-{i}"), SectionBounds::new(f64::from(i) * 900.0, 900.0))
            .expect("valid section");
    }
    let mut env = FixedEnvironment::new(Viewport::new(1_280.0, 800.0))
        .with_reference_rect(ElementRect::vertical(0.0, 20_000.0));
    let mut scheduler = CountingScheduler::default();

    c.bench_function("engine_scroll_event_50_sections", |b| {
        let mut y = 0.0;
        b.iter(|| {
            y = (y + 37.0) % 45_000.0;
            env.scroll_to(y);
            black_box(engine.on_scroll(&env, &mut scheduler, y));
        })
    });
}

criterion_group!(
    benches,
    bench_scroll_progress_mapping,
    bench_progress_loop_to_settle,
    bench_smooth_scroll_frames,
    bench_engine_scroll_event_50_sections
);
criterion_main!(benches);
