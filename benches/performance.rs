use criterion::{black_box, criterion_group, criterion_main, Criterion};
use modern_clock::config::DisplayConfig;
use modern_clock::stopwatch::{format_time, Stopwatch};
use modern_clock::tui::action::{Action, StopwatchAction};
use modern_clock::tui::components::App;
use modern_clock::tui::reducer::reduce;
use modern_clock::tui::state::AppState;
use modern_clock::tui::types::Tab;
use modern_clock::tui::{Component, Renderer};
use ratatui::{buffer::Buffer, layout::Rect};

/// Running stopwatch on its own tab with a screenful of laps
fn create_running_state() -> AppState {
    let mut engine = Stopwatch::new();
    engine.toggle(0);
    for i in 1..=50 {
        engine.tick(i * 1_337);
        engine.primary_action();
    }

    let mut state = AppState::default();
    state.navigation.current_tab = Tab::Stopwatch;
    state.stopwatch.engine = engine;
    state
}

/// Benchmark the MM:SS.CC formatter
fn bench_format_time(c: &mut Criterion) {
    let mut group = c.benchmark_group("format_time");

    group.bench_function("zero", |b| b.iter(|| format_time(black_box(0))));
    group.bench_function("wrapped_hour", |b| {
        b.iter(|| format_time(black_box(3_723_456)))
    });

    group.finish();
}

/// Benchmark a stopwatch tick through the engine and through the reducer
fn bench_stopwatch_tick(c: &mut Criterion) {
    let state = create_running_state();
    let mut group = c.benchmark_group("stopwatch_tick");

    group.bench_function("engine", |b| {
        let mut engine = state.stopwatch.engine.clone();
        let mut now = 100_000;
        b.iter(|| {
            now += 10;
            engine.tick(black_box(now))
        })
    });

    group.bench_function("reducer", |b| {
        b.iter(|| {
            let (new_state, _effect) = reduce(
                black_box(state.clone()),
                black_box(Action::Stopwatch(StopwatchAction::Tick { at: 100_010 })),
            );
            new_state
        })
    });

    group.finish();
}

/// Benchmark building and rendering a full frame
fn bench_render_frame(c: &mut Criterion) {
    let state = create_running_state();
    let renderer = Renderer::new();
    let config = DisplayConfig::default();
    let area = Rect::new(0, 0, 80, 24);
    let mut group = c.benchmark_group("render");

    group.bench_function("stopwatch_frame", |b| {
        let mut buf = Buffer::empty(area);
        b.iter(|| {
            let element = App.view(black_box(&state), &());
            renderer.render(&element, area, &mut buf, &config);
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_format_time,
    bench_stopwatch_tick,
    bench_render_frame
);
criterion_main!(benches);
