// Copyright 2025 the Zoetrope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use zoetrope_controller::controller::{Carousel, CarouselOptions};
use zoetrope_controller::indicators::bind;
use zoetrope_controller::nav::Dispatcher;
use zoetrope_controller::sync::SelectionSync;
use zoetrope_controller::types::{CarouselItem, CarouselState, NavigationIntent};
use zoetrope_engine::{Engine, StepEngine};

fn items(n: usize) -> Vec<CarouselItem<usize, ()>> {
    (0..n).map(|i| CarouselItem::new(i, ())).collect()
}

// The binder runs on every render; it should stay linear and cheap.
fn bench_indicator_bind(c: &mut Criterion) {
    let mut group = c.benchmark_group("indicator_bind");
    for n in [4_usize, 32, 256] {
        let collection = items(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("bind_{n}"), |b| {
            b.iter(|| bind(black_box(&collection), black_box(Some(n / 2))));
        });
    }
    group.finish();
}

// One engine notification through the synchronizer.
fn bench_handle_select(c: &mut Criterion) {
    c.bench_function("sync_handle_select", |b| {
        let mut engine = StepEngine::new(64);
        let mut state = CarouselState::new(64, 1);
        let mut sync = SelectionSync::new();
        sync.attach();
        let mut i = 0_usize;
        b.iter(|| {
            i = (i + 7) % 64;
            engine.scroll_to(i);
            engine.drain_events();
            black_box(sync.handle_select(&mut state, &engine))
        });
    });
}

// Multi-item viewports pay for the in-view window read.
fn bench_handle_select_windowed(c: &mut Criterion) {
    c.bench_function("sync_handle_select_viewport_5", |b| {
        let mut engine = StepEngine::new(64);
        engine.set_viewport(5);
        let mut state = CarouselState::new(64, 5);
        let mut sync = SelectionSync::new();
        sync.attach();
        let mut i = 0_usize;
        b.iter(|| {
            i = (i + 7) % 64;
            engine.scroll_to(i);
            engine.drain_events();
            black_box(sync.handle_select(&mut state, &engine))
        });
    });
}

fn bench_dispatch_next(c: &mut Criterion) {
    c.bench_function("dispatch_next", |b| {
        let mut nav = Dispatcher::new(false);
        let mut engine = StepEngine::new(64);
        let state = CarouselState::new(64, 1);
        b.iter(|| black_box(nav.dispatch(&state, &mut engine, NavigationIntent::Next)));
    });
}

// A whole host frame: autoplay poll, notification pump, render model.
fn bench_host_frame(c: &mut Criterion) {
    c.bench_function("host_frame", |b| {
        let collection = items(16);
        let options = CarouselOptions {
            autoplay_interval_ms: Some(1),
            ..CarouselOptions::default()
        };
        let mut carousel = Carousel::new(StepEngine::new(16), 16, options, 0);
        let mut now_ms = 0_u64;
        b.iter(|| {
            now_ms += 1;
            carousel.tick(now_ms);
            for _event in carousel.engine_mut().drain_events() {
                carousel.on_engine_select();
            }
            black_box(carousel.render_model(&collection))
        });
    });
}

criterion_group!(
    benches,
    bench_indicator_bind,
    bench_handle_select,
    bench_handle_select_windowed,
    bench_dispatch_next,
    bench_host_frame,
);
criterion_main!(benches);
