// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for typed setters and multi-shape reads of
//! `understory_chart_options`.

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};

use understory_chart_options::{
    AnimationTiming, DisplayMode, Fill, HasDisplay, Options, chart_defaults,
};

fn bench_setters(c: &mut Criterion) {
    let mut group = c.benchmark_group("options/set");
    let defaults = chart_defaults();

    group.bench_function("scale_first_write", |b| {
        b.iter_batched(
            || Options::with_defaults(defaults.clone()),
            |options| {
                let x = options.scales().axis("x").expect("valid id");
                x.set_display_mode(DisplayMode::Auto);
                black_box(options)
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("tick_font_size", |b| {
        let options = Options::with_defaults(defaults.clone());
        let font = options.scales().axis("y").expect("valid id").ticks().font();
        let mut size = 0;
        b.iter(|| {
            size = (size + 1) % 64;
            font.set_size(black_box(size));
        });
    });

    group.bench_function("animation_toggle", |b| {
        let options = Options::with_defaults(defaults.clone());
        let animations = options.animations();
        animations
            .collection("colors")
            .expect("reserved name")
            .set_duration(200);
        let mut enabled = false;
        b.iter(|| {
            enabled = !enabled;
            animations
                .set_enabled("colors", black_box(enabled))
                .expect("valid name");
        });
    });

    group.finish();
}

fn bench_reads(c: &mut Criterion) {
    let mut group = c.benchmark_group("options/read");
    let options = Options::new();
    let line = options.elements().line();
    let fill = line.fill_handler();

    group.bench_function("fill_default", |b| {
        b.iter(|| black_box(fill.fill()));
    });

    fill.set_fill(Fill::Relative(-2));
    group.bench_function("fill_relative", |b| {
        b.iter(|| black_box(fill.fill()));
    });

    let title_font = options.plugins().title().font();
    group.bench_function("font_weight_default", |b| {
        b.iter(|| black_box(title_font.weight()));
    });

    group.finish();
}

criterion_group!(benches, bench_setters, bench_reads);
criterion_main!(benches);
