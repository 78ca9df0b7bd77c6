// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::time::Duration;

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::Rect;
use vista_reveal::{PropertyMask, RevealAnimator, RevealSpec, VisualProps};
use vista_viewport::LayoutHost;

/// A grid of cards whose tops move with the scroll offset.
struct Grid {
    scroll: f64,
}

impl LayoutHost<u32> for Grid {
    fn scroll_offset(&self) -> f64 {
        self.scroll
    }

    fn viewport_height(&self) -> f64 {
        900.0
    }

    fn bounding_rect(&self, id: &u32) -> Option<Rect> {
        let top = 1000.0 + f64::from(*id / 3) * 450.0 - self.scroll;
        Some(Rect::new(0.0, top, 400.0, top + 400.0))
    }
}

fn animator(n: u32, host: &Grid) -> RevealAnimator<u32> {
    let mut animator = RevealAnimator::new();
    for id in 0..n {
        animator.register(host, id, RevealSpec::card(id % 3));
    }
    animator.observe(host);
    animator
}

fn bench_observe(c: &mut Criterion) {
    let mut group = c.benchmark_group("reveal/observe");
    for n in [12_u32, 96, 768] {
        group.throughput(Throughput::Elements(u64::from(n)));
        group.bench_with_input(BenchmarkId::new("scroll_through", n), &n, |b, &n| {
            b.iter_batched(
                || animator(n, &Grid { scroll: 0.0 }),
                |mut animator| {
                    let mut fired = 0;
                    for step in 0..32 {
                        let host = Grid {
                            scroll: f64::from(step) * 120.0,
                        };
                        fired += animator.observe(&host).len();
                    }
                    black_box(fired);
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("reveal/tick");
    let frame = Duration::from_micros(16_667);
    for n in [12_u32, 96, 768] {
        group.throughput(Throughput::Elements(u64::from(n)));
        group.bench_with_input(BenchmarkId::new("all_playing", n), &n, |b, &n| {
            b.iter_batched(
                || {
                    let mut animator = animator(n, &Grid { scroll: 0.0 });
                    // Everything above the fold.
                    animator.observe(&Grid { scroll: 1.0e6 });
                    animator
                },
                |mut animator| {
                    let mut sink = |id: &u32, props: VisualProps, _: PropertyMask| {
                        black_box((id, props));
                    };
                    for _ in 0..60 {
                        black_box(animator.tick(frame, &mut sink));
                    }
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_observe, bench_tick);
criterion_main!(benches);
