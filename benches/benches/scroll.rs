// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Rect;
use vista_viewport::{LayoutHost, ViewportTracker};

/// `n` sections of 800px stacked top to bottom.
struct Stack {
    scroll: f64,
    n: u32,
}

impl LayoutHost<u32> for Stack {
    fn scroll_offset(&self) -> f64 {
        self.scroll
    }

    fn viewport_height(&self) -> f64 {
        900.0
    }

    fn bounding_rect(&self, id: &u32) -> Option<Rect> {
        (*id < self.n).then(|| {
            let top = f64::from(*id) * 800.0 - self.scroll;
            Rect::new(0.0, top, 1280.0, top + 800.0)
        })
    }
}

fn bench_recompute(c: &mut Criterion) {
    let mut group = c.benchmark_group("viewport/recompute");

    // Recompute is linear in sections; the common case is under ten.
    for n in [4_u32, 10, 64, 512] {
        let mut tracker = ViewportTracker::new();
        for id in 0..n {
            tracker.register_section(id).unwrap();
        }
        group.throughput(Throughput::Elements(u64::from(n)));

        group.bench_with_input(BenchmarkId::new("first_section", n), &n, |b, &n| {
            let host = Stack { scroll: 0.0, n };
            b.iter(|| black_box(tracker.on_scroll_or_resize(black_box(&host))));
        });

        // Worst case: the match is the last section.
        group.bench_with_input(BenchmarkId::new("last_section", n), &n, |b, &n| {
            let host = Stack {
                scroll: f64::from(n - 1) * 800.0,
                n,
            };
            b.iter(|| black_box(tracker.on_scroll_or_resize(black_box(&host))));
        });

        // No candidate at all: every section is visited and the previous
        // active section is retained.
        group.bench_with_input(BenchmarkId::new("no_candidate", n), &n, |b, &n| {
            let host = Stack {
                scroll: f64::from(n) * 800.0,
                n,
            };
            b.iter(|| black_box(tracker.on_scroll_or_resize(black_box(&host))));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_recompute);
criterion_main!(benches);
