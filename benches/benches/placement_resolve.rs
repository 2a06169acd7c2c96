// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Rect, Size, Vec2};
use understory_placement::{
    Placement, PlacementRequest, PositionOptions, Positioner, Viewport, compute_arrow_style,
    resolve,
};

/// SplitMix64 stream of unit floats in `[0, 1)`.
struct SplitMix(u64);

impl Iterator for SplitMix {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        self.0 = self.0.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^= z >> 31;
        Some((z >> 11) as f64 / (1u64 << 53) as f64)
    }
}

/// Anchors scattered over (and slightly past) a 1280×800 viewport.
fn gen_anchors(count: usize, seed: u64) -> Vec<Rect> {
    let mut unit = SplitMix(seed);
    let mut next = move || unit.next().unwrap_or(0.5);
    (0..count)
        .map(|_| {
            let x0 = next() * 1400.0 - 60.0;
            let y0 = next() * 900.0 - 50.0;
            let w = 8.0 + next() * 120.0;
            let h = 8.0 + next() * 40.0;
            Rect::new(x0, y0, x0 + w, y0 + h)
        })
        .collect()
}

fn bench_resolve(c: &mut Criterion) {
    let viewport = Viewport::new(Size::new(1280.0, 800.0), Vec2::new(0.0, 2400.0));
    let floating = Size::new(220.0, 64.0);
    let anchors = gen_anchors(4096, 0xCAFE_F00D_DEAD_BEEF);

    let mut group = c.benchmark_group("resolve");
    group.throughput(Throughput::Elements(anchors.len() as u64));
    for (name, request) in [
        ("top", PlacementRequest::Exact(Placement::TOP)),
        ("bottom_end", PlacementRequest::Exact(Placement::BOTTOM_END)),
        ("auto", PlacementRequest::Auto),
    ] {
        let opts = PositionOptions::default().with_placement(request);
        group.bench_function(name, |b| {
            b.iter(|| {
                let mut acc = 0.0;
                for &anchor in &anchors {
                    let r = resolve(anchor, floating, &viewport, &opts);
                    acc += r.left() + r.top();
                }
                black_box(acc)
            });
        });
    }
    let bare = PositionOptions::default().with_flip(false).with_shift(false);
    group.bench_function("primary_only", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for &anchor in &anchors {
                acc += resolve(anchor, floating, &viewport, &bare).top();
            }
            black_box(acc)
        });
    });
    group.finish();
}

// Scroll sweep: re-resolve one anchor while the page scrolls, as a renderer would.
fn bench_positioner_scroll(c: &mut Criterion) {
    let anchor = Rect::new(600.0, 380.0, 680.0, 410.0);
    let floating = Size::new(220.0, 64.0);
    let mut group = c.benchmark_group("positioner");
    group.throughput(Throughput::Elements(1000));
    group.bench_function("scroll_sweep_1000", |b| {
        b.iter(|| {
            let mut p = Positioner::new(PositionOptions::default());
            let mut changes = 0usize;
            for i in 0..1000 {
                let vp = Viewport::new(Size::new(1280.0, 800.0), Vec2::new(0.0, i as f64));
                if let Some(r) = p.update(anchor, floating, &vp) {
                    let arrow = compute_arrow_style(r.placement, 12.0);
                    black_box(arrow);
                    changes += 1;
                }
            }
            black_box(changes)
        });
    });
    group.finish();
}

criterion_group!(benches, bench_resolve, bench_positioner_scroll);
criterion_main!(benches);
