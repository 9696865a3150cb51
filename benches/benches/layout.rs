// Copyright 2026 the Handrail Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use handrail_layout::{LayoutParams, MeasuredLabels, compute_layout};
use kurbo::Rect;

fn gen_labels(n: usize, height: f64) -> MeasuredLabels {
    let mut labels = MeasuredLabels::with_capacity(n);
    for i in 0..n {
        let ch = char::from(b'A' + (i % 26) as u8);
        labels.push(ch.to_string(), height);
    }
    labels
}

fn bench_layout_fit(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout_fit");
    for &n in &[26_usize, 100, 400] {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            let labels = gen_labels(n, 12.0);
            let rect = Rect::new(0.0, 0.0, 20.0, n as f64 * 20.0);
            let params = LayoutParams::default();
            b.iter(|| black_box(compute_layout(&labels, rect, &params)));
        });
    }
    group.finish();
}

fn bench_layout_truncated(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout_truncated");
    for &n in &[26_usize, 100, 400] {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            let labels = gen_labels(n, 12.0);
            // A phone-sized strip: far too short for the full set.
            let rect = Rect::new(0.0, 0.0, 20.0, 320.0);
            let params = LayoutParams::default();
            b.iter(|| black_box(compute_layout(&labels, rect, &params)));
        });
    }
    group.finish();
}

fn bench_hit_mapping(c: &mut Criterion) {
    let labels = gen_labels(400, 12.0);
    let rect = Rect::new(0.0, 0.0, 20.0, 320.0);
    let layout = compute_layout(&labels, rect, &LayoutParams::default());

    c.bench_function("section_at_y_sweep", |b| {
        b.iter(|| {
            let mut acc = 0_usize;
            let mut y = rect.y0;
            while y < rect.y1 {
                acc += layout.section_at_y(black_box(y)).unwrap_or(0);
                y += 1.0;
            }
            acc
        });
    });
}

criterion_group!(
    benches,
    bench_layout_fit,
    bench_layout_truncated,
    bench_hit_mapping
);
criterion_main!(benches);
