use criterion::{Criterion, black_box, criterion_group, criterion_main};

use plcore::prelude::*;

fn bench_step_range(c: &mut Criterion) {
    c.bench_function("step_range_10k", |b| {
        b.iter(|| {
            let sum: f64 = step_range(black_box(0.0), black_box(10.0), black_box(0.001)).sum();
            black_box(sum)
        })
    });
}

fn bench_sample(c: &mut Criterion) {
    c.bench_function("sample_quadratic_smooth", |b| {
        let mut sampler = Sampler::new("y=x^2-4");
        b.iter(|| {
            let points = sampler
                .sample_over(black_box(-5.0), black_box(5.0), SampleOptions::smooth())
                .unwrap();
            black_box(points)
        })
    });
}

criterion_group!(benches, bench_step_range, bench_sample);
criterion_main!(benches);
