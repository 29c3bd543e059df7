use comfort_core::{compute, MetricKind};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_metrics(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute");
    for kind in MetricKind::ALL {
        group.bench_function(kind.key(), |b| {
            b.iter(|| compute(black_box(kind), black_box(27.5), black_box(64.0)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_metrics);
criterion_main!(benches);
