use criterion::{black_box, criterion_group, criterion_main, Criterion};

use reflex_core::{bucket_index, BucketThresholds, Outcome, SampleWindow, Trial};

/// Benchmarks the per-frame hot path: a window push followed by a full
/// classification sweep of the snapshot, the work a renderer triggers once
/// per resolved trial.
pub fn bench_push_and_classify(c: &mut Criterion) {
    let thresholds = BucketThresholds::new(160.0, 350.0);
    let edges = [100.0, 150.0, 200.0, 250.0, 300.0, 350.0];

    c.bench_function("window_push_classify", |b| {
        let mut window = SampleWindow::new(20);
        let mut latency = 80.0;
        b.iter(|| {
            latency = if latency > 400.0 { 80.0 } else { latency + 7.0 };
            window.push(Trial::hit(black_box(latency)));
            for trial in window.iter() {
                black_box(thresholds.classify(trial.latency_ms, trial.outcome));
                black_box(bucket_index(trial.latency_ms, &edges));
            }
        });
    });

    c.bench_function("classify_miss", |b| {
        b.iter(|| black_box(thresholds.classify(black_box(350.0), Outcome::Miss)));
    });
}

criterion_group!(benches, bench_push_and_classify);
criterion_main!(benches);
