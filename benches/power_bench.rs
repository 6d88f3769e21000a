use binomial_power::{evaluate_power, principal_pow, Complex64, PowerConfig};
use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use std::hint::black_box;

// Inputs span the three series regimes: small ratio, mid ratio, near-boundary band.
fn sample_inputs() -> Vec<(Complex64, Complex64, Complex64)> {
    (1..=1_000)
        .map(|i| {
            let t = i as f64 / 1_000.0;
            let x = Complex64::new(1.0 + 4.0 * t, -2.0 + t);
            let y = Complex64::new(0.85 * x.re * t, 0.85 * x.im * t);
            let alpha = Complex64::new(-1.0 + 2.5 * t, 0.3 * (1.0 - t));
            (x, y, alpha)
        })
        .collect()
}

fn bench_series_vs_direct(c: &mut Criterion) {
    let inputs = sample_inputs();
    let config = PowerConfig::default();

    let mut group = c.benchmark_group("binomial_power");
    group.throughput(Throughput::Elements(inputs.len() as u64));
    group.bench_function("preconditioned_series", |b| {
        b.iter(|| {
            let mut acc = Complex64::new(0.0, 0.0);
            for &(x, y, alpha) in &inputs {
                acc += evaluate_power(black_box(x), black_box(y), black_box(alpha), &config)
                    .map(|eval| eval.value)
                    .unwrap_or_default();
            }
            black_box(acc)
        })
    });
    group.bench_function("direct_log_exp", |b| {
        b.iter(|| {
            let mut acc = Complex64::new(0.0, 0.0);
            for &(x, y, alpha) in &inputs {
                acc += principal_pow(black_box(x) + black_box(y), black_box(alpha));
            }
            black_box(acc)
        })
    });
    group.finish();
}

fn bench_near_boundary(c: &mut Criterion) {
    let config = PowerConfig::default();
    let x = Complex64::new(1.0, 0.0);
    let y = Complex64::new(0.88, 0.0);
    let alpha = Complex64::new(1.0 / 3.0, 0.0);

    c.bench_function("near_boundary_band", |b| {
        b.iter(|| evaluate_power(black_box(x), black_box(y), black_box(alpha), &config))
    });
}

criterion_group!(benches, bench_series_vs_direct, bench_near_boundary);
criterion_main!(benches);
