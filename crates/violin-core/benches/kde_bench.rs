use criterion::{criterion_group, criterion_main, black_box, BenchmarkId, Criterion};
use violin_core::kde::gaussian_kde;

fn gen_values(n: usize) -> Vec<f64> {
    let mut v = Vec::with_capacity(n);
    for i in 0..n {
        // skewed waveform resembling a response-time tail
        let x = (i as f64 * 0.013).sin().abs() * 40.0 + (i % 17) as f64 * 1.5;
        v.push(x);
    }
    v
}

fn bench_kde(c: &mut Criterion) {
    let mut group = c.benchmark_group("gaussian_kde");
    for &n in &[400usize, 4_000usize, 40_000usize] {
        let data = gen_values(n);
        for &points in &[64usize, 128usize] {
            group.bench_with_input(BenchmarkId::from_parameter(format!("n{n}_p{points}")), &points, |b, &p| {
                b.iter(|| {
                    let _ = black_box(gaussian_kde(&data, p));
                });
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_kde);
criterion_main!(benches);
