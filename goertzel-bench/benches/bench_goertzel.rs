use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use goertzel_bench::noise;
use goertzel_dbm::goertzel::{calc_koef, kernel, State};
use goertzel_dbm::{process_samples, GoertzelFilter, GoertzelStream};
use std::hint::black_box;

fn naive_dft_bin(samples: &[f64], freq: f64, fsamp: f64) -> f64 {
    let omega = 2.0 * std::f64::consts::PI * freq / fsamp;
    let (mut re, mut im) = (0.0, 0.0);
    for (i, s) in samples.iter().enumerate() {
        re += s * (omega * i as f64).cos();
        im -= s * (omega * i as f64).sin();
    }
    re * re + im * im
}

fn bench_kernel(c: &mut Criterion) {
    let mut g = c.benchmark_group("kernel");
    let koef = calc_koef(1000.0, 8000.0);
    for &size in &[205usize, 1024, 8000] {
        let samples = noise(size);
        g.bench_with_input(BenchmarkId::new("goertzel", size), &samples, |b, s| {
            b.iter(|| kernel(black_box(s), koef, State::zero()));
        });
        g.bench_with_input(BenchmarkId::new("dft_bin", size), &samples, |b, s| {
            b.iter(|| naive_dft_bin(black_box(s), 1000.0, 8000.0));
        });
    }
    g.finish();
}

fn bench_modes(c: &mut Criterion) {
    let mut g = c.benchmark_group("modes");
    for &size in &[205usize, 8000] {
        let samples = noise(size);
        g.bench_with_input(BenchmarkId::new("one_shot", size), &samples, |b, s| {
            b.iter(|| process_samples(black_box(s), 1000.0, 8000.0));
        });
        g.bench_with_input(BenchmarkId::new("batch", size), &samples, |b, s| {
            let mut flt = GoertzelFilter::new(1000.0, 8000.0).unwrap();
            b.iter(|| {
                flt.reset();
                flt.process(black_box(s))
            });
        });
        g.bench_with_input(BenchmarkId::new("stream", size), &samples, |b, s| {
            let mut stream = GoertzelStream::new(1000.0, 8000.0, size).unwrap();
            b.iter(|| {
                let mut last = None;
                for &x in black_box(s) {
                    if let Some(r) = stream.process_sample(x) {
                        last = Some(r);
                    }
                }
                last
            });
        });
    }
    g.finish();
}

criterion_group!(benches, bench_kernel, bench_modes);
criterion_main!(benches);
