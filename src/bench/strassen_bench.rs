use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use strassen::generate::random_pair;
use strassen::{StrassenConfig, Strategy, direct_with, multiply_with};

const INPUT_SIZES: &[(&str, usize)] = &[("n128", 128), ("n256", 256), ("n512", 512)];

fn bench_strategy(c: &mut Criterion, strategy: Strategy) {
    let mut group = c.benchmark_group(strategy.label());
    group.sample_size(10);
    let config = StrassenConfig::default();

    for &(label, n) in INPUT_SIZES {
        group.throughput(Throughput::Elements((n as u64).pow(3)));
        let (a, b) = random_pair(n, Some(0xC0FF_EE42 ^ n as u64));

        group.bench_function(BenchmarkId::new("direct", label), |bench| {
            bench.iter(|| direct_with(strategy, black_box(&a), black_box(&b)))
        });
        group.bench_function(BenchmarkId::new("strassen", label), |bench| {
            bench.iter(|| multiply_with(strategy, &config, black_box(&a), black_box(&b)))
        });
    }
    group.finish();
}

fn bench_parallel(c: &mut Criterion) {
    let mut group = c.benchmark_group("simd_parallel");
    group.sample_size(10);
    let n = 512;
    let (a, b) = random_pair(n, Some(7));

    for depth in [0usize, 1, 2] {
        let config = StrassenConfig::default().parallel(depth);
        group.bench_with_input(BenchmarkId::new("depth", depth), &config, |bench, config| {
            bench.iter(|| multiply_with(Strategy::Simd, config, black_box(&a), black_box(&b)))
        });
    }
    group.finish();
}

fn bench_all(c: &mut Criterion) {
    for strategy in Strategy::ALL {
        bench_strategy(c, strategy);
    }
    bench_parallel(c);
}

criterion_group!(benches, bench_all);
criterion_main!(benches);
