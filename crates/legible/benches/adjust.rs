use criterion::{criterion_group, criterion_main, Criterion};
use legible::{adjust, Color, Options, Strategy};

pub fn run_benchmarks(c: &mut Criterion) {
    let background: Color = "rgb(150, 150, 150)"
        .parse()
        .expect("benchmark colors are well-formed");
    let foreground: Color = "#336699"
        .parse()
        .expect("benchmark colors are well-formed");

    let mut group = c.benchmark_group("adjust");

    let options = Options::default().with_strategy(Strategy::Bisection);
    group.bench_function("bisection", |b| {
        b.iter(|| adjust(&background, &foreground, &options))
    });

    let options = Options::default().with_strategy(Strategy::FixedStep);
    group.bench_function("fixed-step", |b| {
        b.iter(|| adjust(&background, &foreground, &options))
    });

    group.finish();
}

criterion_group!(benches, run_benchmarks);
criterion_main!(benches);
