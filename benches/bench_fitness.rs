use criterion::{black_box, criterion_group, criterion_main, Criterion};
use nqueens_ga::{
    candidate::Candidate,
    evolution::{Challenge, QueensChallenge},
    population,
    rng::RandomNumberGenerator,
};

fn bench_score(c: &mut Criterion) {
    let challenge = QueensChallenge;
    let mut rng = RandomNumberGenerator::from_seed(42);

    let mut group = c.benchmark_group("queens_score");
    for size in [8, 16, 32, 64].iter() {
        let candidate = Candidate::random(*size, &mut rng);
        group.bench_function(&format!("queens_score_{}", size), |b| {
            b.iter(|| challenge.score(black_box(&candidate)))
        });
    }
    group.finish();
}

fn bench_mean_fitness(c: &mut Criterion) {
    let challenge = QueensChallenge;
    let mut rng = RandomNumberGenerator::from_seed(42);

    let mut group = c.benchmark_group("mean_fitness");
    for size in [100, 1000, 10000].iter() {
        let population = population::initialize(8, *size, &mut rng);
        group.bench_function(&format!("sequential_{}", size), |b| {
            b.iter(|| population::mean_fitness(black_box(&population), &challenge, usize::MAX))
        });
        group.bench_function(&format!("parallel_{}", size), |b| {
            b.iter(|| population::mean_fitness(black_box(&population), &challenge, 1))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_score, bench_mean_fitness);
criterion_main!(benches);
