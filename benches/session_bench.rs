//! Criterion benchmarks for the trap-layout optimizer.
//!
//! Measures one generation advance at several population sizes and a full
//! stretch of session ticks with the default configuration.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use trap_evolve::create_rng;
use trap_evolve::ga::{EvolutionConfig, FitnessEvaluator, Population};
use trap_evolve::session::{Session, SessionConfig};
use trap_evolve::sim::{Field, Side, Target, TargetSpec};

fn spawn_targets(count: usize, seed: u64) -> Vec<Target> {
    let region = Field::default().region(Side::B);
    let spec = TargetSpec::default();
    let mut rng = create_rng(seed);
    (0..count)
        .map(|_| Target::spawn(&region, &spec, &mut rng))
        .collect()
}

fn bench_advance_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("advance_generation");
    let targets = spawn_targets(50, 7);

    for pop_size in [5usize, 50, 500] {
        let config = EvolutionConfig::default().with_population_size(pop_size);
        let mut population = Population::new(
            config,
            Field::default().region(Side::B),
            FitnessEvaluator::new(30.0),
        )
        .expect("valid config");
        let mut rng = create_rng(42);
        population.initialize(&mut rng);

        group.bench_with_input(BenchmarkId::new("pop", pop_size), &pop_size, |b, _| {
            b.iter(|| black_box(population.advance_generation(black_box(&targets), &mut rng)));
        });
    }
    group.finish();
}

fn bench_session_ticks(c: &mut Criterion) {
    let mut group = c.benchmark_group("session_ticks");
    group.sample_size(20);

    for interval in [1u64, 5, 25] {
        let config = SessionConfig::default()
            .with_generation_interval(interval)
            .with_seed(42);
        group.bench_with_input(
            BenchmarkId::new("interval", interval),
            &config,
            |b, config| {
                b.iter(|| {
                    let mut session = Session::new(config.clone()).expect("valid config");
                    black_box(session.run(600, &mut ()))
                });
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_advance_generation, bench_session_ticks);
criterion_main!(benches);
