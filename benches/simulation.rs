//! Performance benchmarks for TURMITE

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use turmite::{Config, Simulation};

fn benchmark_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulation_step");

    for ruleset in ["RL", "RLR", "LLRR", "LRRRRRLLR"].iter() {
        let mut config = Config::default();
        config.turmite.ruleset = ruleset.to_string();
        config.grid.canvas_size = 129;

        let mut sim = Simulation::new(&config).unwrap();

        // Warm up
        sim.run(1000);

        group.bench_with_input(BenchmarkId::new("ruleset", ruleset), ruleset, |b, _| {
            b.iter(|| {
                sim.step();
            });
        });
    }

    group.finish();
}

fn benchmark_run_with_growth(c: &mut Criterion) {
    c.bench_function("run_10k_from_small_canvas", |b| {
        let mut config = Config::default();
        config.grid.canvas_size = 5;
        config.grid.padding = 10;

        b.iter(|| {
            let mut sim = Simulation::new(&config).unwrap();
            sim.run(black_box(10_000));
            sim.growth_events()
        });
    });
}

criterion_group!(benches, benchmark_step, benchmark_run_with_growth);
criterion_main!(benches);
