//! Benchmarks for the per-frame pool hot path.
//!
//! Run with: `cargo bench -p pbench-sim`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pbench_core::{SimConfig, Vec3};
use pbench_sim::{BenchRng, ParticlePool, Simulation};

fn filled_pool(count: usize, config: &SimConfig) -> ParticlePool {
    let mut rng = BenchRng::new(config.seed);
    let mut pool = ParticlePool::new(count);
    // Sizes in the group are multiples of the burst size
    for _ in 0..count / config.particles_per_spawn() {
        pool.spawn(config.particles_per_spawn(), &mut rng, config)
            .unwrap();
    }
    pool
}

fn bench_pool(c: &mut Criterion) {
    let config = SimConfig::default();
    let mut group = c.benchmark_group("pool");

    for count in [1_000usize, 10_000, 50_000] {
        group.bench_with_input(BenchmarkId::new("step", count), &count, |b, &count| {
            let mut pool = filled_pool(count, &config);
            let wind = Vec3::new(0.3, 0.0, -0.2);
            // Tiny dt keeps the particles alive across iterations
            b.iter(|| pool.step(black_box(1e-6), wind, &config))
        });

        group.bench_with_input(
            BenchmarkId::new("resolve_collisions", count),
            &count,
            |b, &count| {
                let mut pool = filled_pool(count, &config);
                b.iter(|| pool.resolve_collisions(black_box(&config)))
            },
        );
    }

    group.finish();
}

fn bench_simulation(c: &mut Criterion) {
    c.bench_function("simulation_5s_at_100hz", |b| {
        b.iter(|| {
            let mut sim = Simulation::new(SimConfig::default()).unwrap();
            for _ in 0..500 {
                sim.advance(black_box(0.01)).unwrap();
            }
            black_box(sim.pool().alive_count())
        })
    });
}

criterion_group!(benches, bench_pool, bench_simulation);
criterion_main!(benches);
