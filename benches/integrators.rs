use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

use orrery::physics::body::{offset_momentum, solar_system};
use orrery::physics::integrators::{Integrator, SymplecticEuler};

fn benchmark_advance(c: &mut Criterion) {
    let mut group = c.benchmark_group("integrators");

    for steps in [1usize, 100, 1_000] {
        group.throughput(Throughput::Elements(steps as u64));
        group.bench_with_input(
            BenchmarkId::new("symplectic_euler", steps),
            &steps,
            |b, &steps| {
                b.iter(|| {
                    let mut bodies = solar_system();
                    offset_momentum(&mut bodies);
                    let mut integrator = SymplecticEuler::new(bodies.len());
                    for _ in 0..steps {
                        integrator.advance(black_box(&mut bodies), 0.01);
                    }
                    bodies
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, benchmark_advance);
criterion_main!(benches);
