//! Benchmarks for the force-generation tick.

use criterion::{criterion_group, criterion_main, Criterion};
use fg_core::forces::{CrowdSeparation, Gravity};
use fg_core::{Particle, ParticleWorld, Vec3};

fn crowd_world(count: usize) -> ParticleWorld {
    let mut world = ParticleWorld::new();
    let crowd = world.add_generator(CrowdSeparation::new(25.0, 200.0));
    for i in 0..count {
        let angle = i as f64 * 0.61;
        let radius = (i as f64).sqrt() * 4.0;
        let position = Vec3::new(radius * angle.cos(), 0.0, radius * angle.sin());
        let handle = world.add_particle(Particle::new(position, 1.0).with_damping(0.5));
        world.register(handle, crowd);
    }
    world
}

fn bench_crowd_separation(c: &mut Criterion) {
    c.bench_function("crowd_separation_200_particles_60_ticks", |b| {
        b.iter(|| {
            let mut world = crowd_world(200);
            for _ in 0..60 {
                world.step(1.0 / 60.0);
            }
            world.time()
        });
    });
}

fn bench_gravity_only(c: &mut Criterion) {
    c.bench_function("gravity_1000_particles_60_ticks", |b| {
        b.iter(|| {
            let mut world = ParticleWorld::new();
            let gravity = world.add_generator(Gravity::default());
            for i in 0..1000 {
                let handle = world.add_particle(Particle::new(Vec3::new(i as f64, 100.0, 0.0), 1.0));
                world.register(handle, gravity);
            }
            for _ in 0..60 {
                world.step(1.0 / 60.0);
            }
            world.time()
        });
    });
}

criterion_group!(benches, bench_crowd_separation, bench_gravity_only);
criterion_main!(benches);
