//! Benchmarks for the tick pipeline.
//!
//! Run with: cargo bench --bench step_bench

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rand::{Rng, SeedableRng, rngs::StdRng};

use platformer_phys::math::Vector2;
use platformer_phys::{ActorIntent, Body, SimulationConfig, Stage, StageLoader, World};

const DT: f32 = 1.0 / 60.0;

fn stage_world() -> World {
    StageLoader::default()
        .load(&Stage::default_stage(), SimulationConfig::default())
        .unwrap()
}

/// Default stage plus `extra` falling bodies scattered over the top rows
fn crowded_world(extra: usize) -> World {
    let mut world = stage_world();
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..extra {
        let position = Vector2::new(rng.gen_range(0.0..590.0), rng.gen_range(0.0..120.0));
        let body = Body::new_movable("crate", position, Vector2::new(9.0, 9.0)).unwrap();
        world.add_body(body);
    }
    world
}

fn bench_default_stage(c: &mut Criterion) {
    c.bench_function("step_default_stage", |b| {
        let mut world = stage_world();
        let mut tick = 0u32;
        b.iter(|| {
            tick += 1;
            let intent = if tick % 90 == 0 {
                ActorIntent::jumping()
            } else {
                ActorIntent::moving(if (tick / 120) % 2 == 0 { 1.0 } else { -1.0 })
            };
            world.set_intent(intent);
            black_box(world.step(black_box(DT)).unwrap())
        });
    });
}

fn bench_many_movers(c: &mut Criterion) {
    let mut group = c.benchmark_group("step_movers");

    for extra in [10usize, 50, 200] {
        group.throughput(Throughput::Elements(extra as u64));
        group.bench_with_input(BenchmarkId::from_parameter(extra), &extra, |b, &extra| {
            let mut world = crowded_world(extra);
            b.iter(|| black_box(world.step(DT).unwrap()));
        });
    }

    group.finish();
}

fn bench_snapshot(c: &mut Criterion) {
    let world = stage_world();
    c.bench_function("snapshot_default_stage", |b| b.iter(|| black_box(world.snapshot())));
}

criterion_group!(benches, bench_default_stage, bench_many_movers, bench_snapshot);
criterion_main!(benches);
