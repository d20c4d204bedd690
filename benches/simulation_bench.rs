use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use impulse_engine::{
    collision::{gjk, CollisionDetector, GjkEpa},
    math::Vec2,
    objects::RigidBody,
    world::PhysicsWorld,
};

fn world_with_floor() -> PhysicsWorld {
    let mut world = PhysicsWorld::new();
    let floor = RigidBody::create_box(Vec2::new(400.0, 25.0), 800.0, 50.0, true)
        .expect("floor dimensions are valid");
    world.add_body(floor);
    world
}

// --- Helper for creating stack benchmarks ---
fn run_circle_pile_bench(world: &mut PhysicsWorld, num_circles: usize) {
    let radius = 10.0;
    for i in 0..num_circles {
        let column = (i % 10) as f64;
        let row = (i / 10) as f64;
        // Stack with slight gap
        let position = Vec2::new(300.0 + column * 21.0, 70.0 + row * 21.0);
        let body = RigidBody::create_circle(position, radius, false).expect("radius is valid");
        world.add_body(body);
    }

    let dt = 1.0 / 60.0;
    for _ in 0..30 {
        world.step(black_box(dt));
    }
}

fn run_box_stack_bench(world: &mut PhysicsWorld, height: usize) {
    for i in 0..height {
        let position = Vec2::new(400.0, 76.0 + i as f64 * 51.0);
        let body = RigidBody::create_box(position, 50.0, 50.0, false).expect("box size is valid");
        world.add_body(body);
    }

    let dt = 1.0 / 60.0;
    for _ in 0..30 {
        world.step(black_box(dt));
    }
}

fn bench_circle_pile(c: &mut Criterion) {
    let mut group = c.benchmark_group("circle_pile");

    for num_circles in [10, 50, 100].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(num_circles), num_circles, |b, &n| {
            b.iter(|| {
                let mut world = world_with_floor();
                run_circle_pile_bench(&mut world, black_box(n));
            });
        });
    }
    group.finish();
}

fn bench_box_stack(c: &mut Criterion) {
    let mut group = c.benchmark_group("box_stack");

    for height in [2, 5, 10].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(height), height, |b, &n| {
            b.iter(|| {
                let mut world = world_with_floor();
                run_box_stack_bench(&mut world, black_box(n));
            });
        });
    }
    group.finish();
}

// Narrow phase alone, without the solver
fn bench_narrow_phase(c: &mut Criterion) {
    let a = RigidBody::create_box(Vec2::new(100.0, 100.0), 50.0, 50.0, false).expect("valid box");
    let mut b = RigidBody::create_box(Vec2::new(130.0, 110.0), 50.0, 50.0, false).expect("valid box");
    b.rotate(0.3);
    let far = RigidBody::create_circle(Vec2::new(300.0, 100.0), 20.0, false).expect("valid circle");

    c.bench_function("gjk_separated", |bench| {
        bench.iter(|| gjk(black_box(&a), black_box(&far)))
    });
    c.bench_function("gjk_epa_overlapping", |bench| {
        bench.iter(|| GjkEpa.detect(black_box(&a), black_box(&b)))
    });
}

criterion_group!(benches, bench_circle_pile, bench_box_stack, bench_narrow_phase);
criterion_main!(benches);
