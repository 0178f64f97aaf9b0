//! Benchmarks for the particle field hot path: tick and the O(n²) link
//! render pass at realistic and stress pool sizes.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use verdant_core::geometry::Bounds;
use verdant_fx::{ParticleField, ParticleFieldParams, RecordingSurface};

const BOUNDS: Bounds = Bounds {
    width: 1920.0,
    height: 1080.0,
};

fn field_of(count: usize) -> ParticleField {
    let params = ParticleFieldParams {
        count,
        ..ParticleFieldParams::default()
    };
    ParticleField::with_seed(params, BOUNDS, 42)
}

fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("particle_tick");
    for count in [50, 200, 1000] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            let mut field = field_of(count);
            b.iter(|| {
                field.tick();
                black_box(field.particles().len())
            });
        });
    }
    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("particle_render");
    for count in [50, 200] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            let field = field_of(count);
            let mut surface = RecordingSurface::new(BOUNDS);
            b.iter(|| {
                surface.reset();
                field.render(&mut surface);
                black_box(surface.ops().len())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_tick, bench_render);
criterion_main!(benches);
