//! Benchmark for A* queries on synthesized worlds.
//!
//! Run with: cargo bench --package deadgrid_navigation --bench path_benchmark

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use deadgrid_navigation::{find_path, SharedGrid};
use deadgrid_procedural::{synthesize, GridPos, TileGrid};

fn benchmark_open_field(c: &mut Criterion) {
    let mut group = c.benchmark_group("open_field");

    for size in [32usize, 128, 512] {
        let Ok(grid) = TileGrid::new(size, size) else {
            continue;
        };
        let far = i32::try_from(size - 1).unwrap_or(i32::MAX);
        group.bench_with_input(BenchmarkId::from_parameter(size), &grid, |b, grid| {
            b.iter(|| black_box(find_path(GridPos::new(0, 0), GridPos::new(far, far), grid)));
        });
    }

    group.finish();
}

fn benchmark_synthesized_world(c: &mut Criterion) {
    let Ok(mut world) = synthesize(256, 256, 12_345) else {
        return;
    };
    let pairs: Vec<(GridPos, GridPos)> = (0..32)
        .map(|_| (world.random_spawn_site(), world.random_spawn_site()))
        .collect();
    let grid = world.into_grid();

    c.bench_function("world_256_spawn_to_spawn", |b| {
        b.iter(|| {
            for &(from, to) in &pairs {
                black_box(find_path(from, to, &grid));
            }
        });
    });

    let shared = SharedGrid::new(grid);
    c.bench_function("shared_grid_query", |b| {
        b.iter(|| {
            let (from, to) = pairs[0];
            black_box(shared.find_path(from, to))
        });
    });
}

criterion_group!(benches, benchmark_open_field, benchmark_synthesized_world);
criterion_main!(benches);
