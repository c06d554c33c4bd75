use env_logger::Env;

use criterion::{criterion_group, criterion_main, Criterion};

use nanorand::{Rng, WyRand};
use raster_pathfinding::prelude::*;

fn random_grid(width: usize, height: usize) -> Grid {
    let mut rng = WyRand::new_seed(4);
    let mut grid = Grid::new(width, height).unwrap();
    for x in 0..width {
        for y in 0..height {
            let weight = rng.generate_range(0_u32..50) as f64;
            grid.register((x, y), weight, &[]).unwrap();
        }
    }
    grid
}

// Setup logging output
fn init() {
    let env = Env::default()
        .filter_or("MY_LOG_LEVEL", "warn")
        .write_style_or("MY_LOG_STYLE", "auto");

    let _ = env_logger::Builder::from_env(env).is_test(true).try_init();
}

fn bench_find_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_path");
    group.sample_size(10);

    init();

    let map_sizes = [128, 512];

    for map_size in map_sizes {
        let mut grid = random_grid(map_size, map_size);
        let goal = (map_size - 1, map_size - 1);
        let options = PathOptions {
            path_cost: 1.0,
            ..Default::default()
        };

        let id = format!("Random map, Map Size: ({}, {})", map_size, map_size);
        group.bench_function(&id, |b| {
            b.iter(|| grid.find_path((0, 0), goal, &options).unwrap())
        });
    }
    group.finish();
}

fn bench_alternative_route(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_path with corridor");
    group.sample_size(10);

    init();

    let map_size = 128;
    let mut grid = random_grid(map_size, map_size);
    let goal = (map_size - 1, map_size - 1);

    let first = grid
        .find_path((0, 0), goal, &PathOptions::default())
        .unwrap()
        .expect("random maps have no walls");
    let options = PathOptions {
        existing_paths: vec![first],
        existing_path_multiplier: 10.0,
        existing_path_radius: 4,
        ..Default::default()
    };

    let id = format!("Alternative route, Map Size: ({}, {})", map_size, map_size);
    group.bench_function(&id, |b| {
        b.iter(|| grid.find_path((0, 0), goal, &options).unwrap())
    });
    group.finish();
}

criterion_group!(benches, bench_find_path, bench_alternative_route);
criterion_main!(benches);
