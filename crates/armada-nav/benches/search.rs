//! Performance measurement for world-scale route searches at varying
//! obstacle densities.

use armada_core::{GridSize, Point};
use armada_nav::{Navigator, SeaChart};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::Rng;
use std::hint::black_box;

/// Scatter roughly `density_percent` percent of the grid with blocked
/// tiles, keeping both crossing endpoints open.
fn scattered_chart(size: GridSize, density_percent: usize) -> SeaChart {
    let mut rng = rand::rng();
    let mut chart = SeaChart::open(size);
    let n = size.len() * density_percent / 100;
    for _ in 0..n {
        let p = Point::new(
            rng.random_range(0..size.width),
            rng.random_range(0..size.height),
        );
        chart.set_passable(p, false);
    }
    chart.set_passable(Point::new(0, 0), true);
    chart.set_passable(Point::new(size.width - 1, size.height - 1), true);
    chart
}

/// Corner-to-corner crossing of the canonical world as obstacle density
/// grows from open water to a quarter blocked.
fn bench_world_crossing(c: &mut Criterion) {
    let mut group = c.benchmark_group("world_crossing");
    let nav = Navigator::world();
    let start = Point::new(0, 0);
    let end = Point::new(nav.size().width - 1, nav.size().height - 1);

    for density in &[0usize, 10, 25] {
        let chart = scattered_chart(nav.size(), *density);
        group.bench_with_input(BenchmarkId::from_parameter(density), density, |b, _| {
            b.iter(|| black_box(nav.find_path(black_box(start), black_box(end), &chart)));
        });
    }

    group.finish();
}

/// A few-tile hop on the full world: dominated by the per-call full-grid
/// initialization, which is the engine's deliberate trade-off.
fn bench_short_hop(c: &mut Criterion) {
    let nav = Navigator::world();
    let chart = SeaChart::open(nav.size());

    c.bench_function("short_hop", |b| {
        b.iter(|| {
            black_box(nav.find_path(
                black_box(Point::new(150, 150)),
                black_box(Point::new(153, 154)),
                &chart,
            ))
        });
    });
}

criterion_group!(benches, bench_world_crossing, bench_short_hop);
criterion_main!(benches);
