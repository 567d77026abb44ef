//! Benchmarks for island segmentation and layout operations.

use criterion::{criterion_group, criterion_main, Criterion};
use islet::prelude::*;
use nalgebra::{Point2, Vector2};

/// An n x n grid of disconnected unit quads with half-unit gaps.
fn create_island_grid(n: usize) -> UvMesh {
    let mut uvs = Vec::with_capacity(n * n * 4);
    let mut triangles = Vec::with_capacity(n * n * 2);

    for j in 0..n {
        for i in 0..n {
            let base = uvs.len();
            let x = i as f64 * 1.5;
            let y = j as f64 * 1.5;
            uvs.push(Point2::new(x, y));
            uvs.push(Point2::new(x + 1.0, y));
            uvs.push(Point2::new(x + 1.0, y + 1.0));
            uvs.push(Point2::new(x, y + 1.0));
            triangles.push([base, base + 1, base + 2]);
            triangles.push([base, base + 2, base + 3]);
        }
    }

    UvMesh::from_triangles(uvs, &triangles).unwrap()
}

fn bench_segmentation(c: &mut Criterion) {
    let mesh = create_island_grid(20);

    c.bench_function("segment_400_islands", |b| {
        b.iter(|| IslandSet::segment(&mesh, 0, None, GroupingMode::IndividualBoundingBoxes));
    });

    c.bench_function("segment_400_islands_as_one_box", |b| {
        b.iter(|| IslandSet::segment(&mesh, 0, None, GroupingMode::EnclosingBoundingBox));
    });
}

fn bench_transform(c: &mut Criterion) {
    c.bench_function("transform_400_islands", |b| {
        let options = TransformOptions::default()
            .with_scale(Vector2::new(0.9, 0.9))
            .with_rotation(15.0)
            .with_pivot(PivotMode::IndividualBoundingBoxCenter);

        b.iter_batched(
            || create_island_grid(20),
            |mut mesh| {
                transform_uvs(&mut mesh, 0, None, &options, &Cancel::none()).unwrap();
                mesh
            },
            criterion::BatchSize::LargeInput,
        );
    });
}

fn bench_distribute(c: &mut Criterion) {
    c.bench_function("distribute_left_edges_400", |b| {
        let options = DistributeOptions::default().with_mode(DistributeMode::LeftEdges);

        b.iter_batched(
            || create_island_grid(20),
            |mut mesh| {
                distribute_uvs(&mut mesh, 0, None, &options, &Cancel::none()).unwrap();
                mesh
            },
            criterion::BatchSize::LargeInput,
        );
    });

    c.bench_function("remove_overlap_16", |b| {
        let options = DistributeOptions::default()
            .with_mode(DistributeMode::MinimallyRemoveOverlap)
            .with_manual_spacing(0.05);

        b.iter_batched(
            // Inflate each quad about its own center so neighbors overlap.
            || {
                let mut mesh = create_island_grid(4);
                let inflate = TransformOptions::default()
                    .with_scale(Vector2::new(2.0, 2.0))
                    .with_pivot(PivotMode::IndividualBoundingBoxCenter);
                transform_uvs(&mut mesh, 0, None, &inflate, &Cancel::none()).unwrap();
                mesh
            },
            |mut mesh| {
                distribute_uvs(&mut mesh, 0, None, &options, &Cancel::none()).unwrap();
                mesh
            },
            criterion::BatchSize::LargeInput,
        );
    });
}

criterion_group!(
    benches,
    bench_segmentation,
    bench_transform,
    bench_distribute
);
criterion_main!(benches);
