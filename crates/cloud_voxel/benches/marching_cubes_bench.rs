//! Marching cubes extraction over synthetic and generated fields.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use cloud_voxel::{marching_cubes, pipeline, CloudConfig, ExtractConfig, Seed, VoxelField};

/// Soft sphere filling most of the grid.
fn sphere_field(size: usize) -> VoxelField {
  let mut field = VoxelField::new(size);
  let c = size as f32 / 2.0;
  let radius = c * 0.75;
  for z in 0..size as i32 {
    for y in 0..size as i32 {
      for x in 0..size as i32 {
        let dx = x as f32 - c;
        let dy = y as f32 - c;
        let dz = z as f32 - c;
        let d = (dx * dx + dy * dy + dz * dz).sqrt();
        field.set(x, y, z, (radius - d).clamp(0.0, 1.0));
      }
    }
  }
  field
}

fn bench_sphere(c: &mut Criterion) {
  let mut group = c.benchmark_group("marching_cubes::sphere");
  let config = ExtractConfig::default();

  for size in [16usize, 32, 64] {
    let field = sphere_field(size);
    group.bench_with_input(BenchmarkId::from_parameter(size), &field, |b, field| {
      b.iter(|| black_box(marching_cubes::extract(black_box(field), &config)))
    });
  }
  group.finish();
}

fn bench_cloud(c: &mut Criterion) {
  let config = CloudConfig::default();
  let field = pipeline::build_field(64, Seed::from_phrase("bench"), 2, &config);

  c.bench_function("marching_cubes::cloud (64³)", |b| {
    b.iter(|| black_box(marching_cubes::extract(black_box(&field), &config.extract)))
  });
}

fn bench_empty(c: &mut Criterion) {
  let field = VoxelField::new(64);
  let config = ExtractConfig::default();

  c.bench_function("marching_cubes::empty (64³)", |b| {
    b.iter(|| black_box(marching_cubes::extract(black_box(&field), &config)))
  });
}

criterion_group!(benches, bench_sphere, bench_cloud, bench_empty);
criterion_main!(benches);
