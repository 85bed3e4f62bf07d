//! End-to-end generation benchmarks.
//!
//! - **stages**: base layer, inflation and smoothing in isolation (64³)
//! - **generate**: full request at several resolutions
//! - **batch**: 8 requests sequentially vs. one parallel `GenerationStage` tick

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use cloud_voxel::{
  generator::Generator, inflator, noise, pipeline, shadow, smoother, CloudConfig, CloudRequest,
  GenerationStage, Seed, VoxelField,
};

const SEED: u64 = 0x5eed;

fn bench_stages(c: &mut Criterion) {
  let config = CloudConfig::default();
  let seed = Seed::new(SEED);
  let mut group = c.benchmark_group("stages (64³)");

  group.bench_function("base_layer", |b| {
    let generator = Generator::new(seed, config.noise.frequency);
    b.iter(|| {
      let mut field = VoxelField::new(64);
      black_box(noise::write_base_layer(&mut field, &generator, &config.noise))
    })
  });

  let mut base = VoxelField::new(64);
  noise::write_base_layer(&mut base, &Generator::new(seed, config.noise.frequency), &config.noise);

  group.bench_function("inflate_2_passes", |b| {
    b.iter(|| {
      let mut field = base.clone();
      let mut generator = Generator::new(seed, config.noise.frequency);
      black_box(inflator::inflate(&mut field, &mut generator, &config.inflation, 2))
    })
  });

  let inflated = pipeline::build_field(64, seed, 2, &config);

  group.bench_function("smooth", |b| {
    b.iter(|| {
      let mut field = inflated.clone();
      smoother::smooth(&mut field, &config.smoothing);
      black_box(field)
    })
  });

  group.bench_function("shadow", |b| {
    b.iter(|| black_box(shadow::project(black_box(&inflated), &config.shadow)))
  });

  group.finish();
}

fn bench_generate(c: &mut Criterion) {
  let config = CloudConfig::default();
  let mut group = c.benchmark_group("generate");
  group.sample_size(10);

  for resolution in [32u32, 64, 128] {
    let request = CloudRequest::new(resolution).with_seed(Seed::new(SEED));
    group.bench_with_input(BenchmarkId::from_parameter(resolution), &request, |b, request| {
      b.iter(|| black_box(pipeline::generate(request, &config)))
    });
  }
  group.finish();
}

fn bench_batch(c: &mut Criterion) {
  let config = CloudConfig::default();
  let requests: Vec<CloudRequest> = (0..8)
    .map(|i| CloudRequest::new(48).with_seed(Seed::new(SEED + i)))
    .collect();

  let mut group = c.benchmark_group("batch (8 × 48³)");
  group.sample_size(10);

  group.bench_function("sequential", |b| {
    b.iter(|| {
      for request in &requests {
        black_box(pipeline::generate(request, &config).ok());
      }
    })
  });

  group.bench_function("stage_tick", |b| {
    b.iter(|| {
      let mut stage = GenerationStage::new(config);
      for request in &requests {
        stage.enqueue(request.clone());
      }
      stage.tick();
      black_box(stage.drain_completions())
    })
  });

  group.finish();
}

criterion_group!(benches, bench_stages, bench_generate, bench_batch);
criterion_main!(benches);
