//! Benchmarks for chunk meshing - 16³ sphere workloads.
//!
//! All benchmarks mesh the same spherical density field, with and without
//! a high-resolution neighbor face, reflecting the steady-state terrain
//! pipeline workload.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use glam::Vec3A;
use voxel_mesher::{
  face_index, generate, grid_index, ChunkVolume, FaceDir, FaceSamples, CHUNK_GRID_CB,
  CHUNK_GRID_SIZE, FACE_GRID_SIZE, FACE_GRID_SQ,
};

const CELL_COUNT: u64 = ((CHUNK_GRID_SIZE - 1) * (CHUNK_GRID_SIZE - 1) * (CHUNK_GRID_SIZE - 1)) as u64;

fn sphere_volume(center: Vec3A, radius: f32) -> ChunkVolume {
  let mut density = vec![0.0f32; CHUNK_GRID_CB];
  let material = vec![1u8; CHUNK_GRID_CB];
  for x in 0..CHUNK_GRID_SIZE {
    for y in 0..CHUNK_GRID_SIZE {
      for z in 0..CHUNK_GRID_SIZE {
        let point = Vec3A::new(x as f32, y as f32, z as f32);
        density[grid_index(x, y, z)] = radius - point.distance(center);
      }
    }
  }
  ChunkVolume::new(density, material)
}

fn sphere_face_x_positive(center: Vec3A, radius: f32) -> FaceSamples {
  let mut density = vec![0.0f32; FACE_GRID_SQ];
  let material = vec![1u8; FACE_GRID_SQ];
  for u in 0..FACE_GRID_SIZE {
    for v in 0..FACE_GRID_SIZE {
      let point = Vec3A::new(16.0, u as f32 * 0.5, v as f32 * 0.5);
      density[face_index(u, v)] = radius - point.distance(center);
    }
  }
  FaceSamples::new(density, material)
}

/// Interior-only meshing of a centered sphere.
fn bench_interior(c: &mut Criterion) {
  let mut group = c.benchmark_group("chunk_16_sphere");
  group.throughput(Throughput::Elements(CELL_COUNT));

  let volume = sphere_volume(Vec3A::splat(8.0), 5.0);
  group.bench_function("interior_only", |b| {
    b.iter(|| black_box(generate(&volume).unwrap().triangle_count()))
  });

  group.finish();
}

/// Same sphere, pushed against the +X boundary with a high-res neighbor.
fn bench_stitched(c: &mut Criterion) {
  let mut group = c.benchmark_group("chunk_16_sphere_stitched");
  group.throughput(Throughput::Elements(CELL_COUNT));

  let center = Vec3A::new(12.0, 8.0, 8.0);
  let volume =
    sphere_volume(center, 5.0).with_face(FaceDir::XPos, sphere_face_x_positive(center, 5.0));
  group.bench_function("x_positive_face", |b| {
    b.iter(|| black_box(generate(&volume).unwrap().triangle_count()))
  });

  group.finish();
}

/// Worst case: high-res neighbors on all six faces.
fn bench_fully_stitched(c: &mut Criterion) {
  let mut group = c.benchmark_group("chunk_16_sphere_all_faces");
  group.throughput(Throughput::Elements(CELL_COUNT));

  let center = Vec3A::splat(8.0);
  let radius = 7.5;
  let mut volume = sphere_volume(center, radius);
  for dir in FaceDir::ALL {
    let mut density = vec![0.0f32; FACE_GRID_SQ];
    let material = vec![1u8; FACE_GRID_SQ];
    for u in 0..FACE_GRID_SIZE {
      for v in 0..FACE_GRID_SIZE {
        let (uf, vf) = (u as f32 * 0.5, v as f32 * 0.5);
        let point = match dir {
          FaceDir::XPos => Vec3A::new(16.0, uf, vf),
          FaceDir::XNeg => Vec3A::new(0.0, uf, vf),
          FaceDir::YPos => Vec3A::new(uf, 16.0, vf),
          FaceDir::YNeg => Vec3A::new(uf, 0.0, vf),
          FaceDir::ZPos => Vec3A::new(uf, vf, 16.0),
          FaceDir::ZNeg => Vec3A::new(uf, vf, 0.0),
        };
        density[face_index(u, v)] = radius - point.distance(center);
      }
    }
    volume = volume.with_face(dir, FaceSamples::new(density, material));
  }

  group.bench_function("six_faces", |b| {
    b.iter(|| black_box(generate(&volume).unwrap().triangle_count()))
  });

  group.finish();
}

criterion_group!(benches, bench_interior, bench_stitched, bench_fully_stitched);
criterion_main!(benches);
