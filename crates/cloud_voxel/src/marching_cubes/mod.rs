//! Marching cubes isosurface extraction.
//!
//! Converts a finished [`VoxelField`] into a non-indexed triangle soup. Every
//! crossed cell emits up to 5 triangles whose vertices sit on the cell edges.
//!
//! # Processing Pipeline
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        INPUT                                    │
//! │  field: size³ f32        - density, ≥ iso_level is inside       │
//! │  EDGE_TABLE: [u16; 256]  - crossed edges per case               │
//! │  TRI_TABLE: [[i8;16];256]- edge triples per case                │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                PHASE 1: Gradient cache                          │
//! │  Central-difference gradient for every in-grid sample           │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                PHASE 2: Cell walk (x outer, z inner)            │
//! │  Cells with lower corner in -1..=size-1 on each axis            │
//! │    Load 8 corners (apron reads as air)                          │
//! │    case = bits of corners below iso_level                       │
//! │    Skip homogeneous cases (0x00, 0xFF)                          │
//! │    Interpolate position + normal on each crossed edge           │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                PHASE 3: Emission                                │
//! │  TRI_TABLE[case] triples → 3 vertices each, in table order      │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        OUTPUT                                   │
//! │  MeshBuffers: position / normal (/ color / uv), count, bounds   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Walking the one-cell apron around the grid closes the surface wherever
//! density touches the boundary, because the apron reads as air.
//!
//! # Output Space
//!
//! Sample `c` maps to `(c - size/2) / (size/2)`, so the grid spans roughly
//! `[-1, 1]` on every axis regardless of resolution.
//!
//! # Winding
//!
//! Triangles are emitted in `TRI_TABLE` order and wind counter-clockwise
//! seen from outside: for vertices `a, b, c`, `(b - a) × (c - a)` points
//! along the outward normal, away from density. Changing `CORNER_OFFSETS`,
//! `EDGE_CORNERS` or the case bit polarity flips this.

mod case_index;
mod interpolate;
mod normals;


use glam::Vec3;

use crate::config::ExtractConfig;
use crate::constants::{CORNER_OFFSETS, EDGE_CORNERS};
use crate::edge_table::{triangle_count, EDGE_TABLE, TRI_TABLE};
use crate::field::VoxelField;
use crate::types::MeshBuffers;
use normals::NormalCache;

/// Extract the `config.iso_level` isosurface of `field`.
///
/// An empty or all-air field yields a mesh with `count == 0`.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "marching_cubes::extract"))]
pub fn extract(field: &VoxelField, config: &ExtractConfig) -> MeshBuffers {
  let size = field.size();
  let mut mesh = MeshBuffers::with_capacity(initial_capacity(size), config.with_colors, config.with_uvs);

  if size == 0 {
    mesh.shrink_to_count();
    return mesh;
  }

  let iso = config.iso_level;
  let half = size as f32 / 2.0;
  let normals = NormalCache::new(field);

  let mut edge_positions = [Vec3::ZERO; 12];
  let mut edge_normals = [Vec3::ZERO; 12];

  let last = size as i32 - 1;
  for x in -1..=last {
    for y in -1..=last {
      for z in -1..=last {
        let values = case_index::load_corners(field, x, y, z);
        let case = case_index::compute(&values, iso);
        if case_index::is_homogeneous(case) {
          continue;
        }
        let edges = EDGE_TABLE[case as usize];

        for (edge, &[a, b]) in EDGE_CORNERS.iter().enumerate() {
          if edges & (1 << edge) == 0 {
            continue;
          }
          let ca = corner(x, y, z, a);
          let cb = corner(x, y, z, b);
          let mu = interpolate::edge_mu(iso, values[a], values[b]);

          edge_positions[edge] = to_mesh_space(ca, half).lerp(to_mesh_space(cb, half), mu);
          let na = normals.get(field, ca[0], ca[1], ca[2]);
          let nb = normals.get(field, cb[0], cb[1], cb[2]);
          edge_normals[edge] = normals::finalize(na.lerp(nb, mu));
        }

        for triangle in TRI_TABLE[case as usize].chunks_exact(3).take(triangle_count(case)) {
          for &edge in triangle {
            let edge = edge as usize;
            emit(&mut mesh, edge_positions[edge], edge_normals[edge]);
          }
        }
      }
    }
  }

  mesh.shrink_to_count();
  #[cfg(feature = "tracing")]
  tracing::debug!(size, vertices = mesh.count, "isosurface extracted");
  mesh
}

/// Starting vertex capacity; the buffers double from here as needed.
fn initial_capacity(size: usize) -> usize {
  ((size + 1) * (size + 1) * 6).max(64)
}

#[inline(always)]
fn corner(x: i32, y: i32, z: i32, corner: usize) -> [i32; 3] {
  let [dx, dy, dz] = CORNER_OFFSETS[corner];
  [x + dx, y + dy, z + dz]
}

#[inline(always)]
fn to_mesh_space(c: [i32; 3], half: f32) -> Vec3 {
  (Vec3::new(c[0] as f32, c[1] as f32, c[2] as f32) - half) / half
}

/// Append one vertex. Colors encode position in `[0, 1]`; uvs are the
/// planar XZ projection in `[0, 1]`. Apron vertices are clamped.
#[inline(always)]
fn emit(mesh: &mut MeshBuffers, position: Vec3, normal: Vec3) {
  let unit = (position * 0.5 + 0.5).clamp(Vec3::ZERO, Vec3::ONE);
  mesh.push_vertex(position.to_array(), normal.to_array(), unit.to_array(), [unit.x, unit.z]);
}
