//! Stochastic volumetric growth of the base layer.
//!
//! Each pass snapshots the field, then walks every cell (X outer, Y middle,
//! Z inner). A cell with snapshot density `> 0` rolls `r0`; if it beats the
//! inflation chance a [`SphereStamp`] is added around it:
//!
//! ```text
//!   d            = |cell - centre|           (1 for the exact centre)
//!   factor       = (size/2 / d)²              central cells grow more
//!   radius       = ⌊base_size · factor · r1²⌋
//!   displacement = ⌊r2 · radius · factor⌋     stamps drift upward
//!
//!   field[target] = snapshot[target] + stamp[s]
//! ```
//!
//! Only the part of a stamp overlapping the grid is visited. Stamps up to
//! the grid size are cached per radius; larger ones are evaluated directly.
//!
//! Every draw comes from the request's [`Generator`] in a fixed order, so the
//! same seed always grows the same cloud. Rejected cells consume only `r0`;
//! empty cells consume nothing.

use crate::config::InflationConfig;
use crate::field::VoxelField;
use crate::generator::Generator;
use crate::sphere::SphereStamp;

/// Counters for one inflation run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InflationStats {
  /// Passes executed.
  pub passes: u32,
  /// Cells with positive snapshot density, summed over passes.
  pub candidates: usize,
  /// Cells that passed the chance roll, summed over passes.
  pub stamped: usize,
}

/// Run `passes` inflation passes over `field`.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "inflator::inflate"))]
pub fn inflate(
  field: &mut VoxelField,
  generator: &mut Generator,
  config: &InflationConfig,
  passes: u32,
) -> InflationStats {
  let mut stats = InflationStats::default();
  // Stamps depend only on radius.
  let mut stamps: Vec<Option<SphereStamp>> = vec![None; field.size() + 1];

  for _ in 0..passes {
    let (candidates, stamped) = inflate_pass(field, generator, config, &mut stamps);
    stats.passes += 1;
    stats.candidates += candidates;
    stats.stamped += stamped;
    #[cfg(feature = "tracing")]
    tracing::trace!(pass = stats.passes, candidates, stamped, "inflation pass");
  }

  #[cfg(feature = "tracing")]
  tracing::debug!(
    passes = stats.passes,
    candidates = stats.candidates,
    stamped = stats.stamped,
    "inflation done"
  );

  stats
}

fn inflate_pass(
  field: &mut VoxelField,
  generator: &mut Generator,
  config: &InflationConfig,
  stamps: &mut [Option<SphereStamp>],
) -> (usize, usize) {
  let size = field.size();
  let half = size as f32 / 2.0;
  let snapshot = field.clone();

  let mut candidates = 0;
  let mut stamped = 0;

  for x in 0..size as i32 {
    for y in 0..size as i32 {
      for z in 0..size as i32 {
        if snapshot.get(x, y, z) <= 0.0 {
          continue;
        }
        candidates += 1;

        if generator.next_f32() <= config.inflation_chance {
          continue;
        }
        stamped += 1;

        let r1 = generator.next_f32();
        let r2 = generator.next_f32();
        let (radius, displacement) = placement(config, [x, y, z], half, r1, r2);
        if radius == 0 {
          continue;
        }

        let center = (x as i64, (y as i64).saturating_add(displacement), z as i64);
        match stamps.get_mut(radius) {
          Some(slot) => {
            let stamp = slot.get_or_insert_with(|| SphereStamp::new(radius));
            let r = radius as i64;
            apply_stamp(field, &snapshot, radius, center, |dx, dy, dz| {
              stamp.get((dx + r) as i32, (dy + r) as i32, (dz + r) as i32)
            });
          }
          None => apply_stamp(field, &snapshot, radius, center, |dx, dy, dz| {
            SphereStamp::falloff(radius, dx, dy, dz)
          }),
        }
      }
    }
  }

  (candidates, stamped)
}

/// Stamp radius and upward displacement for the cell at `cell`.
fn placement(config: &InflationConfig, cell: [i32; 3], half: f32, r1: f32, r2: f32) -> (usize, i64) {
  let [dx, dy, dz] = cell.map(|c| c as f32 - half);
  let mut distance = (dx * dx + dy * dy + dz * dz).sqrt();
  if distance == 0.0 {
    distance = 1.0;
  }
  let factor = (half / distance).powi(2);

  let radius = (config.base_inflation_size * factor * r1 * r1).floor() as usize;
  let displacement = (r2 * radius as f32 * factor).floor() as i64;
  (radius, displacement)
}

/// Add a stamp of `radius`, centred on `center`, to the snapshot values and
/// write the sums into `field`. `value` maps an offset from the centre to the
/// stamp value; offsets run over `-radius..radius` clipped to the grid.
fn apply_stamp(
  field: &mut VoxelField,
  snapshot: &VoxelField,
  radius: usize,
  center: (i64, i64, i64),
  value: impl Fn(i64, i64, i64) -> f32,
) {
  let size = field.size() as i64;
  let r = i64::try_from(radius).unwrap_or(i64::MAX);
  let span = |c: i64| c.saturating_sub(r).max(0)..c.saturating_add(r).min(size);
  let (cx, cy, cz) = center;

  for tx in span(cx) {
    for ty in span(cy) {
      for tz in span(cz) {
        if let Some(idx) = snapshot.index(tx as i32, ty as i32, tz as i32) {
          field.as_mut_slice()[idx] = snapshot.as_slice()[idx] + value(tx - cx, ty - cy, tz - cz);
        }
      }
    }
  }
}

#[cfg(test)]
#[path = "inflator_test.rs"]
mod inflator_test;
