//! Seeded 2D noise layers.
//!
//! - [`base`]: the disc-shaped base layer a cloud is inflated from
//! - [`crate::land`] reuses the same sampler for ground textures

mod base;
#[cfg(test)]
mod base_test;
pub use base::write_base_layer;
