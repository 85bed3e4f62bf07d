//! cloud_voxel - Procedural volumetric clouds
//!
//! Grows a cloud-shaped density field from seeded noise, then extracts a
//! triangle mesh with marching cubes and projects a ground shadow from the
//! same field.
//!
//! # Features
//!
//! - **Noise base + inflation**: a soft disc of 2D noise inflated by random
//!   sphere stamps that favour the centre and drift upward
//! - **Marching Cubes**: closed isosurfaces with central-difference normals
//! - **Shadow projection**: blurred RGBA8 alpha mask of the base layer
//! - **Concurrency**: rayon batch stage and a channel-based worker; requests
//!   share no state, so parallel output matches sequential output
//!
//! # Example
//!
//! ```ignore
//! use cloud_voxel::{generate, CloudConfig, CloudRequest};
//!
//! let request = CloudRequest::new(64).with_seed("cumulus");
//! let response = generate(&request, &CloudConfig::default())?;
//!
//! println!("Generated {} vertices, {}x{} shadow",
//!     response.mesh.count, response.resolution, response.resolution);
//! ```

pub mod config;
pub mod constants;
pub mod edge_table;
pub mod error;
pub mod field;
pub mod generator;
pub mod types;

// Re-export commonly used items
pub use config::{CloudConfig, ExtractConfig, InflationConfig, NoiseConfig, ShadowConfig, SmoothingConfig};
pub use constants::{coord_to_index, index_to_coord, ISO_LEVEL, MAX_RESOLUTION, MIN_BLEND_ALPHA};
pub use error::{CloudError, WireError};
pub use field::VoxelField;
pub use types::{CloudRequest, CloudResponse, MeshBuffers, MinMaxAABB, RequestId, Seed, ShadowTexture};

// Field synthesis
pub mod inflator;
pub mod noise;
pub mod smoother;
pub mod sphere;

// Surface + shadow extraction
pub mod marching_cubes;
pub mod shadow;

// One request end to end
pub mod pipeline;
pub use pipeline::generate;

// Task queue for parallel generation
pub mod task_queue;
pub use task_queue::{GenerationCompletion, GenerationStage};

// Channel-based worker boundary
pub mod worker;
pub use worker::CloudWorker;

// Packed response messages
pub mod wire;

// Ground texture
pub mod land;
pub use land::{GroundTexture, LandConfig};

// Engine-agnostic metrics collection
pub mod metrics;
