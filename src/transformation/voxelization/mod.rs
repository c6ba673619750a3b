//! Voxelization of closed polygonal boundaries and implicit functions.
//!
//! Both produce a [`VoxelGrid`] where every cell is labeled `Boundary`, `Inside` or
//! `Outside`. Polygonal boundaries are voxelized in two passes: first, every cell touched
//! by a polygon is labeled `Boundary` (in parallel with the `parallel` feature); then the
//! exterior is flood-filled from the outer shell of the grid, and the cells it cannot reach
//! are labeled `Inside`.

pub use self::error::VoxelizationError;
pub use self::implicit::voxelize_implicit;
pub use self::params::{FillMode, VoxelizationParams};
pub use self::surface::{voxelize_mesh, voxelize_mesh_with_params};
pub use self::voxel_grid::{VoxelGrid, VoxelLabel};

mod error;
mod flood_fill;
mod implicit;
mod parallel;
mod params;
mod surface;
mod voxel_grid;
