//! The f32 geometry tests, run against the 64-bit build.

extern crate nalgebra as na;
extern crate voxelize3d_f64 as voxelize3d;

#[path = "../../../voxelize3d/tests/geometry/fill_modes.rs"]
mod fill_modes;
#[path = "../../../voxelize3d/tests/geometry/meshes.rs"]
mod meshes;
#[path = "../../../voxelize3d/tests/geometry/properties.rs"]
mod properties;
#[path = "../../../voxelize3d/tests/geometry/scenarios.rs"]
mod scenarios;
