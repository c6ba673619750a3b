//! Transformation of shapes into other representations.

pub(crate) mod ear_clipping;
/// Voxelization of a 3D polygonal boundary or implicit function.
pub mod voxelization;
