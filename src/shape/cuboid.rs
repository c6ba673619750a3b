//! Support mapping based Cuboid shape.

use crate::math::{Point, Real, Vector};
use crate::shape::SupportMap;

/// A cuboid shape, centered at the origin of its local frame.
///
/// A voxel is a cube-shaped cuboid: the separating-axis tests between a voxel and a boundary
/// triangle are expressed in the local frame of the cuboid.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Cuboid {
    /// The half-extents of the cuboid.
    pub half_extents: Vector<Real>,
}

impl Cuboid {
    /// Creates a new box from its half-extents. Half-extents are the box half-width along each
    /// axis. Each half-extent must be positive.
    #[inline]
    pub fn new(half_extents: Vector<Real>) -> Cuboid {
        Cuboid { half_extents }
    }
}

impl SupportMap for Cuboid {
    #[inline]
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        // Keep the sign bit of `dir` (including the one of signed zeros) on each half-extent.
        dir.zip_map(&self.half_extents, |d, h| h.copysign(d)).into()
    }
}
