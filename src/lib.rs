/*!
voxelize3d
==========

**voxelize3d** converts 3-dimensional shapes into regular voxel grids. A shape is given
either as a polygonal boundary mesh or as an implicit function, and every cell of the
resulting grid is labeled as inside the shape, outside of it, or crossed by its boundary.

```
# #[cfg(all(feature = "dim3", feature = "f32"))] {
use voxelize3d::bounding_volume::Aabb;
use voxelize3d::math::Point;
use voxelize3d::transformation::voxelization::{voxelize_implicit, VoxelLabel};

let volume = Aabb::new(Point::new(-2.0, -2.0, -2.0), Point::new(2.0, 2.0, 2.0));
let grid = voxelize_implicit(|p: &Point<f32>| p.coords.norm() - 1.0, &volume, 8).unwrap();

assert_eq!(grid.dims(), [8, 8, 8]);
assert_eq!(grid.count(VoxelLabel::Unknown), 0);
assert_eq!(grid.label(0, 0, 0), VoxelLabel::Outside);
# }
```
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.
#![warn(unused_qualifications)]

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
extern crate num_traits as num;

pub extern crate nalgebra as na;

pub mod bounding_volume;
pub mod partitioning;
pub mod query;
pub mod shape;
pub mod transformation;
pub mod utils;

mod real {
    /// The scalar type used throughout this crate.
    #[cfg(feature = "f64")]
    pub use f64 as Real;

    /// The scalar type used throughout this crate.
    #[cfg(feature = "f32")]
    pub use f32 as Real;
}

/// Compilation flags dependent aliases for mathematical types.
#[cfg(feature = "dim3")]
pub mod math {
    pub use super::real::*;
    pub use na::{Isometry3, Point2, Point3, Vector3};

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The dimension of the space.
    pub const DIM: usize = 3;

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;

    /// The transformation matrix type.
    pub use Isometry3 as Isometry;
}
