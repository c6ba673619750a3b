//! Application of the Separating Axis Theorem (SAT).
//!
//! Two convex shapes do **not** intersect if and only if there exists an axis onto which
//! their projections do not overlap. For a box and a triangle, only 13 candidate axes need
//! to be tested:
//!
//! - the 3 face normals of the box,
//! - the normal of the triangle,
//! - the 9 cross products between a box edge direction and a triangle edge direction.
//!
//! Each function of this module returns the largest separation found among the axes it
//! tests, together with the corresponding axis. A positive separation means the shapes are
//! disjoint; a zero separation means they are touching.

pub use self::sat_cuboid_point::*;
pub use self::sat_cuboid_support_map::*;
pub use self::sat_cuboid_triangle::*;

mod sat_cuboid_point;
mod sat_cuboid_support_map;
mod sat_cuboid_triangle;
