//! Exact geometric queries between voxels and boundary primitives.

pub use self::intersection_test::{intersection_test_aabb_triangle, intersection_test_cuboid_triangle};

mod intersection_test;
pub mod sat;
