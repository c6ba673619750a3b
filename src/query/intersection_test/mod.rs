//! Boolean intersection tests between a box and a boundary primitive.

pub use self::intersection_test_cuboid_triangle::{
    intersection_test_aabb_triangle, intersection_test_cuboid_triangle,
};

mod intersection_test_cuboid_triangle;
