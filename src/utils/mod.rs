//! Various unsorted geometrical and logical operators.

pub use self::point_in_triangle::{corner_direction, is_point_in_triangle, Orientation};

mod point_in_triangle;
