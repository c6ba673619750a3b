//! Spatial partitioning tools.

pub use self::bvh::{Bvh, BvhNode, Leaves};
pub use self::primitive_index::PrimitiveIndex;

mod bvh;
mod primitive_index;
