pub use bvh_traverse::Leaves;
pub use bvh_tree::{Bvh, BvhNode};

mod bvh_binned_build;
mod bvh_queries;
mod bvh_traverse;
mod bvh_tree;
mod bvh_validation;
