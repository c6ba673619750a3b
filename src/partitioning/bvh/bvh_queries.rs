use super::{Bvh, BvhNode};
use crate::bounding_volume::{Aabb, BoundingVolume};

impl Bvh {
    /// Iterates through the data of every leaf whose bounding box intersects `aabb`.
    ///
    /// Touching boxes count as intersecting.
    pub fn intersect_aabb<'a>(&'a self, aabb: &'a Aabb) -> impl Iterator<Item = u32> + 'a {
        self.leaves(|node: &BvhNode| node.aabb().intersects(aabb))
    }
}
