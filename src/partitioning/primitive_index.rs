use crate::bounding_volume::Aabb;
use crate::partitioning::Bvh;
use crate::shape::BoundaryPrimitive;

/// A static set of boundary primitives, indexed by a [`Bvh`] over their bounding boxes.
///
/// Primitive ids are their positions in the list given to [`PrimitiveIndex::new`].
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct PrimitiveIndex {
    primitives: Vec<BoundaryPrimitive>,
    bvh: Bvh,
}

impl PrimitiveIndex {
    /// Builds the index of the given primitives.
    pub fn new(primitives: Vec<BoundaryPrimitive>) -> Self {
        let bvh = Bvh::from_iter(primitives.iter().map(BoundaryPrimitive::local_aabb).enumerate());
        log::trace!(
            "built a bvh over {} boundary primitives (depth {})",
            bvh.leaf_count(),
            bvh.subtree_depth(0)
        );

        Self { primitives, bvh }
    }

    /// The number of indexed primitives.
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    /// Does this index contain no primitives?
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// The primitive with the given id.
    ///
    /// Panics if `id` is out of bounds.
    #[inline]
    pub fn primitive(&self, id: u32) -> &BoundaryPrimitive {
        &self.primitives[id as usize]
    }

    /// The underlying bounding volume hierarchy.
    pub fn bvh(&self) -> &Bvh {
        &self.bvh
    }

    /// Iterates through the ids of the primitives whose bounding box intersects `aabb`.
    ///
    /// This is a conservative broad-phase: use [`PrimitiveIndex::intersects_aabb`] for the
    /// exact test.
    pub fn intersect_aabb<'a>(&'a self, aabb: &'a Aabb) -> impl Iterator<Item = u32> + 'a {
        self.bvh.intersect_aabb(aabb)
    }

    /// Does any primitive intersect (or touch) `aabb`?
    pub fn intersects_aabb(&self, aabb: &Aabb) -> bool {
        self.intersect_aabb(aabb)
            .any(|id| self.primitive(id).intersects_aabb(aabb))
    }
}
