use crate::bounding_volume::{Aabb, BoundingVolume};
use crate::math::{Point, Real};

/// Two sibling nodes of a [`Bvh`], stored contiguously.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[repr(C)]
pub(super) struct BvhNodeWide {
    pub(super) left: BvhNode,
    pub(super) right: BvhNode,
}

impl BvhNodeWide {
    #[inline(always)]
    pub(super) fn zeros() -> Self {
        Self {
            left: BvhNode::zeros(),
            right: BvhNode::zeros(),
        }
    }

    #[inline(always)]
    pub(super) fn merged(&self, my_id: u32) -> BvhNode {
        self.left.merged(&self.right, my_id)
    }

    #[inline(always)]
    pub(super) fn leaf_count(&self) -> u32 {
        self.left.leaf_count + self.right.leaf_count
    }
}

/// A node of a [`Bvh`]: either a leaf carrying a primitive id, or an internal node
/// referencing a pair of children.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[repr(C)]
pub struct BvhNode {
    pub(super) mins: Point<Real>,
    /// The leaf data if this is a leaf, or the index of the children pair otherwise.
    pub(super) children: u32,
    pub(super) maxs: Point<Real>,
    pub(super) leaf_count: u32,
}

impl BvhNode {
    #[inline(always)]
    pub(super) fn zeros() -> Self {
        Self {
            mins: Point::origin(),
            children: 0,
            maxs: Point::origin(),
            leaf_count: 0,
        }
    }

    /// Creates a leaf node covering `aabb` and carrying `leaf_data`.
    #[inline(always)]
    pub fn leaf(aabb: Aabb, leaf_data: u32) -> BvhNode {
        Self {
            mins: aabb.mins,
            maxs: aabb.maxs,
            children: leaf_data,
            leaf_count: 1,
        }
    }

    /// The data of this node if it is a leaf.
    #[inline(always)]
    pub fn leaf_data(&self) -> Option<u32> {
        self.is_leaf().then_some(self.children)
    }

    /// Is this node a leaf?
    #[inline(always)]
    pub fn is_leaf(&self) -> bool {
        self.leaf_count == 1
    }

    /// The number of leaves in the subtree rooted at this node.
    #[inline(always)]
    pub fn leaf_count(&self) -> u32 {
        self.leaf_count
    }

    #[inline(always)]
    pub(super) fn merged(&self, other: &Self, children: u32) -> Self {
        Self {
            mins: self.mins.inf(&other.mins),
            children,
            maxs: self.maxs.sup(&other.maxs),
            leaf_count: self.leaf_count + other.leaf_count,
        }
    }

    /// The bounding box of this node.
    #[inline]
    pub fn aabb(&self) -> Aabb {
        Aabb {
            mins: self.mins,
            maxs: self.maxs,
        }
    }

    /// The center of the bounding box of this node.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        na::center(&self.mins, &self.maxs)
    }

    /// Does this node bounding box contain the one of `other`?
    pub fn contains(&self, other: &Self) -> bool {
        na::partial_le(&self.mins, &other.mins) && na::partial_ge(&self.maxs, &other.maxs)
    }
}

/// A binary Bounding Volume Hierarchy over a static set of boxes.
///
/// The tree is stored as a flat list of sibling pairs: the root pair is at index 0 and each
/// internal node stores the index of its children pair. A tree with a single leaf stores it
/// on the left of the root pair and leaves the right node empty (zero leaves).
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Bvh {
    pub(super) nodes: Vec<BvhNodeWide>,
}

impl Bvh {
    /// An empty BVH.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a BVH with the binned SAH strategy, the `i`-th leaf carrying the data `i`.
    pub fn from_leaves(leaves: &[Aabb]) -> Self {
        Self::from_iter(leaves.iter().copied().enumerate())
    }

    /// Builds a BVH with the binned SAH strategy from `(leaf_data, leaf_aabb)` pairs.
    pub fn from_iter<It>(leaves: It) -> Self
    where
        It: IntoIterator<Item = (usize, Aabb)>,
    {
        let mut leaves: Vec<_> = leaves
            .into_iter()
            .map(|(leaf_id, leaf_aabb)| BvhNode::leaf(leaf_aabb, leaf_id as u32))
            .collect();
        let mut result = Self::new();

        match leaves.len() {
            0 => {}
            1 => result.nodes.push(BvhNodeWide {
                left: leaves[0],
                right: BvhNode::zeros(),
            }),
            2 => result.nodes.push(BvhNodeWide {
                left: leaves[0],
                right: leaves[1],
            }),
            _ => {
                result.nodes.reserve(leaves.len() - 1);
                result.nodes.push(BvhNodeWide::zeros());
                result.rebuild_range_binned(0, &mut leaves);
            }
        }

        result
    }

    /// The bounding box of all the leaves, or an invalid [`Aabb`] if the tree is empty.
    pub fn root_aabb(&self) -> Aabb {
        match self.leaf_count() {
            0 => Aabb::new_invalid(),
            1 => self.nodes[0].left.aabb(),
            _ => self.nodes[0]
                .left
                .aabb()
                .merged(&self.nodes[0].right.aabb()),
        }
    }

    /// Does this tree have no leaves?
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The number of leaves of this tree.
    pub fn leaf_count(&self) -> u32 {
        self.nodes.first().map(BvhNodeWide::leaf_count).unwrap_or(0)
    }

    /// The depth of the subtree rooted at the node pair `node_id`.
    pub fn subtree_depth(&self, node_id: u32) -> u32 {
        if node_id == 0 && self.nodes.is_empty() {
            return 0;
        } else if node_id == 0 && self.nodes.len() == 1 {
            return 1 + (self.nodes[0].right.leaf_count != 0) as u32;
        }

        let node = &self.nodes[node_id as usize];

        let left_depth = if node.left.is_leaf() {
            1
        } else {
            self.subtree_depth(node.left.children)
        };

        let right_depth = if node.right.is_leaf() {
            1
        } else {
            self.subtree_depth(node.right.children)
        };

        left_depth.max(right_depth) + 1
    }
}
