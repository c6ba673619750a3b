use crate::bounding_volume::Aabb;
use crate::math::{Point, Real};
use crate::query::intersection_test_aabb_triangle;
use crate::shape::{Polygon, Triangle};

/// A piece of a polygonal boundary, as stored by the voxelizer spatial index.
///
/// Triangles are tested against voxels directly. Larger polygons are triangulated once,
/// when the primitive is created.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum BoundaryPrimitive {
    /// A single triangle.
    Triangle(Triangle),
    /// A polygon with more than three vertices.
    Polygon(Polygon),
}

impl BoundaryPrimitive {
    /// Builds the primitive matching a polygon with the given vertices.
    ///
    /// Returns `None` if less than three vertices are given.
    pub fn from_vertices(vertices: &[Point<Real>]) -> Option<Self> {
        match vertices {
            [a, b, c] => Some(Self::Triangle(Triangle::new(*a, *b, *c))),
            _ => Polygon::new(vertices.to_vec()).map(Self::Polygon),
        }
    }

    /// The local-space [`Aabb`] of this primitive.
    pub fn local_aabb(&self) -> Aabb {
        match self {
            Self::Triangle(t) => t.local_aabb(),
            Self::Polygon(p) => p.local_aabb(),
        }
    }

    /// Does this primitive intersect (or touch) the given box?
    pub fn intersects_aabb(&self, aabb: &Aabb) -> bool {
        match self {
            Self::Triangle(t) => intersection_test_aabb_triangle(aabb, t),
            Self::Polygon(p) => p
                .triangles()
                .any(|t| intersection_test_aabb_triangle(aabb, &t)),
        }
    }
}
