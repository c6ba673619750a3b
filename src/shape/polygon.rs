//! Definition of the planar polygon shape.

use crate::bounding_volume::Aabb;
use crate::math::{Point, Point2, Real, Vector, DEFAULT_EPSILON};
use crate::shape::Triangle;
use crate::transformation::ear_clipping::triangulate_ear_clipping;
use na::Unit;

/// A planar (or nearly planar) polygon, possibly non-convex, with at least three vertices.
///
/// The polygon is triangulated once when it is created: the voxelizer only ever tests
/// its triangles against voxels.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Polygon {
    vertices: Vec<Point<Real>>,
    triangles: Vec<[u32; 3]>,
}

impl Polygon {
    /// Builds a new polygon from its vertices.
    ///
    /// The vertices must be ordered such that two consecutive vertices determine an edge of
    /// the polygon, the last edge being `vertices[vertices.len() - 1], vertices[0]`.
    ///
    /// Returns `None` if less than three vertices are given.
    pub fn new(vertices: Vec<Point<Real>>) -> Option<Self> {
        if vertices.len() < 3 {
            return None;
        }

        let triangles = triangulate(&vertices);
        Some(Self {
            vertices,
            triangles,
        })
    }

    /// The vertices of this polygon.
    #[inline]
    pub fn vertices(&self) -> &[Point<Real>] {
        &self.vertices
    }

    /// The triangulation of this polygon, as indices into [`Polygon::vertices`].
    #[inline]
    pub fn triangle_indices(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// An iterator through the triangles covering this polygon.
    pub fn triangles(&self) -> impl ExactSizeIterator<Item = Triangle> + '_ {
        self.triangles.iter().map(|idx| {
            Triangle::new(
                self.vertices[idx[0] as usize],
                self.vertices[idx[1] as usize],
                self.vertices[idx[2] as usize],
            )
        })
    }

    /// The Newell normal of this polygon, scaled by twice its area.
    ///
    /// This is robust to non-convex and slightly non-planar polygons.
    pub fn scaled_normal(&self) -> Vector<Real> {
        newell_normal(&self.vertices)
    }

    /// The unit normal of this polygon, or `None` if its vertices are all collinear.
    pub fn normal(&self) -> Option<Unit<Vector<Real>>> {
        Unit::try_new(self.scaled_normal(), DEFAULT_EPSILON)
    }

    /// Computes the local-space [`Aabb`] of this polygon.
    pub fn local_aabb(&self) -> Aabb {
        Aabb::from_points(self.vertices.iter().copied())
    }
}

fn newell_normal(vertices: &[Point<Real>]) -> Vector<Real> {
    let mut normal = Vector::zeros();

    for (i, a) in vertices.iter().enumerate() {
        let b = &vertices[(i + 1) % vertices.len()];
        normal.x += (a.y - b.y) * (a.z + b.z);
        normal.y += (a.z - b.z) * (a.x + b.x);
        normal.z += (a.x - b.x) * (a.y + b.y);
    }

    normal
}

/// Triangulates the polygon by ear-clipping its projection on the plane orthogonal to the
/// dominant axis of its normal. Falls back to a fan if that fails.
fn triangulate(vertices: &[Point<Real>]) -> Vec<[u32; 3]> {
    if vertices.len() == 3 {
        return vec![[0, 1, 2]];
    }

    let normal = newell_normal(vertices);
    let axis = normal.iamax();

    if normal[axis].is_finite() && normal[axis] != 0.0 {
        let (mut u, mut v) = ((axis + 1) % 3, (axis + 2) % 3);

        // Keep the projected polygon counter-clockwise.
        if normal[axis] < 0.0 {
            std::mem::swap(&mut u, &mut v);
        }

        let projected: Vec<_> = vertices.iter().map(|p| Point2::new(p[u], p[v])).collect();

        if let Some(triangles) = triangulate_ear_clipping(&projected) {
            return triangles;
        }
    }

    log::trace!(
        "ear clipping failed on a polygon with {} vertices, using a fan",
        vertices.len()
    );
    fan_triangulation(vertices.len())
}

fn fan_triangulation(num_vertices: usize) -> Vec<[u32; 3]> {
    (1..num_vertices as u32 - 1)
        .map(|i| [0, i, i + 1])
        .collect()
}
