//! Polygonal boundary representations accepted by the surface voxelizer.

use crate::bounding_volume::{Aabb, BoundingVolume};
use crate::math::{Point, Real};
use crate::shape::Triangle;

/// Indicated an inconsistency while building a polygon mesh.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum PolygonMeshBuilderError {
    /// A polygon mesh must contain at least one polygon.
    #[error("a polygon mesh must contain at least one polygon")]
    EmptyPolygons,
    /// The polygon with the given index has less than three vertices.
    #[error("the polygon {0} has less than three vertices")]
    DegeneratePolygon(u32),
    /// A polygon references a vertex that does not exist.
    #[error("the polygon {polygon} references the nonexistent vertex {vertex}")]
    InvalidVertexIndex {
        /// The index of the faulty polygon.
        polygon: u32,
        /// The out-of-bounds vertex index.
        vertex: u32,
    },
}

/// A closed boundary made of planar polygons.
///
/// This is what the surface voxelizer consumes: it only needs a bounding box and the
/// vertices of each polygon. The polygons orientation is irrelevant.
pub trait PolygonalBoundary {
    /// The number of polygons on this boundary.
    fn num_polygons(&self) -> usize;

    /// Clears `out` and fills it with the vertices of the `i`-th polygon, in order.
    fn polygon_vertices(&self, i: usize, out: &mut Vec<Point<Real>>);

    /// The [`Aabb`] of this boundary.
    ///
    /// The default implementation merges the vertices of every polygon.
    fn local_aabb(&self) -> Aabb {
        let mut aabb = Aabb::new_invalid();
        let mut buffer = Vec::new();

        for i in 0..self.num_polygons() {
            self.polygon_vertices(i, &mut buffer);
            aabb.merge(&Aabb::from_points(buffer.iter().copied()));
        }

        aabb
    }
}

/// A mesh made of polygons sharing a vertex buffer.
///
/// Polygon indices are stored contiguously: the vertex indices of the `i`-th polygon are
/// `indices[offsets[i]..offsets[i + 1]]`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct PolygonMesh {
    vertices: Vec<Point<Real>>,
    indices: Vec<u32>,
    offsets: Vec<u32>,
    aabb: Aabb,
}

impl PolygonMesh {
    /// Creates a polygon mesh from a vertex buffer and the vertex indices of each polygon.
    pub fn new(
        vertices: Vec<Point<Real>>,
        polygons: Vec<Vec<u32>>,
    ) -> Result<Self, PolygonMeshBuilderError> {
        if polygons.is_empty() {
            return Err(PolygonMeshBuilderError::EmptyPolygons);
        }

        let mut indices = Vec::with_capacity(polygons.iter().map(Vec::len).sum());
        let mut offsets = Vec::with_capacity(polygons.len() + 1);
        offsets.push(0);

        for (polygon_id, polygon) in polygons.iter().enumerate() {
            let polygon_id = polygon_id as u32;

            if polygon.len() < 3 {
                return Err(PolygonMeshBuilderError::DegeneratePolygon(polygon_id));
            }

            if let Some(&vertex) = polygon.iter().find(|&&v| v as usize >= vertices.len()) {
                return Err(PolygonMeshBuilderError::InvalidVertexIndex {
                    polygon: polygon_id,
                    vertex,
                });
            }

            indices.extend_from_slice(polygon);
            offsets.push(indices.len() as u32);
        }

        let aabb = Aabb::from_points(indices.iter().map(|i| vertices[*i as usize]));

        Ok(Self {
            vertices,
            indices,
            offsets,
            aabb,
        })
    }

    /// Creates a polygon mesh where every polygon is a triangle.
    pub fn from_triangles(
        vertices: Vec<Point<Real>>,
        triangles: &[[u32; 3]],
    ) -> Result<Self, PolygonMeshBuilderError> {
        Self::new(vertices, triangles.iter().map(|t| t.to_vec()).collect())
    }

    /// The vertex buffer of this mesh.
    #[inline]
    pub fn vertices(&self) -> &[Point<Real>] {
        &self.vertices
    }

    /// The vertex indices of the `i`-th polygon.
    #[inline]
    pub fn polygon(&self, i: usize) -> &[u32] {
        &self.indices[self.offsets[i] as usize..self.offsets[i + 1] as usize]
    }

    /// An iterator through the vertex indices of every polygon.
    pub fn polygons(&self) -> impl ExactSizeIterator<Item = &[u32]> + '_ {
        self.offsets
            .windows(2)
            .map(|w| &self.indices[w[0] as usize..w[1] as usize])
    }
}

impl PolygonalBoundary for PolygonMesh {
    #[inline]
    fn num_polygons(&self) -> usize {
        self.offsets.len() - 1
    }

    fn polygon_vertices(&self, i: usize, out: &mut Vec<Point<Real>>) {
        out.clear();
        out.extend(self.polygon(i).iter().map(|v| self.vertices[*v as usize]));
    }

    /// The [`Aabb`] of the vertices referenced by at least one polygon.
    #[inline]
    fn local_aabb(&self) -> Aabb {
        self.aabb
    }
}

impl PolygonalBoundary for [Triangle] {
    #[inline]
    fn num_polygons(&self) -> usize {
        self.len()
    }

    fn polygon_vertices(&self, i: usize, out: &mut Vec<Point<Real>>) {
        out.clear();
        out.extend_from_slice(&self[i].vertices());
    }

    fn local_aabb(&self) -> Aabb {
        self.iter().fold(Aabb::new_invalid(), |aabb, t| {
            aabb.merged(&t.local_aabb())
        })
    }
}
