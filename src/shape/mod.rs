//! Shapes describing the boundaries to voxelize.

pub use self::boundary_primitive::BoundaryPrimitive;
pub use self::cuboid::Cuboid;
pub use self::polygon::Polygon;
pub use self::polygon_mesh::{PolygonMesh, PolygonMeshBuilderError, PolygonalBoundary};
#[doc(inline)]
pub use self::support_map::SupportMap;
pub use self::triangle::Triangle;

mod boundary_primitive;
mod cuboid;
mod polygon;
mod polygon_mesh;
mod support_map;
mod triangle;
