use crate::meshes::{box_mesh, box_triangles, uv_sphere};
use approx::assert_relative_eq;
use voxelize3d::bounding_volume::Aabb;
use voxelize3d::math::{Point, Real};
use voxelize3d::shape::{PolygonMesh, PolygonMeshBuilderError, Triangle};
use voxelize3d::transformation::voxelization::{
    voxelize_implicit, voxelize_mesh, voxelize_mesh_with_params, VoxelLabel, VoxelizationError,
    VoxelizationParams,
};

#[test]
fn unit_cube_fills_the_whole_grid() {
    let cube = box_mesh(Point::origin(), Point::new(1.0, 1.0, 1.0));
    let grid = voxelize_mesh(&cube, 4).unwrap();

    assert_eq!(grid.dims(), [4, 4, 4]);
    assert_relative_eq!(grid.cell_size(), 0.25);
    assert_eq!(grid.count(VoxelLabel::Outside), 0);
    assert_eq!(grid.count(VoxelLabel::Boundary), 56);
    assert_eq!(grid.count(VoxelLabel::Inside), 8);

    for ([i, j, k], label) in grid.iter() {
        if grid.is_on_shell(i, j, k) {
            assert_eq!(label, VoxelLabel::Boundary);
        } else {
            assert_eq!(label, VoxelLabel::Inside);
        }
    }
}

#[test]
fn unit_cube_as_triangle_soup() {
    let quads = box_mesh(Point::origin(), Point::new(1.0, 1.0, 1.0));
    let triangles = box_triangles(Point::origin(), Point::new(1.0, 1.0, 1.0));

    let from_quads = voxelize_mesh(&quads, 4).unwrap();
    let from_triangles = voxelize_mesh(&triangles[..], 4).unwrap();

    assert_eq!(from_quads, from_triangles);
}

#[test]
fn single_voxel_cube() {
    let cube = box_mesh(Point::origin(), Point::new(1.0, 1.0, 1.0));
    let grid = voxelize_mesh(&cube, 1).unwrap();

    assert_eq!(grid.dims(), [1, 1, 1]);
    assert_eq!(grid.labels(), &[VoxelLabel::Boundary]);
}

#[test]
fn sphere_in_a_large_volume() {
    let sphere = uv_sphere(1.0, 12, 24);
    let volume = Aabb::new(Point::new(-2.0, -2.0, -2.0), Point::new(2.0, 2.0, 2.0));
    let params = VoxelizationParams::new(10).with_volume(volume);
    let grid = voxelize_mesh_with_params(&sphere, &params).unwrap();

    assert_eq!(grid.dims(), [10, 10, 10]);
    assert_relative_eq!(grid.cell_size(), 0.4, epsilon = 1.0e-6);
    assert_eq!(grid.count(VoxelLabel::Unknown), 0);

    let half_diagonal = grid.cell_size() * (3.0 as Real).sqrt() / 2.0;

    for ([i, j, k], label) in grid.iter() {
        let center_dist = grid.cell_center(i, j, k).coords.norm();

        if grid.is_on_shell(i, j, k) {
            assert_eq!(label, VoxelLabel::Outside);
        }

        if center_dist > 1.0 + half_diagonal {
            assert_eq!(label, VoxelLabel::Outside, "cell {:?}", [i, j, k]);
        } else if center_dist < 0.95 - half_diagonal {
            assert_eq!(label, VoxelLabel::Inside, "cell {:?}", [i, j, k]);
        }
    }

    assert!(grid.count(VoxelLabel::Inside) >= 8);
    assert!(grid.count(VoxelLabel::Boundary) > 0);

    // Every vertex of the sphere lies in a boundary cell.
    for vtx in sphere.vertices() {
        let [i, j, k] = grid.cell_containing_point(vtx).unwrap();
        assert_eq!(grid.label(i, j, k), VoxelLabel::Boundary);
    }
}

#[test]
fn implicit_unit_sphere() {
    let volume = Aabb::new(Point::new(-2.0, -2.0, -2.0), Point::new(2.0, 2.0, 2.0));
    let grid = voxelize_implicit(|p: &Point<Real>| p.coords.norm() - 1.0, &volume, 8).unwrap();

    assert_eq!(grid.dims(), [8, 8, 8]);
    assert_relative_eq!(grid.cell_size(), 0.5);
    assert_eq!(grid.count(VoxelLabel::Unknown), 0);

    for ([i, j, k], label) in grid.iter() {
        let dists = grid
            .cell_aabb(i, j, k)
            .vertices()
            .map(|v| v.coords.norm() - 1.0);
        let expected = if dists.iter().all(|d| *d > 0.0) {
            VoxelLabel::Outside
        } else if dists.iter().all(|d| *d < 0.0) {
            VoxelLabel::Inside
        } else {
            VoxelLabel::Boundary
        };

        assert_eq!(label, expected, "cell {:?}", [i, j, k]);
    }

    // The 8 cells around the origin are the only ones with all corners in the unit ball.
    assert_eq!(grid.count(VoxelLabel::Inside), 8);
    assert_eq!(grid.label(0, 0, 0), VoxelLabel::Outside);
    assert_eq!(grid.label(3, 3, 3), VoxelLabel::Inside);
}

#[test]
fn empty_mesh_is_rejected() {
    let empty: [Triangle; 0] = [];
    assert_eq!(
        voxelize_mesh(&empty[..], 8),
        Err(VoxelizationError::EmptyMesh)
    );
    assert_eq!(
        PolygonMesh::new(vec![Point::origin()], vec![]),
        Err(PolygonMeshBuilderError::EmptyPolygons)
    );
}

#[test]
fn invalid_parameters_are_rejected() {
    let cube = box_mesh(Point::origin(), Point::new(1.0, 1.0, 1.0));
    assert_eq!(
        voxelize_mesh(&cube, 0),
        Err(VoxelizationError::ZeroResolution)
    );

    let point_like = [Triangle::new(
        Point::new(1.0, 1.0, 1.0),
        Point::new(1.0, 1.0, 1.0),
        Point::new(1.0, 1.0, 1.0),
    )];
    assert_eq!(
        voxelize_mesh(&point_like[..], 4),
        Err(VoxelizationError::DegenerateVolume)
    );
}

#[test]
fn flat_mesh_needs_an_explicit_volume() {
    let square = PolygonMesh::new(
        vec![
            Point::new(0.0, 0.0, 0.5),
            Point::new(2.0, 0.0, 0.5),
            Point::new(2.0, 2.0, 0.5),
            Point::new(0.0, 2.0, 0.5),
        ],
        vec![vec![0, 1, 2, 3]],
    )
    .unwrap();

    // The bounding box of the square has no thickness.
    assert_eq!(
        voxelize_mesh(&square, 4),
        Err(VoxelizationError::DegenerateVolume)
    );

    let slab = Aabb::new(Point::new(0.0, 0.0, 0.0), Point::new(2.0, 2.0, 0.5));
    let params = VoxelizationParams::new(4).with_volume(slab);
    let grid = voxelize_mesh_with_params(&square, &params).unwrap();

    assert_eq!(grid.dims(), [4, 4, 1]);
    assert_eq!(grid.count(VoxelLabel::Boundary), 16);
}

#[test]
fn flat_implicit_volume_is_rejected() {
    let flat = Aabb::new(Point::origin(), Point::new(4.0, 4.0, 0.0));
    assert_eq!(
        voxelize_implicit(|p: &Point<Real>| p.x - 1.0, &flat, 4),
        Err(VoxelizationError::DegenerateVolume)
    );
}
