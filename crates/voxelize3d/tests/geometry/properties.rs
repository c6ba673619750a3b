use crate::meshes::{box_mesh, box_triangles, reference_exterior, uv_sphere};
use voxelize3d::bounding_volume::Aabb;
use voxelize3d::math::{Point, Real};
use voxelize3d::query::intersection_test_aabb_triangle;
use voxelize3d::shape::Triangle;
use voxelize3d::transformation::voxelization::{
    voxelize_implicit, voxelize_mesh, voxelize_mesh_with_params, VoxelGrid, VoxelLabel,
    VoxelizationParams,
};

fn random_triangles(seed: u64, count: usize, mins: Real, maxs: Real) -> Vec<Triangle> {
    let mut rng = oorandom::Rand32::new(seed);
    let mut coord = || mins + rng.rand_float() as Real * (maxs - mins);

    (0..count)
        .map(|_| {
            let mut pt = || Point::new(coord(), coord(), coord());
            Triangle::new(pt(), pt(), pt())
        })
        .collect()
}

fn assert_fully_labeled(grid: &VoxelGrid) {
    assert_eq!(grid.count(VoxelLabel::Unknown), 0);
    assert_eq!(
        grid.count(VoxelLabel::Boundary)
            + grid.count(VoxelLabel::Inside)
            + grid.count(VoxelLabel::Outside),
        grid.num_cells()
    );
}

fn assert_outside_is_exterior(grid: &VoxelGrid) {
    let exterior = reference_exterior(grid);

    for (id, reachable) in exterior.into_iter().enumerate() {
        let label = grid.label_at(id);

        if reachable {
            assert_eq!(label, VoxelLabel::Outside, "cell {:?}", grid.coords_of(id));
        } else {
            assert_ne!(label, VoxelLabel::Outside, "cell {:?}", grid.coords_of(id));
        }
    }
}

#[test]
fn every_cell_is_labeled() {
    let cube = box_mesh(Point::new(-1.0, 0.0, 2.0), Point::new(0.5, 3.0, 2.5));
    let sphere = uv_sphere(2.0, 8, 16);
    let soup = random_triangles(7, 20, -1.0, 1.0);

    for n in [1, 2, 5, 16] {
        assert_fully_labeled(&voxelize_mesh(&cube, n).unwrap());
        assert_fully_labeled(&voxelize_mesh(&sphere, n).unwrap());
        assert_fully_labeled(&voxelize_mesh(&soup[..], n).unwrap());
    }

    let volume = Aabb::new(Point::new(-1.0, -1.0, -1.0), Point::new(1.0, 0.5, 1.0));
    let grid = voxelize_implicit(|p: &Point<Real>| p.x * p.y - 0.1, &volume, 7).unwrap();
    assert_fully_labeled(&grid);
}

#[test]
fn voxelization_is_deterministic() {
    let sphere = uv_sphere(1.5, 10, 20);
    let soup = random_triangles(11, 50, 0.0, 3.0);

    assert_eq!(
        voxelize_mesh(&sphere, 13).unwrap(),
        voxelize_mesh(&sphere, 13).unwrap()
    );
    assert_eq!(
        voxelize_mesh(&soup[..], 13).unwrap(),
        voxelize_mesh(&soup[..], 13).unwrap()
    );

    let volume = Aabb::new(Point::new(-2.0, -2.0, -2.0), Point::new(2.0, 2.0, 2.0));
    let torus = |p: &Point<Real>| {
        let ring = (p.x * p.x + p.y * p.y).sqrt() - 1.0;
        (ring * ring + p.z * p.z).sqrt() - 0.4
    };
    assert_eq!(
        voxelize_implicit(torus, &volume, 12).unwrap(),
        voxelize_implicit(torus, &volume, 12).unwrap()
    );
}

#[test]
fn outside_cells_are_the_reachable_exterior() {
    let sphere = uv_sphere(1.0, 10, 20);
    let volume = Aabb::new(Point::new(-1.5, -1.5, -1.5), Point::new(1.5, 1.5, 1.5));
    let params = VoxelizationParams::new(11).with_volume(volume);
    assert_outside_is_exterior(&voxelize_mesh_with_params(&sphere, &params).unwrap());

    // Nested boxes: the gap between both boundaries is not reachable from the shell.
    let mut nested = box_triangles(Point::new(0.0, 0.0, 0.0), Point::new(4.0, 4.0, 4.0));
    nested.extend(box_triangles(
        Point::new(1.0, 1.0, 1.0),
        Point::new(3.0, 3.0, 3.0),
    ));
    let volume = Aabb::new(Point::new(-1.0, -1.0, -1.0), Point::new(5.0, 5.0, 5.0));
    let params = VoxelizationParams::new(12).with_volume(volume);
    let grid = voxelize_mesh_with_params(&nested[..], &params).unwrap();
    assert_outside_is_exterior(&grid);
    assert_eq!(grid.label(5, 5, 5), VoxelLabel::Inside);
    assert_eq!(grid.label(0, 0, 0), VoxelLabel::Outside);

    for seed in 0..4 {
        let soup = random_triangles(seed, 30, 0.0, 2.0);
        assert_outside_is_exterior(&voxelize_mesh(&soup[..], 10).unwrap());
    }
}

#[test]
fn dims_grow_with_resolution() {
    let volume = Aabb::new(Point::origin(), Point::new(3.0, 2.0, 1.0));
    let cube = box_mesh(volume.mins, volume.maxs);
    let mut prev = [0; 3];

    for n in 1..=30 {
        let grid = voxelize_mesh(&cube, n).unwrap();
        let dims = grid.dims();

        assert_eq!(dims[0], n);
        assert!(dims.iter().all(|d| *d >= 1 && *d <= n));
        assert!(dims.iter().zip(prev.iter()).all(|(d, p)| d >= p));
        assert!(grid.grid_aabb().maxs.y >= volume.maxs.y);
        assert!(grid.grid_aabb().maxs.z >= volume.maxs.z);

        prev = dims;
    }
}

#[test]
fn boundary_cells_are_the_cells_crossed_by_triangles() {
    for seed in 0..3 {
        let soup = random_triangles(seed + 100, 15, 0.0, 4.0);
        let volume = Aabb::new(Point::new(-0.5, -0.5, -0.5), Point::new(4.5, 4.5, 4.5));
        let params = VoxelizationParams::new(12).with_volume(volume);
        let grid = voxelize_mesh_with_params(&soup[..], &params).unwrap();

        for ([i, j, k], label) in grid.iter() {
            let cell = grid.cell_aabb(i, j, k);
            let crossed = soup
                .iter()
                .any(|tri| intersection_test_aabb_triangle(&cell, tri));

            assert_eq!(
                label == VoxelLabel::Boundary,
                crossed,
                "cell {:?}",
                [i, j, k]
            );
        }

        for tri in &soup {
            for vtx in tri.vertices() {
                let [i, j, k] = grid.cell_containing_point(&vtx).unwrap();
                assert_eq!(grid.label(i, j, k), VoxelLabel::Boundary);
            }
        }

        assert_outside_is_exterior(&grid);
    }
}
