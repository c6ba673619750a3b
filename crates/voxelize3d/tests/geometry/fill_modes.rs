use crate::meshes::box_mesh;
use voxelize3d::bounding_volume::Aabb;
use voxelize3d::math::Point;
use voxelize3d::shape::PolygonMesh;
use voxelize3d::transformation::voxelization::{
    voxelize_mesh_with_params, FillMode, VoxelGrid, VoxelLabel, VoxelizationParams,
};

/// A single square splitting the unit cube in two halves at `z = 0.5`.
fn splitting_square() -> PolygonMesh {
    PolygonMesh::new(
        vec![
            Point::new(0.0, 0.0, 0.5),
            Point::new(1.0, 0.0, 0.5),
            Point::new(1.0, 1.0, 0.5),
            Point::new(0.0, 1.0, 0.5),
        ],
        vec![vec![0, 1, 2, 3]],
    )
    .unwrap()
}

fn voxelize_split_cube(fill_mode: FillMode) -> VoxelGrid {
    let volume = Aabb::new(Point::origin(), Point::new(1.0, 1.0, 1.0));
    let params = VoxelizationParams::new(4)
        .with_volume(volume)
        .with_fill_mode(fill_mode);
    voxelize_mesh_with_params(&splitting_square(), &params).unwrap()
}

fn layer_labels(grid: &VoxelGrid, k: u32) -> Vec<VoxelLabel> {
    grid.iter()
        .filter(|(coords, _)| coords[2] == k)
        .map(|(_, label)| label)
        .collect()
}

#[test]
fn default_fill_mode_is_flood_fill() {
    assert_eq!(VoxelizationParams::new(4).fill_mode, FillMode::FloodFill);
    assert_eq!(
        voxelize_split_cube(FillMode::default()),
        voxelize_split_cube(FillMode::FloodFill)
    );
}

#[test]
fn flood_fill_from_a_single_seed() {
    let grid = voxelize_split_cube(FillMode::FloodFill);

    assert_eq!(grid.dims(), [4, 4, 4]);
    assert!(layer_labels(&grid, 0).iter().all(|l| *l == VoxelLabel::Outside));
    assert!(layer_labels(&grid, 1).iter().all(|l| *l == VoxelLabel::Boundary));
    assert!(layer_labels(&grid, 2).iter().all(|l| *l == VoxelLabel::Boundary));
    // The upper half is not connected to the seed at the origin.
    assert!(layer_labels(&grid, 3).iter().all(|l| *l == VoxelLabel::Inside));
}

#[test]
fn flood_fill_from_every_shell_cell() {
    let grid = voxelize_split_cube(FillMode::FloodFillFromShell);

    assert_eq!(grid.count(VoxelLabel::Outside), 32);
    assert_eq!(grid.count(VoxelLabel::Boundary), 32);
    assert_eq!(grid.count(VoxelLabel::Inside), 0);
    assert!(layer_labels(&grid, 3).iter().all(|l| *l == VoxelLabel::Outside));
}

#[test]
fn surface_only_never_labels_inside() {
    let grid = voxelize_split_cube(FillMode::SurfaceOnly);

    assert_eq!(grid.count(VoxelLabel::Outside), 32);
    assert_eq!(grid.count(VoxelLabel::Boundary), 32);
    assert_eq!(grid.count(VoxelLabel::Inside), 0);
    assert_eq!(grid.count(VoxelLabel::Unknown), 0);
}

#[test]
fn fill_modes_agree_on_a_closed_box() {
    let cube = box_mesh(Point::new(1.0, 1.0, 1.0), Point::new(2.0, 2.0, 2.0));
    let volume = Aabb::new(Point::origin(), Point::new(3.0, 3.0, 3.0));
    let params = VoxelizationParams::new(9).with_volume(volume);

    let single_seed = voxelize_mesh_with_params(&cube, &params).unwrap();
    let whole_shell =
        voxelize_mesh_with_params(&cube, &params.with_fill_mode(FillMode::FloodFillFromShell))
            .unwrap();
    let surface =
        voxelize_mesh_with_params(&cube, &params.with_fill_mode(FillMode::SurfaceOnly)).unwrap();

    assert_eq!(single_seed, whole_shell);
    assert!(single_seed.count(VoxelLabel::Inside) > 0);
    assert_eq!(
        surface.count(VoxelLabel::Boundary),
        single_seed.count(VoxelLabel::Boundary)
    );
    assert_eq!(
        surface.count(VoxelLabel::Outside),
        single_seed.count(VoxelLabel::Outside) + single_seed.count(VoxelLabel::Inside)
    );
}
