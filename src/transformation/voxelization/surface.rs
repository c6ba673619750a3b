use super::parallel::for_each_indexed;
use super::{FillMode, VoxelGrid, VoxelLabel, VoxelizationError, VoxelizationParams};
use crate::partitioning::PrimitiveIndex;
use crate::shape::{BoundaryPrimitive, PolygonalBoundary};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Voxelizes a closed polygonal boundary with the default [`VoxelizationParams`].
///
/// The grid covers the bounding box of `mesh`, with `max_voxels_per_side` cells along its
/// largest extent. Cells touched by a polygon are `Boundary`, cells reachable from the outer
/// shell of the grid without crossing the boundary are `Outside`, and the remaining cells
/// are `Inside`.
///
/// # Example
///
/// ```
/// # #[cfg(all(feature = "dim3", feature = "f32"))] {
/// use voxelize3d::math::Point;
/// use voxelize3d::shape::PolygonMesh;
/// use voxelize3d::transformation::voxelization::{voxelize_mesh, VoxelLabel};
///
/// // The six faces of the unit cube.
/// let vertices = (0..8)
///     .map(|i| Point::new((i & 1) as f32, ((i >> 1) & 1) as f32, ((i >> 2) & 1) as f32))
///     .collect();
/// let faces = vec![
///     vec![0, 2, 6, 4],
///     vec![1, 5, 7, 3],
///     vec![0, 4, 5, 1],
///     vec![2, 3, 7, 6],
///     vec![0, 1, 3, 2],
///     vec![4, 6, 7, 5],
/// ];
/// let cube = PolygonMesh::new(vertices, faces).unwrap();
/// let grid = voxelize_mesh(&cube, 4).unwrap();
///
/// assert_eq!(grid.count(VoxelLabel::Boundary), 56);
/// assert_eq!(grid.count(VoxelLabel::Inside), 8);
/// # }
/// ```
pub fn voxelize_mesh<B: PolygonalBoundary + ?Sized>(
    mesh: &B,
    max_voxels_per_side: u32,
) -> Result<VoxelGrid, VoxelizationError> {
    voxelize_mesh_with_params(mesh, &VoxelizationParams::new(max_voxels_per_side))
}

/// Voxelizes a closed polygonal boundary.
///
/// See [`voxelize_mesh`] and [`VoxelizationParams`].
pub fn voxelize_mesh_with_params<B: PolygonalBoundary + ?Sized>(
    mesh: &B,
    params: &VoxelizationParams,
) -> Result<VoxelGrid, VoxelizationError> {
    if params.max_voxels_per_side == 0 {
        return Err(VoxelizationError::ZeroResolution);
    }

    let primitives = boundary_primitives(mesh);

    if primitives.is_empty() {
        return Err(VoxelizationError::EmptyMesh);
    }

    let volume = params.volume.unwrap_or_else(|| mesh.local_aabb());
    let mut grid = VoxelGrid::new(&volume, params.max_voxels_per_side)?;
    let index = PrimitiveIndex::new(primitives);
    let seed = grid.classify_boundary(&index);

    log::debug!(
        "{} boundary cells, flood seed: {:?}",
        grid.count(VoxelLabel::Boundary),
        seed
    );

    match params.fill_mode {
        FillMode::SurfaceOnly => {
            let _ = grid.resolve_unknown(VoxelLabel::Outside);
        }
        FillMode::FloodFill => {
            if let Some(seed) = seed {
                let _ = grid.flood_fill_outside([seed]);
            } else {
                log::debug!("no exterior cell on the grid shell, skipping flood fill");
            }

            let _ = grid.resolve_unknown(VoxelLabel::Inside);
        }
        FillMode::FloodFillFromShell => {
            let seeds = grid.unknown_shell_cells();

            if seeds.is_empty() {
                log::debug!("no exterior cell on the grid shell, skipping flood fill");
            }

            let _ = grid.flood_fill_outside(seeds);
            let _ = grid.resolve_unknown(VoxelLabel::Inside);
        }
    }

    Ok(grid)
}

fn boundary_primitives<B: PolygonalBoundary + ?Sized>(mesh: &B) -> Vec<BoundaryPrimitive> {
    let mut buffer = Vec::new();
    let mut primitives = Vec::with_capacity(mesh.num_polygons());

    for i in 0..mesh.num_polygons() {
        mesh.polygon_vertices(i, &mut buffer);

        match BoundaryPrimitive::from_vertices(&buffer) {
            Some(primitive) => primitives.push(primitive),
            None => log::debug!(
                "ignoring polygon {} with only {} vertices",
                i,
                buffer.len()
            ),
        }
    }

    primitives
}

impl VoxelGrid {
    /// Labels `Boundary` every cell touched by a primitive of `index`.
    ///
    /// Returns the smallest linear index of the shell cells left `Unknown`, if any.
    fn classify_boundary(&mut self, index: &PrimitiveIndex) -> Option<usize> {
        let seed = AtomicUsize::new(usize::MAX);
        let mut labels = std::mem::take(&mut self.labels);
        let grid = &*self;

        for_each_indexed(&mut labels, |id, label| {
            let [i, j, k] = grid.coords_of(id);

            if index.intersects_aabb(&grid.cell_aabb(i, j, k)) {
                *label = VoxelLabel::Boundary;
            } else if grid.is_on_shell(i, j, k) {
                let _ = seed.fetch_min(id, Ordering::Relaxed);
            }
        });

        self.labels = labels;

        match seed.into_inner() {
            usize::MAX => None,
            seed => Some(seed),
        }
    }
}
