use super::parallel::for_each_indexed;
use super::{VoxelGrid, VoxelLabel, VoxelizationError};
use crate::bounding_volume::Aabb;
use crate::math::{Point, Real};

/// Voxelizes the shape `{p | f(p) <= 0}` of an implicit function over `volume`.
///
/// The grid has `max_voxels_per_side` cells along the largest extent of `volume`. The
/// function is evaluated once at every cell corner: a cell is `Outside` if `f` is strictly
/// positive on all its corners, `Inside` if it is strictly negative on all of them, and
/// `Boundary` otherwise (including when `f` returns zero or NaN on a corner).
///
/// Features of the shape thinner than a cell may be missed entirely.
pub fn voxelize_implicit<F>(
    f: F,
    volume: &Aabb,
    max_voxels_per_side: u32,
) -> Result<VoxelGrid, VoxelizationError>
where
    F: Fn(&Point<Real>) -> Real + Sync,
{
    let mut grid = VoxelGrid::new(volume, max_voxels_per_side)?;
    let samples = grid.sample_lattice(&f)?;
    let [_, ny, nz] = grid.dims();
    let (ny, nz) = (ny as usize + 1, nz as usize + 1);

    let mut labels = std::mem::take(&mut grid.labels);
    let grid_ref = &grid;

    for_each_indexed(&mut labels, |id, label| {
        let [i, j, k] = grid_ref.coords_of(id);
        let mut positive = false;
        let mut negative = false;
        let mut other = false;

        for corner in 0..8 {
            let a = i as usize + (corner & 1);
            let b = j as usize + ((corner >> 1) & 1);
            let c = k as usize + ((corner >> 2) & 1);
            let value = samples[(a * ny + b) * nz + c];

            if value > 0.0 {
                positive = true;
            } else if value < 0.0 {
                negative = true;
            } else {
                other = true;
            }
        }

        *label = match (positive, negative, other) {
            (true, false, false) => VoxelLabel::Outside,
            (false, true, false) => VoxelLabel::Inside,
            _ => VoxelLabel::Boundary,
        };
    });

    grid.labels = labels;

    log::debug!(
        "implicit voxelization: {} boundary, {} inside, {} outside cells",
        grid.count(VoxelLabel::Boundary),
        grid.count(VoxelLabel::Inside),
        grid.count(VoxelLabel::Outside)
    );

    Ok(grid)
}

impl VoxelGrid {
    /// Evaluates `f` on every lattice point, i.e., every cell corner.
    ///
    /// The value at lattice point `(a, b, c)` is at index `(a * (ny + 1) + b) * (nz + 1) + c`.
    fn sample_lattice<F>(&self, f: &F) -> Result<Vec<Real>, VoxelizationError>
    where
        F: Fn(&Point<Real>) -> Real + Sync,
    {
        let [nx, ny, nz] = self.dims();
        let lattice_dims = [nx as usize + 1, ny as usize + 1, nz as usize + 1];
        let num_samples = lattice_dims[0]
            .checked_mul(lattice_dims[1])
            .and_then(|n| n.checked_mul(lattice_dims[2]))
            .ok_or(VoxelizationError::GridTooLarge { dims: self.dims() })?;

        let mut samples = Vec::new();
        samples
            .try_reserve_exact(num_samples)
            .map_err(|_| VoxelizationError::AllocationFailed { cells: num_samples })?;
        samples.resize(num_samples, 0.0);

        for_each_indexed(&mut samples, |id, sample| {
            let c = id % lattice_dims[2];
            let b = (id / lattice_dims[2]) % lattice_dims[1];
            let a = id / (lattice_dims[2] * lattice_dims[1]);
            *sample = f(&self.lattice_point(a as u32, b as u32, c as u32));
        });

        Ok(samples)
    }
}
