use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector, DIM};
use crate::transformation::voxelization::VoxelizationError;
use arrayvec::ArrayVec;
use num::ToPrimitive;

/// The classification of a single cell of a [`VoxelGrid`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum VoxelLabel {
    /// The cell has not been classified yet. Never present in a completed grid.
    #[default]
    Unknown,
    /// The boundary of the shape passes through (or touches) the cell.
    Boundary,
    /// The cell is entirely inside the shape.
    Inside,
    /// The cell is entirely outside the shape.
    Outside,
}

impl VoxelLabel {
    /// Is this cell part of the solid, i.e., `Boundary` or `Inside`?
    #[inline]
    pub fn is_filled(self) -> bool {
        matches!(self, VoxelLabel::Boundary | VoxelLabel::Inside)
    }
}

/// A regular grid of cubic cells covering an axis-aligned volume, each cell carrying a
/// [`VoxelLabel`].
///
/// The cell `(i, j, k)` spans `[origin + (i, j, k) * cell_size, origin + (i + 1, j + 1, k + 1) * cell_size]`
/// where `origin` is the minimum corner of [`VoxelGrid::aabb`]. Cells are stored in a flat
/// array where `k` varies fastest: the linear index of `(i, j, k)` is
/// `(i * dims[1] + j) * dims[2] + k`.
///
/// Rounding may leave the last layer of cells slightly short of the volume maximum along
/// the axis of largest extent: that layer is then stretched up to the volume maximum so the
/// grid always covers the whole volume.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct VoxelGrid {
    aabb: Aabb,
    cell_size: Real,
    dims: [u32; 3],
    pub(super) labels: Vec<VoxelLabel>,
}

impl VoxelGrid {
    /// Allocates a grid covering `aabb` where every cell is `Unknown`.
    ///
    /// The cell size is the largest extent of `aabb` divided by `max_voxels_per_side`, and
    /// the number of cells along each axis is the smallest one covering `aabb`, clamped to
    /// `[1, max_voxels_per_side]`.
    pub fn new(aabb: &Aabb, max_voxels_per_side: u32) -> Result<Self, VoxelizationError> {
        if max_voxels_per_side == 0 {
            return Err(VoxelizationError::ZeroResolution);
        }

        let extents = aabb.extents();
        let max_extent = extents.max();

        if !aabb.has_positive_volume() {
            return Err(VoxelizationError::DegenerateVolume);
        }

        let cell_size = max_extent / max_voxels_per_side as Real;

        if cell_size <= 0.0 {
            return Err(VoxelizationError::DegenerateVolume);
        }

        let mut dims = [1; 3];

        for (d, dim) in dims.iter_mut().enumerate() {
            *dim = (extents[d] / cell_size)
                .ceil()
                .to_u32()
                .unwrap_or(max_voxels_per_side)
                .clamp(1, max_voxels_per_side);
        }

        let num_cells = (dims[0] as usize)
            .checked_mul(dims[1] as usize)
            .and_then(|n| n.checked_mul(dims[2] as usize))
            .ok_or(VoxelizationError::GridTooLarge { dims })?;

        let mut labels = Vec::new();
        labels
            .try_reserve_exact(num_cells)
            .map_err(|_| VoxelizationError::AllocationFailed { cells: num_cells })?;
        labels.resize(num_cells, VoxelLabel::Unknown);

        log::debug!(
            "voxel grid: {}x{}x{} cells of size {}",
            dims[0],
            dims[1],
            dims[2],
            cell_size
        );

        Ok(Self {
            aabb: *aabb,
            cell_size,
            dims,
            labels,
        })
    }

    /// The number of cells along each axis.
    #[inline]
    pub fn dims(&self) -> [u32; 3] {
        self.dims
    }

    /// The edge length of every cell.
    #[inline]
    pub fn cell_size(&self) -> Real {
        self.cell_size
    }

    /// The volume this grid was built for.
    #[inline]
    pub fn aabb(&self) -> Aabb {
        self.aabb
    }

    /// The total number of cells.
    #[inline]
    pub fn num_cells(&self) -> usize {
        self.labels.len()
    }

    /// The label of the cell `(i, j, k)`.
    ///
    /// Panics if the cell is out of bounds.
    #[inline]
    pub fn label(&self, i: u32, j: u32, k: u32) -> VoxelLabel {
        self.labels[self.index_of(i, j, k)]
    }

    /// The label of the cell with the given linear index.
    #[inline]
    pub fn label_at(&self, index: usize) -> VoxelLabel {
        self.labels[index]
    }

    /// The labels of all cells, in linear index order.
    #[inline]
    pub fn labels(&self) -> &[VoxelLabel] {
        &self.labels
    }

    /// The linear index of the cell `(i, j, k)`.
    #[inline]
    pub fn index_of(&self, i: u32, j: u32, k: u32) -> usize {
        debug_assert!(i < self.dims[0] && j < self.dims[1] && k < self.dims[2]);
        (i as usize * self.dims[1] as usize + j as usize) * self.dims[2] as usize + k as usize
    }

    /// The coordinates of the cell with the given linear index.
    #[inline]
    pub fn coords_of(&self, index: usize) -> [u32; 3] {
        let nz = self.dims[2] as usize;
        let ny = self.dims[1] as usize;
        let k = index % nz;
        let j = (index / nz) % ny;
        let i = index / (nz * ny);
        [i as u32, j as u32, k as u32]
    }

    /// The coordinate along `axis` of the `i`-th plane separating cell layers.
    #[inline]
    fn plane(&self, axis: usize, i: u32) -> Real {
        let coord = self.aabb.mins[axis] + i as Real * self.cell_size;

        if i == self.dims[axis] {
            coord.max(self.aabb.maxs[axis])
        } else {
            coord
        }
    }

    /// The point at the intersection of the `a`-th, `b`-th and `c`-th cell layer planes
    /// along each axis, i.e., a vertex shared by up to eight cells.
    #[inline]
    pub fn lattice_point(&self, a: u32, b: u32, c: u32) -> Point<Real> {
        Point::new(self.plane(0, a), self.plane(1, b), self.plane(2, c))
    }

    /// The region actually covered by the cells.
    ///
    /// This contains [`VoxelGrid::aabb`] and may exceed it along the axes of smaller extent.
    pub fn grid_aabb(&self) -> Aabb {
        Aabb::new(
            self.aabb.mins,
            self.lattice_point(self.dims[0], self.dims[1], self.dims[2]),
        )
    }

    /// The box covered by the cell `(i, j, k)`.
    #[inline]
    pub fn cell_aabb(&self, i: u32, j: u32, k: u32) -> Aabb {
        Aabb::new(
            self.lattice_point(i, j, k),
            self.lattice_point(i + 1, j + 1, k + 1),
        )
    }

    /// The center of the cell `(i, j, k)`.
    #[inline]
    pub fn cell_center(&self, i: u32, j: u32, k: u32) -> Point<Real> {
        self.cell_aabb(i, j, k).center()
    }

    /// The `corner`-th vertex of the cell `(i, j, k)`, with `corner < 8`.
    ///
    /// The vertex takes the maximum `x` (resp. `y`, `z`) of the cell iff. the bit 0
    /// (resp. 1, 2) of `corner` is set. This is the numbering of [`Aabb::vertices`].
    #[inline]
    pub fn cell_corner(&self, i: u32, j: u32, k: u32, corner: usize) -> Point<Real> {
        debug_assert!(corner < 8);
        self.lattice_point(
            i + (corner & 1) as u32,
            j + ((corner >> 1) & 1) as u32,
            k + ((corner >> 2) & 1) as u32,
        )
    }

    /// The linear indices of the (up to six) cells sharing a face with `(i, j, k)`.
    ///
    /// Neighbors are listed in the order `-x`, `+x`, `-y`, `+y`, `-z`, `+z`, skipping those
    /// outside the grid.
    pub fn neighbors6(&self, i: u32, j: u32, k: u32) -> ArrayVec<usize, 6> {
        let mut result = ArrayVec::new();
        let coords = [i, j, k];

        for axis in 0..DIM {
            let mut neighbor = coords;

            if coords[axis] > 0 {
                neighbor[axis] = coords[axis] - 1;
                result.push(self.index_of(neighbor[0], neighbor[1], neighbor[2]));
            }

            if coords[axis] + 1 < self.dims[axis] {
                neighbor[axis] = coords[axis] + 1;
                result.push(self.index_of(neighbor[0], neighbor[1], neighbor[2]));
            }
        }

        result
    }

    /// Is the cell `(i, j, k)` on one of the six outer faces of the grid?
    #[inline]
    pub fn is_on_shell(&self, i: u32, j: u32, k: u32) -> bool {
        [i, j, k]
            .iter()
            .zip(self.dims.iter())
            .any(|(c, dim)| *c == 0 || *c + 1 == *dim)
    }

    /// The coordinates of the cell containing `point`, or `None` if it lies outside of
    /// [`VoxelGrid::grid_aabb`].
    ///
    /// Points on a face shared by two cells belong to the cell with the largest coordinates,
    /// except on the outer faces of the grid.
    pub fn cell_containing_point(&self, point: &Point<Real>) -> Option<[u32; 3]> {
        if !self.grid_aabb().contains_local_point(point) {
            return None;
        }

        let local: Vector<Real> = (point - self.aabb.mins) / self.cell_size;
        let mut result = [0; 3];

        for d in 0..DIM {
            result[d] = local[d].floor().to_u32()?.min(self.dims[d] - 1);
        }

        Some(result)
    }

    /// The number of cells with the given label.
    pub fn count(&self, label: VoxelLabel) -> usize {
        self.labels.iter().filter(|l| **l == label).count()
    }

    /// Iterates through the coordinates and label of every cell, in linear index order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = ([u32; 3], VoxelLabel)> + '_ {
        self.labels
            .iter()
            .enumerate()
            .map(|(id, label)| (self.coords_of(id), *label))
    }

    /// Iterates through the coordinates of every cell with the given label.
    pub fn cells_with(&self, label: VoxelLabel) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.iter()
            .filter(move |(_, l)| *l == label)
            .map(|(coords, _)| coords)
    }

    /// Iterates through the coordinates of every `Boundary` or `Inside` cell.
    pub fn filled_cells(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.iter()
            .filter(|(_, l)| l.is_filled())
            .map(|(coords, _)| coords)
    }
}
