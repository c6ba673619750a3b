/// Errors raised when a shape cannot be voxelized.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum VoxelizationError {
    /// The maximum number of voxels per side was zero.
    #[error("the maximum number of voxels per side must be at least 1")]
    ZeroResolution,
    /// The volume to voxelize is not finite, inverted, or has a zero extent along some axis.
    #[error("the volume to voxelize must be finite and have a positive extent along every axis")]
    DegenerateVolume,
    /// The boundary to voxelize has no polygon with at least three vertices.
    #[error("the boundary to voxelize has no polygon with at least three vertices")]
    EmptyMesh,
    /// The number of cells overflows the address space.
    #[error("a {dims:?} voxel grid has too many cells")]
    GridTooLarge {
        /// The number of cells along each axis.
        dims: [u32; 3],
    },
    /// The storage of the cells could not be allocated.
    #[error("failed to allocate {cells} voxels")]
    AllocationFailed {
        /// The number of cells that failed to be allocated.
        cells: usize,
    },
}
