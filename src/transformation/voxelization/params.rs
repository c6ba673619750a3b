use crate::bounding_volume::Aabb;

/// Controls how the cells not crossed by the boundary are labeled.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum FillMode {
    /// Only boundary cells are computed: every other cell is `Outside`.
    SurfaceOnly,
    /// The exterior is flood-filled from a single cell on the outer shell of the grid
    /// (the one with the smallest linear index). Every cell it cannot reach is `Inside`.
    #[default]
    FloodFill,
    /// The exterior is flood-filled from every non-boundary cell on the outer shell of the
    /// grid. Every cell it cannot reach is `Inside`.
    ///
    /// Unlike [`FillMode::FloodFill`], this also reaches exterior regions the boundary
    /// separates from each other.
    FloodFillFromShell,
}

/// Parameters of the voxelization of a polygonal boundary.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct VoxelizationParams {
    /// The number of cells along the axis of largest extent.
    pub max_voxels_per_side: u32,
    /// How the cells not crossed by the boundary are labeled.
    pub fill_mode: FillMode,
    /// The volume to voxelize. Defaults to the bounding box of the boundary.
    pub volume: Option<Aabb>,
}

impl VoxelizationParams {
    /// Default parameters with the given resolution.
    pub fn new(max_voxels_per_side: u32) -> Self {
        Self {
            max_voxels_per_side,
            fill_mode: FillMode::default(),
            volume: None,
        }
    }

    /// Sets the fill mode.
    pub fn with_fill_mode(mut self, fill_mode: FillMode) -> Self {
        self.fill_mode = fill_mode;
        self
    }

    /// Voxelizes the given volume instead of the bounding box of the boundary.
    pub fn with_volume(mut self, volume: Aabb) -> Self {
        self.volume = Some(volume);
        self
    }
}
