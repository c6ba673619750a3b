use super::{VoxelGrid, VoxelLabel};
use std::collections::VecDeque;

impl VoxelGrid {
    /// Labels `Outside` every `Unknown` cell reachable from one of the `seeds` through
    /// face-adjacent `Unknown` cells, seeds included.
    ///
    /// Seeds that are not `Unknown` are ignored. Returns the number of cells labeled.
    pub(super) fn flood_fill_outside(&mut self, seeds: impl IntoIterator<Item = usize>) -> usize {
        let mut queue = VecDeque::new();

        for seed in seeds {
            if self.labels[seed] == VoxelLabel::Unknown {
                self.labels[seed] = VoxelLabel::Outside;
                queue.push_back(seed);
            }
        }

        let mut num_filled = queue.len();

        while let Some(id) = queue.pop_front() {
            let [i, j, k] = self.coords_of(id);

            for neighbor in self.neighbors6(i, j, k) {
                if self.labels[neighbor] == VoxelLabel::Unknown {
                    self.labels[neighbor] = VoxelLabel::Outside;
                    queue.push_back(neighbor);
                    num_filled += 1;
                }
            }
        }

        num_filled
    }

    /// The linear indices of every `Unknown` cell on the outer shell of the grid.
    pub(super) fn unknown_shell_cells(&self) -> Vec<usize> {
        self.iter()
            .enumerate()
            .filter(|(_, ([i, j, k], label))| {
                *label == VoxelLabel::Unknown && self.is_on_shell(*i, *j, *k)
            })
            .map(|(id, _)| id)
            .collect()
    }

    /// Replaces every remaining `Unknown` label by `label`. Returns the number of cells
    /// relabeled.
    pub(super) fn resolve_unknown(&mut self, label: VoxelLabel) -> usize {
        let mut num_resolved = 0;

        for cell in &mut self.labels {
            if *cell == VoxelLabel::Unknown {
                *cell = label;
                num_resolved += 1;
            }
        }

        num_resolved
    }
}
