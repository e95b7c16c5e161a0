//! The editing session: grid, mode, active layer, and history in one place.

use triview_edit::{
    History, MutationResult, PlacementMode, Reject, add_above, add_at_column, add_at_layer,
    clear_workspace, is_top, remove_at, remove_top,
};
use triview_grid::VoxelGrid;

/// Where a block should go. `Column` is a ground/plane target (gravity
/// stacks onto it, free mode resolves the active layer); `Cell` is an
/// existing-block target in gravity mode or an explicit cell in free mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaceRequest {
    Column { x: usize, z: usize },
    Cell { x: usize, y: usize, z: usize },
}

/// Which block should go away. `Column` targets the top of a stack
/// (gravity) or the active-layer cell (free); `Cell` an exact cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RemoveRequest {
    Column { x: usize, z: usize },
    Cell { x: usize, y: usize, z: usize },
}

/// Owns all mutable workspace state. Every grid change funnels through
/// here; collaborators only read.
pub struct WorkspaceSession {
    grid: VoxelGrid,
    mode: PlacementMode,
    active_layer: usize,
    history: History,
}

impl WorkspaceSession {
    pub fn new(size: usize, mode: PlacementMode) -> Self {
        Self {
            grid: VoxelGrid::new(size),
            mode,
            active_layer: 0,
            history: History::new(),
        }
    }

    #[inline]
    pub fn grid(&self) -> &VoxelGrid {
        &self.grid
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.grid.size()
    }

    #[inline]
    pub fn mode(&self) -> PlacementMode {
        self.mode
    }

    /// Active layer in UI terms: 0 = no editable layer, k >= 1 edits
    /// absolute y = k - 1. Only meaningful in free mode.
    #[inline]
    pub fn active_layer(&self) -> usize {
        self.active_layer
    }

    pub fn place_block(&mut self, req: PlaceRequest) -> MutationResult {
        match (self.mode, req) {
            (PlacementMode::Gravity, PlaceRequest::Column { x, z }) => {
                add_at_column(&mut self.grid, &mut self.history, x, z)
            }
            (PlacementMode::Gravity, PlaceRequest::Cell { x, y, z }) => {
                // Add-above only makes sense on an existing block.
                if !self.grid.get(x, y, z) {
                    return MutationResult::Rejected(Reject::Empty);
                }
                add_above(&mut self.grid, &mut self.history, x, y, z)
            }
            (PlacementMode::Free, PlaceRequest::Column { x, z }) => match self.layer_y() {
                Some(y) => add_at_layer(&mut self.grid, &mut self.history, x, y, z),
                None => MutationResult::Rejected(Reject::NoActiveLayer),
            },
            (PlacementMode::Free, PlaceRequest::Cell { x, y, z }) => {
                add_at_layer(&mut self.grid, &mut self.history, x, y, z)
            }
        }
    }

    pub fn remove_block(&mut self, req: RemoveRequest) -> MutationResult {
        match (self.mode, req) {
            (PlacementMode::Gravity, RemoveRequest::Column { x, z }) => {
                remove_top(&mut self.grid, &mut self.history, x, z)
            }
            (PlacementMode::Gravity, RemoveRequest::Cell { x, y, z }) => {
                if !self.grid.get(x, y, z) {
                    return MutationResult::Rejected(Reject::Empty);
                }
                // Only the top of a stack is removable; anything else
                // would leave blocks floating.
                if !is_top(&self.grid, x, y, z) {
                    return MutationResult::Rejected(Reject::NotTop);
                }
                remove_top(&mut self.grid, &mut self.history, x, z)
            }
            (PlacementMode::Free, RemoveRequest::Column { x, z }) => match self.layer_y() {
                Some(y) => remove_at(&mut self.grid, &mut self.history, x, y, z),
                None => MutationResult::Rejected(Reject::NoActiveLayer),
            },
            (PlacementMode::Free, RemoveRequest::Cell { x, y, z }) => {
                remove_at(&mut self.grid, &mut self.history, x, y, z)
            }
        }
    }

    #[inline]
    pub fn query_occupancy(&self, x: usize, y: usize, z: usize) -> bool {
        self.grid.get(x, y, z)
    }

    #[inline]
    pub fn query_is_top(&self, x: usize, y: usize, z: usize) -> bool {
        is_top(&self.grid, x, y, z)
    }

    pub fn undo(&mut self) -> bool {
        self.history.undo(&mut self.grid)
    }

    pub fn redo(&mut self) -> bool {
        self.history.redo(&mut self.grid)
    }

    /// Undoable wipe; false when the grid was already empty.
    pub fn clear(&mut self) -> bool {
        clear_workspace(&mut self.grid, &mut self.history)
    }

    /// Switching policy resets the workspace: fresh grid, no history,
    /// layer back to "none".
    pub fn set_mode(&mut self, mode: PlacementMode) {
        self.mode = mode;
        self.grid = VoxelGrid::new(self.grid.size());
        self.history.clear();
        self.active_layer = 0;
    }

    /// Select the editable layer, 0..=size. Does not disturb the grid;
    /// free-mode structures span layers.
    pub fn set_active_layer(&mut self, layer: usize) -> bool {
        if layer > self.grid.size() {
            return false;
        }
        self.active_layer = layer;
        true
    }

    pub fn step_layer(&mut self, delta: i32) -> usize {
        let next = self.active_layer as i32 + delta;
        self.active_layer = next.clamp(0, self.grid.size() as i32) as usize;
        self.active_layer
    }

    /// Replace the grid wholesale. History never survives a dimension
    /// change.
    pub fn resize(&mut self, size: usize) {
        self.grid = VoxelGrid::new(size);
        self.history.clear();
        self.active_layer = self.active_layer.min(size);
    }

    fn layer_y(&self) -> Option<usize> {
        if self.active_layer == 0 {
            None
        } else {
            Some(self.active_layer - 1)
        }
    }
}
