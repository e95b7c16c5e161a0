use std::collections::VecDeque;

use triview_grid::VoxelGrid;

/// Maximum retained undo entries; the oldest is evicted first.
pub const HISTORY_CAP: usize = 50;

/// Bounded undo/redo stacks of full grid snapshots. A snapshot is taken
/// synchronously before each mutation, so restore order is exactly LIFO
/// per stack.
#[derive(Default)]
pub struct History {
    undo: VecDeque<VoxelGrid>,
    redo: Vec<VoxelGrid>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a deep copy of the current grid onto the undo stack and
    /// invalidate any redo entries. Called before the mutation lands.
    pub fn save_state(&mut self, grid: &VoxelGrid) {
        self.undo.push_back(grid.clone());
        if self.undo.len() > HISTORY_CAP {
            self.undo.pop_front();
        }
        self.redo.clear();
    }

    /// Restore the most recent snapshot, moving the current grid onto the
    /// redo stack. Returns false when there is nothing to undo.
    pub fn undo(&mut self, grid: &mut VoxelGrid) -> bool {
        let Some(prev) = self.undo.pop_back() else {
            return false;
        };
        self.redo.push(std::mem::replace(grid, prev));
        true
    }

    /// Re-apply the most recently undone state. Returns false when there
    /// is nothing to redo.
    pub fn redo(&mut self, grid: &mut VoxelGrid) -> bool {
        let Some(next) = self.redo.pop() else {
            return false;
        };
        self.undo.push_back(std::mem::replace(grid, next));
        true
    }

    /// Drop both stacks. History does not survive a resize, a mode
    /// switch, or an explicit workspace clear of the session.
    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }

    #[inline]
    pub fn undo_len(&self) -> usize {
        self.undo.len()
    }

    #[inline]
    pub fn redo_len(&self) -> usize {
        self.redo.len()
    }
}
