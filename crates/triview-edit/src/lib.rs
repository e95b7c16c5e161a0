//! Placement policy and undo history over the voxel grid.
#![forbid(unsafe_code)]

mod history;

pub use history::{HISTORY_CAP, History};

use triview_grid::{GridPos, VoxelGrid};

/// How requested cells resolve to concrete mutations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlacementMode {
    /// Blocks auto-stack bottom-up per column; no floating blocks.
    Gravity,
    /// Any cell on the active layer is addressable; blocks may float.
    Free,
}

/// Why a requested mutation was not applied. Rejections are silent by
/// design: no history entry, no grid change, never an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reject {
    OutOfBounds,
    ColumnFull,
    Occupied,
    Empty,
    NotTop,
    NoActiveLayer,
}

/// Outcome of a placement-policy call. A mutation either fully succeeds
/// (snapshot taken, cell flipped) or leaves grid and history untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MutationResult {
    Applied { cell: GridPos },
    Rejected(Reject),
}

impl MutationResult {
    #[inline]
    pub fn applied(&self) -> bool {
        matches!(self, MutationResult::Applied { .. })
    }

    #[inline]
    pub fn cell(&self) -> Option<GridPos> {
        match self {
            MutationResult::Applied { cell } => Some(*cell),
            MutationResult::Rejected(_) => None,
        }
    }
}

fn apply_set(
    grid: &mut VoxelGrid,
    history: &mut History,
    cell: GridPos,
    value: bool,
) -> MutationResult {
    history.save_state(grid);
    grid.set(cell.x, cell.y, cell.z, value);
    MutationResult::Applied { cell }
}

/// Gravity add at a ground target: stack onto the column at (x, z).
pub fn add_at_column(grid: &mut VoxelGrid, history: &mut History, x: usize, z: usize) -> MutationResult {
    let size = grid.size();
    if x >= size || z >= size {
        return MutationResult::Rejected(Reject::OutOfBounds);
    }
    let count = grid.column_count(x, z);
    if count >= size {
        return MutationResult::Rejected(Reject::ColumnFull);
    }
    // Columns are gap-free, so the stack height is the next free y.
    apply_set(grid, history, GridPos::new(x, count, z), true)
}

/// Gravity add when the user targeted an existing block: place directly
/// above it.
pub fn add_above(grid: &mut VoxelGrid, history: &mut History, x: usize, y: usize, z: usize) -> MutationResult {
    let size = grid.size();
    if x >= size || y >= size || z >= size {
        return MutationResult::Rejected(Reject::OutOfBounds);
    }
    let above = y + 1;
    if above >= size {
        return MutationResult::Rejected(Reject::ColumnFull);
    }
    if grid.get(x, above, z) {
        return MutationResult::Rejected(Reject::Occupied);
    }
    apply_set(grid, history, GridPos::new(x, above, z), true)
}

/// Free add at an absolute y (the caller has already resolved the active
/// layer to a grid coordinate).
pub fn add_at_layer(grid: &mut VoxelGrid, history: &mut History, x: usize, y: usize, z: usize) -> MutationResult {
    if !grid.in_bounds(x, y, z) {
        return MutationResult::Rejected(Reject::OutOfBounds);
    }
    if grid.get(x, y, z) {
        return MutationResult::Rejected(Reject::Occupied);
    }
    apply_set(grid, history, GridPos::new(x, y, z), true)
}

/// Gravity remove: clear the highest occupied cell of the column at
/// (x, z). Only the top of a stack is ever removable.
pub fn remove_top(grid: &mut VoxelGrid, history: &mut History, x: usize, z: usize) -> MutationResult {
    let size = grid.size();
    if x >= size || z >= size {
        return MutationResult::Rejected(Reject::OutOfBounds);
    }
    match grid.column_top(x, z) {
        Some(top) => apply_set(grid, history, GridPos::new(x, top, z), false),
        None => MutationResult::Rejected(Reject::Empty),
    }
}

/// Free remove: clear the exact cell if it is occupied. Removing an empty
/// cell is a no-op with no history entry.
pub fn remove_at(grid: &mut VoxelGrid, history: &mut History, x: usize, y: usize, z: usize) -> MutationResult {
    if !grid.in_bounds(x, y, z) {
        return MutationResult::Rejected(Reject::OutOfBounds);
    }
    if !grid.get(x, y, z) {
        return MutationResult::Rejected(Reject::Empty);
    }
    apply_set(grid, history, GridPos::new(x, y, z), false)
}

/// True iff no occupied cell sits above (x, y, z) in its column. Gates
/// removal in gravity mode so stacks never end up floating.
pub fn is_top(grid: &VoxelGrid, x: usize, y: usize, z: usize) -> bool {
    ((y + 1)..grid.size()).all(|above| !grid.get(x, above, z))
}

/// Undoable wipe of the whole workspace. Clearing an already-empty grid
/// takes no snapshot.
pub fn clear_workspace(grid: &mut VoxelGrid, history: &mut History) -> bool {
    if grid.is_empty() {
        return false;
    }
    history.save_state(grid);
    grid.clear();
    true
}
