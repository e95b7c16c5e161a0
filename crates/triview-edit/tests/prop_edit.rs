use proptest::prelude::*;
use triview_edit::{History, add_above, add_at_column, remove_top};
use triview_grid::VoxelGrid;

#[derive(Clone, Copy, Debug)]
enum GravityOp {
    Add { x: usize, z: usize },
    AddAbove { x: usize, y: usize, z: usize },
    RemoveTop { x: usize, z: usize },
}

fn gravity_op() -> impl Strategy<Value = GravityOp> {
    prop_oneof![
        (0usize..6, 0usize..6).prop_map(|(x, z)| GravityOp::Add { x, z }),
        (0usize..6, 0usize..6, 0usize..6).prop_map(|(x, y, z)| GravityOp::AddAbove { x, y, z }),
        (0usize..6, 0usize..6).prop_map(|(x, z)| GravityOp::RemoveTop { x, z }),
    ]
}

fn no_floating_blocks(grid: &VoxelGrid) -> bool {
    let size = grid.size();
    for z in 0..size {
        for x in 0..size {
            for y in 1..size {
                if grid.get(x, y, z) && !grid.get(x, y - 1, z) {
                    return false;
                }
            }
        }
    }
    true
}

proptest! {
    // Gravity stacking invariant: no occupied cell over an empty one,
    // after any sequence of gravity-mode mutations.
    #[test]
    fn gravity_mutations_never_float(size in 3usize..=6, ops in prop::collection::vec(gravity_op(), 0..80)) {
        let mut grid = VoxelGrid::new(size);
        let mut history = History::new();
        for op in ops {
            match op {
                GravityOp::Add { x, z } => {
                    add_at_column(&mut grid, &mut history, x, z);
                }
                GravityOp::AddAbove { x, y, z } => {
                    // add-above only fires on an existing block in practice;
                    // feed it occupied cells when there is one.
                    if grid.get(x, y.min(size.saturating_sub(1)), z) {
                        add_above(&mut grid, &mut history, x, y.min(size - 1), z);
                    }
                }
                GravityOp::RemoveTop { x, z } => {
                    remove_top(&mut grid, &mut history, x, z);
                }
            }
            prop_assert!(no_floating_blocks(&grid));
        }
    }

    // History round-trip: N undos then N redos restores the exact grid.
    #[test]
    fn undo_redo_round_trip(size in 3usize..=6, ops in prop::collection::vec(gravity_op(), 1..40)) {
        let mut grid = VoxelGrid::new(size);
        let mut history = History::new();
        let mut applied = 0usize;
        for op in ops {
            let r = match op {
                GravityOp::Add { x, z } => add_at_column(&mut grid, &mut history, x, z),
                GravityOp::AddAbove { x, y, z } => add_above(&mut grid, &mut history, x, y.min(size - 1), z),
                GravityOp::RemoveTop { x, z } => remove_top(&mut grid, &mut history, x, z),
            };
            if r.applied() {
                applied += 1;
            }
        }
        prop_assert_eq!(history.undo_len(), applied.min(triview_edit::HISTORY_CAP));

        let final_state = grid.clone();
        let mut undone = 0;
        while history.undo(&mut grid) {
            undone += 1;
        }
        for _ in 0..undone {
            prop_assert!(history.redo(&mut grid));
        }
        prop_assert_eq!(grid, final_state);
    }

    // Rejected mutations leave no trace: grid and history byte-identical.
    #[test]
    fn rejects_have_no_side_effects(size in 3usize..=4, ops in prop::collection::vec(gravity_op(), 0..40)) {
        let mut grid = VoxelGrid::new(size);
        let mut history = History::new();
        for op in ops {
            let before_grid = grid.clone();
            let before_undo = history.undo_len();
            let r = match op {
                GravityOp::Add { x, z } => add_at_column(&mut grid, &mut history, x, z),
                GravityOp::AddAbove { x, y, z } => add_above(&mut grid, &mut history, x, y, z),
                GravityOp::RemoveTop { x, z } => remove_top(&mut grid, &mut history, x, z),
            };
            if !r.applied() {
                prop_assert_eq!(&grid, &before_grid);
                prop_assert_eq!(history.undo_len(), before_undo);
            }
        }
    }
}
