use proptest::prelude::*;
use triview_grid::{GridPos, ViewGrid, VoxelGrid};

fn dim() -> impl Strategy<Value = usize> {
    3usize..=9
}

proptest! {
    // Every in-bounds cell maps to a distinct storage slot
    #[test]
    fn set_get_round_trip(size in dim(), x in 0usize..9, y in 0usize..9, z in 0usize..9) {
        prop_assume!(x < size && y < size && z < size);
        let mut g = VoxelGrid::new(size);
        prop_assert!(!g.get(x, y, z));
        g.set(x, y, z, true);
        prop_assert!(g.get(x, y, z));
        prop_assert_eq!(g.block_count(), 1);
        g.set(x, y, z, false);
        prop_assert!(g.is_empty());
    }

    // Out-of-range coordinates read false and writes are dropped
    #[test]
    fn out_of_range_is_forgiving(size in dim(), x in 0usize..32, y in 0usize..32, z in 0usize..32) {
        prop_assume!(x >= size || y >= size || z >= size);
        let mut g = VoxelGrid::new(size);
        prop_assert!(!g.get(x, y, z));
        g.set(x, y, z, true);
        prop_assert!(g.is_empty());
    }

    // Clones are deep: mutating the copy leaves the original untouched
    #[test]
    fn clone_is_deep(size in dim(), x in 0usize..9, z in 0usize..9) {
        prop_assume!(x < size && z < size);
        let mut g = VoxelGrid::new(size);
        g.set(x, 0, z, true);
        let snapshot = g.clone();
        g.set(x, 0, z, false);
        prop_assert!(snapshot.get(x, 0, z));
        prop_assert!(!g.get(x, 0, z));
        prop_assert_ne!(snapshot, g);
    }

    // occupied() yields exactly the set cells
    #[test]
    fn occupied_matches_set_cells(size in dim(), cells in prop::collection::hash_set((0usize..9, 0usize..9, 0usize..9), 0..12)) {
        let mut g = VoxelGrid::new(size);
        let mut expect: Vec<GridPos> = Vec::new();
        for &(x, y, z) in &cells {
            if x < size && y < size && z < size {
                g.set(x, y, z, true);
                expect.push(GridPos::new(x, y, z));
            }
        }
        let mut got: Vec<GridPos> = g.occupied().collect();
        let key = |p: &GridPos| (p.x, p.y, p.z);
        got.sort_by_key(key);
        expect.sort_by_key(key);
        expect.dedup();
        prop_assert_eq!(got, expect);
    }

    // column_count and column_top agree with per-cell reads
    #[test]
    fn column_scans_agree(size in dim(), ys in prop::collection::hash_set(0usize..9, 0..9)) {
        let mut g = VoxelGrid::new(size);
        let mut in_col: Vec<usize> = ys.iter().copied().filter(|&y| y < size).collect();
        in_col.sort_unstable();
        for &y in &in_col {
            g.set(1, y, 1, true);
        }
        prop_assert_eq!(g.column_count(1, 1), in_col.len());
        prop_assert_eq!(g.column_top(1, 1), in_col.last().copied());
    }
}

#[test]
fn view_grid_indexing() {
    let mut v: ViewGrid<u8> = ViewGrid::new(3);
    assert_eq!(v.size(), 3);
    v.set(0, 2, 7);
    v.set(2, 0, 9);
    assert_eq!(v.at(0, 2), 7);
    assert_eq!(v.at(2, 0), 9);
    assert_eq!(v.at(1, 1), 0);
}

#[test]
fn fresh_grid_is_empty() {
    let g = VoxelGrid::new(5);
    assert_eq!(g.size(), 5);
    assert!(g.is_empty());
    assert_eq!(g.block_count(), 0);
    assert_eq!(g.column_top(0, 0), None);
}
