//! Occupancy grid and 2D view matrices for the block editor.
#![forbid(unsafe_code)]

/// Integer cell coordinate inside the workspace, each component in `[0, size)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridPos {
    pub x: usize,
    pub y: usize,
    pub z: usize,
}

impl GridPos {
    #[inline]
    pub const fn new(x: usize, y: usize, z: usize) -> Self {
        Self { x, y, z }
    }
}

/// Cubic boolean occupancy volume. The single source of truth for the
/// workspace; renderers and projections derive everything from it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VoxelGrid {
    size: usize,
    cells: Vec<bool>,
}

impl VoxelGrid {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![false; size * size * size],
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn idx(&self, x: usize, y: usize, z: usize) -> usize {
        (y * self.size + z) * self.size + x
    }

    #[inline]
    pub fn in_bounds(&self, x: usize, y: usize, z: usize) -> bool {
        x < self.size && y < self.size && z < self.size
    }

    /// Occupancy at a cell. Out-of-range reads are false rather than a
    /// panic; callers bound-check but the grid stays forgiving.
    #[inline]
    pub fn get(&self, x: usize, y: usize, z: usize) -> bool {
        if !self.in_bounds(x, y, z) {
            return false;
        }
        self.cells[self.idx(x, y, z)]
    }

    /// Direct cell write. Out-of-range writes are dropped.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, z: usize, value: bool) {
        if !self.in_bounds(x, y, z) {
            return;
        }
        let i = self.idx(x, y, z);
        self.cells[i] = value;
    }

    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        !self.cells.iter().any(|&c| c)
    }

    pub fn block_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Number of occupied cells in the y-column at (x, z).
    pub fn column_count(&self, x: usize, z: usize) -> usize {
        (0..self.size).filter(|&y| self.get(x, y, z)).count()
    }

    /// Highest occupied y in the column at (x, z), if any.
    pub fn column_top(&self, x: usize, z: usize) -> Option<usize> {
        (0..self.size).rev().find(|&y| self.get(x, y, z))
    }

    /// Iterate all occupied cells in storage order.
    pub fn occupied(&self) -> impl Iterator<Item = GridPos> + '_ {
        let size = self.size;
        self.cells.iter().enumerate().filter_map(move |(i, &c)| {
            if !c {
                return None;
            }
            let x = i % size;
            let z = (i / size) % size;
            let y = i / (size * size);
            Some(GridPos::new(x, y, z))
        })
    }
}

/// Flat N×N matrix addressed by (row, col); the result type of a
/// projection pass. Rows follow the view's outer axis, columns the inner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewGrid<T> {
    size: usize,
    cells: Vec<T>,
}

impl<T: Copy + Default> ViewGrid<T> {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![T::default(); size * size],
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn at(&self, row: usize, col: usize) -> T {
        self.cells[row * self.size + col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        self.cells[row * self.size + col] = value;
    }
}
