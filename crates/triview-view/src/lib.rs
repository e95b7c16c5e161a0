//! Three-view silhouette projection of the occupancy grid.
#![forbid(unsafe_code)]

use triview_grid::{ViewGrid, VoxelGrid};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// The three orthographic views of a conventional engineering drawing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewDirection {
    Front,
    Side,
    Top,
}

impl ViewDirection {
    pub const ALL: [ViewDirection; 3] = [ViewDirection::Front, ViewDirection::Side, ViewDirection::Top];

    /// Axis layout of the view. Rows run along the outer axis, columns
    /// along the inner axis, and the scan collapses the projection axis.
    /// Reversal flags orient each matrix the way the drawing reads.
    pub fn axes(self) -> ViewAxes {
        match self {
            ViewDirection::Front => ViewAxes {
                outer: Axis::Y,
                inner: Axis::X,
                proj: Axis::Z,
                outer_reversed: true,
                inner_reversed: false,
            },
            ViewDirection::Side => ViewAxes {
                outer: Axis::Y,
                inner: Axis::Z,
                proj: Axis::X,
                outer_reversed: true,
                inner_reversed: true,
            },
            ViewDirection::Top => ViewAxes {
                outer: Axis::Z,
                inner: Axis::X,
                proj: Axis::Y,
                outer_reversed: false,
                inner_reversed: false,
            },
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct ViewAxes {
    pub outer: Axis,
    pub inner: Axis,
    pub proj: Axis,
    pub outer_reversed: bool,
    pub inner_reversed: bool,
}

impl ViewAxes {
    /// Resolve (outer value, inner value, projection value) to grid
    /// coordinates.
    #[inline]
    pub fn cell(&self, outer: usize, inner: usize, proj: usize) -> (usize, usize, usize) {
        let mut x = 0;
        let mut y = 0;
        let mut z = 0;
        for (axis, value) in [(self.outer, outer), (self.inner, inner), (self.proj, proj)] {
            match axis {
                Axis::X => x = value,
                Axis::Y => y = value,
                Axis::Z => z = value,
            }
        }
        (x, y, z)
    }

    #[inline]
    fn outer_value(&self, size: usize, row: usize) -> usize {
        if self.outer_reversed { size - 1 - row } else { row }
    }

    #[inline]
    fn inner_value(&self, size: usize, col: usize) -> usize {
        if self.inner_reversed { size - 1 - col } else { col }
    }
}

/// Anything the projection pass can scan: the live grid or a puzzle
/// target model.
pub trait OccupancySource {
    fn size(&self) -> usize;
    fn occupied(&self, x: usize, y: usize, z: usize) -> bool;
}

impl OccupancySource for VoxelGrid {
    #[inline]
    fn size(&self) -> usize {
        VoxelGrid::size(self)
    }

    #[inline]
    fn occupied(&self, x: usize, y: usize, z: usize) -> bool {
        self.get(x, y, z)
    }
}

/// Boolean silhouette: true where any cell along the projection axis is
/// occupied. Short-circuits on the first hit.
pub fn project_bool(src: &impl OccupancySource, view: ViewDirection) -> ViewGrid<bool> {
    let size = src.size();
    let axes = view.axes();
    let mut out = ViewGrid::new(size);
    for row in 0..size {
        let outer = axes.outer_value(size, row);
        for col in 0..size {
            let inner = axes.inner_value(size, col);
            let hit = (0..size).any(|proj| {
                let (x, y, z) = axes.cell(outer, inner, proj);
                src.occupied(x, y, z)
            });
            out.set(row, col, hit);
        }
    }
    out
}

/// Depth count: how many cells along the projection axis are occupied.
pub fn project_count(src: &impl OccupancySource, view: ViewDirection) -> ViewGrid<u8> {
    let size = src.size();
    let axes = view.axes();
    let mut out = ViewGrid::new(size);
    for row in 0..size {
        let outer = axes.outer_value(size, row);
        for col in 0..size {
            let inner = axes.inner_value(size, col);
            let count = (0..size)
                .filter(|&proj| {
                    let (x, y, z) = axes.cell(outer, inner, proj);
                    src.occupied(x, y, z)
                })
                .count();
            out.set(row, col, count as u8);
        }
    }
    out
}

/// The front/side/top triple derived from one source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewSet<T> {
    pub front: ViewGrid<T>,
    pub side: ViewGrid<T>,
    pub top: ViewGrid<T>,
}

impl<T> ViewSet<T> {
    pub fn get(&self, view: ViewDirection) -> &ViewGrid<T> {
        match view {
            ViewDirection::Front => &self.front,
            ViewDirection::Side => &self.side,
            ViewDirection::Top => &self.top,
        }
    }

    pub fn get_mut(&mut self, view: ViewDirection) -> &mut ViewGrid<T> {
        match view {
            ViewDirection::Front => &mut self.front,
            ViewDirection::Side => &mut self.side,
            ViewDirection::Top => &mut self.top,
        }
    }
}

pub fn project_all_bool(src: &impl OccupancySource) -> ViewSet<bool> {
    ViewSet {
        front: project_bool(src, ViewDirection::Front),
        side: project_bool(src, ViewDirection::Side),
        top: project_bool(src, ViewDirection::Top),
    }
}

pub fn project_all_count(src: &impl OccupancySource) -> ViewSet<u8> {
    ViewSet {
        front: project_count(src, ViewDirection::Front),
        side: project_count(src, ViewDirection::Side),
        top: project_count(src, ViewDirection::Top),
    }
}
