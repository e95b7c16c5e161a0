//! Puzzle levels: random targets, target projections, completion checks.
#![forbid(unsafe_code)]

use rand::Rng;

use triview_grid::{ViewGrid, VoxelGrid};
use triview_view::{OccupancySource, ViewSet, project_all_bool, project_all_count};

/// How target views are presented: plain silhouettes, or annotated with
/// per-cell depth counts. Completion is judged on silhouettes either way.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LevelKind {
    Silhouette,
    Counts,
}

/// Per-column stack heights; the compact target representation for
/// gravity-mode puzzles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeightMap {
    size: usize,
    heights: Vec<u8>,
}

impl HeightMap {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            heights: vec![0; size * size],
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn height(&self, x: usize, z: usize) -> u8 {
        self.heights[z * self.size + x]
    }

    #[inline]
    pub fn set_height(&mut self, x: usize, z: usize, h: u8) {
        self.heights[z * self.size + x] = h;
    }
}

/// The puzzle's goal volume. Gravity targets store heights, free targets
/// a full occupancy volume.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TargetModel {
    Heights(HeightMap),
    Volume(VoxelGrid),
}

impl OccupancySource for TargetModel {
    #[inline]
    fn size(&self) -> usize {
        match self {
            TargetModel::Heights(h) => h.size(),
            TargetModel::Volume(g) => g.size(),
        }
    }

    #[inline]
    fn occupied(&self, x: usize, y: usize, z: usize) -> bool {
        match self {
            // A stack of height h fills y = 0..h.
            TargetModel::Heights(h) => (h.height(x, z) as usize) > y,
            TargetModel::Volume(g) => g.get(x, y, z),
        }
    }
}

/// Random gravity target: each column is empty with probability 0.25,
/// otherwise exponentially distributed toward short stacks, capped at the
/// grid size.
pub fn generate_height_target(size: usize, rng: &mut impl Rng) -> HeightMap {
    let mut heights = HeightMap::new(size);
    for z in 0..size {
        for x in 0..size {
            let h = if rng.r#gen::<f64>() < 0.25 {
                0.0
            } else {
                let u: f64 = rng.r#gen();
                // ln(0) would blow up; the float min caps it at size anyway.
                let decay = -(u.max(f64::MIN_POSITIVE)).ln() * 0.99;
                (decay.floor() + 1.0).min(size as f64)
            };
            heights.set_height(x, z, h as u8);
        }
    }
    heights
}

/// Random free-mode target: every cell independently occupied with
/// probability 1/size.
pub fn generate_volume_target(size: usize, rng: &mut impl Rng) -> VoxelGrid {
    let p = 1.0 / size as f64;
    let mut grid = VoxelGrid::new(size);
    for z in 0..size {
        for y in 0..size {
            for x in 0..size {
                if rng.r#gen::<f64>() < p {
                    grid.set(x, y, z, true);
                }
            }
        }
    }
    grid
}

/// An active puzzle: the immutable target plus its precomputed
/// projections. Lives until explicitly cleared or the workspace is
/// reconfigured; completion is announced, not a terminal state.
pub struct LevelSession {
    kind: LevelKind,
    target: TargetModel,
    target_views: ViewSet<bool>,
    target_counts: ViewSet<u8>,
    announced: bool,
}

impl LevelSession {
    pub fn new(kind: LevelKind, target: TargetModel) -> Self {
        let target_views = project_all_bool(&target);
        let target_counts = target_counts(&target);
        Self {
            kind,
            target,
            target_views,
            target_counts,
            announced: false,
        }
    }

    #[inline]
    pub fn kind(&self) -> LevelKind {
        self.kind
    }

    #[inline]
    pub fn target(&self) -> &TargetModel {
        &self.target
    }

    #[inline]
    pub fn target_views(&self) -> &ViewSet<bool> {
        &self.target_views
    }

    #[inline]
    pub fn target_counts(&self) -> &ViewSet<u8> {
        &self.target_counts
    }

    /// Completion predicate: boolean silhouette equality on all three
    /// views. The counts kind changes what gets rendered, not what
    /// counts as done.
    pub fn is_complete(&self, grid: &VoxelGrid) -> bool {
        project_all_bool(grid) == self.target_views
    }

    /// Re-validate after a grid change. Returns true exactly when the
    /// puzzle transitions into the completed state, so the caller can
    /// announce it once; editing past completion re-arms the check.
    pub fn recheck(&mut self, grid: &VoxelGrid) -> bool {
        let complete = self.is_complete(grid);
        let newly = complete && !self.announced;
        self.announced = complete;
        newly
    }
}

/// Count projections of a target. For gravity targets the top view is the
/// stored column height read back directly; the scan would derive the
/// same number.
fn target_counts(target: &TargetModel) -> ViewSet<u8> {
    let mut counts = project_all_count(target);
    if let TargetModel::Heights(h) = target {
        let size = h.size();
        let mut top = ViewGrid::new(size);
        for z in 0..size {
            for x in 0..size {
                top.set(z, x, h.height(x, z));
            }
        }
        counts.top = top;
    }
    counts
}
