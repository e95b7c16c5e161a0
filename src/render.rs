//! ASCII rendering of the three views and level overlays.

use triview_edit::PlacementMode;
use triview_grid::{ViewGrid, VoxelGrid};
use triview_level::{LevelKind, LevelSession};
use triview_view::{ViewDirection, project_all_bool, project_all_count};

use crate::workspace::WorkspaceSession;

fn view_label(view: ViewDirection) -> &'static str {
    match view {
        ViewDirection::Front => "front",
        ViewDirection::Side => "side",
        ViewDirection::Top => "top",
    }
}

fn bool_rows(m: &ViewGrid<bool>) -> Vec<String> {
    (0..m.size())
        .map(|r| {
            (0..m.size())
                .map(|c| if m.at(r, c) { '#' } else { '.' })
                .collect()
        })
        .collect()
}

/// Lay the three matrices out side by side under their labels.
fn side_by_side(blocks: [(&str, Vec<String>); 3]) -> String {
    let mut out = String::new();
    let width = blocks
        .iter()
        .map(|(_, rows)| rows.iter().map(|r| r.len()).max().unwrap_or(0).max(5))
        .collect::<Vec<_>>();
    for (i, (label, _)) in blocks.iter().enumerate() {
        out.push_str(&format!("{:<w$}   ", label, w = width[i]));
    }
    out.push('\n');
    let rows = blocks[0].1.len();
    for r in 0..rows {
        for (i, (_, body)) in blocks.iter().enumerate() {
            let row = body.get(r).map(String::as_str).unwrap_or("");
            out.push_str(&format!("{:<w$}   ", row, w = width[i]));
        }
        out.push('\n');
    }
    out
}

/// Plain workspace silhouettes.
pub fn render_views(grid: &VoxelGrid) -> String {
    let views = project_all_bool(grid);
    side_by_side([
        (view_label(ViewDirection::Front), bool_rows(&views.front)),
        (view_label(ViewDirection::Side), bool_rows(&views.side)),
        (view_label(ViewDirection::Top), bool_rows(&views.top)),
    ])
}

/// Level overlay. Silhouette levels mark each cell against the target:
/// `#` match, `!` extra (current only), `o` missing (target only), `.`
/// neither. Counts levels print current/target depth pairs.
pub fn render_level_views(grid: &VoxelGrid, level: &LevelSession) -> String {
    match level.kind() {
        LevelKind::Silhouette => {
            let current = project_all_bool(grid);
            let target = level.target_views();
            let overlay = |view: ViewDirection| -> Vec<String> {
                let cur = current.get(view);
                let tgt = target.get(view);
                (0..cur.size())
                    .map(|r| {
                        (0..cur.size())
                            .map(|c| match (tgt.at(r, c), cur.at(r, c)) {
                                (true, true) => '#',
                                (false, true) => '!',
                                (true, false) => 'o',
                                (false, false) => '.',
                            })
                            .collect()
                    })
                    .collect()
            };
            side_by_side([
                (view_label(ViewDirection::Front), overlay(ViewDirection::Front)),
                (view_label(ViewDirection::Side), overlay(ViewDirection::Side)),
                (view_label(ViewDirection::Top), overlay(ViewDirection::Top)),
            ])
        }
        LevelKind::Counts => {
            let current = project_all_count(grid);
            let target = level.target_counts();
            let pairs = |view: ViewDirection| -> Vec<String> {
                let cur = current.get(view);
                let tgt = target.get(view);
                (0..cur.size())
                    .map(|r| {
                        (0..cur.size())
                            .map(|c| {
                                let (cv, tv) = (cur.at(r, c), tgt.at(r, c));
                                if cv == 0 && tv == 0 {
                                    " . ".to_string()
                                } else {
                                    format!("{}/{}", cv, tv)
                                }
                            })
                            .collect::<Vec<_>>()
                            .join(" ")
                    })
                    .collect()
            };
            side_by_side([
                (view_label(ViewDirection::Front), pairs(ViewDirection::Front)),
                (view_label(ViewDirection::Side), pairs(ViewDirection::Side)),
                (view_label(ViewDirection::Top), pairs(ViewDirection::Top)),
            ])
        }
    }
}

/// Y-layer dump, top layer first: the stand-in for the perspective
/// viewport. Rows are z, columns x.
pub fn render_layers(grid: &VoxelGrid) -> String {
    let size = grid.size();
    let mut out = String::new();
    for y in (0..size).rev() {
        out.push_str(&format!("layer y={}\n", y));
        for z in 0..size {
            for x in 0..size {
                out.push(if grid.get(x, y, z) { '#' } else { '.' });
            }
            out.push('\n');
        }
    }
    out
}

pub fn describe_layer(session: &WorkspaceSession) -> String {
    match (session.mode(), session.active_layer()) {
        (PlacementMode::Gravity, _) => "n/a (gravity mode)".to_string(),
        (PlacementMode::Free, 0) => "none".to_string(),
        (PlacementMode::Free, k) => format!("{} (y={})", k, k - 1),
    }
}
