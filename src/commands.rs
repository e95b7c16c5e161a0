//! Text command parsing for the interactive loop.

use triview_edit::PlacementMode;
use triview_level::LevelKind;

use crate::event::Event;
use crate::workspace::{PlaceRequest, RemoveRequest};

pub enum Command {
    Emit(Event),
    Help,
    Quit,
    Nothing,
}

pub const HELP: &str = "\
commands:
  add X Z          place a block (gravity: stack on column; free: active layer)
  add X Y Z        place at a cell (gravity: above the block at X Y Z)
  rm X Z           remove (gravity: top of column; free: active-layer cell)
  rm X Y Z         remove an exact cell (gravity: top-of-stack only)
  undo / redo      step through history (50 entries)
  clear            wipe the workspace (undoable)
  mode MODE        gravity | free (resets the workspace)
  layer N|+|-      select the free-mode layer (0 = none, N edits y=N-1)
  size N           resize the workspace, 3..=9 (resets everything)
  level [KIND]     new puzzle: silhouette | counts
  nolevel          drop the active puzzle
  check            report puzzle completion
  views            print the three views
  layers           print the grid layer by layer
  help / quit
";

fn parse_coords(args: &[&str]) -> Result<Vec<usize>, String> {
    args.iter()
        .map(|a| {
            a.parse::<usize>()
                .map_err(|_| format!("not a coordinate: {}", a))
        })
        .collect()
}

/// Parse one input line. `default_level` fills in a bare `level` command.
pub fn parse(line: &str, default_level: LevelKind) -> Result<Command, String> {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Ok(Command::Nothing);
    };
    let args: Vec<&str> = words.collect();

    let event = match head {
        "add" => match parse_coords(&args)?.as_slice() {
            [x, z] => Event::PlaceRequested {
                req: PlaceRequest::Column { x: *x, z: *z },
            },
            [x, y, z] => Event::PlaceRequested {
                req: PlaceRequest::Cell { x: *x, y: *y, z: *z },
            },
            _ => return Err("usage: add X Z | add X Y Z".into()),
        },
        "rm" => match parse_coords(&args)?.as_slice() {
            [x, z] => Event::RemoveRequested {
                req: RemoveRequest::Column { x: *x, z: *z },
            },
            [x, y, z] => Event::RemoveRequested {
                req: RemoveRequest::Cell { x: *x, y: *y, z: *z },
            },
            _ => return Err("usage: rm X Z | rm X Y Z".into()),
        },
        "undo" => Event::UndoRequested,
        "redo" => Event::RedoRequested,
        "clear" => Event::ClearRequested,
        "mode" => match args.as_slice() {
            ["gravity"] => Event::ModeChangeRequested {
                mode: PlacementMode::Gravity,
            },
            ["free"] => Event::ModeChangeRequested {
                mode: PlacementMode::Free,
            },
            _ => return Err("usage: mode gravity|free".into()),
        },
        "layer" => match args.as_slice() {
            ["+"] => Event::LayerStepRequested { delta: 1 },
            ["-"] => Event::LayerStepRequested { delta: -1 },
            [n] => Event::ActiveLayerChangeRequested {
                layer: n.parse().map_err(|_| format!("not a layer: {}", n))?,
            },
            _ => return Err("usage: layer N | layer + | layer -".into()),
        },
        "size" => match parse_coords(&args)?.as_slice() {
            [n] => Event::ResizeRequested { size: *n },
            _ => return Err("usage: size N".into()),
        },
        "level" => match args.as_slice() {
            [] => Event::LevelGenerateRequested {
                kind: default_level,
            },
            ["silhouette"] => Event::LevelGenerateRequested {
                kind: LevelKind::Silhouette,
            },
            ["counts"] => Event::LevelGenerateRequested {
                kind: LevelKind::Counts,
            },
            _ => return Err("usage: level [silhouette|counts]".into()),
        },
        "nolevel" => Event::LevelClearRequested,
        "check" => Event::CompletionCheckRequested,
        "views" => Event::ViewsRequested,
        "layers" => Event::LayersRequested,
        "help" => return Ok(Command::Help),
        "quit" | "exit" => return Ok(Command::Quit),
        other => return Err(format!("unknown command: {} (try help)", other)),
    };
    Ok(Command::Emit(event))
}
