//! Event pump: applies editor intents to the session and levels.

use rand::SeedableRng;
use rand::rngs::StdRng;

use triview_edit::{MutationResult, PlacementMode};
use triview_level::{LevelKind, LevelSession, TargetModel, generate_height_target, generate_volume_target};

use crate::config::EditorConfig;
use crate::event::{ChangeCause, Event, EventEnvelope, EventQueue};
use crate::render;
use crate::workspace::WorkspaceSession;

/// Workspace sizes the editor accepts, matching the size shortcuts.
pub const MIN_SIZE: usize = 3;
pub const MAX_SIZE: usize = 9;

pub struct App {
    pub session: WorkspaceSession,
    pub level: Option<LevelSession>,
    pub queue: EventQueue,
    rng: StdRng,
    evt_processed_total: usize,
}

impl App {
    pub fn new(cfg: &EditorConfig) -> Self {
        let rng = match cfg.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            session: WorkspaceSession::new(cfg.size, cfg.mode.into()),
            level: None,
            queue: EventQueue::new(),
            rng,
            evt_processed_total: 0,
        }
    }

    /// Drain everything due this tick, then advance. Derived events
    /// (GridChanged) land in the same tick so one gesture applies
    /// atomically: mutation, reprojection, completion check, in order.
    pub fn pump(&mut self) {
        while let Some(env) = self.queue.pop_ready() {
            self.handle_event(env);
            self.evt_processed_total += 1;
        }
        self.queue.advance_tick();
    }

    pub fn events_processed(&self) -> usize {
        self.evt_processed_total
    }

    fn handle_event(&mut self, env: EventEnvelope) {
        let tick = env.tick;
        match env.kind {
            Event::PlaceRequested { req } => {
                let r = self.session.place_block(req);
                log::info!(target: "events", "[tick {}] PlaceRequested {:?} -> {:?}", tick, req, r);
                self.after_mutation(r, ChangeCause::Edit);
            }
            Event::RemoveRequested { req } => {
                let r = self.session.remove_block(req);
                log::info!(target: "events", "[tick {}] RemoveRequested {:?} -> {:?}", tick, req, r);
                self.after_mutation(r, ChangeCause::Edit);
            }
            Event::UndoRequested => {
                let applied = self.session.undo();
                log::info!(target: "events", "[tick {}] UndoRequested applied={}", tick, applied);
                if applied {
                    self.queue.emit_now(Event::GridChanged { cause: ChangeCause::HistoryRestore });
                }
            }
            Event::RedoRequested => {
                let applied = self.session.redo();
                log::info!(target: "events", "[tick {}] RedoRequested applied={}", tick, applied);
                if applied {
                    self.queue.emit_now(Event::GridChanged { cause: ChangeCause::HistoryRestore });
                }
            }
            Event::ClearRequested => {
                let applied = self.session.clear();
                log::info!(target: "events", "[tick {}] ClearRequested applied={}", tick, applied);
                if applied {
                    self.queue.emit_now(Event::GridChanged { cause: ChangeCause::Clear });
                }
            }
            Event::ModeChangeRequested { mode } => {
                log::info!(target: "events", "[tick {}] ModeChangeRequested {:?}", tick, mode);
                self.session.set_mode(mode);
                self.level = None;
                self.queue.emit_now(Event::GridChanged { cause: ChangeCause::Reconfigure });
            }
            Event::ActiveLayerChangeRequested { layer } => {
                let ok = self.session.set_active_layer(layer);
                log::info!(target: "events", "[tick {}] ActiveLayerChangeRequested {} ok={}", tick, layer, ok);
                if !ok {
                    println!("layer {} out of range (0..={})", layer, self.session.size());
                } else {
                    println!("active layer: {}", render::describe_layer(&self.session));
                }
            }
            Event::LayerStepRequested { delta } => {
                let layer = self.session.step_layer(delta);
                log::info!(target: "events", "[tick {}] LayerStepRequested {:+} -> {}", tick, delta, layer);
                println!("active layer: {}", render::describe_layer(&self.session));
            }
            Event::ResizeRequested { size } => {
                if !(MIN_SIZE..=MAX_SIZE).contains(&size) {
                    log::warn!(target: "events", "[tick {}] ResizeRequested {} rejected", tick, size);
                    println!("size must be between {} and {}", MIN_SIZE, MAX_SIZE);
                    return;
                }
                log::info!(target: "events", "[tick {}] ResizeRequested {}", tick, size);
                self.session.resize(size);
                self.level = None;
                self.queue.emit_now(Event::GridChanged { cause: ChangeCause::Reconfigure });
            }
            Event::LevelGenerateRequested { kind } => {
                log::info!(target: "events", "[tick {}] LevelGenerateRequested {:?}", tick, kind);
                self.generate_level(kind);
                self.queue.emit_now(Event::GridChanged { cause: ChangeCause::Clear });
            }
            Event::LevelClearRequested => {
                log::info!(target: "events", "[tick {}] LevelClearRequested active={}", tick, self.level.is_some());
                self.level = None;
                println!("level cleared");
            }
            Event::CompletionCheckRequested => {
                let complete = self
                    .level
                    .as_ref()
                    .map(|l| l.is_complete(self.session.grid()))
                    .unwrap_or(false);
                log::info!(target: "events", "[tick {}] CompletionCheckRequested -> {}", tick, complete);
                match &self.level {
                    Some(_) => println!("level complete: {}", complete),
                    None => println!("no active level"),
                }
            }
            Event::GridChanged { cause } => {
                log::debug!(target: "events", "[tick {}] GridChanged cause={:?} blocks={}", tick, cause, self.session.grid().block_count());
                self.on_grid_changed();
            }
            Event::ViewsRequested => {
                log::trace!(target: "events", "[tick {}] ViewsRequested", tick);
                print!("{}", self.render_views());
            }
            Event::LayersRequested => {
                log::trace!(target: "events", "[tick {}] LayersRequested", tick);
                print!("{}", render::render_layers(self.session.grid()));
            }
        }
    }

    fn after_mutation(&mut self, result: MutationResult, cause: ChangeCause) {
        if result.applied() {
            self.queue.emit_now(Event::GridChanged { cause });
        }
    }

    fn generate_level(&mut self, kind: LevelKind) {
        // A fresh puzzle starts from an empty workspace; the wipe stays
        // undoable like any other mutation.
        self.session.clear();
        let size = self.session.size();
        let target = match self.session.mode() {
            PlacementMode::Gravity => TargetModel::Heights(generate_height_target(size, &mut self.rng)),
            PlacementMode::Free => TargetModel::Volume(generate_volume_target(size, &mut self.rng)),
        };
        self.level = Some(LevelSession::new(kind, target));
        println!("new {:?} level generated; match all three views", kind);
    }

    fn on_grid_changed(&mut self) {
        print!("{}", self.render_views());
        if let Some(level) = self.level.as_mut() {
            if level.recheck(self.session.grid()) {
                log::info!(target: "events", "level complete after {} events", self.evt_processed_total);
                println!("*** level complete! ***");
            }
        }
    }

    fn render_views(&self) -> String {
        match &self.level {
            Some(level) => render::render_level_views(self.session.grid(), level),
            None => render::render_views(self.session.grid()),
        }
    }
}
