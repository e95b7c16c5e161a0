use std::collections::{BTreeMap, VecDeque};

use triview_edit::PlacementMode;
use triview_level::LevelKind;

use crate::workspace::{PlaceRequest, RemoveRequest};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ChangeCause {
    Edit,
    HistoryRestore,
    Clear,
    Reconfigure,
}

#[derive(Clone, Copy, Debug)]
pub enum Event {
    // Input-derived intents
    PlaceRequested { req: PlaceRequest },
    RemoveRequested { req: RemoveRequest },
    UndoRequested,
    RedoRequested,
    ClearRequested,

    // Reconfiguration
    ModeChangeRequested { mode: PlacementMode },
    ActiveLayerChangeRequested { layer: usize },
    LayerStepRequested { delta: i32 },
    ResizeRequested { size: usize },

    // Levels
    LevelGenerateRequested { kind: LevelKind },
    LevelClearRequested,
    CompletionCheckRequested,

    // Derived: a mutation landed; reproject and re-validate
    GridChanged { cause: ChangeCause },

    // Read-only queries from the front-end
    ViewsRequested,
    LayersRequested,
}

pub struct EventEnvelope {
    pub id: u64,
    pub tick: u64,
    pub kind: Event,
}

/// Tick-bucketed FIFO of editor events. Everything a session does flows
/// through here, so one input gesture and its derived events apply in a
/// deterministic order.
pub struct EventQueue {
    // map of tick -> FIFO queue of events
    by_tick: BTreeMap<u64, VecDeque<EventEnvelope>>,
    pub now: u64,
    next_id: u64,
}

impl Default for EventQueue {
    fn default() -> Self {
        Self {
            by_tick: BTreeMap::new(),
            now: 0,
            next_id: 1,
        }
    }
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    fn alloc_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1).max(1);
        id
    }

    pub fn emit_now(&mut self, kind: Event) -> u64 {
        let id = self.alloc_id();
        let env = EventEnvelope {
            id,
            tick: self.now,
            kind,
        };
        self.by_tick.entry(self.now).or_default().push_back(env);
        id
    }

    pub fn pop_ready(&mut self) -> Option<EventEnvelope> {
        if let Some(q) = self.by_tick.get_mut(&self.now) {
            if let Some(env) = q.pop_front() {
                return Some(env);
            }
        }
        None
    }

    pub fn advance_tick(&mut self) {
        if let Some(q) = self.by_tick.get(&self.now) {
            if q.is_empty() {
                self.by_tick.remove(&self.now);
            }
        }
        self.now = self.now.wrapping_add(1);
    }
}
