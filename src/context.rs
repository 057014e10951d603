//! Application Context
//!
//! Drag sensor state shared via Leptos Context API.

use leptos::prelude::*;
use leptos_dragdrop::{DndSignals, DragCallbacks};

/// App-wide drag wiring provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Sensor signals (pointer, pending and dragging ids)
    pub dnd: DndSignals,
    /// Store-bound handlers the droppables report to
    pub callbacks: DragCallbacks,
}

impl AppContext {
    pub fn new(dnd: DndSignals, callbacks: DragCallbacks) -> Self {
        Self { dnd, callbacks }
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
