//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The board and
//! the drag session live inside a single `BoardController`; every handler
//! goes through the helpers below.

use board_core::{BoardConfig, BoardController, ColumnTitles, DropOutcome, KeyStep};
use leptos::prelude::*;
use reactive_stores::Store;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Board plus the drag in flight
    pub controller: BoardController,
    /// Column titles from config
    pub titles: ColumnTitles,
}

impl AppState {
    pub fn new(config: &BoardConfig) -> Self {
        Self {
            controller: BoardController::from_config(config),
            titles: config.columns.clone(),
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_drag_start(store: &AppStore, id: &str) {
    store.controller().write().drag_start(id);
}

pub fn store_drag_move(store: &AppStore, over_id: Option<&str>) {
    store.controller().write().drag_move(over_id);
}

pub fn store_drag_end(store: &AppStore, over_id: Option<&str>) -> DropOutcome {
    store.controller().write().drag_end(over_id)
}

pub fn store_drag_cancel(store: &AppStore) {
    store.controller().write().drag_cancel();
}

/// Next droppable for an arrow key during a keyboard drag
pub fn store_keyboard_target(store: &AppStore, over_id: Option<&str>, step: KeyStep) -> Option<String> {
    store
        .controller()
        .with_untracked(|controller| controller.keyboard_target(over_id, step))
}

/// Add a task; false when the content was blank
pub fn store_add_task(store: &AppStore, content: &str) -> bool {
    store.controller().write().add_task(content).is_some()
}
