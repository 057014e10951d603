//! Task Board App
//!
//! Main application component: header with the add-task form, one column
//! per container, and the drag overlay.

use board_core::{BoardConfig, Container, KeyStep};
use leptos::prelude::*;
use leptos_dragdrop::{bind_global_handlers, create_dnd_signals, DragCallbacks, KeyDirection};
use reactive_stores::Store;

use crate::components::{DragOverlay, DroppableColumn, LogPanel, NewTaskForm};
use crate::context::AppContext;
use crate::store::{
    store_drag_cancel, store_drag_end, store_drag_move, store_drag_start, store_keyboard_target,
    AppState,
};

fn key_step(direction: KeyDirection) -> KeyStep {
    match direction {
        KeyDirection::Up => KeyStep::Up,
        KeyDirection::Down => KeyStep::Down,
        KeyDirection::Left => KeyStep::Left,
        KeyDirection::Right => KeyStep::Right,
    }
}

#[component]
pub fn App(config: BoardConfig) -> impl IntoView {
    let store = Store::new(AppState::new(&config));
    provide_context(store);

    // Sensor events flow straight into the controller
    let dnd = create_dnd_signals(config.drag_threshold_px);
    let callbacks = DragCallbacks {
        on_start: Callback::new(move |id: String| store_drag_start(&store, &id)),
        on_over: Callback::new(move |over: Option<String>| store_drag_move(&store, over.as_deref())),
        on_end: Callback::new(move |over: Option<String>| {
            let outcome = store_drag_end(&store, over.as_deref());
            log::debug!("[DND] drop: {:?}", outcome);
        }),
        on_cancel: Callback::new(move |_: ()| store_drag_cancel(&store)),
        on_navigate: Callback::new(move |(over, direction): (Option<String>, KeyDirection)| {
            store_keyboard_target(&store, over.as_deref(), key_step(direction))
        }),
    };
    bind_global_handlers(dnd, callbacks);
    provide_context(AppContext::new(dnd, callbacks));

    view! {
        <div class="board-container">
            <div class="board-header">
                <h1 class="text-2xl font-medium text-gray-800">"Task Management"</h1>
                <NewTaskForm />
            </div>

            <div class="board-content">
                {Container::ALL
                    .into_iter()
                    .map(|container| view! {
                        <div class="column-wrapper">
                            <DroppableColumn container=container />
                        </div>
                    })
                    .collect_view()}
            </div>

            <DragOverlay />
            <LogPanel />
        </div>
    }
}
