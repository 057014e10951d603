//! Drag Overlay Component
//!
//! Copy of the dragged card that follows the pointer.

use leptos::prelude::*;

use crate::board_view::overlay_card;
use crate::components::TaskCard;
use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn DragOverlay() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    let card = Memo::new(move |_| store.controller().with(overlay_card));

    // pointer-events: none so hover still reaches the droppables underneath
    let position = move || {
        format!(
            "position: fixed; left: {}px; top: {}px; pointer-events: none;",
            ctx.dnd.pointer_x_read.get(),
            ctx.dnd.pointer_y_read.get()
        )
    };

    move || {
        // Keyboard drags have no pointer to follow
        if ctx.dnd.keyboard_read.get() {
            return None;
        }
        card.get().map(|card| {
            view! {
                <div class="drag-overlay" style=position>
                    <TaskCard content=card.content class=format!("{} dragging", card.style) />
                </div>
            }
        })
    }
}
