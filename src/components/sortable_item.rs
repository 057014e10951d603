//! Sortable Item Component
//!
//! A card that can be picked up and hovered during a drag. Focusable, so
//! Space or Enter picks it up from the keyboard.

use leptos::prelude::*;
use leptos_dragdrop::{make_on_keydown, make_on_mousedown, make_on_mouseover};

use crate::board_view::CardView;
use crate::components::TaskCard;
use crate::context::use_app_context;

#[component]
pub fn SortableItem(card: CardView) -> impl IntoView {
    let ctx = use_app_context();

    let on_mousedown = make_on_mousedown(ctx.dnd, card.id.clone());
    let on_mouseover = make_on_mouseover(ctx.dnd, card.id.clone(), ctx.callbacks.on_over);
    let on_keydown = make_on_keydown(ctx.dnd, card.id.clone(), ctx.callbacks.on_start);

    let class = if card.is_dragging {
        format!("{} dragging", card.style)
    } else {
        card.style.clone()
    };
    // A pointer drag draws the card in the overlay; a keyboard drag has no
    // overlay, so the slot stays faintly visible
    let is_dragging = card.is_dragging;
    let style = move || match (is_dragging, ctx.dnd.keyboard_read.get()) {
        (false, _) => "opacity: 1;",
        (true, false) => "opacity: 0;",
        (true, true) => "opacity: 0.5;",
    };

    view! {
        <div
            class="sortable-item"
            style=style
            tabindex="0"
            role="button"
            on:mousedown=on_mousedown
            on:keydown=on_keydown
            on:mouseover=on_mouseover
        >
            <TaskCard content=card.content class=class />
        </div>
    }
}
