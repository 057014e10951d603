//! Droppable Column Component
//!
//! One board column: title with count, cards, and the drop placeholder.

use board_core::Container;
use leptos::prelude::*;
use leptos_dragdrop::{make_on_mouseleave, make_on_mouseover};

use crate::board_view::{column_view, ColumnSlot};
use crate::components::SortableItem;
use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn DroppableColumn(container: Container) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    let column = Memo::new(move |_| {
        store
            .controller()
            .with(|controller| store.titles().with(|titles| column_view(controller, titles, container)))
    });

    // Hovering the bare column reports the column name as the droppable id
    let on_mouseover = make_on_mouseover(ctx.dnd, container.as_str().to_string(), ctx.callbacks.on_over);
    let on_mouseleave = make_on_mouseleave(ctx.dnd, ctx.callbacks.on_over);

    let column_class = move || {
        column.with(|c| {
            let mut class = String::from("column");
            if c.is_drag_over { class.push_str(" drag-over"); }
            if c.is_over_column { class.push_str(" over-column"); }
            class
        })
    };

    view! {
        <div
            class=column_class
            on:mouseover=on_mouseover
            on:mouseleave=on_mouseleave
        >
            <div class="column-header">
                <h2 class="droppable-column-title">
                    {move || column.with(|c| c.title.clone())}
                    <span>{move || format!("({})", column.with(|c| c.count()))}</span>
                </h2>
            </div>
            <div class="column-content">
                <Show when=move || column.with(|c| c.shows_empty_state())>
                    <p class="empty-column">"No tasks"</p>
                </Show>
                <For
                    each=move || column.with(|c| c.slots())
                    key=|slot| slot.key()
                    children=move |slot| match slot {
                        ColumnSlot::Placeholder => view! {
                            <div class="drop-placeholder visible" />
                        }.into_any(),
                        ColumnSlot::Card(card) => view! {
                            <SortableItem card=card />
                        }.into_any(),
                    }
                />
            </div>
        </div>
    }
}
