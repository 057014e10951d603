//! New Task Form Component
//!
//! "Add Task" button that expands into an input with submit and cancel.

use leptos::prelude::*;

use crate::store::{store_add_task, use_app_store};

#[component]
pub fn NewTaskForm() -> impl IntoView {
    let store = use_app_store();

    let (is_adding, set_is_adding) = signal(false);
    let (new_task, set_new_task) = signal(String::new());

    let add_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        // Blank input is ignored and the form stays open
        if store_add_task(&store, &new_task.get_untracked()) {
            set_new_task.set(String::new());
            set_is_adding.set(false);
        }
    };

    let cancel = move |_: web_sys::MouseEvent| {
        set_is_adding.set(false);
        set_new_task.set(String::new());
    };

    view! {
        <div class="add-task-section">
            <Show
                when=move || is_adding.get()
                fallback=move || view! {
                    <button class="add-task-button" on:click=move |_| set_is_adding.set(true)>
                        "Add Task"
                    </button>
                }
            >
                <form class="add-task-form" on:submit=add_task>
                    <input
                        type="text"
                        class="task-input"
                        placeholder="Please enter the task name."
                        autofocus=true
                        prop:value=move || new_task.get()
                        on:input=move |ev| set_new_task.set(event_target_value(&ev))
                    />
                    <div class="task-form-buttons">
                        <button type="submit" class="submit-button">"Add Task"</button>
                        <button type="button" class="cancel-button" on:click=cancel>"Cancel"</button>
                    </div>
                </form>
            </Show>
        </div>
    }
}
