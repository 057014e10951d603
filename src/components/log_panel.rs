//! Log Panel Component
//!
//! Collapsible view of the records the rolling logger keeps in memory.

use leptos::prelude::*;
use rolling_logger::LogEntry;

#[component]
pub fn LogPanel() -> impl IntoView {
    let (is_open, set_is_open) = signal(false);
    let (lines, set_lines) = signal(Vec::<String>::new());

    let refresh = move || set_lines.set(rolling_logger::recent().iter().map(LogEntry::format).collect());

    let toggle = move |_: web_sys::MouseEvent| {
        if !is_open.get_untracked() {
            refresh();
        }
        set_is_open.update(|open| *open = !*open);
    };

    let clear = move |_: web_sys::MouseEvent| {
        rolling_logger::clear_recent();
        refresh();
    };

    view! {
        <div class="log-panel">
            <button class="log-toggle" on:click=toggle>
                {move || if is_open.get() { "Hide log" } else { "Show log" }}
            </button>
            <Show when=move || is_open.get()>
                <div class="log-actions">
                    <button class="log-refresh" on:click=move |_| refresh()>"Refresh"</button>
                    <button class="log-clear" on:click=clear>"Clear"</button>
                </div>
                <ul class="log-entries">
                    <For
                        each=move || lines.get().into_iter().enumerate()
                        key=|(index, line)| format!("{index}:{line}")
                        children=|(_, line)| view! { <li class="log-entry">{line}</li> }
                    />
                </ul>
            </Show>
        </div>
    }
}
