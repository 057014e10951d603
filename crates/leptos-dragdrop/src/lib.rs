//! Leptos DragDrop Utilities
//!
//! Simple drag-and-drop sensor for Leptos using mouse and keyboard events.
//! Uses movement threshold to distinguish click from drag.
//!
//! Keyboard: Space or Enter on a focused draggable picks it up, the arrow
//! keys ask `on_navigate` for the next droppable, Space or Enter drops and
//! Escape cancels.
//!
//! Draggables and droppables are identified by string id. The sensor only
//! reports which id is under the pointer; deciding what a drop means is up
//! to the callbacks.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Arrow key pressed during a keyboard drag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyDirection {
    Up,
    Down,
    Left,
    Right,
}

impl KeyDirection {
    /// Map a `KeyboardEvent.key` value
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" => Some(KeyDirection::Up),
            "ArrowDown" => Some(KeyDirection::Down),
            "ArrowLeft" => Some(KeyDirection::Left),
            "ArrowRight" => Some(KeyDirection::Right),
            _ => None,
        }
    }
}

/// Space or Enter: pick up, or drop when already carrying
pub fn is_pick_up_key(key: &str) -> bool {
    matches!(key, " " | "Spacebar" | "Enter")
}

/// Callbacks driven by the sensor, one per gesture phase
#[derive(Clone, Copy)]
pub struct DragCallbacks {
    /// Pointer travelled past the threshold with a press pending
    pub on_start: Callback<String>,
    /// A different droppable (or none) is under the pointer
    pub on_over: Callback<Option<String>>,
    /// Button released while dragging, with the droppable under the pointer
    pub on_end: Callback<Option<String>>,
    /// Escape pressed while dragging
    pub on_cancel: Callback<()>,
    /// Arrow key during a keyboard drag: given the current droppable, the
    /// next one (`None` to stay put)
    pub on_navigate: Callback<(Option<String>, KeyDirection), Option<String>>,
}

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    pub dragging_id_read: ReadSignal<Option<String>>,
    pub dragging_id_write: WriteSignal<Option<String>>,
    /// Droppable currently under the pointer
    pub over_id_read: ReadSignal<Option<String>>,
    pub over_id_write: WriteSignal<Option<String>>,
    /// Pending item id (mousedown but not yet dragging)
    pub pending_id_read: ReadSignal<Option<String>>,
    pub pending_id_write: WriteSignal<Option<String>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
    /// Current pointer position, for drag overlays
    pub pointer_x_read: ReadSignal<i32>,
    pub pointer_x_write: WriteSignal<i32>,
    pub pointer_y_read: ReadSignal<i32>,
    pub pointer_y_write: WriteSignal<i32>,
    /// Current drag was started from the keyboard
    pub keyboard_read: ReadSignal<bool>,
    pub keyboard_write: WriteSignal<bool>,
    pub threshold_px: i32,
}

/// `threshold_px`: movement in pixels before a press becomes a drag
pub fn create_dnd_signals(threshold_px: i32) -> DndSignals {
    let (dragging_id_read, dragging_id_write) = signal(None::<String>);
    let (over_id_read, over_id_write) = signal(None::<String>);
    let (pending_id_read, pending_id_write) = signal(None::<String>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    let (pointer_x_read, pointer_x_write) = signal(0i32);
    let (pointer_y_read, pointer_y_write) = signal(0i32);
    let (keyboard_read, keyboard_write) = signal(false);
    DndSignals {
        dragging_id_read,
        dragging_id_write,
        over_id_read,
        over_id_write,
        pending_id_read,
        pending_id_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
        pointer_x_read,
        pointer_x_write,
        pointer_y_read,
        pointer_y_write,
        keyboard_read,
        keyboard_write,
        threshold_px: threshold_px.max(1),
    }
}

/// True once the pointer has moved further than `threshold` on either axis
pub fn exceeds_threshold(dx: i32, dy: i32, threshold: i32) -> bool {
    dx.abs() > threshold || dy.abs() > threshold
}

/// End drag operation
pub fn end_drag(dnd: &DndSignals) {
    dnd.dragging_id_write.set(None);
    dnd.over_id_write.set(None);
    dnd.pending_id_write.set(None);
    dnd.keyboard_write.set(false);
}

fn is_keyboard_drag(dnd: &DndSignals) -> bool {
    dnd.dragging_id_read.get_untracked().is_some() && dnd.keyboard_read.get_untracked()
}

/// Create mousedown handler for draggable items
/// Records pending drag with start position
pub fn make_on_mousedown(dnd: DndSignals, task_id: String) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        // Ignore presses on form controls
        if let Some(target) = ev.target() {
            if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
            if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
            if target.dyn_ref::<web_sys::HtmlTextAreaElement>().is_some() { return; }
        }
        ev.prevent_default();
        dnd.pending_id_write.set(Some(task_id.clone()));
        dnd.start_x_write.set(ev.client_x());
        dnd.start_y_write.set(ev.client_y());
    }
}

/// Create keydown handler for focusable draggable items.
/// Space or Enter picks the item up as a keyboard drag.
pub fn make_on_keydown(
    dnd: DndSignals,
    task_id: String,
    on_start: Callback<String>,
) -> impl Fn(web_sys::KeyboardEvent) + Clone + 'static {
    move |ev: web_sys::KeyboardEvent| {
        // While carrying, the same keys drop; the document handler owns that
        if !is_pick_up_key(&ev.key()) || dnd.dragging_id_read.get_untracked().is_some() {
            return;
        }
        ev.prevent_default();
        ev.stop_propagation();
        dnd.pending_id_write.set(None);
        dnd.over_id_write.set(None);
        dnd.keyboard_write.set(true);
        dnd.dragging_id_write.set(Some(task_id.clone()));
        on_start.run(task_id.clone());
    }
}

/// Create mouseover handler for a droppable (card or column background).
///
/// Stops propagation so the innermost droppable wins: a card inside a
/// column reports the card, the bare column area reports the column.
pub fn make_on_mouseover(
    dnd: DndSignals,
    over_id: String,
    on_over: Callback<Option<String>>,
) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |ev: web_sys::MouseEvent| {
        if dnd.dragging_id_read.get_untracked().is_none() || dnd.keyboard_read.get_untracked() {
            return;
        }
        ev.stop_propagation();
        if dnd.over_id_read.get_untracked().as_deref() == Some(over_id.as_str()) {
            return;
        }
        dnd.over_id_write.set(Some(over_id.clone()));
        on_over.run(Some(over_id.clone()));
    }
}

/// Create mouseleave handler for droppable containers
pub fn make_on_mouseleave(
    dnd: DndSignals,
    on_over: Callback<Option<String>>,
) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_id_read.get_untracked().is_some() && !dnd.keyboard_read.get_untracked() {
            dnd.over_id_write.set(None);
            on_over.run(None);
        }
    }
}

/// Bind document-level handlers: movement detection, drop, keyboard steps and cancel
pub fn bind_global_handlers(dnd: DndSignals, callbacks: DragCallbacks) {
    bind_global_mousemove(dnd, callbacks.on_start);
    bind_global_mouseup(dnd, callbacks.on_end);
    bind_global_keydown(dnd, callbacks);
}

/// Document mousemove: starts a pending drag once moved enough, tracks pointer
fn bind_global_mousemove(dnd: DndSignals, on_start: Callback<String>) {
    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        if dnd.dragging_id_read.get_untracked().is_some() {
            dnd.pointer_x_write.set(ev.client_x());
            dnd.pointer_y_write.set(ev.client_y());
            return;
        }

        let Some(pending) = dnd.pending_id_read.get_untracked() else {
            return;
        };
        let dx = ev.client_x() - dnd.start_x_read.get_untracked();
        let dy = ev.client_y() - dnd.start_y_read.get_untracked();

        // Start dragging if moved beyond threshold
        if exceeds_threshold(dx, dy, dnd.threshold_px) {
            dnd.pointer_x_write.set(ev.client_x());
            dnd.pointer_y_write.set(ev.client_y());
            dnd.pending_id_write.set(None);
            dnd.dragging_id_write.set(Some(pending.clone()));
            on_start.run(pending);
        }
    });

    add_document_listener("mousemove", on_mousemove.as_ref().unchecked_ref());
    on_mousemove.forget();
}

/// Document mouseup: drop with whatever is under the pointer
fn bind_global_mouseup(dnd: DndSignals, on_end: Callback<Option<String>>) {
    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        // Clicks don't end a keyboard drag
        if is_keyboard_drag(&dnd) {
            return;
        }
        let dragging_id = dnd.dragging_id_read.get_untracked();
        let over_id = dnd.over_id_read.get_untracked();

        end_drag(&dnd);

        // Only a real drag ends in a drop; a bare click just clears pending state
        if dragging_id.is_some() {
            on_end.run(over_id);
        }
    });

    add_document_listener("mouseup", on_mouseup.as_ref().unchecked_ref());
    on_mouseup.forget();
}

/// Document keydown: Escape cancels any drag; during a keyboard drag the
/// arrows step the target and Space/Enter drops
fn bind_global_keydown(dnd: DndSignals, callbacks: DragCallbacks) {
    let on_keydown = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(move |ev: web_sys::KeyboardEvent| {
        let key = ev.key();
        if key == "Escape" {
            let was_dragging = dnd.dragging_id_read.get_untracked().is_some();
            end_drag(&dnd);
            if was_dragging {
                callbacks.on_cancel.run(());
            }
            return;
        }
        if !is_keyboard_drag(&dnd) {
            return;
        }

        if is_pick_up_key(&key) {
            ev.prevent_default();
            let over_id = dnd.over_id_read.get_untracked();
            end_drag(&dnd);
            callbacks.on_end.run(over_id);
        } else if let Some(direction) = KeyDirection::from_key(&key) {
            ev.prevent_default();
            let current = dnd.over_id_read.get_untracked();
            let Some(next) = callbacks.on_navigate.run((current.clone(), direction)) else {
                return;
            };
            if current.as_deref() != Some(next.as_str()) {
                dnd.over_id_write.set(Some(next.clone()));
                callbacks.on_over.run(Some(next));
            }
        }
    });

    add_document_listener("keydown", on_keydown.as_ref().unchecked_ref());
    on_keydown.forget();
}

fn add_document_listener(event: &str, listener: &js_sys::Function) {
    if let Some(doc) = web_sys::window().and_then(|win| win.document()) {
        let _ = doc.add_event_listener_with_callback(event, listener);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_is_exclusive() {
        assert!(!exceeds_threshold(5, 0, 5));
        assert!(!exceeds_threshold(-5, 5, 5));
        assert!(exceeds_threshold(6, 0, 5));
        assert!(exceeds_threshold(0, -6, 5));
    }

    #[test]
    fn test_keyboard_keys() {
        assert_eq!(KeyDirection::from_key("ArrowUp"), Some(KeyDirection::Up));
        assert_eq!(KeyDirection::from_key("ArrowRight"), Some(KeyDirection::Right));
        assert_eq!(KeyDirection::from_key("a"), None);
        assert!(is_pick_up_key(" "));
        assert!(is_pick_up_key("Enter"));
        assert!(!is_pick_up_key("Escape"));
    }
}
