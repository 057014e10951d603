//! UI Components
//!
//! Reusable Leptos components.

mod task_card;
mod sortable_item;
mod droppable_column;
mod new_task_form;
mod drag_overlay;
mod log_panel;

pub use task_card::TaskCard;
pub use sortable_item::SortableItem;
pub use droppable_column::DroppableColumn;
pub use new_task_form::NewTaskForm;
pub use drag_overlay::DragOverlay;
pub use log_panel::LogPanel;
