//! Board Core
//!
//! Placement and reordering engine behind the task board. No UI coupling:
//! the host feeds drag events into [`BoardController`] and renders the
//! [`Board`] and [`DragSession`] it exposes.
//!
//! Layers, leaves first:
//! - board: ordered task lists per container
//! - resolve: id -> owning container
//! - collation: content ordering
//! - placement: target container and insertion index while dragging
//! - reorder: same-container and cross-container moves
//! - keyboard: arrow-key target stepping for keyboard drags
//! - controller: drag state machine and task creation

mod board;
mod collation;
mod config;
mod container;
mod controller;
mod error;
mod keyboard;
mod placement;
mod reorder;
mod resolve;
mod session;
mod style;
mod task;

pub use board::Board;
pub use collation::compare_content;
pub use config::{BoardConfig, ColumnTitles, SeedTask, DEFAULT_DRAG_THRESHOLD_PX};
pub use container::Container;
pub use controller::{BoardController, DropOutcome};
pub use error::{ConfigError, ConfigResult, DropRejected};
pub use keyboard::{keyboard_target, KeyStep};
pub use placement::{compute_placement, relative_insert_index, sorted_insert_index, Placement};
pub use reorder::{array_move, move_across, reorder_within, MoveStrategy};
pub use resolve::resolve;
pub use session::DragSession;
pub use style::{StyleRule, TaskStyles};
pub use task::{Task, TaskId};
