//! Container Resolver
//!
//! Maps a droppable id (task id or column name) to the container owning it.

use crate::board::Board;
use crate::container::Container;

/// Which container currently owns `id`.
///
/// A column name resolves to that column, which is what lets a task be
/// dropped onto an empty column. `None` means the id is unknown and the
/// caller must abort without touching state.
pub fn resolve(board: &Board, id: &str) -> Option<Container> {
    if let Some(container) = Container::from_name(id) {
        return Some(container);
    }
    Container::ALL
        .into_iter()
        .find(|&container| board.position(container, id).is_some())
}
