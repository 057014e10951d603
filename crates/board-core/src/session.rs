//! Drag Session
//!
//! Transient state of the drag in flight. Refers to tasks and containers by
//! id only, so the board can be replaced under it.

use crate::board::Board;
use crate::container::Container;
use crate::placement::Placement;
use crate::task::TaskId;

/// Snapshot of the drag in flight; `Default` is the idle session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DragSession {
    pub active_id: Option<TaskId>,
    pub target_container: Option<Container>,
    /// `None` is the "no insertion point" sentinel
    pub hover_index: Option<usize>,
    pub is_over_column: bool,
}

impl DragSession {
    pub fn started(active_id: TaskId) -> Self {
        Self {
            active_id: Some(active_id),
            ..Self::default()
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.active_id.is_some()
    }

    pub(crate) fn set_placement(&mut self, placement: Placement) {
        self.target_container = Some(placement.container);
        self.hover_index = Some(placement.index);
        self.is_over_column = placement.is_over_column;
    }

    pub(crate) fn clear_target(&mut self) {
        self.target_container = None;
        self.hover_index = None;
        self.is_over_column = false;
    }

    /// Hover index to use when committing a drop into `destination`.
    ///
    /// Only trusted when it was computed for that same container.
    pub fn hover_index_for(&self, destination: Container) -> Option<usize> {
        match self.target_container {
            Some(target) if target == destination => self.hover_index,
            _ => None,
        }
    }

    /// Where `container` should draw the drop placeholder, if at all.
    ///
    /// Only a column that is the current target and does not already hold
    /// the dragged task shows one. Index `len` means after the last card.
    pub fn placeholder_index(&self, board: &Board, container: Container) -> Option<usize> {
        let active_id = self.active_id.as_ref()?;
        if self.target_container != Some(container) {
            return None;
        }
        if board.position(container, active_id.as_str()).is_some() {
            return None;
        }
        self.hover_index
            .filter(|&index| index <= board.tasks(container).len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::Task;

    fn board() -> Board {
        Board::new(
            vec![Task::new("a", "A")],
            vec![Task::new("b", "B"), Task::new("c", "C")],
        )
    }

    fn targeting(container: Container, index: usize) -> DragSession {
        let mut session = DragSession::started(TaskId::new("a"));
        session.set_placement(Placement {
            container,
            index,
            is_over_column: false,
        });
        session
    }

    #[test]
    fn test_started_session_is_dragging_without_target() {
        assert!(!DragSession::default().is_dragging());
        let session = DragSession::started(TaskId::new("a"));
        assert!(session.is_dragging());
        assert_eq!(session.active_id, Some(TaskId::new("a")));
        assert_eq!(session.target_container, None);
        assert_eq!(session.hover_index, None);
    }

    #[test]
    fn test_placeholder_only_in_foreign_target_column() {
        let board = board();
        let session = targeting(Container::Done, 2);
        assert_eq!(session.placeholder_index(&board, Container::Done), Some(2));
        assert_eq!(session.placeholder_index(&board, Container::InProgress), None);

        let session = targeting(Container::InProgress, 0);
        assert_eq!(session.placeholder_index(&board, Container::InProgress), None);
    }

    #[test]
    fn test_placeholder_cleared_with_target() {
        let board = board();
        let mut session = targeting(Container::Done, 1);
        session.clear_target();
        assert_eq!(session.placeholder_index(&board, Container::Done), None);
        assert!(!session.is_over_column);
    }

    #[test]
    fn test_hover_index_for_other_container_is_ignored() {
        let session = targeting(Container::Done, 1);
        assert_eq!(session.hover_index_for(Container::Done), Some(1));
        assert_eq!(session.hover_index_for(Container::InProgress), None);
    }
}
