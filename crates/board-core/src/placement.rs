//! Placement Calculator
//!
//! Decides, while a drag is in flight, which container and index the dragged
//! task would land at. The same index drives the live placeholder and the
//! final insertion, so both always agree.
//!
//! Content is ordered with [`compare_content`], not by raw bytes.

use std::cmp::Ordering;

use crate::board::Board;
use crate::collation::compare_content;
use crate::container::Container;
use crate::resolve::resolve;
use crate::task::Task;

/// Where a dragged task would be inserted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub container: Container,
    pub index: usize,
    /// Pointer is over the column background rather than over a card
    pub is_over_column: bool,
}

/// Compute the placement of `active_id` when hovering `over_id`.
///
/// Returns `None` when `over_id` cannot be resolved; the caller clears any
/// indicator it shows.
pub fn compute_placement(board: &Board, active_id: &str, over_id: &str) -> Option<Placement> {
    let container = resolve(board, over_id)?;
    let tasks = board.tasks(container);
    let active = board.find_task(active_id);

    if Container::from_name(over_id).is_some() {
        let index = match active {
            Some(task) => sorted_insert_index(tasks, &task.content),
            None => tasks.len(),
        };
        return Some(Placement {
            container,
            index,
            is_over_column: true,
        });
    }

    let over_index = board.position(container, over_id)?;
    let index = match active {
        Some(task) => relative_insert_index(over_index, &task.content, &tasks[over_index].content),
        None => over_index,
    };
    Some(Placement {
        container,
        index,
        is_over_column: false,
    })
}

/// Index of the first task whose content sorts strictly after `content`,
/// or the list length when none does.
pub fn sorted_insert_index(tasks: &[Task], content: &str) -> usize {
    tasks
        .iter()
        .position(|task| compare_content(&task.content, content) == Ordering::Greater)
        .unwrap_or(tasks.len())
}

/// Before the hovered card when the dragged content sorts strictly before
/// it, after it otherwise.
pub fn relative_insert_index(over_index: usize, dragged: &str, hovered: &str) -> usize {
    if compare_content(dragged, hovered) == Ordering::Less {
        over_index
    } else {
        over_index + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fruit_board() -> Board {
        Board::new(
            vec![Task::new("b", "Banana")],
            vec![Task::new("a", "Apple"), Task::new("c", "Cherry")],
        )
    }

    #[test]
    fn test_over_column_uses_content_order() {
        let board = fruit_board();
        let placement = compute_placement(&board, "b", "done").unwrap();
        assert_eq!(
            placement,
            Placement {
                container: Container::Done,
                index: 1,
                is_over_column: true,
            }
        );
    }

    #[test]
    fn test_over_column_appends_when_nothing_sorts_after() {
        let board = Board::new(
            vec![Task::new("z", "Zucchini")],
            vec![Task::new("a", "Apple"), Task::new("c", "Cherry")],
        );
        let placement = compute_placement(&board, "z", "done").unwrap();
        assert_eq!(placement.index, 2);
    }

    #[test]
    fn test_over_empty_column() {
        let board = Board::new(vec![Task::new("a", "Apple")], vec![]);
        let placement = compute_placement(&board, "a", "done").unwrap();
        assert_eq!(placement.index, 0);
        assert!(placement.is_over_column);
    }

    #[test]
    fn test_over_column_with_unknown_active_falls_back_to_end() {
        let board = fruit_board();
        let placement = compute_placement(&board, "ghost", "done").unwrap();
        assert_eq!(placement.index, 2);
    }

    #[test]
    fn test_over_card_inserts_before_or_after() {
        let board = fruit_board();

        // Banana < Cherry: before Cherry
        let placement = compute_placement(&board, "b", "c").unwrap();
        assert_eq!(placement.container, Container::Done);
        assert_eq!(placement.index, 1);
        assert!(!placement.is_over_column);

        // Banana >= Apple: after Apple
        let placement = compute_placement(&board, "b", "a").unwrap();
        assert_eq!(placement.index, 1);
    }

    #[test]
    fn test_over_card_with_equal_content_goes_after() {
        let board = Board::new(vec![Task::new("x", "Same")], vec![Task::new("y", "Same")]);
        let placement = compute_placement(&board, "x", "y").unwrap();
        assert_eq!(placement.index, 1);
    }

    #[test]
    fn test_over_card_with_unknown_active_uses_over_index() {
        let board = fruit_board();
        let placement = compute_placement(&board, "ghost", "c").unwrap();
        assert_eq!(placement.index, 1);
    }

    #[test]
    fn test_unknown_over_is_no_placement() {
        let board = fruit_board();
        assert_eq!(compute_placement(&board, "b", "nowhere"), None);
    }

    #[test]
    fn test_mixed_case_content_sorts_alphabetically() {
        let board = Board::new(
            vec![Task::new("b", "Banana")],
            vec![Task::new("a", "apple"), Task::new("c", "cherry")],
        );
        let placement = compute_placement(&board, "b", "done").unwrap();
        assert_eq!(placement.index, 1);

        // hovering "apple": Banana goes after it
        assert_eq!(compute_placement(&board, "b", "a").unwrap().index, 1);
        assert_eq!(relative_insert_index(0, "apple", "Banana"), 0);
    }
}
