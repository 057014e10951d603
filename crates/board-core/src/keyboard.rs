//! Keyboard Navigation
//!
//! While a task is carried with the keyboard the arrow keys move the drop
//! target. Inside a column the targets are its cards (the carried one
//! skipped) followed by the column itself; left and right jump to the
//! neighbouring column.

use crate::board::Board;
use crate::container::Container;
use crate::resolve::resolve;

/// One arrow key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyStep {
    Up,
    Down,
    Left,
    Right,
}

/// Where the keyboard cursor currently sits in a column's target list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cursor {
    /// On the target at this index
    On(usize),
    /// Between targets, before the one at this index
    Gap(usize),
}

/// Droppable ids reachable by up/down in `container`, top to bottom
fn column_targets(board: &Board, container: Container, active_id: &str) -> Vec<String> {
    board
        .tasks(container)
        .iter()
        .filter(|task| task.id.as_str() != active_id)
        .map(|task| task.id.as_str().to_string())
        .chain(std::iter::once(container.as_str().to_string()))
        .collect()
}

fn neighbour(container: Container, step: KeyStep) -> Option<Container> {
    let index = Container::ALL.iter().position(|c| *c == container)?;
    let next = match step {
        KeyStep::Left => index.checked_sub(1)?,
        KeyStep::Right => index + 1,
        KeyStep::Up | KeyStep::Down => return None,
    };
    Container::ALL.get(next).copied()
}

/// Next droppable id for `step`, starting from `over_id`.
///
/// With no current target the cursor starts at the carried task's own
/// slot. Returns `None` when the task is unknown or there is no column in
/// that direction.
pub fn keyboard_target(board: &Board, active_id: &str, over_id: Option<&str>, step: KeyStep) -> Option<String> {
    let home = board.find_task(active_id).and_then(|_| resolve(board, active_id))?;

    let located = over_id.filter(|over| *over != active_id).and_then(|over| {
        let container = resolve(board, over)?;
        let index = column_targets(board, container, active_id)
            .iter()
            .position(|target| target == over)?;
        Some((container, Cursor::On(index)))
    });
    let (container, cursor) = match located {
        Some(found) => found,
        None => (home, Cursor::Gap(board.position(home, active_id)?)),
    };

    if matches!(step, KeyStep::Left | KeyStep::Right) {
        return neighbour(container, step).map(|next| next.as_str().to_string());
    }

    let targets = column_targets(board, container, active_id);
    let last = targets.len() - 1;
    let index = match (step, cursor) {
        (KeyStep::Up, Cursor::On(i) | Cursor::Gap(i)) => i.saturating_sub(1),
        (_, Cursor::On(i)) => (i + 1).min(last),
        (_, Cursor::Gap(i)) => i.min(last),
    };
    targets.get(index).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::Task;

    fn board() -> Board {
        Board::new(
            vec![Task::new("1", "Task A"), Task::new("2", "Task B"), Task::new("3", "Task C")],
            vec![Task::new("4", "Task D")],
        )
    }

    #[test]
    fn test_first_step_starts_at_own_slot() {
        let board = board();
        assert_eq!(keyboard_target(&board, "2", None, KeyStep::Up).as_deref(), Some("1"));
        assert_eq!(keyboard_target(&board, "2", None, KeyStep::Down).as_deref(), Some("3"));
        // carried task itself is never a target
        assert_eq!(keyboard_target(&board, "2", Some("2"), KeyStep::Down).as_deref(), Some("3"));
    }

    #[test]
    fn test_up_down_walks_cards_then_column() {
        let board = board();
        assert_eq!(keyboard_target(&board, "1", Some("2"), KeyStep::Down).as_deref(), Some("3"));
        assert_eq!(keyboard_target(&board, "1", Some("3"), KeyStep::Down).as_deref(), Some("in_progress"));
        // column is the bottom stop
        assert_eq!(
            keyboard_target(&board, "1", Some("in_progress"), KeyStep::Down).as_deref(),
            Some("in_progress")
        );
        assert_eq!(keyboard_target(&board, "1", Some("in_progress"), KeyStep::Up).as_deref(), Some("3"));
        // top stays on the first card
        assert_eq!(keyboard_target(&board, "3", Some("1"), KeyStep::Up).as_deref(), Some("1"));
    }

    #[test]
    fn test_last_card_down_reaches_column() {
        let board = board();
        assert_eq!(keyboard_target(&board, "3", None, KeyStep::Down).as_deref(), Some("in_progress"));
    }

    #[test]
    fn test_left_right_switch_columns() {
        let board = board();
        assert_eq!(keyboard_target(&board, "1", None, KeyStep::Right).as_deref(), Some("done"));
        assert_eq!(keyboard_target(&board, "1", Some("4"), KeyStep::Left).as_deref(), Some("in_progress"));
        assert_eq!(keyboard_target(&board, "1", Some("done"), KeyStep::Right), None);
        assert_eq!(keyboard_target(&board, "1", None, KeyStep::Left), None);
    }

    #[test]
    fn test_walks_other_column() {
        let board = board();
        assert_eq!(keyboard_target(&board, "1", Some("done"), KeyStep::Up).as_deref(), Some("4"));
        assert_eq!(keyboard_target(&board, "1", Some("4"), KeyStep::Down).as_deref(), Some("done"));
    }

    #[test]
    fn test_unknown_active_has_no_target() {
        let board = board();
        assert_eq!(keyboard_target(&board, "ghost", None, KeyStep::Down), None);
        assert_eq!(keyboard_target(&board, "done", None, KeyStep::Down), None);
    }

    #[test]
    fn test_unknown_over_restarts_from_own_slot() {
        let board = board();
        assert_eq!(keyboard_target(&board, "2", Some("nowhere"), KeyStep::Up).as_deref(), Some("1"));
    }
}
