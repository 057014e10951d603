//! Reorder/Move Engine
//!
//! Applies a drop to a board. Two strategies, chosen by whether the task
//! stays in its container. Both take a board by reference and return a new
//! one; the input is never modified.

use crate::board::Board;
use crate::container::Container;
use crate::placement::{relative_insert_index, sorted_insert_index};
use crate::resolve::resolve;

/// How a drop is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveStrategy {
    /// Relative order changes inside one container
    SameContainer,
    /// The task changes its owning container
    CrossContainer,
}

impl MoveStrategy {
    pub fn select(source: Container, destination: Container) -> Self {
        if source == destination {
            MoveStrategy::SameContainer
        } else {
            MoveStrategy::CrossContainer
        }
    }

    /// Run this strategy. `hover_index` only matters for cross-container moves.
    pub fn apply(self, board: &Board, active_id: &str, over_id: &str, hover_index: Option<usize>) -> Board {
        match self {
            MoveStrategy::SameContainer => reorder_within(board, active_id, over_id),
            MoveStrategy::CrossContainer => move_across(board, active_id, over_id, hover_index),
        }
    }
}

/// Move `active_id` to the slot currently held by `over_id` in the same container.
///
/// This is a positional move, not a swap: every other task keeps its relative
/// order. Dropping on the container's own background moves the task last.
pub fn reorder_within(board: &Board, active_id: &str, over_id: &str) -> Board {
    let Some(container) = resolve(board, active_id) else {
        return board.clone();
    };
    let Some(from) = board.position(container, active_id) else {
        return board.clone();
    };
    let tasks = board.tasks(container);
    let to = board
        .position(container, over_id)
        .unwrap_or(tasks.len().saturating_sub(1));

    let mut next = board.clone();
    *next.tasks_mut(container) = array_move(tasks, from, to);
    next
}

/// Move `active_id` out of its container and into the one owning `over_id`.
///
/// An explicit `hover_index` wins. Without one, a drop on the column
/// background lands at the content-sorted slot and a drop on a card lands
/// before or after it by content. Indices refer to the destination after
/// the task has been removed from its source, and are clamped to its length.
pub fn move_across(board: &Board, active_id: &str, over_id: &str, hover_index: Option<usize>) -> Board {
    let (Some(source), Some(destination)) = (resolve(board, active_id), resolve(board, over_id)) else {
        return board.clone();
    };
    let Some(from) = board.position(source, active_id) else {
        return board.clone();
    };

    let mut next = board.clone();
    let removed = next.tasks_mut(source).remove(from);

    let index = {
        let target = next.tasks(destination);
        let index = match hover_index {
            Some(index) => index,
            None if Container::from_name(over_id).is_some() => {
                sorted_insert_index(target, &removed.content)
            }
            None => match next.position(destination, over_id) {
                Some(over_index) => {
                    relative_insert_index(over_index, &removed.content, &target[over_index].content)
                }
                None => target.len(),
            },
        };
        index.min(target.len())
    };

    next.tasks_mut(destination).insert(index, removed);
    next
}

/// Relocate the element at `from` to `to`, shifting the rest.
pub fn array_move<T: Clone>(items: &[T], from: usize, to: usize) -> Vec<T> {
    let mut next = items.to_vec();
    if from >= next.len() {
        return next;
    }
    let item = next.remove(from);
    let to = to.min(next.len());
    next.insert(to, item);
    next
}
