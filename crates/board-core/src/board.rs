//! Ordered Board Store
//!
//! Two named ordered task lists. A `Board` is replaced, never edited in
//! place by callers: every operation that changes it returns a new value.

use serde::{Deserialize, Serialize};

use crate::container::Container;
use crate::task::Task;

/// The whole board: one ordered list per container
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub in_progress: Vec<Task>,
    pub done: Vec<Task>,
}

impl Board {
    pub fn new(in_progress: Vec<Task>, done: Vec<Task>) -> Self {
        Self { in_progress, done }
    }

    /// Tasks of a container in display order
    pub fn tasks(&self, container: Container) -> &[Task] {
        match container {
            Container::InProgress => &self.in_progress,
            Container::Done => &self.done,
        }
    }

    pub(crate) fn tasks_mut(&mut self, container: Container) -> &mut Vec<Task> {
        match container {
            Container::InProgress => &mut self.in_progress,
            Container::Done => &mut self.done,
        }
    }

    /// Find a task anywhere on the board
    pub fn find_task(&self, id: &str) -> Option<&Task> {
        self.iter().map(|(_, task)| task).find(|task| task.id.as_str() == id)
    }

    /// Index of a task within a given container
    pub fn position(&self, container: Container, id: &str) -> Option<usize> {
        self.tasks(container)
            .iter()
            .position(|task| task.id.as_str() == id)
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.find_task(id).is_some()
    }

    /// Total number of tasks across all containers
    pub fn len(&self) -> usize {
        self.in_progress.len() + self.done.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every task paired with its container, columns in display order
    pub fn iter(&self) -> impl Iterator<Item = (Container, &Task)> {
        Container::ALL
            .into_iter()
            .flat_map(move |container| self.tasks(container).iter().map(move |task| (container, task)))
    }

    /// A new board with `task` appended to the end of `container`
    pub fn with_task(&self, container: Container, task: Task) -> Board {
        let mut next = self.clone();
        next.tasks_mut(container).push(task);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Board {
        Board::new(
            vec![Task::new("1", "Task A"), Task::new("2", "Task B")],
            vec![Task::new("3", "Task C")],
        )
    }

    #[test]
    fn test_lookup() {
        let board = sample();
        assert_eq!(board.len(), 3);
        assert_eq!(board.find_task("3").map(|t| t.content.as_str()), Some("Task C"));
        assert_eq!(board.position(Container::InProgress, "2"), Some(1));
        assert_eq!(board.position(Container::Done, "2"), None);
        assert!(!board.contains_id("done"));
    }

    #[test]
    fn test_iter_walks_columns_in_order() {
        let board = sample();
        let ids: Vec<_> = board.iter().map(|(c, t)| (c, t.id.as_str())).collect();
        assert_eq!(
            ids,
            vec![
                (Container::InProgress, "1"),
                (Container::InProgress, "2"),
                (Container::Done, "3"),
            ]
        );
    }

    #[test]
    fn test_with_task_leaves_original_untouched() {
        let board = sample();
        let next = board.with_task(Container::Done, Task::new("4", "Task D"));
        assert_eq!(board.done.len(), 1);
        assert_eq!(next.done.len(), 2);
        assert_eq!(next.done[1].id.as_str(), "4");
    }
}
