//! Board Containers
//!
//! The closed set of columns a task can live in.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A named column of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Container {
    InProgress,
    Done,
}

impl Container {
    /// All containers in display order
    pub const ALL: [Container; 2] = [Container::InProgress, Container::Done];

    /// Wire name, also used as the droppable id of the column itself
    pub fn as_str(&self) -> &'static str {
        match self {
            Container::InProgress => "in_progress",
            Container::Done => "done",
        }
    }

    /// Parse a container name literal. Task ids never match.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "in_progress" => Some(Container::InProgress),
            "done" => Some(Container::Done),
            _ => None,
        }
    }
}

impl fmt::Display for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
