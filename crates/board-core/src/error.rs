//! Error Types
//!
//! None of these are fatal. A rejected drop leaves the board as it was; a bad
//! config is replaced by the default one.

use thiserror::Error;

use crate::task::TaskId;

/// Why a drop did not change the board
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DropRejected {
    #[error("no drag in progress")]
    NotDragging,

    #[error("dropped outside any target")]
    NoTarget,

    #[error("task {0} dropped on itself")]
    DroppedOnSelf(TaskId),

    #[error("dragged task {0} is not on the board")]
    UnknownSource(TaskId),

    #[error("drop target {0} is not on the board")]
    UnknownDestination(String),
}

/// Board configuration could not be loaded
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid board config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("drag threshold must be positive, got {0}")]
    InvalidThreshold(i32),

    #[error("style rule #{0} has blank content")]
    BlankStyleRule(usize),

    #[error("seed task #{0} has blank content")]
    BlankSeedTask(usize),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
