//! Board Configuration
//!
//! Column titles, card styles, the seeded tasks and the drag threshold.
//! Everything has a default, so a partial JSON document is valid.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::container::Container;
use crate::error::{ConfigError, ConfigResult};
use crate::style::{StyleRule, TaskStyles};
use crate::task::{Task, TaskId};

/// Default pixels of pointer travel before a press becomes a drag
pub const DEFAULT_DRAG_THRESHOLD_PX: i32 = 5;

/// Display titles for the columns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnTitles {
    pub in_progress: String,
    pub done: String,
}

impl Default for ColumnTitles {
    fn default() -> Self {
        Self {
            in_progress: "IN PROGRESS".to_string(),
            done: "DONE".to_string(),
        }
    }
}

impl ColumnTitles {
    pub fn title(&self, container: Container) -> &str {
        match container {
            Container::InProgress => &self.in_progress,
            Container::Done => &self.done,
        }
    }
}

/// A task present when the board is first shown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedTask {
    pub content: String,
    #[serde(default = "default_seed_container")]
    pub container: Container,
}

fn default_seed_container() -> Container {
    Container::InProgress
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub columns: ColumnTitles,
    pub styles: Vec<StyleRule>,
    pub default_style: String,
    pub seed: Vec<SeedTask>,
    pub drag_threshold_px: i32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        let rule = |content: &str, style: &str| StyleRule {
            content: content.to_string(),
            style: style.to_string(),
        };
        let seed = |content: &str, container| SeedTask {
            content: content.to_string(),
            container,
        };
        Self {
            columns: ColumnTitles::default(),
            styles: vec![
                rule("Task A", "bg-blue-200 border-blue-300 text-blue-900 font-medium"),
                rule("Task B", "bg-emerald-200 border-emerald-300 text-emerald-900 font-medium"),
                rule("Task C", "bg-rose-200 border-rose-300 text-rose-900 font-medium"),
            ],
            default_style: "bg-slate-200 border-slate-300 text-slate-900 font-medium".to_string(),
            seed: vec![
                seed("Task A", Container::InProgress),
                seed("Task B", Container::InProgress),
                seed("Task C", Container::Done),
            ],
            drag_threshold_px: DEFAULT_DRAG_THRESHOLD_PX,
        }
    }
}

impl BoardConfig {
    /// Parse and validate a JSON config document
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: BoardConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.drag_threshold_px <= 0 {
            return Err(ConfigError::InvalidThreshold(self.drag_threshold_px));
        }
        if let Some(index) = self.styles.iter().position(|r| r.content.trim().is_empty()) {
            return Err(ConfigError::BlankStyleRule(index));
        }
        if let Some(index) = self.seed.iter().position(|s| s.content.trim().is_empty()) {
            return Err(ConfigError::BlankSeedTask(index));
        }
        Ok(())
    }

    pub fn task_styles(&self) -> TaskStyles {
        TaskStyles::new(self.styles.clone(), self.default_style.clone())
    }

    /// Initial board built from the seed list, each task with a fresh id
    pub fn seed_board(&self) -> Board {
        self.seed.iter().fold(Board::default(), |board, seed| {
            board.with_task(seed.container, Task::new(TaskId::generate(), seed.content.clone()))
        })
    }
}
