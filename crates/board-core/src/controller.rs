//! Drag Session Controller
//!
//! Owns the board and the drag session and drives the
//! `Idle -> Dragging -> Idle` state machine from host events.
//!
//! Every input is absorbed: unknown ids, drops outside any target and blank
//! task content leave the board exactly as it was.

use log::{debug, info};

use crate::board::Board;
use crate::config::BoardConfig;
use crate::container::Container;
use crate::error::DropRejected;
use crate::keyboard::{keyboard_target, KeyStep};
use crate::placement::compute_placement;
use crate::reorder::MoveStrategy;
use crate::resolve::resolve;
use crate::session::DragSession;
use crate::style::TaskStyles;
use crate::task::{Task, TaskId};

/// Result of releasing a drag
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome {
    Committed {
        strategy: MoveStrategy,
        from: Container,
        to: Container,
    },
    Unchanged(DropRejected),
}

/// A drop that passed every check and is ready to apply
#[derive(Debug)]
struct MovePlan {
    active_id: TaskId,
    over_id: String,
    from: Container,
    to: Container,
    hover_index: Option<usize>,
}

#[derive(Debug, Clone, Default)]
pub struct BoardController {
    board: Board,
    session: DragSession,
    styles: TaskStyles,
}

impl BoardController {
    pub fn new(board: Board, styles: TaskStyles) -> Self {
        Self {
            board,
            session: DragSession::default(),
            styles,
        }
    }

    /// Controller over the configured seed board
    pub fn from_config(config: &BoardConfig) -> Self {
        Self::new(config.seed_board(), config.task_styles())
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn session(&self) -> &DragSession {
        &self.session
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_dragging()
    }

    /// The task being dragged, looked up on the current board
    pub fn active_task(&self) -> Option<&Task> {
        let id = self.session.active_id.as_ref()?;
        self.board.find_task(id.as_str())
    }

    pub fn task_style(&self, content: &str) -> &str {
        self.styles.style_for(content)
    }

    /// `Idle --start(id)--> Dragging(id)`
    pub fn drag_start(&mut self, id: &str) {
        if !self.board.contains_id(id) {
            debug!("drag start ignored: unknown task {id}");
            return;
        }
        if let Some(previous) = &self.session.active_id {
            debug!("drag start replaces unfinished drag of {previous}");
        }
        debug!("drag start: {id}");
        self.session = DragSession::started(TaskId::new(id));
    }

    /// `Dragging --move(over)--> Dragging`
    pub fn drag_move(&mut self, over_id: Option<&str>) {
        let Some(active_id) = &self.session.active_id else {
            return;
        };
        let placement = over_id.and_then(|over| compute_placement(&self.board, active_id.as_str(), over));
        match placement {
            Some(placement) => self.session.set_placement(placement),
            None => self.session.clear_target(),
        }
    }

    /// Droppable id an arrow key moves the target to, from `over_id`.
    /// `None` while idle or when the key leads nowhere.
    pub fn keyboard_target(&self, over_id: Option<&str>, step: KeyStep) -> Option<String> {
        let active_id = self.session.active_id.as_ref()?;
        keyboard_target(&self.board, active_id.as_str(), over_id, step)
    }

    /// `Dragging --end(over)--> Idle`, committing the move when it is valid
    pub fn drag_end(&mut self, over_id: Option<&str>) -> DropOutcome {
        let outcome = match self.plan_drop(over_id) {
            Ok(plan) => {
                let strategy = MoveStrategy::select(plan.from, plan.to);
                self.board = strategy.apply(
                    &self.board,
                    plan.active_id.as_str(),
                    &plan.over_id,
                    plan.hover_index,
                );
                info!(
                    "moved {} from {} to {} ({:?})",
                    plan.active_id, plan.from, plan.to, strategy
                );
                DropOutcome::Committed {
                    strategy,
                    from: plan.from,
                    to: plan.to,
                }
            }
            Err(reason) => {
                debug!("drop left board unchanged: {reason}");
                DropOutcome::Unchanged(reason)
            }
        };
        self.session = DragSession::default();
        outcome
    }

    /// `Dragging --cancel--> Idle`; the board is never touched
    pub fn drag_cancel(&mut self) {
        if self.session.is_dragging() {
            debug!("drag cancelled");
        }
        self.session = DragSession::default();
    }

    /// Append a task to `in_progress`. Blank content is ignored.
    pub fn add_task(&mut self, content: &str) -> Option<TaskId> {
        if content.trim().is_empty() {
            debug!("add task ignored: blank content");
            return None;
        }
        let id = loop {
            let candidate = TaskId::generate();
            if !self.board.contains_id(candidate.as_str()) {
                break candidate;
            }
        };
        self.board = self
            .board
            .with_task(Container::InProgress, Task::new(id.clone(), content));
        info!("added task {id}");
        Some(id)
    }

    fn plan_drop(&self, over_id: Option<&str>) -> Result<MovePlan, DropRejected> {
        let active_id = self.session.active_id.as_ref().ok_or(DropRejected::NotDragging)?;
        let over_id = over_id.ok_or(DropRejected::NoTarget)?;
        if over_id == active_id.as_str() {
            return Err(DropRejected::DroppedOnSelf(active_id.clone()));
        }
        let from = resolve(&self.board, active_id.as_str())
            .ok_or_else(|| DropRejected::UnknownSource(active_id.clone()))?;
        let to = resolve(&self.board, over_id)
            .ok_or_else(|| DropRejected::UnknownDestination(over_id.to_string()))?;

        Ok(MovePlan {
            active_id: active_id.clone(),
            over_id: over_id.to_string(),
            from,
            to,
            hover_index: self.session.hover_index_for(to),
        })
    }
}
