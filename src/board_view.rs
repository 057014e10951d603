//! Board View Models
//!
//! Plain data derived from the controller for rendering. Components only
//! display these; every decision is made here or in the core.

use board_core::{BoardController, ColumnTitles, Container};

/// A card as rendered in a column
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub id: String,
    pub content: String,
    /// Style tag (CSS classes) looked up from the content
    pub style: String,
    /// This card is the one being dragged; its slot renders invisible
    pub is_dragging: bool,
}

/// One rendered row of a column
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnSlot {
    Placeholder,
    Card(CardView),
}

impl ColumnSlot {
    /// Stable key for keyed rendering
    pub fn key(&self) -> String {
        match self {
            ColumnSlot::Placeholder => "drop-placeholder".to_string(),
            ColumnSlot::Card(card) => format!("{}:{}", card.id, card.is_dragging),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnView {
    pub container: Container,
    pub title: String,
    pub cards: Vec<CardView>,
    /// Draw the placeholder before this card (or last when equal to the count)
    pub placeholder_index: Option<usize>,
    /// The drag currently targets this column
    pub is_drag_over: bool,
    /// ...and the pointer is on its background rather than on a card
    pub is_over_column: bool,
}

impl ColumnView {
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Show the "No tasks" empty state
    pub fn shows_empty_state(&self) -> bool {
        self.is_empty() && self.placeholder_index.is_none()
    }

    /// Cards in order with the placeholder spliced in at its index
    pub fn slots(&self) -> Vec<ColumnSlot> {
        let mut slots: Vec<ColumnSlot> = self.cards.iter().cloned().map(ColumnSlot::Card).collect();
        if let Some(index) = self.placeholder_index {
            slots.insert(index.min(slots.len()), ColumnSlot::Placeholder);
        }
        slots
    }
}

fn card_view(controller: &BoardController, id: &str, content: &str) -> CardView {
    let session = controller.session();
    CardView {
        id: id.to_string(),
        content: content.to_string(),
        style: controller.task_style(content).to_string(),
        is_dragging: session.active_id.as_ref().map(|a| a.as_str()) == Some(id),
    }
}

/// View model for one column
pub fn column_view(controller: &BoardController, titles: &ColumnTitles, container: Container) -> ColumnView {
    let board = controller.board();
    let session = controller.session();
    let is_drag_over = session.is_dragging() && session.target_container == Some(container);
    ColumnView {
        container,
        title: titles.title(container).to_string(),
        cards: board
            .tasks(container)
            .iter()
            .map(|task| card_view(controller, task.id.as_str(), &task.content))
            .collect(),
        placeholder_index: session.placeholder_index(board, container),
        is_drag_over,
        is_over_column: is_drag_over && session.is_over_column,
    }
}

/// The card following the pointer while dragging
pub fn overlay_card(controller: &BoardController) -> Option<CardView> {
    let task = controller.active_task()?;
    Some(card_view(controller, task.id.as_str(), &task.content))
}
