//! Drag Session Integration Tests
//!
//! Whole gestures driven through the controller, start to end.

use board_core::{
    resolve, Board, BoardConfig, BoardController, Container, DropOutcome, MoveStrategy, Task,
    TaskStyles,
};

fn controller(in_progress: &[(&str, &str)], done: &[(&str, &str)]) -> BoardController {
    let tasks = |list: &[(&str, &str)]| -> Vec<Task> {
        list.iter().map(|(id, content)| Task::new(*id, *content)).collect()
    };
    BoardController::new(Board::new(tasks(in_progress), tasks(done)), TaskStyles::default())
}

fn contents(tasks: &[Task]) -> Vec<&str> {
    tasks.iter().map(|t| t.content.as_str()).collect()
}

fn ids(tasks: &[Task]) -> Vec<&str> {
    tasks.iter().map(|t| t.id.as_str()).collect()
}

#[test]
fn test_cancel_restores_board_exactly() {
    let mut c = controller(&[("1", "Task A"), ("2", "Task B")], &[("3", "Task C")]);
    let before = c.board().clone();

    c.drag_start("1");
    c.drag_move(Some("done"));
    c.drag_move(Some("3"));
    c.drag_cancel();

    assert_eq!(c.board(), &before);
    assert!(!c.is_dragging());
    assert_eq!(c.session().hover_index, None);
}

#[test]
fn test_drop_on_self_is_noop() {
    let mut c = controller(&[("1", "Task A"), ("2", "Task B")], &[]);
    let before = c.board().clone();
    c.drag_start("2");
    c.drag_move(Some("2"));
    c.drag_end(Some("2"));
    assert_eq!(c.board(), &before);
}

#[test]
fn test_same_container_reorder() {
    let mut c = controller(&[("A", "a"), ("B", "b"), ("C", "c"), ("D", "d")], &[]);
    c.drag_start("A");
    c.drag_move(Some("C"));
    let outcome = c.drag_end(Some("C"));

    assert!(matches!(
        outcome,
        DropOutcome::Committed { strategy: MoveStrategy::SameContainer, .. }
    ));
    assert_eq!(ids(&c.board().in_progress), vec!["B", "C", "A", "D"]);
}

#[test]
fn test_cross_container_drop_on_column_is_content_ordered() {
    let mut c = controller(&[("b", "Banana")], &[("a", "Apple"), ("c", "Cherry")]);
    c.drag_start("b");
    c.drag_move(Some("done"));
    assert_eq!(c.session().hover_index, Some(1));
    assert_eq!(c.session().placeholder_index(c.board(), Container::Done), Some(1));
    c.drag_end(Some("done"));

    assert_eq!(contents(&c.board().done), vec!["Apple", "Banana", "Cherry"]);
    assert!(c.board().in_progress.is_empty());
}

#[test]
fn test_cross_container_drop_without_move_events_recomputes() {
    let mut c = controller(&[("b", "Banana")], &[("a", "Apple"), ("c", "Cherry")]);
    c.drag_start("b");
    c.drag_end(Some("done"));
    assert_eq!(contents(&c.board().done), vec!["Apple", "Banana", "Cherry"]);
}

#[test]
fn test_explicit_index_overrides_content_order() {
    let board = Board::new(
        vec![Task::new("b", "Banana")],
        vec![Task::new("a", "Apple"), Task::new("c", "Cherry")],
    );
    let next = MoveStrategy::CrossContainer.apply(&board, "b", "done", Some(0));
    assert_eq!(contents(&next.done), vec!["Banana", "Apple", "Cherry"]);
}

#[test]
fn test_stale_hover_index_from_other_column_is_not_used() {
    let mut c = controller(&[("m", "Mango"), ("p", "Pear")], &[("a", "Apple"), ("c", "Cherry")]);
    c.drag_start("m");
    // hovering its own column first: Mango < Pear, so index 1 in in_progress
    c.drag_move(Some("p"));
    assert_eq!(c.session().target_container, Some(Container::InProgress));
    assert_eq!(c.session().hover_index, Some(1));
    // released over the done column without a move event in between
    c.drag_end(Some("done"));
    assert_eq!(contents(&c.board().done), vec!["Apple", "Cherry", "Mango"]);
}

#[test]
fn test_stale_hover_index_zero_does_not_reach_front() {
    let mut c = controller(&[("z", "Zebra"), ("m", "Mango")], &[("a", "Apple"), ("c", "Cherry")]);
    c.drag_start("m");
    c.drag_move(Some("z"));
    assert_eq!(c.session().hover_index, Some(0));
    // index 0 would give [Mango, Apple, Cherry]
    c.drag_end(Some("done"));
    assert_eq!(contents(&c.board().done), vec!["Apple", "Cherry", "Mango"]);
    assert_eq!(contents(&c.board().in_progress), vec!["Zebra"]);
}

#[test]
fn test_drop_into_empty_column() {
    let mut c = controller(&[("1", "Task A")], &[]);
    c.drag_start("1");
    c.drag_move(Some("done"));
    assert_eq!(c.session().placeholder_index(c.board(), Container::Done), Some(0));
    c.drag_end(Some("done"));
    assert_eq!(ids(&c.board().done), vec!["1"]);
    assert!(c.board().in_progress.is_empty());
}

#[test]
fn test_task_moves_back_and_forth() {
    let mut c = controller(&[("1", "Task A"), ("2", "Task B")], &[("3", "Task C")]);

    c.drag_start("1");
    c.drag_move(Some("done"));
    c.drag_end(Some("done"));
    assert_eq!(ids(&c.board().done), vec!["1", "3"]);

    c.drag_start("1");
    c.drag_move(Some("2"));
    c.drag_end(Some("2"));
    assert_eq!(ids(&c.board().in_progress), vec!["1", "2"]);
    assert_eq!(ids(&c.board().done), vec!["3"]);
}

#[test]
fn test_resolver_round_trip_after_moves() {
    let mut c = BoardController::from_config(&BoardConfig::default());
    let first = c.board().in_progress[0].id.clone();
    c.drag_start(first.as_str());
    c.drag_move(Some("done"));
    c.drag_end(Some("done"));

    let board = c.board();
    for (container, task) in board.iter() {
        assert_eq!(resolve(board, task.id.as_str()), Some(container));
    }
    assert_eq!(resolve(board, first.as_str()), Some(Container::Done));
}

#[test]
fn test_add_task_appends_with_fresh_id() {
    let mut c = BoardController::from_config(&BoardConfig::default());
    let before = c.board().clone();

    let id = c.add_task("Write spec").expect("task added");
    assert_eq!(c.board().in_progress.len(), before.in_progress.len() + 1);
    let last = c.board().in_progress.last().unwrap();
    assert_eq!(last.content, "Write spec");
    assert_eq!(last.id, id);
    assert!(!before.contains_id(id.as_str()));

    let snapshot = c.board().clone();
    assert!(c.add_task("   ").is_none());
    assert_eq!(c.board(), &snapshot);
}

#[test]
fn test_placeholder_hidden_in_source_column() {
    let mut c = controller(&[("1", "Task A"), ("2", "Task B")], &[]);
    c.drag_start("1");
    c.drag_move(Some("2"));
    assert_eq!(c.session().target_container, Some(Container::InProgress));
    assert_eq!(c.session().placeholder_index(c.board(), Container::InProgress), None);
}

#[test]
fn test_mixed_case_drop_on_column_sorts_alphabetically() {
    let mut c = controller(&[("b", "Banana")], &[("a", "apple"), ("c", "cherry")]);
    c.drag_start("b");
    c.drag_move(Some("done"));
    assert_eq!(c.session().hover_index, Some(1));
    c.drag_end(Some("done"));
    assert_eq!(contents(&c.board().done), vec!["apple", "Banana", "cherry"]);
}
