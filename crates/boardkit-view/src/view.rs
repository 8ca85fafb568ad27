//! Snapshot of board data for rendering (no locks, no mutation).

use boardkit_core::{Column, ColumnId, Task, TaskId};
use boardkit_engine::{Board, DragSession};
use serde::{Deserialize, Serialize};

/// One task card inside a lane.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// The task to render.
    pub task: Task,

    /// True while this task is the dragged entity: render it collapsed or
    /// ghosted in place, as the drop placeholder.
    pub ghosted: bool,
}

/// One column with its visible tasks, in global sequence order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lane {
    /// The column to render.
    pub column: Column,

    /// True while this column is the dragged entity.
    pub ghosted: bool,

    /// Tasks whose `column_id` matches this column, preserving their order
    /// in the global task sequence.
    pub cards: Vec<Card>,
}

/// The floating copy rendered under the pointer during a drag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Overlay {
    /// A whole column (with its cards) follows the pointer.
    Column(Column),
    /// A single task card follows the pointer.
    Task(Task),
}

/// The full render model for one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardView {
    /// Lanes in board display order.
    pub lanes: Vec<Lane>,

    /// The overlay copy, if a drag is in progress.
    pub overlay: Option<Overlay>,
}

impl BoardView {
    /// Build the render model for the board's current state.
    pub fn project(board: &Board) -> Self {
        let session = board.session();

        let lanes = board
            .columns()
            .iter()
            .map(|column| Lane {
                column: column.clone(),
                ghosted: session.is_dragging_column(&column.id),
                cards: board
                    .tasks()
                    .iter()
                    .filter(|task| task.column_id == column.id)
                    .map(|task| Card {
                        task: task.clone(),
                        ghosted: session.is_dragging_task(&task.id),
                    })
                    .collect(),
            })
            .collect();

        let overlay = match session {
            DragSession::Idle => None,
            DragSession::Column(column) => Some(Overlay::Column(column.clone())),
            DragSession::Task(task) => Some(Overlay::Task(task.clone())),
        };

        Self { lanes, overlay }
    }

    /// The lane rendering a given column, if present.
    pub fn lane(&self, id: &ColumnId) -> Option<&Lane> {
        self.lanes.iter().find(|lane| &lane.column.id == id)
    }

    /// Total number of cards across all lanes.
    pub fn card_count(&self) -> usize {
        self.lanes.iter().map(|lane| lane.cards.len()).sum()
    }

    /// True if any lane renders the given task as a ghost placeholder.
    pub fn is_ghosted(&self, id: &TaskId) -> bool {
        self.lanes
            .iter()
            .flat_map(|lane| lane.cards.iter())
            .any(|card| &card.task.id == id && card.ghosted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use boardkit_core::{DragDescriptor, DragEntity};

    fn seeded_board() -> Board {
        let mut board = Board::new();
        board
            .insert_column(Column::new("A").with_id(ColumnId::new("a")))
            .unwrap();
        board
            .insert_column(Column::new("B").with_id(ColumnId::new("b")))
            .unwrap();
        for (task, col) in [("t1", "a"), ("t2", "b"), ("t3", "a")] {
            board
                .insert_task(Task::new(ColumnId::new(col), task).with_id(TaskId::new(task)))
                .unwrap();
        }
        board
    }

    #[test]
    fn test_lanes_filter_global_order() {
        let board = seeded_board();
        let view = BoardView::project(&board);

        let lane_a = view.lane(&ColumnId::new("a")).unwrap();
        let ids: Vec<_> = lane_a.cards.iter().map(|c| c.task.id.as_str()).collect();
        // t1 and t3 in global sequence order, t2 filtered out.
        assert_eq!(ids, vec!["t1", "t3"]);

        let lane_b = view.lane(&ColumnId::new("b")).unwrap();
        assert_eq!(lane_b.cards.len(), 1);
        assert_eq!(view.card_count(), 3);
    }

    #[test]
    fn test_idle_board_has_no_overlay_or_ghosts() {
        let board = seeded_board();
        let view = BoardView::project(&board);

        assert!(view.overlay.is_none());
        assert!(view.lanes.iter().all(|lane| !lane.ghosted));
        assert!(!view.is_ghosted(&TaskId::new("t1")));
    }

    #[test]
    fn test_dragged_task_is_ghosted_in_place_and_duplicated_in_overlay() {
        let mut board = seeded_board();
        board.on_drag_start(&DragDescriptor::new(DragEntity::Task(TaskId::new("t1"))));

        let view = BoardView::project(&board);

        // Exactly one copy stays in its lane, flagged as the placeholder.
        assert!(view.is_ghosted(&TaskId::new("t1")));
        assert_eq!(view.card_count(), 3);

        match view.overlay {
            Some(Overlay::Task(task)) => assert_eq!(task.id, TaskId::new("t1")),
            other => panic!("expected a task overlay, got {other:?}"),
        }
    }

    #[test]
    fn test_dragged_column_is_ghosted() {
        let mut board = seeded_board();
        board.on_drag_start(&DragDescriptor::new(DragEntity::Column(ColumnId::new("b"))));

        let view = BoardView::project(&board);
        assert!(view.lane(&ColumnId::new("b")).unwrap().ghosted);
        assert!(!view.lane(&ColumnId::new("a")).unwrap().ghosted);
        assert!(matches!(view.overlay, Some(Overlay::Column(_))));
    }

    #[test]
    fn test_projection_follows_reorder_mid_drag() {
        let mut board = seeded_board();
        board.on_drag_start(&DragDescriptor::new(DragEntity::Task(TaskId::new("t1"))));
        board.on_drag_over(&DragDescriptor::over(
            DragEntity::Task(TaskId::new("t1")),
            DragEntity::Task(TaskId::new("t2")),
        ));

        let view = BoardView::project(&board);

        // t1 now renders under column b, still ghosted, still one copy.
        let lane_b = view.lane(&ColumnId::new("b")).unwrap();
        assert!(lane_b.cards.iter().any(|c| c.task.id == TaskId::new("t1")));
        assert!(view.is_ghosted(&TaskId::new("t1")));
        assert_eq!(view.card_count(), 3);
    }
}
