//! Drag session: which single entity, if any, is currently being dragged.

use boardkit_core::{Column, ColumnId, Task, TaskId};
use serde::{Deserialize, Serialize};

/// The transient drag state. At most one entity is active at a time.
///
/// The full entity value is snapshotted at drag-start (not just its id) so
/// the overlay can keep rendering it while the live sequence is reordered
/// underneath it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DragSession {
    /// No drag in progress.
    #[default]
    Idle,
    /// A column is being dragged.
    Column(Column),
    /// A task is being dragged.
    Task(Task),
}

impl DragSession {
    /// Returns true if no drag is in progress.
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Begin dragging a column. Ignored if a drag is already in progress.
    pub fn start_column(&mut self, snapshot: Column) {
        if self.is_idle() {
            *self = Self::Column(snapshot);
        }
    }

    /// Begin dragging a task. Ignored if a drag is already in progress.
    pub fn start_task(&mut self, snapshot: Task) {
        if self.is_idle() {
            *self = Self::Task(snapshot);
        }
    }

    /// End the drag unconditionally, regardless of outcome.
    pub fn clear(&mut self) {
        *self = Self::Idle;
    }

    /// The dragged column snapshot, if a column drag is active.
    pub fn dragged_column(&self) -> Option<&Column> {
        match self {
            Self::Column(col) => Some(col),
            _ => None,
        }
    }

    /// The dragged task snapshot, if a task drag is active.
    pub fn dragged_task(&self) -> Option<&Task> {
        match self {
            Self::Task(task) => Some(task),
            _ => None,
        }
    }

    /// Returns true if the given column is the one being dragged.
    pub fn is_dragging_column(&self, id: &ColumnId) -> bool {
        self.dragged_column().is_some_and(|c| &c.id == id)
    }

    /// Returns true if the given task is the one being dragged.
    pub fn is_dragging_task(&self, id: &TaskId) -> bool {
        self.dragged_task().is_some_and(|t| &t.id == id)
    }
}
