//! Column and Task types.

use crate::{ColumnId, TaskId};
use serde::{Deserialize, Serialize};

/// A Column is a named, ordered bucket of tasks on the board.
///
/// Columns exist independently of whether any task references them; board
/// display order is the order of the column sequence, not anything stored
/// on the column itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Unique column identifier.
    pub id: ColumnId,

    /// User-visible title. Any string is accepted.
    pub title: String,
}

impl Column {
    /// Create a new Column with a fresh identifier.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: ColumnId::generate(),
            title: title.into(),
        }
    }

    /// Builder method to set a specific ID (useful for testing).
    pub fn with_id(mut self, id: ColumnId) -> Self {
        self.id = id;
        self
    }
}

/// A Task is a user-authored item belonging to exactly one column at a time.
///
/// Column membership is the `column_id` field; tasks live in one global
/// ordered sequence spanning all columns, and per-column grouping is a
/// filtered view over that sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique task identifier.
    pub id: TaskId,

    /// Column this task currently belongs to. Must resolve to a stored
    /// column in any state observable outside a single reorder step.
    pub column_id: ColumnId,

    /// User-visible content. Any string is accepted.
    pub content: String,
}

impl Task {
    /// Create a new Task with a fresh identifier.
    pub fn new(column_id: ColumnId, content: impl Into<String>) -> Self {
        Self {
            id: TaskId::generate(),
            column_id,
            content: content.into(),
        }
    }

    /// Builder method to set a specific ID (useful for testing).
    pub fn with_id(mut self, id: TaskId) -> Self {
        self.id = id;
        self
    }
}
