//! Core domain errors.
//!
//! Malformed references during a drag are absorbed as silent no-ops by the
//! engine; the variants here are the loud failures reserved for broken host
//! contracts, surfaced by the seeding API.

use crate::{ColumnId, TaskId};
use thiserror::Error;

/// Core domain errors for boardkit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    /// A column with this id is already stored. Indicates a broken external
    /// id generator; never silently merge two distinct entities.
    #[error("Duplicate column id: {0}")]
    DuplicateColumn(ColumnId),

    /// A task with this id is already stored.
    #[error("Duplicate task id: {0}")]
    DuplicateTask(TaskId),

    /// A task references a column that is not in the store.
    #[error("Task '{task}' references unknown column '{column}'")]
    UnknownColumn { task: TaskId, column: ColumnId },
}
