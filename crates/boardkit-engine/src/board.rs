//! Board facade: event dispatch over the store and the drag session.

use boardkit_core::{BoardError, Column, ColumnId, DragDescriptor, DragEntity, Task, TaskId};
use tracing::{debug, trace};

use crate::reorder::{self, ReorderPlan};
use crate::session::DragSession;
use crate::store::BoardStore;

/// The board: entity store plus drag session, driven by the host's drag
/// lifecycle callbacks and UI actions.
///
/// All handlers run synchronously to completion; each drag-over sees the
/// state produced by the previous one. Malformed events are absorbed as
/// no-ops and logged, never escalated.
#[derive(Debug, Default, Clone)]
pub struct Board {
    store: BoardStore,
    session: DragSession,
}

impl Board {
    /// Create an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a board over a pre-populated store (e.g. a loaded save).
    pub fn with_store(store: BoardStore) -> Self {
        Self {
            store,
            session: DragSession::Idle,
        }
    }

    /// The ordered column sequence.
    pub fn columns(&self) -> &[Column] {
        self.store.columns()
    }

    /// The global ordered task sequence.
    pub fn tasks(&self) -> &[Task] {
        self.store.tasks()
    }

    /// The current drag session, for overlay rendering.
    pub fn session(&self) -> &DragSession {
        &self.session
    }

    // --- drag lifecycle -------------------------------------------------

    /// Handle a drag-start event: snapshot the dragged entity.
    ///
    /// Ignored if a drag is already active or the id resolves nowhere.
    pub fn on_drag_start(&mut self, descriptor: &DragDescriptor) {
        if !self.session.is_idle() {
            debug!("drag start ignored: a drag is already active");
            return;
        }
        match &descriptor.active {
            DragEntity::Column(id) => {
                if let Some(column) = self.store.column(id) {
                    debug!(column = %id, "drag started");
                    self.session.start_column(column.clone());
                } else {
                    debug!(column = %id, "drag start ignored: unknown column");
                }
            }
            DragEntity::Task(id) => {
                if let Some(task) = self.store.task(id) {
                    debug!(task = %id, "drag started");
                    self.session.start_task(task.clone());
                } else {
                    debug!(task = %id, "drag start ignored: unknown task");
                }
            }
        }
    }

    /// Handle a drag-over event: recompute order and/or task ownership.
    ///
    /// No target means no-op; all reorder rules live in [`reorder::plan`].
    pub fn on_drag_over(&mut self, descriptor: &DragDescriptor) {
        let Some(over) = &descriptor.over else {
            trace!("drag over ignored: no target");
            return;
        };

        match reorder::plan(
            self.store.columns(),
            self.store.tasks(),
            &descriptor.active,
            over,
        ) {
            ReorderPlan::Unchanged => {
                trace!("drag over: unchanged");
            }
            ReorderPlan::Columns(columns) => {
                debug!("drag over: column sequence reordered");
                self.store.set_columns(columns);
            }
            ReorderPlan::Tasks(tasks) => {
                debug!("drag over: task sequence reordered");
                self.store.set_tasks(tasks);
            }
        }
    }

    /// Handle a drag-end event: clear the session unconditionally.
    ///
    /// The state reached by the last drag-over is already final; this never
    /// performs additional reordering. Ignored when no drag is active.
    pub fn on_drag_end(&mut self, _descriptor: &DragDescriptor) {
        if self.session.is_idle() {
            debug!("drag end ignored: no active drag");
            return;
        }
        debug!("drag ended");
        self.session.clear();
    }

    // --- UI actions -----------------------------------------------------

    /// Append a new column with a default title.
    pub fn create_column(&mut self) -> Column {
        let column = self.store.create_column();
        debug!(column = %column.id, title = %column.title, "column created");
        column
    }

    /// Delete a column and, by policy, every task it holds.
    pub fn delete_column(&mut self, id: &ColumnId) {
        debug!(column = %id, "column deleted");
        self.store.delete_column(id);
    }

    /// Rename a column.
    pub fn rename_column(&mut self, id: &ColumnId, title: impl Into<String>) {
        self.store.rename_column(id, title);
    }

    /// Append a new task to the given column. `None` if the column is
    /// unknown.
    pub fn create_task(&mut self, column_id: &ColumnId) -> Option<Task> {
        let task = self.store.create_task(column_id);
        if let Some(task) = &task {
            debug!(task = %task.id, column = %column_id, "task created");
        } else {
            debug!(column = %column_id, "task creation ignored: unknown column");
        }
        task
    }

    /// Delete a task.
    pub fn delete_task(&mut self, id: &TaskId) {
        debug!(task = %id, "task deleted");
        self.store.delete_task(id);
    }

    /// Seed a host-supplied column. Duplicate ids fail loudly.
    pub fn insert_column(&mut self, column: Column) -> Result<(), BoardError> {
        self.store.insert_column(column)
    }

    /// Seed a host-supplied task. Duplicate or dangling ids fail loudly.
    pub fn insert_task(&mut self, task: Task) -> Result<(), BoardError> {
        self.store.insert_task(task)
    }
}
