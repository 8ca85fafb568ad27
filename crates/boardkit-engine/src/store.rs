//! Entity store: owns the two ordered collections and their mutations.

use boardkit_core::{BoardError, Column, ColumnId, Task, TaskId};

/// Owns the ordered column sequence and the single global task sequence.
///
/// Every mutation rebuilds the affected sequence into a fresh `Vec` and
/// replaces it wholesale, so a reader holding a snapshot never observes a
/// half-updated sequence. Unknown ids are absorbed as no-ops; the only loud
/// failures are duplicate-id and dangling-reference seeding via
/// [`BoardStore::insert_column`] / [`BoardStore::insert_task`].
#[derive(Debug, Default, Clone)]
pub struct BoardStore {
    columns: Vec<Column>,
    tasks: Vec<Task>,

    /// Monotonic counters for default titles. Never reused after deletions
    /// so defaults stay distinguishable.
    next_column_number: usize,
    next_task_number: usize,
}

impl BoardStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// The ordered column sequence.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// The global ordered task sequence, spanning all columns.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Look up a column by id.
    pub fn column(&self, id: &ColumnId) -> Option<&Column> {
        self.columns.iter().find(|c| &c.id == id)
    }

    /// Look up a task by id.
    pub fn task(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| &t.id == id)
    }

    /// Append a new column with a fresh id and a default title.
    pub fn create_column(&mut self) -> Column {
        self.next_column_number += 1;
        let column = Column::new(format!("Column {}", self.next_column_number));

        let mut columns = self.columns.clone();
        columns.push(column.clone());
        self.columns = columns;

        column
    }

    /// Remove a column and every task that belongs to it.
    ///
    /// Cascade deletion happens in the same mutation so a dangling
    /// `column_id` is never observable. No-op if the id is unknown.
    pub fn delete_column(&mut self, id: &ColumnId) {
        if self.column(id).is_none() {
            return;
        }
        self.columns = self.columns.iter().filter(|c| &c.id != id).cloned().collect();
        self.tasks = self
            .tasks
            .iter()
            .filter(|t| &t.column_id != id)
            .cloned()
            .collect();
    }

    /// Replace a column's title. No-op if the id is unknown.
    pub fn rename_column(&mut self, id: &ColumnId, title: impl Into<String>) {
        if self.column(id).is_none() {
            return;
        }
        let title = title.into();
        self.columns = self
            .columns
            .iter()
            .map(|c| {
                if &c.id == id {
                    Column {
                        id: c.id.clone(),
                        title: title.clone(),
                    }
                } else {
                    c.clone()
                }
            })
            .collect();
    }

    /// Append a new task to the given column with default content.
    ///
    /// Returns `None` (no-op) if the column id is unknown, keeping the
    /// every-task-resolves invariant unconditional.
    pub fn create_task(&mut self, column_id: &ColumnId) -> Option<Task> {
        self.column(column_id)?;

        self.next_task_number += 1;
        let task = Task::new(column_id.clone(), format!("Task {}", self.next_task_number));

        let mut tasks = self.tasks.clone();
        tasks.push(task.clone());
        self.tasks = tasks;

        Some(task)
    }

    /// Remove a task. No-op if the id is unknown.
    pub fn delete_task(&mut self, id: &TaskId) {
        if self.task(id).is_none() {
            return;
        }
        self.tasks = self.tasks.iter().filter(|t| &t.id != id).cloned().collect();
    }

    /// Append a host-supplied column (e.g. loading a saved board).
    ///
    /// A duplicate id within the column kind means the external id generator
    /// is broken and fails loudly.
    pub fn insert_column(&mut self, column: Column) -> Result<(), BoardError> {
        if self.column(&column.id).is_some() {
            return Err(BoardError::DuplicateColumn(column.id));
        }
        let mut columns = self.columns.clone();
        columns.push(column);
        self.columns = columns;
        Ok(())
    }

    /// Append a host-supplied task.
    ///
    /// Fails loudly on a duplicate task id or a `column_id` that does not
    /// resolve to a stored column.
    pub fn insert_task(&mut self, task: Task) -> Result<(), BoardError> {
        if self.task(&task.id).is_some() {
            return Err(BoardError::DuplicateTask(task.id));
        }
        if self.column(&task.column_id).is_none() {
            return Err(BoardError::UnknownColumn {
                task: task.id,
                column: task.column_id,
            });
        }
        let mut tasks = self.tasks.clone();
        tasks.push(task);
        self.tasks = tasks;
        Ok(())
    }

    /// Replace the column sequence with a reordered permutation of it.
    pub(crate) fn set_columns(&mut self, columns: Vec<Column>) {
        self.columns = columns;
    }

    /// Replace the task sequence with a reordered permutation of it.
    pub(crate) fn set_tasks(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_column_sits_at_position_zero() {
        let mut store = BoardStore::new();
        let col = store.create_column();

        assert_eq!(store.columns().len(), 1);
        assert_eq!(store.columns()[0].id, col.id);
        assert_eq!(col.title, "Column 1");
    }

    #[test]
    fn test_default_titles_stay_distinguishable_after_deletion() {
        let mut store = BoardStore::new();
        let a = store.create_column();
        let b = store.create_column();
        store.delete_column(&a.id);
        let c = store.create_column();

        assert_ne!(b.title, c.title);
        assert_eq!(c.title, "Column 3");
    }

    #[test]
    fn test_create_task_appends_to_global_sequence() {
        let mut store = BoardStore::new();
        let a = store.create_column();
        let b = store.create_column();

        let t1 = store.create_task(&a.id).unwrap();
        let t2 = store.create_task(&b.id).unwrap();
        let t3 = store.create_task(&a.id).unwrap();

        let order: Vec<_> = store.tasks().iter().map(|t| t.id.clone()).collect();
        assert_eq!(order, vec![t1.id, t2.id, t3.id]);
    }

    #[test]
    fn test_create_task_unknown_column_is_noop() {
        let mut store = BoardStore::new();
        assert!(store.create_task(&ColumnId::new("nope")).is_none());
        assert!(store.tasks().is_empty());
    }

    #[test]
    fn test_delete_column_cascades_to_tasks() {
        let mut store = BoardStore::new();
        let a = store.create_column();
        let b = store.create_column();
        let c = store.create_column();
        let t1 = store.create_task(&a.id).unwrap();
        let _t2 = store.create_task(&b.id).unwrap();

        store.delete_column(&b.id);

        let remaining: Vec<_> = store.columns().iter().map(|col| col.id.clone()).collect();
        assert_eq!(remaining, vec![a.id, c.id]);
        let tasks: Vec<_> = store.tasks().iter().map(|t| t.id.clone()).collect();
        assert_eq!(tasks, vec![t1.id]);
    }

    #[test]
    fn test_delete_unknown_ids_are_noops() {
        let mut store = BoardStore::new();
        let col = store.create_column();
        let task = store.create_task(&col.id).unwrap();

        store.delete_column(&ColumnId::new("missing"));
        store.delete_task(&TaskId::new("missing"));

        assert_eq!(store.columns().len(), 1);
        assert_eq!(store.task(&task.id), Some(&task));
    }

    #[test]
    fn test_rename_column() {
        let mut store = BoardStore::new();
        let col = store.create_column();

        store.rename_column(&col.id, "In Review");
        assert_eq!(store.column(&col.id).unwrap().title, "In Review");

        // Unknown id leaves everything untouched.
        store.rename_column(&ColumnId::new("missing"), "x");
        assert_eq!(store.column(&col.id).unwrap().title, "In Review");
    }

    #[test]
    fn test_insert_duplicate_column_fails_loudly() {
        let mut store = BoardStore::new();
        let col = Column::new("Backlog").with_id(ColumnId::new("c1"));
        store.insert_column(col.clone()).unwrap();

        let err = store.insert_column(Column::new("Other").with_id(ColumnId::new("c1")));
        assert_eq!(err, Err(BoardError::DuplicateColumn(ColumnId::new("c1"))));
    }

    #[test]
    fn test_insert_task_requires_resolvable_column() {
        let mut store = BoardStore::new();
        let col = store.create_column();

        let ok = Task::new(col.id.clone(), "fine").with_id(TaskId::new("t1"));
        store.insert_task(ok).unwrap();

        let dup = Task::new(col.id.clone(), "dup").with_id(TaskId::new("t1"));
        assert_eq!(
            store.insert_task(dup),
            Err(BoardError::DuplicateTask(TaskId::new("t1")))
        );

        let dangling = Task::new(ColumnId::new("ghost"), "lost").with_id(TaskId::new("t2"));
        assert_eq!(
            store.insert_task(dangling),
            Err(BoardError::UnknownColumn {
                task: TaskId::new("t2"),
                column: ColumnId::new("ghost"),
            })
        );
    }
}
