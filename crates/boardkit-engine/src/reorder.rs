//! Reorder engine: pure functions from collections + hover event to the
//! next collection state.
//!
//! Nothing here touches a store or a session; callers apply the returned
//! plan. All malformed inputs (unknown ids, kind mismatches) degrade to
//! [`ReorderPlan::Unchanged`] because drag gestures routinely produce
//! transient invalid intermediate states that must not crash the
//! interaction.

use boardkit_core::{Column, DragEntity, Task};

/// The next collection state computed for one drag-over event.
///
/// At most one of the two sequences changes per event, so the plan names
/// which one (or neither).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReorderPlan {
    /// Nothing to do; both sequences stand as they are.
    Unchanged,
    /// Replace the column sequence.
    Columns(Vec<Column>),
    /// Replace the task sequence.
    Tasks(Vec<Task>),
}

impl ReorderPlan {
    /// Returns true if the event left both sequences untouched.
    pub fn is_unchanged(&self) -> bool {
        matches!(self, Self::Unchanged)
    }
}

/// Move the element at `from` to position `to`, shifting the elements in
/// between by one slot. `to` is interpreted after the removal, matching a
/// remove-then-insert splice. `from == to` is the identity.
///
/// This is the single relocation primitive; columns and tasks both reorder
/// through it. Out-of-range indices return the input unchanged.
pub fn relocate<T: Clone>(items: &[T], from: usize, to: usize) -> Vec<T> {
    let mut out = items.to_vec();
    if from >= out.len() || to >= out.len() || from == to {
        return out;
    }
    let item = out.remove(from);
    out.insert(to, item);
    out
}

/// Compute the next collection state for one drag-over event.
///
/// Rules, in priority order:
/// 1. dragging over itself: unchanged;
/// 2. column over column: relocate the dragged column to the target's slot;
/// 3. task over task: adopt the target task's column, then relocate within
///    the global task sequence;
/// 4. task over column (empty column space): adopt the column, keep
///    position;
/// 5. column over task: unchanged.
///
/// Cross-kind cases must come after the same-kind cases: a task dragged
/// toward a column edge transiently reports the column as its target before
/// landing on a sibling task.
pub fn plan(
    columns: &[Column],
    tasks: &[Task],
    active: &DragEntity,
    over: &DragEntity,
) -> ReorderPlan {
    if active == over {
        return ReorderPlan::Unchanged;
    }

    match (active, over) {
        (DragEntity::Column(active_id), DragEntity::Column(over_id)) => {
            let Some(from) = columns.iter().position(|c| &c.id == active_id) else {
                return ReorderPlan::Unchanged;
            };
            let Some(to) = columns.iter().position(|c| &c.id == over_id) else {
                return ReorderPlan::Unchanged;
            };
            ReorderPlan::Columns(relocate(columns, from, to))
        }
        (DragEntity::Task(active_id), DragEntity::Task(over_id)) => {
            let Some(from) = tasks.iter().position(|t| &t.id == active_id) else {
                return ReorderPlan::Unchanged;
            };
            let Some(to) = tasks.iter().position(|t| &t.id == over_id) else {
                return ReorderPlan::Unchanged;
            };
            // Adopt the hovered task's column, then move into its slot.
            let mut next = tasks.to_vec();
            let adopted = next[to].column_id.clone();
            next[from].column_id = adopted;
            ReorderPlan::Tasks(relocate(&next, from, to))
        }
        (DragEntity::Task(active_id), DragEntity::Column(over_id)) => {
            let Some(from) = tasks.iter().position(|t| &t.id == active_id) else {
                return ReorderPlan::Unchanged;
            };
            if !columns.iter().any(|c| &c.id == over_id) {
                return ReorderPlan::Unchanged;
            }
            if tasks[from].column_id == *over_id {
                return ReorderPlan::Unchanged;
            }
            // Hovering empty column space: adopt the column, position stays.
            let mut next = tasks.to_vec();
            next[from].column_id = over_id.clone();
            ReorderPlan::Tasks(next)
        }
        (DragEntity::Column(_), DragEntity::Task(_)) => ReorderPlan::Unchanged,
    }
}
