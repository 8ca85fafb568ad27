//! Drag lifecycle descriptors delivered by the pointer-gesture source.
//!
//! The descriptor is a closed tagged union over the two draggable kinds, so
//! a kindless payload is unrepresentable and a third kind cannot silently
//! fall through dispatch. "Not over anything valid" is `over: None`.

use crate::{ColumnId, TaskId};
use serde::{Deserialize, Serialize};

/// A reference to one draggable entity, tagged with its kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DragEntity {
    /// A column, dragged or hovered as a whole.
    Column(ColumnId),
    /// A task card.
    Task(TaskId),
}

impl DragEntity {
    /// Returns the column id if this entity is a column.
    pub fn as_column(&self) -> Option<&ColumnId> {
        match self {
            Self::Column(id) => Some(id),
            Self::Task(_) => None,
        }
    }

    /// Returns the task id if this entity is a task.
    pub fn as_task(&self) -> Option<&TaskId> {
        match self {
            Self::Task(id) => Some(id),
            Self::Column(_) => None,
        }
    }
}

/// Payload of one drag lifecycle event (start / over / end).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragDescriptor {
    /// The entity being dragged.
    pub active: DragEntity,

    /// The entity currently under the pointer, if any.
    pub over: Option<DragEntity>,
}

impl DragDescriptor {
    /// Descriptor with no hover target.
    pub fn new(active: DragEntity) -> Self {
        Self { active, over: None }
    }

    /// Descriptor with a hover target.
    pub fn over(active: DragEntity, over: DragEntity) -> Self {
        Self {
            active,
            over: Some(over),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_kind_accessors() {
        let col = DragEntity::Column(ColumnId::new("c1"));
        let task = DragEntity::Task(TaskId::new("t1"));

        assert!(col.as_column().is_some());
        assert!(col.as_task().is_none());
        assert!(task.as_task().is_some());
        assert!(task.as_column().is_none());
    }

    #[test]
    fn test_same_value_different_kind_is_not_equal() {
        // Column ids and task ids may collide in value; the tag keeps them
        // distinct entities.
        let col = DragEntity::Column(ColumnId::new("42"));
        let task = DragEntity::Task(TaskId::new("42"));
        assert_ne!(col, task);
    }

    #[test]
    fn test_descriptor_serialization_shape() {
        let desc = DragDescriptor::over(
            DragEntity::Task(TaskId::new("t1")),
            DragEntity::Column(ColumnId::new("c1")),
        );
        let json = serde_json::to_value(&desc).unwrap();
        assert_eq!(json["active"]["task"], "t1");
        assert_eq!(json["over"]["column"], "c1");
    }
}
