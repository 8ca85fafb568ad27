//! Boardkit Core Domain Types
//!
//! This crate contains pure domain types with no dependencies on:
//! - Rendering
//! - Pointer capture / hit testing
//! - Runtime specifics
//!
//! All types here represent the core data model of a boardkit board:
//! columns, tasks, drag descriptors, and domain errors.

pub mod drag;
pub mod error;
pub mod ids;
pub mod model;

// Re-export commonly used types
pub use drag::{DragDescriptor, DragEntity};
pub use error::BoardError;
pub use ids::{ColumnId, TaskId};
pub use model::{Column, Task};
