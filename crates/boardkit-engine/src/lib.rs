//! Boardkit Engine
//!
//! The stateful half of boardkit: the entity store owning the two ordered
//! collections, the drag session, the pure reorder engine, and the `Board`
//! facade the host drives with drag lifecycle callbacks and UI actions.
//!
//! Everything is synchronous and single-threaded: each callback runs to
//! completion before the next is dispatched, so consecutive drag-over
//! events always see each other's results.

pub mod board;
pub mod reorder;
pub mod session;
pub mod store;

// Re-export commonly used types
pub use board::Board;
pub use reorder::{plan, relocate, ReorderPlan};
pub use session::DragSession;
pub use store::BoardStore;
