//! Boardkit View
//!
//! Read-only projection of a board plus its drag session into what the host
//! must render: per-column lanes in global sequence order, ghost flags for
//! the live-list placeholder, and the floating overlay copy that tracks the
//! pointer. Projection never mutates the board; the dragged entity stays in
//! its live sequence slot and is merely flagged.

use boardkit_engine::Board;

pub mod view;

pub use view::{BoardView, Card, Lane, Overlay};

/// Project a board into its render model. Convenience for
/// [`BoardView::project`].
pub fn project(board: &Board) -> BoardView {
    BoardView::project(board)
}
