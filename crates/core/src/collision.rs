//! Collision engine - placement legality for a piece frame
//!
//! A single primitive answers every movement and rotation question: would the
//! occupied cells of `frame`, overlaid at the piece anchor plus `(dx, dy)`,
//! leave the board sideways, sink through the floor, or overlap a locked cell?
//!
//! Cells above the visible grid (negative rows) are legal. That is what lets
//! pieces spawn above the top edge and fall into view.

use crate::board::Board;
use crate::catalog::RotationFrame;
use crate::piece::ActivePiece;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// Test `frame` at the piece's anchor shifted by `(dx, dy)`.
///
/// Returns true if any occupied cell would be:
/// - left of column 0 or right of the last column (any row),
/// - at or below the floor (`row >= BOARD_HEIGHT`, any row sign),
/// - on an occupied board cell (visible rows only).
pub fn would_collide(
    board: &Board,
    piece: &ActivePiece,
    dx: i8,
    dy: i8,
    frame: &RotationFrame,
) -> bool {
    frame.cells().any(|(frame_row, frame_col)| {
        let future_col = piece.col + frame_col + dx;
        let future_row = piece.row + frame_row + dy;

        if future_col < 0 || future_col >= BOARD_WIDTH as i8 || future_row >= BOARD_HEIGHT as i8 {
            return true;
        }

        if future_row < 0 {
            return false;
        }

        !board.is_empty_at(future_row, future_col)
    })
}
