//! Active piece - anchor, rotation index and the moves it can make
//!
//! The anchor `(row, col)` is the top-left corner of the current frame's
//! bounding box. Board cells are derived by overlaying the frame at the anchor.
//! Every move is checked with [`would_collide`] before it is committed, so a
//! rejected move leaves the piece exactly as it was.

use crate::board::Board;
use crate::catalog::{tetromino, RotationFrame, Tetromino};
use crate::collision::would_collide;
use crate::types::{PieceKind, Rgb, BOARD_WIDTH};

/// Result of trying to step a piece down one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The piece moved one row down.
    Moved,
    /// The piece is resting on the floor or on locked cells.
    MustLock,
}

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    /// Index into the kind's rotation cycle
    pub rotation: usize,
    pub row: i8,
    pub col: i8,
}

impl ActivePiece {
    /// Create a piece in its first frame at the given anchor
    pub fn new(kind: PieceKind, row: i8, col: i8) -> Self {
        Self {
            kind,
            rotation: 0,
            row,
            col,
        }
    }

    pub fn tetromino(&self) -> &'static Tetromino {
        tetromino(self.kind)
    }

    /// Frame for the current rotation index
    pub fn frame(&self) -> &'static RotationFrame {
        self.tetromino().frame(self.rotation)
    }

    pub fn color(&self) -> Rgb {
        self.tetromino().color()
    }

    /// Occupied board coordinates `(row, col)`, including rows above the grid.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> {
        let (row, col) = (self.row, self.col);
        self.frame()
            .cells()
            .map(move |(fr, fc)| (row + fr, col + fc))
    }

    pub fn move_left(&mut self, board: &Board) -> bool {
        self.shift(board, -1)
    }

    pub fn move_right(&mut self, board: &Board) -> bool {
        self.shift(board, 1)
    }

    fn shift(&mut self, board: &Board, dx: i8) -> bool {
        if would_collide(board, self, dx, 0, self.frame()) {
            return false;
        }
        self.col += dx;
        true
    }

    /// Step one row down. Never locks; the caller decides what `MustLock` means.
    pub fn move_down(&mut self, board: &Board) -> Step {
        if would_collide(board, self, 0, 1, self.frame()) {
            return Step::MustLock;
        }
        self.row += 1;
        Step::Moved
    }

    /// Advance to the next rotation frame.
    ///
    /// If the new frame collides in place, a single horizontal kick is tried:
    /// one column left when the anchor sits right of the board center, one
    /// column right otherwise. If that also collides nothing changes.
    ///
    /// This is a one-kick policy, not a full wall-kick table; rotations close
    /// to walls or stacks are sometimes refused.
    pub fn rotate(&mut self, board: &Board) -> bool {
        let next_index = (self.rotation + 1) % self.tetromino().frame_count();
        let next_frame = self.tetromino().frame(next_index);

        let mut kick = 0;
        if would_collide(board, self, 0, 0, next_frame) {
            kick = if self.col > (BOARD_WIDTH / 2) as i8 { -1 } else { 1 };
            if would_collide(board, self, kick, 0, next_frame) {
                return false;
            }
        }

        self.rotation = next_index;
        self.col += kick;
        true
    }

    /// Whether the current placement is legal on `board`
    pub fn fits(&self, board: &Board) -> bool {
        !would_collide(board, self, 0, 0, self.frame())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BOARD_HEIGHT;

    #[test]
    fn test_cells_follow_anchor() {
        let piece = ActivePiece::new(PieceKind::O, 3, 4);
        let cells: Vec<_> = piece.cells().collect();
        assert_eq!(cells, vec![(3, 4), (3, 5), (4, 4), (4, 5)]);
    }

    #[test]
    fn test_move_left_stops_at_wall() {
        let board = Board::new();
        let mut piece = ActivePiece::new(PieceKind::O, 5, 1);
        assert!(piece.move_left(&board));
        assert_eq!(piece.col, 0);
        assert!(!piece.move_left(&board));
        assert_eq!(piece.col, 0);
    }

    #[test]
    fn test_move_right_stops_at_wall() {
        let board = Board::new();
        let mut piece = ActivePiece::new(PieceKind::O, 5, 7);
        assert!(piece.move_right(&board));
        assert!(!piece.move_right(&board));
        assert_eq!(piece.col, 8);
    }

    #[test]
    fn test_move_down_reports_must_lock_on_floor() {
        let board = Board::new();
        let mut piece = ActivePiece::new(PieceKind::O, BOARD_HEIGHT as i8 - 3, 4);
        assert_eq!(piece.move_down(&board), Step::Moved);
        assert_eq!(piece.move_down(&board), Step::MustLock);
        assert_eq!(piece.row, BOARD_HEIGHT as i8 - 2);
    }

    #[test]
    fn test_move_down_blocked_by_stack() {
        let mut board = Board::new();
        board.set_cell(10, 4, Rgb::new(9, 9, 9));
        let mut piece = ActivePiece::new(PieceKind::O, 8, 4);
        assert_eq!(piece.move_down(&board), Step::MustLock);
        assert_eq!(piece.row, 8);
    }

    #[test]
    fn test_rotate_kicks_left_near_right_wall() {
        let board = Board::new();
        // T frame 1 occupies frame cols 0-1; at col 8 it hugs the right wall.
        let mut piece = ActivePiece {
            kind: PieceKind::T,
            rotation: 1,
            row: 5,
            col: 8,
        };
        assert!(piece.fits(&board));

        assert!(piece.rotate(&board));
        assert_eq!(piece.rotation, 2);
        assert_eq!(piece.col, 7);
    }

    #[test]
    fn test_o_rotation_is_identity() {
        let board = Board::new();
        let mut piece = ActivePiece::new(PieceKind::O, 5, 4);
        assert!(piece.rotate(&board));
        assert_eq!(piece.rotation, 0);
        assert_eq!(piece.col, 4);
    }
}
