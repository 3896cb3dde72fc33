//! Copyable view of a whole game for renderers

use crate::board::BoardGrid;
use crate::game::Phase;
use crate::piece::ActivePiece;
use crate::types::{PieceKind, Rgb, BOARD_HEIGHT, BOARD_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub rotation: usize,
    pub row: i8,
    pub col: i8,
    pub color: Rgb,
    /// Occupied `(row, col)` board coordinates, possibly above the grid.
    pub cells: [(i8, i8); 4],
}

impl From<ActivePiece> for ActiveSnapshot {
    fn from(value: ActivePiece) -> Self {
        let mut cells = [(0, 0); 4];
        for (dst, src) in cells.iter_mut().zip(value.cells()) {
            *dst = src;
        }
        Self {
            kind: value.kind,
            rotation: value.rotation,
            row: value.row,
            col: value.col,
            color: value.color(),
            cells,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: BoardGrid,
    pub active: Option<ActiveSnapshot>,
    pub next: PieceKind,
    pub phase: Phase,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub drop_interval_ms: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.board = [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        self.active = None;
        self.next = PieceKind::I;
        self.phase = Phase::NotStarted;
        self.score = 0;
        self.level = 0;
        self.lines = 0;
        self.drop_interval_ms = 0;
    }

    pub fn playable(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut s = Self {
            board: [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            next: PieceKind::I,
            phase: Phase::NotStarted,
            score: 0,
            level: 0,
            lines: 0,
            drop_interval_ms: 0,
        };
        s.clear();
        s
    }
}
