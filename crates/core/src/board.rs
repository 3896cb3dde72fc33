//! Board module - manages the game grid
//!
//! The board is a 20x10 grid where each cell is empty or holds the color of the
//! piece that locked there. Uses a flat array for better cache locality and
//! zero-allocation.
//!
//! Coordinates are `(row, col)`: row 0 is the top visible row, row 19 the floor
//! row; col 0 is the left wall column. Negative rows (above the grid) are never
//! stored; reads there report "not empty" and writes are refused.

use arrayvec::ArrayVec;

use crate::types::{Cell, Rgb, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

const WIDTH: usize = BOARD_WIDTH as usize;
const HEIGHT: usize = BOARD_HEIGHT as usize;

/// Row indices removed by one clearing pass, top to bottom.
pub type ClearedRows = ArrayVec<usize, HEIGHT>;

/// Row-major copy of every cell, as handed to renderers.
pub type BoardGrid = [[Cell; WIDTH]; HEIGHT];

/// The game board - 20 rows x 10 columns using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (row * WIDTH + col)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(row: i8, col: i8) -> Option<usize> {
        if row < 0 || row >= BOARD_HEIGHT as i8 || col < 0 || col >= BOARD_WIDTH as i8 {
            return None;
        }
        Some((row as usize) * WIDTH + (col as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (row, col)
    /// Returns None if out of bounds
    pub fn get(&self, row: i8, col: i8) -> Option<Cell> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// True iff (row, col) is inside the grid and holds no color.
    pub fn is_empty_at(&self, row: i8, col: i8) -> bool {
        matches!(self.get(row, col), Some(None))
    }

    /// Write a color into an in-bounds cell.
    ///
    /// Returns false (and writes nothing) when (row, col) is outside the grid.
    pub fn set_cell(&mut self, row: i8, col: i8, color: Rgb) -> bool {
        match Self::index(row, col) {
            Some(idx) => {
                self.cells[idx] = Some(color);
                true
            }
            None => false,
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        if row >= HEIGHT {
            return false;
        }
        let start = row * WIDTH;
        self.cells[start..start + WIDTH].iter().all(|cell| cell.is_some())
    }

    /// Remove `row`, shifting every row above it down by one.
    ///
    /// Afterwards row `r` holds what row `r - 1` held for `1 <= r <= row`, row 0
    /// is empty and rows below `row` are untouched.
    pub fn collapse_row(&mut self, row: usize) {
        if row >= HEIGHT {
            return;
        }

        // copy_within handles the overlapping ranges.
        for r in (1..=row).rev() {
            let src_start = (r - 1) * WIDTH;
            self.cells.copy_within(src_start..src_start + WIDTH, r * WIDTH);
        }

        self.cells[..WIDTH].fill(None);
    }

    /// Collapse every full row, scanning top to bottom.
    ///
    /// Collapsing only moves rows that were already scanned (and found not
    /// full), so a single downward pass sees each row exactly once.
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let mut cleared = ClearedRows::new();
        for row in 0..HEIGHT {
            if self.is_row_full(row) {
                self.collapse_row(row);
                cleared.push(row);
            }
        }
        cleared
    }

    /// Iterate rows top to bottom as slices
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(WIDTH)
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Copy the grid into a row-major 2D array.
    pub fn write_grid(&self, out: &mut BoardGrid) {
        for (dst, src) in out.iter_mut().zip(self.rows()) {
            dst.copy_from_slice(src);
        }
    }

    /// Row-major 2D copy of the grid.
    pub fn grid(&self) -> BoardGrid {
        let mut out = [[None; WIDTH]; HEIGHT];
        self.write_grid(&mut out);
        out
    }

    /// Number of non-empty cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Set every cell back to empty
    pub fn reset(&mut self) {
        self.cells.fill(None);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
