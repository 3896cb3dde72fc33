//! Tetromino catalog - the seven piece kinds and their rotation frames
//!
//! Every kind owns a fixed, ordered cycle of square occupancy matrices (2x2,
//! 3x3 or 4x4) plus a display color. Rotating a piece walks that cycle forward,
//! so applying it `frame_count()` times lands back on the starting frame.
//!
//! The table is a `static` and is never mutated at runtime.

use crate::rng::SimpleRng;
use crate::types::{PieceKind, Rgb};

/// One orientation of a tetromino as a square occupancy matrix.
///
/// Rows are listed top to bottom; a non-zero entry marks an occupied cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationFrame {
    rows: &'static [&'static [u8]],
}

impl RotationFrame {
    pub const fn new(rows: &'static [&'static [u8]]) -> Self {
        Self { rows }
    }

    /// Side length of the square bounding box.
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// Whether the frame-local cell `(row, col)` is occupied.
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .is_some_and(|&v| v != 0)
    }

    /// Occupied frame-local `(row, col)` offsets in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.rows.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, v)| **v != 0)
                .map(move |(c, _)| (r as i8, c as i8))
        })
    }
}

/// Catalog entry: a piece kind, its rotation cycle and its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tetromino {
    kind: PieceKind,
    frames: &'static [RotationFrame],
    color: Rgb,
}

impl Tetromino {
    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn frames(&self) -> &'static [RotationFrame] {
        self.frames
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Frame at `index`, wrapping around the rotation cycle.
    pub fn frame(&self, index: usize) -> &'static RotationFrame {
        &self.frames[index % self.frames.len()]
    }

    /// Largest bounding box among the frames (2, 3 or 4).
    pub fn frame_size(&self) -> usize {
        self.frames.iter().map(RotationFrame::size).max().unwrap_or(0)
    }

    /// Widest occupied column span over all frames.
    pub fn max_width(&self) -> usize {
        self.frames
            .iter()
            .filter_map(|frame| {
                let (lo, hi) = frame
                    .cells()
                    .fold(None, |acc: Option<(i8, i8)>, (_, c)| match acc {
                        Some((lo, hi)) => Some((lo.min(c), hi.max(c))),
                        None => Some((c, c)),
                    })?;
                Some((hi - lo + 1) as usize)
            })
            .max()
            .unwrap_or(0)
    }

    /// Kinds wider than three columns spawn offset so they appear centered.
    pub fn is_wide(&self) -> bool {
        self.max_width() > 3
    }
}

const Z_FRAMES: [RotationFrame; 4] = [
    RotationFrame::new(&[&[1, 1, 0], &[0, 1, 1], &[0, 0, 0]]),
    RotationFrame::new(&[&[0, 0, 1], &[0, 1, 1], &[0, 1, 0]]),
    RotationFrame::new(&[&[0, 0, 0], &[1, 1, 0], &[0, 1, 1]]),
    RotationFrame::new(&[&[0, 1, 0], &[1, 1, 0], &[1, 0, 0]]),
];

const S_FRAMES: [RotationFrame; 4] = [
    RotationFrame::new(&[&[0, 1, 1], &[1, 1, 0], &[0, 0, 0]]),
    RotationFrame::new(&[&[0, 1, 0], &[0, 1, 1], &[0, 0, 1]]),
    RotationFrame::new(&[&[0, 0, 0], &[0, 1, 1], &[1, 1, 0]]),
    RotationFrame::new(&[&[1, 0, 0], &[1, 1, 0], &[0, 1, 0]]),
];

const T_FRAMES: [RotationFrame; 4] = [
    RotationFrame::new(&[&[0, 0, 0], &[1, 1, 1], &[0, 1, 0]]),
    RotationFrame::new(&[&[0, 1, 0], &[1, 1, 0], &[0, 1, 0]]),
    RotationFrame::new(&[&[0, 1, 0], &[1, 1, 1], &[0, 0, 0]]),
    RotationFrame::new(&[&[0, 1, 0], &[0, 1, 1], &[0, 1, 0]]),
];

const O_FRAMES: [RotationFrame; 1] = [RotationFrame::new(&[&[1, 1], &[1, 1]])];

const L_FRAMES: [RotationFrame; 4] = [
    RotationFrame::new(&[&[0, 0, 1], &[1, 1, 1], &[0, 0, 0]]),
    RotationFrame::new(&[&[0, 1, 0], &[0, 1, 0], &[0, 1, 1]]),
    RotationFrame::new(&[&[0, 0, 0], &[1, 1, 1], &[1, 0, 0]]),
    RotationFrame::new(&[&[1, 1, 0], &[0, 1, 0], &[0, 1, 0]]),
];

const I_FRAMES: [RotationFrame; 4] = [
    RotationFrame::new(&[&[0, 0, 0, 0], &[1, 1, 1, 1], &[0, 0, 0, 0], &[0, 0, 0, 0]]),
    RotationFrame::new(&[&[0, 0, 1, 0], &[0, 0, 1, 0], &[0, 0, 1, 0], &[0, 0, 1, 0]]),
    RotationFrame::new(&[&[0, 0, 0, 0], &[0, 0, 0, 0], &[1, 1, 1, 1], &[0, 0, 0, 0]]),
    RotationFrame::new(&[&[0, 1, 0, 0], &[0, 1, 0, 0], &[0, 1, 0, 0], &[0, 1, 0, 0]]),
];

const J_FRAMES: [RotationFrame; 4] = [
    RotationFrame::new(&[&[1, 0, 0], &[1, 1, 1], &[0, 0, 0]]),
    RotationFrame::new(&[&[0, 1, 1], &[0, 1, 0], &[0, 1, 0]]),
    RotationFrame::new(&[&[0, 0, 0], &[1, 1, 1], &[0, 0, 1]]),
    RotationFrame::new(&[&[0, 1, 0], &[0, 1, 0], &[1, 1, 0]]),
];

// Order matches `PieceKind::ALL`.
static CATALOG: [Tetromino; 7] = [
    Tetromino {
        kind: PieceKind::Z,
        frames: &Z_FRAMES,
        color: Rgb::from_hex(0x73956F),
    },
    Tetromino {
        kind: PieceKind::S,
        frames: &S_FRAMES,
        color: Rgb::from_hex(0x413F54),
    },
    Tetromino {
        kind: PieceKind::T,
        frames: &T_FRAMES,
        color: Rgb::from_hex(0x2E5EAA),
    },
    Tetromino {
        kind: PieceKind::O,
        frames: &O_FRAMES,
        color: Rgb::from_hex(0x8F6593),
    },
    Tetromino {
        kind: PieceKind::L,
        frames: &L_FRAMES,
        color: Rgb::from_hex(0x3D2B56),
    },
    Tetromino {
        kind: PieceKind::I,
        frames: &I_FRAMES,
        color: Rgb::from_hex(0xD72638),
    },
    Tetromino {
        kind: PieceKind::J,
        frames: &J_FRAMES,
        color: Rgb::from_hex(0xFE7F2D),
    },
];

/// The full catalog of seven kinds.
pub fn kinds() -> &'static [Tetromino; 7] {
    &CATALOG
}

/// Catalog entry for `kind`.
pub fn tetromino(kind: PieceKind) -> &'static Tetromino {
    let index = match kind {
        PieceKind::Z => 0,
        PieceKind::S => 1,
        PieceKind::T => 2,
        PieceKind::O => 3,
        PieceKind::L => 4,
        PieceKind::I => 5,
        PieceKind::J => 6,
    };
    &CATALOG[index]
}

/// Pick one kind uniformly at random.
///
/// There is no bag: the same kind may come up any number of times in a row.
pub fn random_kind(rng: &mut SimpleRng) -> PieceKind {
    PieceKind::ALL[rng.next_range(CATALOG.len() as u32) as usize]
}
