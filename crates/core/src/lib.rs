//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the game rules, state management and simulation logic.
//! It has **no dependencies** on UI, terminal or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical piece sequences
//! - **Testable**: Every rule is reachable through plain method calls
//! - **Portable**: Any front end can drive it (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`catalog`]: The seven tetromino kinds, their rotation frames and colors
//! - [`board`]: 20x10 grid with row-completeness checks and row collapse
//! - [`piece`]: Active piece anchor, movement and single-kick rotation
//! - [`collision`]: The one placement-legality primitive every move uses
//! - [`gravity`]: Elapsed-time to drop-interval step function and levels
//! - [`config`]: Rules configuration (gravity curve, points, spawn anchors)
//! - [`game`]: The controller: spawn, commands, tick, lock, clear, top-out
//! - [`rng`]: Seeded uniform piece selection
//! - [`snapshot`]: Copyable view of the whole state for renderers
//!
//! # Example
//!
//! ```
//! use blockfall_core::{Game, Phase};
//!
//! let mut game = Game::new(12345);
//! game.new_game();
//! assert_eq!(game.phase(), Phase::Running);
//!
//! game.move_left();
//! game.rotate();
//!
//! // The caller owns the clock: the first tick starts it, later ones apply gravity.
//! game.tick(0);
//! let outcome = game.tick(1_001);
//! assert!(outcome.stepped);
//! ```
//!
//! # Timing
//!
//! There is no internal timer. Call [`Game::tick`](game::Game::tick) with a
//! monotonic millisecond timestamp (typically every frame). Gravity starts at
//! one row per second and speeds up as the run goes on; see [`gravity`].
//!
//! `Game` does no internal locking: if input and ticks come from different
//! threads, serialize every call behind a single mutex.

pub mod board;
pub mod catalog;
pub mod collision;
pub mod config;
pub mod game;
pub mod gravity;
pub mod piece;
pub mod rng;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, BoardGrid, ClearedRows};
pub use catalog::{kinds, random_kind, tetromino, RotationFrame, Tetromino};
pub use collision::would_collide;
pub use config::{GameConfig, SpawnAnchors};
pub use game::{Game, LockOutcome, Phase, TickOutcome};
pub use gravity::GravityCurve;
pub use piece::{ActivePiece, Step};
pub use rng::{PieceRandomizer, SimpleRng};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
