//! Terminal rendering for blockfall.
//!
//! A small, game-oriented rendering layer: `GameView` paints a
//! `GameSnapshot` into a plain framebuffer, and `TerminalRenderer` flushes
//! that framebuffer to the terminal through crossterm, rewriting only the
//! cells that changed since the previous frame.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::TerminalRenderer;
