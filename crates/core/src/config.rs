//! Rules configuration for a game
//!
//! `GameConfig::default()` reproduces the classic rules; tests and callers can
//! override single fields with struct update syntax.

use crate::gravity::GravityCurve;
use crate::types::LINE_CLEAR_POINTS;

/// Spawn anchors for narrow (bounding box up to 3x3) and wide (4x4) kinds.
///
/// Wide kinds sit one row higher and one column further left so every kind
/// appears centered over the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpawnAnchors {
    pub narrow: (i8, i8),
    pub wide: (i8, i8),
}

impl SpawnAnchors {
    /// Anchor `(row, col)` for a kind.
    pub fn for_width(&self, wide: bool) -> (i8, i8) {
        if wide {
            self.wide
        } else {
            self.narrow
        }
    }
}

impl Default for SpawnAnchors {
    fn default() -> Self {
        Self {
            narrow: (-2, 4),
            wide: (-3, 3),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub gravity: GravityCurve,
    /// Points added for every cleared row
    pub line_clear_points: u32,
    pub spawn: SpawnAnchors,
    /// Restart the gravity clock when the player shifts or rotates
    pub input_resets_gravity: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            gravity: GravityCurve::default(),
            line_clear_points: LINE_CLEAR_POINTS,
            spawn: SpawnAnchors::default(),
            input_resets_gravity: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wide_spawn_is_up_and_left_of_narrow() {
        let spawn = SpawnAnchors::default();
        let (nr, nc) = spawn.for_width(false);
        let (wr, wc) = spawn.for_width(true);
        assert_eq!(wr, nr - 1);
        assert_eq!(wc, nc - 1);
    }

    #[test]
    fn test_default_rules() {
        let config = GameConfig::default();
        assert_eq!(config.line_clear_points, 10);
        assert_eq!(config.gravity.initial_ms, 1000);
        assert!(config.input_resets_gravity);
    }
}
