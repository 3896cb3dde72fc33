//! Game controller - owns the board and drives one run from spawn to top-out
//!
//! Everything that mutates game state goes through [`Game`]: the four player
//! commands, the caller-driven gravity [`Game::tick`] and [`Game::new_game`].
//! The controller never schedules itself. The caller supplies monotonically
//! non-decreasing millisecond timestamps to `tick`, usually once per frame.
//!
//! Phases: `NotStarted -> Running -> GameOver`, and back to `Running` only via
//! `new_game`. Commands and ticks outside `Running` are silent no-ops.

use arrayvec::ArrayVec;
use log::{debug, info, trace};

use crate::board::{Board, BoardGrid};
use crate::config::GameConfig;
use crate::piece::{ActivePiece, Step};
use crate::rng::PieceRandomizer;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{Command, PieceKind, Rgb};

/// Lifecycle phase of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    NotStarted,
    Running,
    GameOver,
}

/// What a single [`Game::tick`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickOutcome {
    /// Gravity was due and the piece was stepped (moved or locked)
    pub stepped: bool,
    /// The piece locked into the board
    pub locked: bool,
    /// Rows cleared by that lock
    pub lines_cleared: u32,
    /// The game ended during this tick
    pub topped_out: bool,
}

/// Result of locking the active piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LockOutcome {
    pub lines_cleared: u32,
    pub topped_out: bool,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    board: Board,
    active: Option<ActivePiece>,
    next: PieceKind,
    randomizer: PieceRandomizer,
    phase: Phase,
    score: u32,
    lines: u32,
    drop_interval_ms: u32,
    /// Timestamp of the first tick of the current run
    run_origin_ms: Option<u64>,
    /// Timestamp of the last gravity step (or input reset)
    last_drop_ms: Option<u64>,
    /// Most recent timestamp seen by `tick`
    last_now_ms: Option<u64>,
}

impl Game {
    /// Create a game with the default rules and the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::with_config(GameConfig::default(), seed)
    }

    pub fn with_config(config: GameConfig, seed: u32) -> Self {
        let mut randomizer = PieceRandomizer::new(seed);
        let next = randomizer.next_kind();
        let drop_interval_ms = config.gravity.initial_ms;

        Self {
            config,
            board: Board::new(),
            active: None,
            next,
            randomizer,
            phase: Phase::NotStarted,
            score: 0,
            lines: 0,
            drop_interval_ms,
            run_origin_ms: None,
            last_drop_ms: None,
            last_now_ms: None,
        }
    }

    /// Reset board, score and clocks, then spawn a fresh active + next pair.
    pub fn new_game(&mut self) {
        self.board.reset();
        self.score = 0;
        self.lines = 0;
        self.drop_interval_ms = self.config.gravity.initial_ms;
        self.run_origin_ms = None;
        self.last_drop_ms = None;
        self.last_now_ms = None;
        self.phase = Phase::Running;

        self.next = self.randomizer.next_kind();
        self.spawn();

        info!("new game started (seed {})", self.randomizer.seed());
    }

    /// Promote the peeked piece to active and peek a fresh one.
    fn spawn(&mut self) {
        let kind = self.next;
        self.next = self.randomizer.next_kind();
        self.active = Some(self.spawn_piece(kind));
        debug!("spawned {:?}, next {:?}", kind, self.next);
    }

    /// Piece of `kind` at its spawn anchor.
    pub fn spawn_piece(&self, kind: PieceKind) -> ActivePiece {
        let wide = crate::catalog::tetromino(kind).is_wide();
        let (row, col) = self.config.spawn.for_width(wide);
        ActivePiece::new(kind, row, col)
    }

    /// Advance gravity to `now_ms`.
    ///
    /// Steps the piece down once if more than the current interval has passed
    /// since the last step. The first tick of a run only starts the clocks.
    pub fn tick(&mut self, now_ms: u64) -> TickOutcome {
        let mut outcome = TickOutcome::default();
        if self.phase != Phase::Running {
            return outcome;
        }

        self.last_now_ms = Some(now_ms);
        let origin = *self.run_origin_ms.get_or_insert(now_ms);
        let last_drop = *self.last_drop_ms.get_or_insert(now_ms);

        self.refresh_interval(now_ms.saturating_sub(origin));

        if now_ms.saturating_sub(last_drop) <= u64::from(self.drop_interval_ms) {
            return outcome;
        }

        self.last_drop_ms = Some(now_ms);
        outcome.stepped = true;
        trace!("gravity step at {}ms", now_ms);

        if let Some(lock) = self.step_down() {
            outcome.locked = true;
            outcome.lines_cleared = lock.lines_cleared;
            outcome.topped_out = lock.topped_out;
            self.refresh_interval(now_ms.saturating_sub(origin));
        }

        outcome
    }

    fn refresh_interval(&mut self, elapsed_ms: u64) {
        let interval = self.config.gravity.interval_at(elapsed_ms);
        if interval != self.drop_interval_ms {
            self.drop_interval_ms = interval;
            info!(
                "level {} reached after {}ms (interval {}ms)",
                self.level(),
                elapsed_ms,
                interval
            );
        }
    }

    /// Move the piece down one row, locking and respawning when it is resting.
    ///
    /// Returns the lock outcome when a lock happened.
    fn step_down(&mut self) -> Option<LockOutcome> {
        let active = self.active.as_mut()?;
        match active.move_down(&self.board) {
            Step::Moved => None,
            Step::MustLock => {
                let lock = self.lock_active();
                if self.phase == Phase::Running {
                    self.spawn();
                }
                Some(lock)
            }
        }
    }

    /// Write the active piece into the board and clear full rows.
    ///
    /// A cell above the visible grid is a top-out: the game ends and the rest
    /// of the piece is not written.
    pub fn lock_active(&mut self) -> LockOutcome {
        let Some(piece) = self.active.take() else {
            return LockOutcome::default();
        };

        let color = piece.color();
        for (row, col) in piece.cells() {
            if row < 0 {
                self.phase = Phase::GameOver;
                info!(
                    "topped out with {:?} at row {} (score {})",
                    piece.kind, row, self.score
                );
                return LockOutcome {
                    lines_cleared: 0,
                    topped_out: true,
                };
            }
            self.board.set_cell(row, col, color);
        }

        let cleared = self.board.clear_full_rows();
        let lines_cleared = cleared.len() as u32;
        debug!(
            "locked {:?} at ({}, {}), rotation {}",
            piece.kind, piece.row, piece.col, piece.rotation
        );

        if lines_cleared > 0 {
            self.lines += lines_cleared;
            self.score += self.config.line_clear_points * lines_cleared;
            info!(
                "cleared rows {:?} (+{}), score {}",
                cleared.as_slice(),
                self.config.line_clear_points * lines_cleared,
                self.score
            );
        }

        LockOutcome {
            lines_cleared,
            topped_out: false,
        }
    }

    /// Run a piece command if the game is live, then restart the gravity clock.
    fn command(&mut self, f: impl FnOnce(&mut ActivePiece, &Board) -> bool) -> bool {
        if self.phase != Phase::Running {
            return false;
        }
        let Some(piece) = self.active.as_mut() else {
            return false;
        };
        let changed = f(piece, &self.board);

        // Player input restarts the gravity clock, giving time to slide.
        if self.config.input_resets_gravity {
            if let Some(now) = self.last_now_ms {
                self.last_drop_ms = Some(now);
            }
        }
        changed
    }

    pub fn move_left(&mut self) -> bool {
        self.command(|piece, board| piece.move_left(board))
    }

    pub fn move_right(&mut self) -> bool {
        self.command(|piece, board| piece.move_right(board))
    }

    pub fn rotate(&mut self) -> bool {
        self.command(|piece, board| piece.rotate(board))
    }

    /// Step down one row; a blocked step locks the piece and spawns the next.
    ///
    /// Returns true when the piece moved or was replaced.
    pub fn soft_drop(&mut self) -> bool {
        if self.phase != Phase::Running || self.active.is_none() {
            return false;
        }
        self.step_down();
        true
    }

    /// Apply a discrete command
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::MoveLeft => self.move_left(),
            Command::MoveRight => self.move_right(),
            Command::Rotate => self.rotate(),
            Command::SoftDrop => self.soft_drop(),
            Command::NewGame => {
                self.new_game();
                true
            }
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Difficulty level: gravity decrements applied so far
    pub fn level(&self) -> u32 {
        self.config.gravity.level_for(self.drop_interval_ms)
    }

    pub fn lines_cleared(&self) -> u32 {
        self.lines
    }

    pub fn gravity_interval_ms(&self) -> u32 {
        self.drop_interval_ms
    }

    pub fn next_piece_kind(&self) -> PieceKind {
        self.next
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn seed(&self) -> u32 {
        self.randomizer.seed()
    }

    /// Row-major copy of the locked cells
    pub fn board_snapshot(&self) -> BoardGrid {
        self.board.grid()
    }

    /// Occupied `(row, col, color)` cells of the live piece
    pub fn active_piece_cells(&self) -> ArrayVec<(i8, i8, Rgb), 4> {
        let mut out = ArrayVec::new();
        if let Some(piece) = self.active {
            let color = piece.color();
            for (row, col) in piece.cells() {
                out.push((row, col, color));
            }
        }
        out
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_grid(&mut out.board);
        out.active = self.active.map(ActiveSnapshot::from);
        out.next = self.next;
        out.phase = self.phase;
        out.score = self.score;
        out.level = self.level();
        out.lines = self.lines;
        out.drop_interval_ms = self.drop_interval_ms;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Mutable board access for scripted setups (puzzles, tests).
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Replace the live piece, e.g. to stage a scripted position.
    ///
    /// Ignored unless the game is running.
    pub fn set_active(&mut self, piece: ActivePiece) {
        if self.phase == Phase::Running {
            self.active = Some(piece);
        }
    }

    /// Override the peeked next kind.
    pub fn set_next_kind(&mut self, kind: PieceKind) {
        self.next = kind;
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(1)
    }
}
