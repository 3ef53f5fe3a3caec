//! The 2048 grid engine.
//!
//! [`Game`] owns the grid and applies the atomic move cycle: reorient the
//! grid so the requested direction becomes a rightward collapse, collapse
//! every row, restore the orientation, and, if anything changed, update
//! the score and highest-tile tracker and spawn one random tile.
//!
//! Randomness is injected: every mutating operation takes `&mut impl Rng`,
//! so a seeded RNG replays the exact same game. Engine events are emitted
//! through a `tracing` span created at construction.
//!
//! ```
//! use rand::{rngs::StdRng, SeedableRng};
//! use twenty48::{Direction, Game, GameConfig};
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let mut game = Game::new(GameConfig::default(), &mut rng).unwrap();
//! assert_eq!(game.grid().count_empty(), 15);
//!
//! let result = game.apply_move(Direction::Left, &mut rng);
//! assert_eq!(game.score(), result.score_delta);
//! ```

mod grid;
mod ops;
mod orient;

pub use grid::Grid;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, debug_span, trace, Span};

/// Side length of the classic board.
pub const DEFAULT_SIZE: usize = 4;
/// Tile value that wins the classic game.
pub const DEFAULT_TARGET: u32 = 2048;

/// A direction to slide/merge tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, in a fixed order used for tie-breaking.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Parse a raw input (0=Up, 1=Down, 2=Left, 3=Right).
    ///
    /// Returns `None` for anything else, so unrelated input never reaches
    /// the engine.
    pub fn from_index(value: u8) -> Option<Direction> {
        match value {
            0 => Some(Direction::Up),
            1 => Some(Direction::Down),
            2 => Some(Direction::Left),
            3 => Some(Direction::Right),
            _ => None,
        }
    }
}

/// Construction parameters for [`Game`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Side length of the square grid.
    pub size: usize,
    /// Tile value that wins the game.
    pub target: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            size: DEFAULT_SIZE,
            target: DEFAULT_TARGET,
        }
    }
}

/// Rejected construction parameters. Never surfaced mid-game.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("grid size must be at least 2, got {0}")]
    SizeTooSmall(usize),
    #[error("target must be a power of two no smaller than 8, got {0}")]
    InvalidTarget(u32),
}

/// Outcome of one [`Game::apply_move`] call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveResult {
    /// Snapshot of the grid after the move (including any spawned tile).
    pub grid: Grid,
    /// Score earned by merges in this move; 0 when nothing changed.
    pub score_delta: u64,
    /// Whether the move altered the grid. A move that changes nothing
    /// spawns no tile and earns no score.
    pub changed: bool,
    /// The highest tile ever observed has reached the target.
    pub won: bool,
    /// No cell is empty and no adjacent pair anywhere is equal.
    pub lost: bool,
}

/// Derived game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    InProgress,
    Won,
    Lost,
}

/// One game session: the grid, its score, and the win/loss bookkeeping.
#[derive(Debug, Clone)]
pub struct Game {
    grid: Grid,
    transpose: orient::TransposeMap,
    score: u64,
    highest: u32,
    target: u32,
    span: Span,
}

impl Game {
    /// Start a fresh game: empty grid, zero score, one spawned tile.
    ///
    /// The transpose permutation for the requested size is computed here,
    /// once, and reused for every move.
    pub fn new<R: Rng + ?Sized>(config: GameConfig, rng: &mut R) -> Result<Self, ConfigError> {
        if config.size < 2 {
            return Err(ConfigError::SizeTooSmall(config.size));
        }
        if !config.target.is_power_of_two() || config.target < 8 {
            return Err(ConfigError::InvalidTarget(config.target));
        }
        let span = debug_span!("game", size = config.size, target = config.target);
        let mut game = Game {
            grid: Grid::empty(config.size),
            transpose: orient::TransposeMap::new(config.size),
            score: 0,
            highest: 0,
            target: config.target,
            span,
        };
        game.spawn_tile(rng);
        Ok(game)
    }

    /// Convenience: like [`Game::new`] but uses the thread-local RNG.
    pub fn new_thread(config: GameConfig) -> Result<Self, ConfigError> {
        Self::new(config, &mut rand::thread_rng())
    }

    /// Current grid contents.
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Side length of the grid.
    #[inline]
    pub fn size(&self) -> usize {
        self.grid.size()
    }

    /// Running score: the sum of all merge results so far.
    #[inline]
    pub fn score(&self) -> u64 {
        self.score
    }

    /// Highest tile value ever observed on the grid.
    #[inline]
    pub fn highest(&self) -> u32 {
        self.highest
    }

    /// Tile value that wins this game.
    #[inline]
    pub fn target(&self) -> u32 {
        self.target
    }

    /// The highest tile ever observed has reached the target.
    #[inline]
    pub fn is_won(&self) -> bool {
        self.highest >= self.target
    }

    /// No cell is empty and no adjacent pair in any row or column is
    /// equal. Fullness alone is not enough: a full grid with a mergeable
    /// pair still has moves left.
    pub fn is_lost(&self) -> bool {
        self.grid.is_full() && !self.grid.has_mergeable_pair()
    }

    /// Won or lost.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.is_won() || self.is_lost()
    }

    /// Derived game state. Won takes precedence when both conditions hold.
    pub fn status(&self) -> Status {
        if self.is_won() {
            Status::Won
        } else if self.is_lost() {
            Status::Lost
        } else {
            Status::InProgress
        }
    }

    /// Set a random empty cell to 2 (90%) or 4 (10%).
    ///
    /// No-op returning `false` when the grid is full.
    pub fn spawn_tile<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        let _enter = self.span.enter();
        let open = self.grid.empty_positions();
        if open.is_empty() {
            return false;
        }
        let idx = open[rng.gen_range(0..open.len())];
        let value = if rng.gen_range(0..10) < 9 { 2 } else { 4 };
        self.grid.cells_mut()[idx] = value;
        self.highest = self.highest.max(value);
        trace!(cell = idx, value, "spawned tile");
        true
    }

    /// Apply one move: orient, collapse every row, restore, and, when the
    /// grid changed, bank the score delta and spawn one tile.
    ///
    /// A move on a terminal game, or one that changes nothing, leaves all
    /// state untouched and reports `changed: false`.
    pub fn apply_move<R: Rng + ?Sized>(&mut self, direction: Direction, rng: &mut R) -> MoveResult {
        let span = self.span.clone();
        let _enter = span.enter();
        if self.is_terminal() {
            trace!(?direction, "move ignored: game is over");
            return self.snapshot(0, false);
        }
        let (grid, score_delta, changed) = self.collapsed(direction);
        if !changed {
            trace!(?direction, "move changed nothing");
            return self.snapshot(0, false);
        }
        self.grid = grid;
        self.highest = self.highest.max(self.grid.highest());
        self.score += score_delta;
        self.spawn_tile(rng);
        debug!(
            ?direction,
            score_delta,
            score = self.score,
            highest = self.highest,
            "applied move"
        );
        if self.is_won() {
            debug!(highest = self.highest, "target reached");
        } else if self.is_lost() {
            debug!(score = self.score, "no moves remain");
        }
        self.snapshot(score_delta, true)
    }

    /// The collapse outcome for `direction` without mutating the game:
    /// no spawn, no score, no state change.
    pub fn preview(&self, direction: Direction) -> MoveResult {
        let (grid, score_delta, changed) = self.collapsed(direction);
        MoveResult {
            grid,
            score_delta,
            changed,
            won: self.is_won(),
            lost: self.is_lost(),
        }
    }

    /// True when a move in `direction` would change the grid.
    pub fn can_move(&self, direction: Direction) -> bool {
        self.collapsed(direction).2
    }

    /// Directions whose move would change the grid, in [`Direction::ALL`]
    /// order.
    pub fn legal_moves(&self) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|&direction| self.can_move(direction))
            .collect()
    }

    /// Orient, collapse, compare against the pre-collapse snapshot (in the
    /// oriented frame; orientation is a bijection, so equality is the same
    /// either way), then restore board coordinates.
    fn collapsed(&self, direction: Direction) -> (Grid, u64, bool) {
        let mut grid = self.grid.clone();
        orient::orient(&mut grid, &self.transpose, direction);
        let before = grid.clone();
        let size = grid.size();
        let score_delta = ops::collapse_rows(grid.cells_mut(), size);
        let changed = grid != before;
        orient::restore(&mut grid, &self.transpose, direction);
        (grid, score_delta, changed)
    }

    fn snapshot(&self, score_delta: u64, changed: bool) -> MoveResult {
        MoveResult {
            grid: self.grid.clone(),
            score_delta,
            changed,
            won: self.is_won(),
            lost: self.is_lost(),
        }
    }

    /// Test-only: a game wrapped around a fixed board, with the
    /// highest-value tracker re-derived from it.
    #[cfg(test)]
    pub(crate) fn with_cells(size: usize, cells: Vec<u32>) -> Game {
        use rand::SeedableRng;
        let mut game = Game::new(
            GameConfig {
                size,
                target: DEFAULT_TARGET,
            },
            &mut rand::rngs::StdRng::seed_from_u64(0),
        )
        .expect("valid test config");
        game.grid = Grid::from_cells(size, cells);
        game.highest = game.grid.highest();
        game
    }
}
