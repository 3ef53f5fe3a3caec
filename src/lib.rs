//! twenty48: a 2048 grid engine.
//!
//! This crate provides:
//! - A [`Game`] type owning the grid and the slide/merge/spawn move cycle
//! - Orientation normalization so all four directions share one collapse
//! - Terminal-state detection (win at a target tile, loss by adjacency)
//! - Move-selection policies (`policy` module) and a batch simulation
//!   harness (`simulate` binary)
//!
//! Randomness is injected everywhere: pass a seeded RNG to replay a game
//! exactly; only the spawned tile's position and value are random.
//!
//! Quick start:
//! ```
//! use rand::{rngs::StdRng, SeedableRng};
//! use twenty48::{Direction, Game, GameConfig};
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let mut game = Game::new(GameConfig::default(), &mut rng).unwrap();
//! let result = game.apply_move(Direction::Left, &mut rng);
//! assert_eq!(result.changed, game.grid().count_empty() < 15);
//! assert!(!result.lost);
//! ```
//!
//! Full loop (simplest possible):
//! ```
//! use rand::{rngs::StdRng, SeedableRng};
//! use twenty48::policy::Greedy;
//! use twenty48::{Game, GameConfig};
//!
//! let mut rng = StdRng::seed_from_u64(123);
//! let mut game = Game::new(GameConfig::default(), &mut rng).unwrap();
//! let mut moves = 0u32;
//!
//! // Play a few moves to demonstrate flow (keep doctests fast)
//! while !game.is_terminal() && moves < 8 {
//!     match Greedy.next_move(&game) {
//!         Some(direction) => {
//!             game.apply_move(direction, &mut rng);
//!             moves += 1;
//!         }
//!         None => break,
//!     }
//! }
//!
//! assert!(moves > 0);
//! assert!(game.highest() >= 2);
//! ```

pub mod engine;
pub mod policy;

pub use engine::{
    ConfigError, Direction, Game, GameConfig, Grid, MoveResult, Status, DEFAULT_SIZE,
    DEFAULT_TARGET,
};
