//! Move-selection policies for driving whole games.
//!
//! Policies pick the next direction from the current game state via
//! [`Game::preview`] and [`Game::legal_moves`]; they never mutate the game
//! themselves. Both return `None` when no move would change the grid.
//!
//! ```
//! use rand::{rngs::StdRng, SeedableRng};
//! use twenty48::policy::Greedy;
//! use twenty48::{Game, GameConfig};
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let mut game = Game::new(GameConfig::default(), &mut rng).unwrap();
//! while let Some(direction) = Greedy.next_move(&game) {
//!     game.apply_move(direction, &mut rng);
//!     if game.is_terminal() || game.score() > 200 {
//!         break;
//!     }
//! }
//! assert!(game.grid().cells().iter().any(|&v| v != 0));
//! ```

use rand::Rng;

use crate::engine::{Direction, Game};

/// Picks uniformly among the moves that would change the grid.
#[derive(Debug, Clone, Copy, Default)]
pub struct Random;

impl Random {
    pub fn next_move<R: Rng + ?Sized>(&self, game: &Game, rng: &mut R) -> Option<Direction> {
        let legal = game.legal_moves();
        if legal.is_empty() {
            None
        } else {
            Some(legal[rng.gen_range(0..legal.len())])
        }
    }
}

/// One-ply lookahead: picks the move with the highest immediate score
/// delta, breaking ties toward the earlier entry in [`Direction::ALL`].
/// Deterministic for a given grid.
#[derive(Debug, Clone, Copy, Default)]
pub struct Greedy;

impl Greedy {
    pub fn next_move(&self, game: &Game) -> Option<Direction> {
        let mut best: Option<(Direction, u64)> = None;
        for direction in Direction::ALL {
            let outcome = game.preview(direction);
            if !outcome.changed {
                continue;
            }
            match best {
                Some((_, score)) if score >= outcome.score_delta => {}
                _ => best = Some((direction, outcome.score_delta)),
            }
        }
        best.map(|(direction, _)| direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn greedy_prefers_the_bigger_merge() {
        // Vertical pair of 4s beats the horizontal pair of 2s; the tie
        // between up and down breaks toward up.
        let game = Game::with_cells(
            4,
            vec![
                2, 2, 0, 0, //
                0, 0, 0, 0, //
                4, 0, 0, 0, //
                4, 0, 0, 0, //
            ],
        );
        assert_eq!(Greedy.next_move(&game), Some(Direction::Up));
    }

    #[test]
    fn greedy_takes_any_change_when_nothing_merges() {
        let game = Game::with_cells(
            4,
            vec![
                0, 0, 0, 0, //
                0, 2, 0, 0, //
                0, 0, 0, 0, //
                0, 0, 0, 0, //
            ],
        );
        // All four directions move the lone tile; no merge anywhere.
        assert_eq!(Greedy.next_move(&game), Some(Direction::Up));
    }

    #[test]
    fn policies_return_none_when_stuck() {
        let game = Game::with_cells(
            4,
            vec![2, 4, 2, 4, 4, 2, 4, 2, 2, 4, 2, 4, 4, 2, 4, 2],
        );
        assert_eq!(Greedy.next_move(&game), None);
        assert_eq!(
            Random.next_move(&game, &mut StdRng::seed_from_u64(1)),
            None
        );
    }

    #[test]
    fn random_only_picks_legal_moves() {
        let game = Game::with_cells(
            4,
            vec![
                2, 0, 0, 0, //
                0, 0, 0, 0, //
                0, 0, 0, 0, //
                0, 0, 0, 0, //
            ],
        );
        let legal = game.legal_moves();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..32 {
            let direction = Random.next_move(&game, &mut rng).unwrap();
            assert!(legal.contains(&direction));
        }
    }
}
