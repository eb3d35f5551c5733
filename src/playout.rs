//! Random playouts.
//!
//! A playout picks uniformly random legal moves until the game ends. The
//! generator is passed in explicitly, so a fixed seed replays the same game.

use fastrand::Rng;

use crate::board::{Board, Player, Point};
use crate::error::GameError;
use crate::game::{Game, Outcome, Status};
use crate::rules::legal_moves;

/// A uniformly random legal move for `player`, or `None` if there is none.
pub fn random_move(board: &Board, player: Player, rng: &mut Rng) -> Option<Point> {
    let moves = legal_moves(board, player);
    if moves.is_empty() {
        return None;
    }
    Some(moves[rng.usize(..moves.len())])
}

/// Play random moves for whoever is on turn until the game ends.
pub fn random_game(game: &mut Game, rng: &mut Rng) -> Result<Outcome, GameError> {
    loop {
        let player = match game.status() {
            Status::Over(outcome) => return Ok(outcome),
            Status::Ongoing(player) => player,
        };
        let pt = random_move(game.board(), player, rng)
            .ok_or(GameError::NoLegalMove { player })?;
        game.make_move(pt, player)?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::N;

    #[test]
    fn test_random_move_is_legal() {
        let mut rng = Rng::with_seed(7);
        let board = Board::new();
        for _ in 0..20 {
            let pt = random_move(&board, Player::Black, &mut rng).unwrap();
            assert!(legal_moves(&board, Player::Black).contains(&pt));
        }
        assert_eq!(random_move(&Board::empty(), Player::Black, &mut rng), None);
    }

    #[test]
    fn test_random_game_terminates() {
        for seed in 0..10 {
            let mut rng = Rng::with_seed(seed);
            let mut game = Game::new();
            let outcome = random_game(&mut game, &mut rng).unwrap();
            assert!(game.is_over());
            assert_eq!(game.winner(), Some(outcome));
            let (black, white) = game.score();
            assert!(black + white <= N * N);
            assert!(game.moves_played() <= N * N - 4);
        }
    }

    #[test]
    fn test_same_seed_same_game() {
        let mut a = Game::new();
        let mut b = Game::new();
        random_game(&mut a, &mut Rng::with_seed(42)).unwrap();
        random_game(&mut b, &mut Rng::with_seed(42)).unwrap();
        assert_eq!(a.board(), b.board());
        assert_eq!(a.moves_played(), b.moves_played());
    }
}
