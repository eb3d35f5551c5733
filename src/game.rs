//! Turn sequencing and game termination.
//!
//! [`Game`] owns the live board and is the only place where passes and the
//! end of the game are decided. After every accepted move the turn goes to
//! the opponent if they can move, stays with the mover if only the mover can
//! move, and otherwise the game ends and the piece count decides the winner.

use std::cmp::Ordering;
use std::fmt;

use tracing::{debug, info};

use crate::board::{Board, Player, Point, is_interior, str_coord};
use crate::error::GameError;
use crate::rules::{apply, has_legal_move, is_legal, legal_moves};
use crate::search::{SearchResult, Searcher};

/// Result of a finished game.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Winner(Player),
    Draw,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "{player} wins"),
            Outcome::Draw => write!(f, "draw"),
        }
    }
}

/// Whether the game is still running, and if so who is to move.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Status {
    Ongoing(Player),
    Over(Outcome),
}

/// A game in progress.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    status: Status,
    moves_played: usize,
    passes: usize,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// The standard opening with Black to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            status: Status::Ongoing(Player::Black),
            moves_played: 0,
            passes: 0,
        }
    }

    /// Start from an arbitrary position with `to_move` on turn.
    ///
    /// If `to_move` cannot play, the turn passes to the opponent; if neither
    /// side can play the game is over immediately.
    pub fn from_board(board: Board, to_move: Player) -> Self {
        let mut game = Self {
            board,
            status: Status::Ongoing(to_move),
            moves_played: 0,
            passes: 0,
        };
        if !has_legal_move(&game.board, to_move) {
            game.advance(to_move.opponent());
        }
        game
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// The player on turn, or `None` once the game is over.
    pub fn current_player(&self) -> Option<Player> {
        match self.status {
            Status::Ongoing(player) => Some(player),
            Status::Over(_) => None,
        }
    }

    /// The result, or `None` while the game is still running.
    pub fn winner(&self) -> Option<Outcome> {
        match self.status {
            Status::Ongoing(_) => None,
            Status::Over(outcome) => Some(outcome),
        }
    }

    pub fn is_over(&self) -> bool {
        matches!(self.status, Status::Over(_))
    }

    /// Piece counts as `(black, white)`.
    pub fn score(&self) -> (usize, usize) {
        (
            self.board.count(Player::Black),
            self.board.count(Player::White),
        )
    }

    /// Moves accepted so far.
    pub fn moves_played(&self) -> usize {
        self.moves_played
    }

    /// Forced passes so far.
    pub fn passes(&self) -> usize {
        self.passes
    }

    /// Legal moves for `player` on the live board, in ascending index order.
    pub fn legal_moves(&self, player: Player) -> Vec<Point> {
        legal_moves(&self.board, player)
    }

    /// Play `pt` for `player`.
    ///
    /// # Errors
    /// - [`GameError::GameOver`] if the game has finished
    /// - [`GameError::WrongTurn`] if `player` is not on turn
    /// - [`GameError::InvalidPoint`] if `pt` is not a playable cell
    /// - [`GameError::IllegalMove`] if the cell is occupied or flips nothing
    ///
    /// The game is unchanged on error.
    pub fn make_move(&mut self, pt: Point, player: Player) -> Result<(), GameError> {
        let current = match self.status {
            Status::Ongoing(current) => current,
            Status::Over(_) => return Err(GameError::GameOver),
        };
        if player != current {
            return Err(GameError::WrongTurn {
                expected: current,
                attempted: player,
            });
        }
        if !is_interior(pt) {
            return Err(GameError::InvalidPoint(pt));
        }
        if !is_legal(&self.board, pt, player) {
            return Err(GameError::IllegalMove { point: pt });
        }

        let flipped = apply(&mut self.board, pt, player);
        self.moves_played += 1;
        debug!(%player, mv = %str_coord(pt), flipped, "move played");

        self.advance(player);
        Ok(())
    }

    /// Hand the turn on after `current` has moved.
    fn advance(&mut self, current: Player) {
        let next = current.opponent();
        if has_legal_move(&self.board, next) {
            self.status = Status::Ongoing(next);
        } else if has_legal_move(&self.board, current) {
            self.passes += 1;
            info!(%next, %current, "no legal move, turn passes back");
            self.status = Status::Ongoing(current);
        } else {
            let outcome = self.decide();
            let (black, white) = self.score();
            info!(black, white, %outcome, "game over");
            self.status = Status::Over(outcome);
        }
    }

    fn decide(&self) -> Outcome {
        let (black, white) = self.score();
        match black.cmp(&white) {
            Ordering::Greater => Outcome::Winner(Player::Black),
            Ordering::Less => Outcome::Winner(Player::White),
            Ordering::Equal => Outcome::Draw,
        }
    }

    /// Search the live position for `player` and report the full result.
    ///
    /// The live board is not modified; play the move with [`Game::make_move`].
    pub fn analyze(
        &self,
        searcher: &mut Searcher,
        player: Player,
        depth: u32,
    ) -> Result<SearchResult, GameError> {
        match self.status {
            Status::Over(_) => return Err(GameError::GameOver),
            Status::Ongoing(current) if current != player => {
                return Err(GameError::WrongTurn {
                    expected: current,
                    attempted: player,
                });
            }
            Status::Ongoing(_) => {}
        }
        // A zero-depth search never chooses a move.
        let result = searcher.best_move(&self.board, player, depth.max(1));
        if result.best_move.is_none() {
            return Err(GameError::NoLegalMove { player });
        }
        Ok(result)
    }

    /// The engine's move for `player` at `depth` plies.
    pub fn request_ai_move(&self, player: Player, depth: u32) -> Result<Point, GameError> {
        let result = self.analyze(&mut Searcher::default(), player, depth)?;
        result.best_move.ok_or(GameError::NoLegalMove { player })
    }
}
