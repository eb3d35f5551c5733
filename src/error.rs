//! Error type shared by the board, the rules and the game state machine.

use thiserror::Error;

use crate::board::{Player, Point};

/// Every recoverable failure the engine reports.
///
/// None of these leave a [`Game`](crate::game::Game) partially updated:
/// inputs are validated before any cell is written.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// Row or column outside `0..8`.
    #[error("invalid coordinate: row {row}, col {col}")]
    InvalidCoordinate { row: usize, col: usize },

    /// Array index that does not name a playable cell.
    #[error("invalid point: index {0} is not on the playable board")]
    InvalidPoint(Point),

    /// Move text that is not in `a1`..`h8` form.
    #[error("invalid vertex: {0:?}")]
    InvalidNotation(String),

    /// Player text that is neither black nor white.
    #[error("invalid color: {0:?}")]
    InvalidPlayer(String),

    /// Board text that does not describe an 8x8 position.
    #[error("invalid board: {0}")]
    InvalidBoard(String),

    /// A move was submitted by the player who is not on turn.
    #[error("wrong turn: {attempted} tried to move but it is {expected}'s turn")]
    WrongTurn { expected: Player, attempted: Player },

    /// The target cell is occupied or brackets nothing.
    #[error("illegal move at {}", vertex(.point))]
    IllegalMove { point: Point },

    /// The player has no legal move in this position.
    #[error("{player} has no legal move")]
    NoLegalMove { player: Player },

    /// The game has already finished.
    #[error("game is over")]
    GameOver,
}

fn vertex(pt: &Point) -> String {
    crate::board::str_coord(*pt)
}
