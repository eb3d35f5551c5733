//! Static evaluation used by the search.

use crate::board::{Board, Player, points};
use crate::constants::{BOARDSIZE, LOSING_VALUE, WEIGHTS, WINNING_VALUE};

/// Positional evaluator backed by a weight table aligned with the board array.
#[derive(Clone, Debug)]
pub struct Evaluator {
    weights: [i32; BOARDSIZE],
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new(WEIGHTS)
    }
}

impl Evaluator {
    pub fn new(weights: [i32; BOARDSIZE]) -> Self {
        Self { weights }
    }

    /// Sum of weights under `player`'s pieces minus the sum under the
    /// opponent's. Positive values favour `player`.
    pub fn heuristic(&self, board: &Board, player: Player) -> i32 {
        let own = player.cell();
        let theirs = player.opponent().cell();
        points()
            .map(|pt| match board.get(pt) {
                c if c == own => self.weights[pt],
                c if c == theirs => -self.weights[pt],
                _ => 0,
            })
            .sum()
    }
}

/// Exact value of a finished game from `player`'s point of view.
///
/// Returns [`WINNING_VALUE`] or [`LOSING_VALUE`] by piece count, or 0 for a
/// draw. Both sentinels lie outside the range of [`Evaluator::heuristic`].
pub fn terminal_value(board: &Board, player: Player) -> i32 {
    let own = board.count(player);
    let theirs = board.count(player.opponent());
    match own.cmp(&theirs) {
        std::cmp::Ordering::Greater => WINNING_VALUE,
        std::cmp::Ordering::Less => LOSING_VALUE,
        std::cmp::Ordering::Equal => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::parse_coord;
    use crate::rules::applied;

    #[test]
    fn test_opening_is_balanced() {
        let eval = Evaluator::default();
        let b = Board::new();
        assert_eq!(eval.heuristic(&b, Player::Black), 0);
        assert_eq!(eval.heuristic(&b, Player::White), 0);
    }

    #[test]
    fn test_heuristic_is_antisymmetric() {
        let eval = Evaluator::default();
        let b = applied(&Board::new(), parse_coord("d3").unwrap(), Player::Black);
        let black = eval.heuristic(&b, Player::Black);
        assert_eq!(black, -eval.heuristic(&b, Player::White));
        // d3, d4, e4, d5 against e5
        assert_eq!(black, 3 + 3 + 3 + 3 - 3);
    }

    #[test]
    fn test_corner_weight() {
        let eval = Evaluator::default();
        let b: Board = "X . . . . . . .
                        . . . . . . . .
                        . . . . . . . .
                        . . . . . . . .
                        . . . . . . . .
                        . . . . . . . .
                        . . . . . . . .
                        . . . . . . . O"
            .parse()
            .unwrap();
        assert_eq!(eval.heuristic(&b, Player::Black), 0);
        assert_eq!(Evaluator::new([1; BOARDSIZE]).heuristic(&b, Player::Black), 0);
    }

    #[test]
    fn test_sentinels_dominate_heuristic() {
        let max: i32 = WEIGHTS.iter().map(|w| w.abs()).sum();
        assert!(max < WINNING_VALUE);
        assert_eq!(LOSING_VALUE, -WINNING_VALUE);
    }

    #[test]
    fn test_terminal_value() {
        let b = Board::new();
        assert_eq!(terminal_value(&b, Player::Black), 0);
        let b = applied(&b, parse_coord("d3").unwrap(), Player::Black);
        assert_eq!(terminal_value(&b, Player::Black), WINNING_VALUE);
        assert_eq!(terminal_value(&b, Player::White), LOSING_VALUE);
    }
}
