//! Depth-limited negamax search with alpha-beta pruning.
//!
//! Every value is from the point of view of the side to move at that node;
//! a parent negates its children's values. Each child is searched on its own
//! copy of the board, so the caller's board is never modified.
//!
//! The search is deterministic: moves are tried in ascending index order and
//! the first move to reach the best score is kept.

use tracing::debug;

use crate::board::{Board, Player, Point, str_coord};
use crate::constants::{LOSING_VALUE, WINNING_VALUE};
use crate::eval::{Evaluator, terminal_value};
use crate::rules::{applied, has_legal_move, legal_moves};

/// Outcome of a root search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Value of the position for the player who searched
    pub score: i32,
    /// Chosen move, `None` when there is nothing to play or depth was 0
    pub best_move: Option<Point>,
    /// Nodes visited
    pub nodes: u64,
}

/// Alpha-beta searcher. Holds the evaluator and a node counter.
#[derive(Default)]
pub struct Searcher {
    evaluator: Evaluator,
    nodes: u64,
}

impl Searcher {
    pub fn new(evaluator: Evaluator) -> Self {
        Self {
            evaluator,
            nodes: 0,
        }
    }

    /// Nodes visited by the most recent search.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Search `depth` plies from `board` with `player` to move.
    pub fn best_move(&mut self, board: &Board, player: Player, depth: u32) -> SearchResult {
        self.nodes = 0;
        let (score, best_move) =
            self.alphabeta(board, player, LOSING_VALUE - 1, WINNING_VALUE + 1, depth);
        let best = best_move.map_or_else(|| "none".to_string(), str_coord);
        debug!(%player, depth, score, %best, nodes = self.nodes, "search finished");
        SearchResult {
            score,
            best_move,
            nodes: self.nodes,
        }
    }

    /// Negamax value of `board` for `player` within the window `(alpha, beta)`.
    ///
    /// A finished game is scored exactly regardless of the remaining depth.
    /// When only `player` is stuck, the turn passes to the opponent and no
    /// move is returned.
    pub fn alphabeta(
        &mut self,
        board: &Board,
        player: Player,
        mut alpha: i32,
        beta: i32,
        depth: u32,
    ) -> (i32, Option<Point>) {
        self.nodes += 1;

        if depth == 0 {
            return (self.evaluator.heuristic(board, player), None);
        }

        let opp = player.opponent();
        let moves = legal_moves(board, player);

        if moves.is_empty() {
            if !has_legal_move(board, opp) {
                return (terminal_value(board, player), None);
            }
            let (score, _) = self.alphabeta(board, opp, -beta, -alpha, depth - 1);
            return (-score, None);
        }

        let mut best_score = LOSING_VALUE - 1;
        let mut best_move = None;

        for pt in moves {
            let child = applied(board, pt, player);
            let (score, _) = self.alphabeta(&child, opp, -beta, -alpha, depth - 1);
            let score = -score;

            if score > best_score {
                best_score = score;
                best_move = Some(pt);
            }

            alpha = alpha.max(best_score);
            if alpha >= beta {
                break;
            }
        }

        (best_score, best_move)
    }
}
