//! Move legality and move application.
//!
//! A move is legal when the placed piece brackets at least one contiguous
//! run of opponent pieces in one of the 8 directions. Applying the move
//! flips every bracketed run. Nothing here knows whose turn it is; turn
//! sequencing lives in [`crate::game`].

use tracing::trace;

use crate::board::{Board, Cell, Player, Point, points};
use crate::constants::DIRECTIONS;

#[inline]
fn step(pt: Point, direction: isize) -> Point {
    pt.wrapping_add_signed(direction)
}

/// Scan from `start` in `direction` for the piece that closes a bracket.
///
/// Opponent pieces are skipped over. Returns the index of the first
/// `player` piece, or `None` when the scan reaches an empty or border cell.
/// Terminates because every direction runs into the border.
pub fn find_bracket(board: &Board, start: Point, player: Player, direction: isize) -> Option<Point> {
    let own = player.cell();
    let theirs = player.opponent().cell();
    let mut pt = start;
    loop {
        match board.get(pt) {
            c if c == own => return Some(pt),
            c if c == theirs => pt = step(pt, direction),
            _ => return None,
        }
    }
}

/// Whether `player` may place a piece on `pt`.
///
/// The cell must be empty and at least one direction must end in a bracket
/// that encloses one or more opponent pieces.
pub fn is_legal(board: &Board, pt: Point, player: Player) -> bool {
    if board.get(pt) != Cell::Empty {
        return false;
    }
    DIRECTIONS.iter().any(|&d| brackets(board, pt, player, d).is_some())
}

/// Bracket endpoint for a piece placed on `pt`, only if at least one
/// opponent piece lies between.
#[inline]
fn brackets(board: &Board, pt: Point, player: Player, direction: isize) -> Option<Point> {
    let first = step(pt, direction);
    if board.get(first) != player.opponent().cell() {
        return None;
    }
    find_bracket(board, first, player, direction)
}

/// All legal moves for `player`, in ascending index order.
pub fn legal_moves(board: &Board, player: Player) -> Vec<Point> {
    points().filter(|&pt| is_legal(board, pt, player)).collect()
}

/// Whether `player` has at least one legal move.
pub fn has_legal_move(board: &Board, player: Player) -> bool {
    points().any(|pt| is_legal(board, pt, player))
}

/// Place a piece for `player` on `pt` and flip every bracketed run.
///
/// The caller is responsible for checking legality; on an illegal cell the
/// piece is written and nothing flips. Returns the number of flipped pieces.
pub fn apply(board: &mut Board, pt: Point, player: Player) -> usize {
    // Endpoints come from the position before the piece lands.
    let ends: [Option<Point>; 8] =
        std::array::from_fn(|i| brackets(board, pt, player, DIRECTIONS[i]));

    let own = player.cell();
    board.set(pt, own);

    let mut flipped = 0;
    for (&direction, end) in DIRECTIONS.iter().zip(ends) {
        let Some(end) = end else { continue };
        let mut cur = step(pt, direction);
        while cur != end {
            board.set(cur, own);
            flipped += 1;
            cur = step(cur, direction);
        }
    }
    trace!(pt, %player, flipped, "applied move");
    flipped
}

/// Like [`apply`], but returns a new board and leaves `board` untouched.
pub fn applied(board: &Board, pt: Point, player: Player) -> Board {
    let mut next = board.clone();
    apply(&mut next, pt, player);
    next
}
