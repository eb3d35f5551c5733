//! Board geometry, evaluation weights and engine defaults.
//!
//! The board uses a 1D array representation with a one-cell border on every
//! side, so a scan that walks off the playable area always lands on a
//! border cell before it can leave the array.

// =============================================================================
// Board Geometry
// =============================================================================

/// Playable board size (NxN).
pub const N: usize = 8;

/// Board width including the border on both sides.
pub const W: usize = N + 2;

/// Total board array size including the border.
pub const BOARDSIZE: usize = W * W;

/// First playable board index (row 0, col 0).
pub const BOARD_IMIN: usize = W + 1;

/// One past the last playable board index (row 7, col 7).
pub const BOARD_IMAX: usize = N * W + N + 1;

// =============================================================================
// Directions
// =============================================================================

/// Offsets to the 8 neighbouring cells in the 1D board array.
/// Order: NW, N, NE, W, E, SW, S, SE
pub const DIRECTIONS: [isize; 8] = [
    -(W as isize) - 1, // NW
    -(W as isize),     // N (up one row)
    -(W as isize) + 1, // NE
    -1,                // W (left one column)
    1,                 // E (right one column)
    (W as isize) - 1,  // SW
    W as isize,        // S (down one row)
    (W as isize) + 1,  // SE
];

// =============================================================================
// Evaluation
// =============================================================================

/// Value of a finished game won by the side to move.
pub const WINNING_VALUE: i32 = 32767;

/// Value of a finished game lost by the side to move.
pub const LOSING_VALUE: i32 = -32767;

/// Positional weights, aligned with the board array. Border entries are 0.
#[rustfmt::skip]
pub const WEIGHTS: [i32; BOARDSIZE] = [
    0,   0,   0,   0,   0,   0,   0,   0,   0,   0,
    0, 120, -20,  20,   5,   5,  20, -20, 120,   0,
    0, -20, -40,  -5,  -5,  -5,  -5, -40, -20,   0,
    0,  20,  -5,  15,   3,   3,  15,  -5,  20,   0,
    0,   5,  -5,   3,   3,   3,   3,  -5,   5,   0,
    0,   5,  -5,   3,   3,   3,   3,  -5,   5,   0,
    0,  20,  -5,  15,   3,   3,  15,  -5,  20,   0,
    0, -20, -40,  -5,  -5,  -5,  -5, -40, -20,   0,
    0, 120, -20,  20,   5,   5,  20, -20, 120,   0,
    0,   0,   0,   0,   0,   0,   0,   0,   0,   0,
];

// =============================================================================
// Search
// =============================================================================

/// Default search depth in plies.
pub const DEFAULT_DEPTH: u32 = 5;
