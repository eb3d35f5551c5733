//! Bordered board representation and coordinate conversion.
//!
//! Cells are stored in a flat `[Cell; BOARDSIZE]` array. The outermost ring
//! holds [`Cell::Border`] so that scanning in any direction terminates on a
//! border cell without explicit bounds checks.

use std::fmt;
use std::str::FromStr;

use crate::constants::{BOARDSIZE, N, W};
use crate::error::GameError;

/// A cell on the board, represented as an index into the 1D board array.
pub type Point = usize;

/// One of the two sides.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    Black,
    White,
}

impl Player {
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    /// The cell value a piece of this player occupies.
    #[inline]
    pub fn cell(self) -> Cell {
        match self {
            Player::Black => Cell::Black,
            Player::White => Cell::White,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Black => write!(f, "black"),
            Player::White => write!(f, "white"),
        }
    }
}

impl FromStr for Player {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "b" | "black" | "x" => Ok(Player::Black),
            "w" | "white" | "o" => Ok(Player::White),
            _ => Err(GameError::InvalidPlayer(s.to_string())),
        }
    }
}

/// Contents of a single board cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Black,
    White,
    /// Frame around the playable area
    Border,
}

impl Cell {
    fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Black => 'X',
            Cell::White => 'O',
            Cell::Border => '#',
        }
    }
}

/// An Othello board.
///
/// Cloning produces an independent copy; the search relies on this to
/// explore sibling positions without aliasing.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; BOARDSIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The standard opening position: White on d4 and e5, Black on e4 and d5.
    pub fn new() -> Self {
        let mut board = Self::empty();
        let lo = N / 2 - 1;
        let hi = N / 2;
        board.cells[at(lo, lo)] = Cell::White;
        board.cells[at(hi, hi)] = Cell::White;
        board.cells[at(lo, hi)] = Cell::Black;
        board.cells[at(hi, lo)] = Cell::Black;
        board
    }

    /// A board with the border in place and every playable cell empty.
    pub fn empty() -> Self {
        let mut cells = [Cell::Border; BOARDSIZE];
        for pt in points() {
            cells[pt] = Cell::Empty;
        }
        Self { cells }
    }

    #[inline]
    pub fn get(&self, pt: Point) -> Cell {
        self.cells[pt]
    }

    /// Write a cell. Only move application and board construction do this.
    #[inline]
    pub(crate) fn set(&mut self, pt: Point, cell: Cell) {
        debug_assert!(is_interior(pt), "write outside the playable area");
        self.cells[pt] = cell;
    }

    /// Number of pieces `player` has on the board.
    pub fn count(&self, player: Player) -> usize {
        let cell = player.cell();
        points().filter(|&pt| self.cells[pt] == cell).count()
    }

    /// Number of empty playable cells.
    pub fn empties(&self) -> usize {
        points().filter(|&pt| self.cells[pt] == Cell::Empty).count()
    }
}

/// Index of a playable cell, for coordinates already known to be in range.
#[inline]
const fn at(row: usize, col: usize) -> Point {
    (row + 1) * W + (col + 1)
}

/// All playable points in ascending index order.
pub fn points() -> impl Iterator<Item = Point> {
    (0..N).flat_map(|row| (0..N).map(move |col| at(row, col)))
}

/// Whether `pt` names a playable cell.
#[inline]
pub fn is_interior(pt: Point) -> bool {
    let (row, col) = (pt / W, pt % W);
    pt < BOARDSIZE && (1..=N).contains(&row) && (1..=N).contains(&col)
}

/// Convert a 0-based row and column into a board index.
pub fn index(row: usize, col: usize) -> Result<Point, GameError> {
    if row >= N || col >= N {
        return Err(GameError::InvalidCoordinate { row, col });
    }
    Ok(at(row, col))
}

/// Convert a board index back into a 0-based row and column.
pub fn to_row_col(pt: Point) -> Result<(usize, usize), GameError> {
    if !is_interior(pt) {
        return Err(GameError::InvalidPoint(pt));
    }
    Ok((pt / W - 1, pt % W - 1))
}

/// Parse a vertex such as `d3` into a Point.
///
/// Columns are the letters `a`-`h` from left to right, rows are `1`-`8` from
/// the top. Case is ignored.
pub fn parse_coord(s: &str) -> Result<Point, GameError> {
    let invalid = || GameError::InvalidNotation(s.to_string());
    let bytes = s.trim().as_bytes();
    if bytes.len() != 2 {
        return Err(invalid());
    }
    let col = bytes[0].to_ascii_lowercase().wrapping_sub(b'a') as usize;
    let row = bytes[1].wrapping_sub(b'1') as usize;
    index(row, col).map_err(|_| invalid())
}

/// Convert a Point to a vertex string (e.g. `d3`).
///
/// Points outside the playable area are rendered as `#<index>`.
pub fn str_coord(pt: Point) -> String {
    match to_row_col(pt) {
        Ok((row, col)) => format!("{}{}", (b'a' + col as u8) as char, row + 1),
        Err(_) => format!("#{pt}"),
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..N {
            for col in 0..N {
                write!(f, "{} ", self.cells[at(row, col)].symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\n{self})")
    }
}

/// Parse the [`Display`](fmt::Display) form: 64 symbols of `X`, `O` or `.`
/// in row-major order. Whitespace is ignored.
impl FromStr for Board {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if symbols.len() != N * N {
            return Err(GameError::InvalidBoard(format!(
                "expected {} cells, found {}",
                N * N,
                symbols.len()
            )));
        }
        let mut board = Board::empty();
        for (pt, symbol) in points().zip(symbols) {
            let cell = match symbol {
                'X' | 'x' => Cell::Black,
                'O' | 'o' => Cell::White,
                '.' | '-' => Cell::Empty,
                other => {
                    return Err(GameError::InvalidBoard(format!(
                        "unexpected symbol {other:?}"
                    )));
                }
            };
            board.set(pt, cell);
        }
        Ok(board)
    }
}
