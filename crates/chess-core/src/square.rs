//! Board square and direction representation.

use std::fmt;
use thiserror::Error;

/// Returned when a coordinate pair falls outside the 8x8 board.
///
/// This always points at a caller bug, typically a screen-to-board
/// translation error.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("invalid square: ({row}, {col}) is outside the 8x8 board")]
pub struct InvalidSquare {
    pub row: i32,
    pub col: i32,
}

/// A unit step (or knight jump) on the board, as a (row, col) delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Direction {
    pub row: i8,
    pub col: i8,
}

impl Direction {
    pub const fn new(row: i8, col: i8) -> Self {
        Direction { row, col }
    }

    /// The four rook directions.
    pub const ORTHOGONAL: [Direction; 4] = [
        Direction::new(-1, 0),
        Direction::new(0, -1),
        Direction::new(1, 0),
        Direction::new(0, 1),
    ];

    /// The four bishop directions.
    pub const DIAGONAL: [Direction; 4] = [
        Direction::new(-1, 1),
        Direction::new(-1, -1),
        Direction::new(1, 1),
        Direction::new(1, -1),
    ];

    /// The eight king steps.
    pub const KING: [Direction; 8] = [
        Direction::new(0, -1),
        Direction::new(0, 1),
        Direction::new(-1, 0),
        Direction::new(1, 0),
        Direction::new(1, 1),
        Direction::new(1, -1),
        Direction::new(-1, 1),
        Direction::new(-1, -1),
    ];

    /// The eight knight jumps.
    pub const KNIGHT: [Direction; 8] = [
        Direction::new(-2, -1),
        Direction::new(-2, 1),
        Direction::new(-1, -2),
        Direction::new(-1, 2),
        Direction::new(2, 1),
        Direction::new(2, -1),
        Direction::new(1, 2),
        Direction::new(1, -2),
    ];

    /// Returns the reversed direction.
    #[inline]
    pub const fn reversed(self) -> Self {
        Direction::new(-self.row, -self.col)
    }

    /// Returns true if this is a rank or file step.
    #[inline]
    pub const fn is_orthogonal(self) -> bool {
        (self.row == 0) != (self.col == 0)
    }

    /// Returns true if this is a diagonal step.
    #[inline]
    pub const fn is_diagonal(self) -> bool {
        self.row != 0 && self.row.abs() == 1 && self.col.abs() == 1
    }

    /// Returns true if `other` lies on the same line (same or opposite way).
    #[inline]
    pub fn is_parallel(self, other: Direction) -> bool {
        self == other || self == other.reversed()
    }
}

/// A square on the board as a (row, col) pair.
///
/// Row 0 is Black's back rank (rank 8) and row 7 is White's (rank 1);
/// col 0 is the a-file.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Creates a square, rejecting off-board coordinates.
    pub fn new(row: i32, col: i32) -> Result<Self, InvalidSquare> {
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Ok(Square::at(row as u8, col as u8))
        } else {
            Err(InvalidSquare { row, col })
        }
    }

    /// Creates a square from in-range coordinates.
    #[inline]
    pub(crate) const fn at(row: u8, col: u8) -> Self {
        debug_assert!(row < 8 && col < 8);
        Square { row, col }
    }

    /// Parses a square from algebraic notation (e.g., "e4").
    pub fn from_algebraic(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let file = bytes[0].to_ascii_lowercase();
        let rank = bytes[1];
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return None;
        }
        Some(Square::at(7 - (rank - b'1'), file - b'a'))
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns the square `steps` steps away in `dir`, or `None` off the board.
    #[inline]
    pub fn offset(self, dir: Direction, steps: i8) -> Option<Square> {
        let row = self.row as i8 + dir.row * steps;
        let col = self.col as i8 + dir.col * steps;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Square::at(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Iterates over the squares strictly after `self` along `dir`.
    pub fn ray(self, dir: Direction) -> impl Iterator<Item = Square> {
        (1..8).map_while(move |step| self.offset(dir, step))
    }

    /// Iterates over all 64 squares in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|row| (0..8u8).map(move |col| Square::at(row, col)))
    }

    /// Returns the algebraic notation for this square.
    pub fn to_algebraic(self) -> String {
        format!("{}{}", (b'a' + self.col) as char, (b'8' - self.row) as char)
    }

    // Back-rank squares
    pub const A1: Square = Square::at(7, 0);
    pub const C1: Square = Square::at(7, 2);
    pub const D1: Square = Square::at(7, 3);
    pub const E1: Square = Square::at(7, 4);
    pub const F1: Square = Square::at(7, 5);
    pub const G1: Square = Square::at(7, 6);
    pub const H1: Square = Square::at(7, 7);
    pub const A8: Square = Square::at(0, 0);
    pub const C8: Square = Square::at(0, 2);
    pub const D8: Square = Square::at(0, 3);
    pub const E8: Square = Square::at(0, 4);
    pub const F8: Square = Square::at(0, 5);
    pub const G8: Square = Square::at(0, 6);
    pub const H8: Square = Square::at(0, 7);
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self.to_algebraic())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}
