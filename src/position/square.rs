use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use super::error::ParseError;

static ALGEBRAIC_SQUARE: Lazy<Regex> =
    Lazy::new(|| Regex::new("^([a-hA-H])([1-8])$").expect("square pattern is valid"));

/// A cell of the 8x8 grid. Row 0 is rank 8 (Black's back rank) and row 7 is
/// rank 1; column 0 is the a-file.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row < 8 && col < 8);
        Self { row, col }
    }

    /// Returns the square at the given signed coordinates, or `None` when
    /// they fall off the board.
    pub fn checked(row: i8, col: i8) -> Option<Self> {
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    pub fn row(&self) -> u8 {
        self.row
    }

    pub fn col(&self) -> u8 {
        self.col
    }

    pub fn offset(&self, d_row: i8, d_col: i8) -> Option<Self> {
        Self::checked(self.row as i8 + d_row, self.col as i8 + d_col)
    }

    pub fn file_char(&self) -> char {
        (b'a' + self.col) as char
    }

    pub fn rank(&self) -> u8 {
        8 - self.row
    }

    pub fn iter() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|row| (0..8u8).map(move |col| Square { row, col }))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank())
    }
}

impl FromStr for Square {
    type Err = ParseError;

    fn from_str(algebraic: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseError::InvalidSquare {
            input: algebraic.to_string(),
        };
        let caps = ALGEBRAIC_SQUARE.captures(algebraic).ok_or_else(invalid)?;
        let file = caps[1].as_bytes()[0].to_ascii_lowercase() - b'a';
        let rank = caps[2].as_bytes()[0] - b'0';
        Ok(Square::new(8 - rank, file))
    }
}

pub const A8: Square = Square::new(0, 0);
pub const B8: Square = Square::new(0, 1);
pub const C8: Square = Square::new(0, 2);
pub const D8: Square = Square::new(0, 3);
pub const E8: Square = Square::new(0, 4);
pub const F8: Square = Square::new(0, 5);
pub const G8: Square = Square::new(0, 6);
pub const H8: Square = Square::new(0, 7);
pub const A7: Square = Square::new(1, 0);
pub const B7: Square = Square::new(1, 1);
pub const C7: Square = Square::new(1, 2);
pub const D7: Square = Square::new(1, 3);
pub const E7: Square = Square::new(1, 4);
pub const F7: Square = Square::new(1, 5);
pub const G7: Square = Square::new(1, 6);
pub const H7: Square = Square::new(1, 7);
pub const A6: Square = Square::new(2, 0);
pub const B6: Square = Square::new(2, 1);
pub const C6: Square = Square::new(2, 2);
pub const D6: Square = Square::new(2, 3);
pub const E6: Square = Square::new(2, 4);
pub const F6: Square = Square::new(2, 5);
pub const G6: Square = Square::new(2, 6);
pub const H6: Square = Square::new(2, 7);
pub const A5: Square = Square::new(3, 0);
pub const B5: Square = Square::new(3, 1);
pub const C5: Square = Square::new(3, 2);
pub const D5: Square = Square::new(3, 3);
pub const E5: Square = Square::new(3, 4);
pub const F5: Square = Square::new(3, 5);
pub const G5: Square = Square::new(3, 6);
pub const H5: Square = Square::new(3, 7);
pub const A4: Square = Square::new(4, 0);
pub const B4: Square = Square::new(4, 1);
pub const C4: Square = Square::new(4, 2);
pub const D4: Square = Square::new(4, 3);
pub const E4: Square = Square::new(4, 4);
pub const F4: Square = Square::new(4, 5);
pub const G4: Square = Square::new(4, 6);
pub const H4: Square = Square::new(4, 7);
pub const A3: Square = Square::new(5, 0);
pub const B3: Square = Square::new(5, 1);
pub const C3: Square = Square::new(5, 2);
pub const D3: Square = Square::new(5, 3);
pub const E3: Square = Square::new(5, 4);
pub const F3: Square = Square::new(5, 5);
pub const G3: Square = Square::new(5, 6);
pub const H3: Square = Square::new(5, 7);
pub const A2: Square = Square::new(6, 0);
pub const B2: Square = Square::new(6, 1);
pub const C2: Square = Square::new(6, 2);
pub const D2: Square = Square::new(6, 3);
pub const E2: Square = Square::new(6, 4);
pub const F2: Square = Square::new(6, 5);
pub const G2: Square = Square::new(6, 6);
pub const H2: Square = Square::new(6, 7);
pub const A1: Square = Square::new(7, 0);
pub const B1: Square = Square::new(7, 1);
pub const C1: Square = Square::new(7, 2);
pub const D1: Square = Square::new(7, 3);
pub const E1: Square = Square::new(7, 4);
pub const F1: Square = Square::new(7, 5);
pub const G1: Square = Square::new(7, 6);
pub const H1: Square = Square::new(7, 7);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_algebraic_mapping_matches_grid_coordinates() {
        assert_eq!(A8.row(), 0);
        assert_eq!(A8.col(), 0);
        assert_eq!(H1.row(), 7);
        assert_eq!(H1.col(), 7);
        assert_eq!(E2.to_string(), "e2");
        assert_eq!(D8.to_string(), "d8");
    }

    #[test]
    fn test_parse_square() {
        assert_eq!("e4".parse::<Square>().unwrap(), E4);
        assert_eq!("A1".parse::<Square>().unwrap(), A1);
        assert_eq!("h8".parse::<Square>().unwrap(), H8);
    }

    #[test]
    fn test_parse_square_rejects_out_of_range() {
        assert!("i1".parse::<Square>().is_err());
        assert!("a9".parse::<Square>().is_err());
        assert!("a0".parse::<Square>().is_err());
        assert!("e22".parse::<Square>().is_err());
        assert!("".parse::<Square>().is_err());
    }

    #[test]
    fn test_offset_stops_at_board_edge() {
        assert_eq!(A1.offset(-1, 1), Some(B2));
        assert_eq!(A1.offset(1, 0), None);
        assert_eq!(H8.offset(0, 1), None);
        assert_eq!(E4.offset(-2, 1), Some(F6));
    }

    #[test]
    fn test_iter_visits_every_square_once() {
        let squares: Vec<_> = Square::iter().collect();
        assert_eq!(squares.len(), 64);
        assert_eq!(squares[0], A8);
        assert_eq!(squares[63], H1);
    }
}
