use std::fmt;
use std::str::FromStr;

use super::error::ParseError;

#[derive(Clone, Copy, PartialEq, Debug, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    Black = 0,
    White = 1,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::Black, Color::White];

    pub fn opposite(&self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// The row holding this side's king and rooks at the start of the game.
    pub fn home_row(&self) -> u8 {
        match self {
            Color::Black => 0,
            Color::White => 7,
        }
    }

    /// The row this side's pawns start on.
    pub fn pawn_row(&self) -> u8 {
        match self {
            Color::Black => 1,
            Color::White => 6,
        }
    }

    /// The row a pawn of this side promotes on.
    pub fn promotion_row(&self) -> u8 {
        self.opposite().home_row()
    }

    /// Row direction a pawn of this side advances in.
    pub fn forward(&self) -> i8 {
        match self {
            Color::Black => 1,
            Color::White => -1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let color_str = match self {
            Color::Black => "black",
            Color::White => "white",
        };
        write!(f, "{}", color_str)
    }
}

// used for parsing cli args
impl FromStr for Color {
    type Err = ParseError;
    fn from_str(color: &str) -> Result<Self, Self::Err> {
        match color.to_ascii_lowercase().as_str() {
            "black" => Ok(Color::Black),
            "white" => Ok(Color::White),
            _ => Err(ParseError::InvalidColor {
                input: color.to_string(),
            }),
        }
    }
}
