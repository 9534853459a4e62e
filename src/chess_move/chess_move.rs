use core::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::position::error::ParseError;
use crate::position::square::Square;

static COORDINATE_MOVE: Lazy<Regex> = Lazy::new(|| {
    Regex::new("^([a-hA-H][1-8])([a-hA-H][1-8])$").expect("coordinate move pattern is valid")
});

/// A move as a pair of squares. Captures, castling and promotion are not
/// encoded here; they are inferred from the position when the move is
/// applied. A castle is the king moving two columns along its home row.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct ChessMove {
    from_square: Square,
    to_square: Square,
}

impl ChessMove {
    pub fn new(from_square: Square, to_square: Square) -> Self {
        Self {
            from_square,
            to_square,
        }
    }

    pub fn from_square(&self) -> Square {
        self.from_square
    }

    pub fn to_square(&self) -> Square {
        self.to_square
    }

    /// Signed column displacement, used to recognise castling.
    pub fn col_delta(&self) -> i8 {
        self.to_square.col() as i8 - self.from_square.col() as i8
    }

    pub fn to_coordinates(&self) -> String {
        format!("{}{}", self.from_square, self.to_square)
    }
}

impl fmt::Display for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_coordinates())
    }
}

/// Parses coordinate pairs such as `e2e4` or `e2 e4`.
impl FromStr for ChessMove {
    type Err = ParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let compact: String = input.chars().filter(|c| !c.is_whitespace()).collect();
        let caps = COORDINATE_MOVE
            .captures(&compact)
            .ok_or_else(|| ParseError::InvalidMove {
                input: input.to_string(),
            })?;
        let from_square = caps[1].parse::<Square>()?;
        let to_square = caps[2].parse::<Square>()?;
        Ok(Self::new(from_square, to_square))
    }
}

#[macro_export]
macro_rules! std_move {
    ($from:expr, $to:expr) => {
        $crate::chess_move::ChessMove::new($from, $to)
    };
}
