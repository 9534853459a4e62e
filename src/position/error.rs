use thiserror::Error;

use super::square::Square;

#[derive(Error, Debug, PartialEq)]
pub enum PositionError {
    #[error("Cannot put a piece on {square}, the square is already occupied")]
    SquareOccupied { square: Square },
}

#[derive(Error, Debug, PartialEq)]
pub enum ParseError {
    #[error("invalid square `{input}`; expected a file a-h followed by a rank 1-8")]
    InvalidSquare { input: String },
    #[error("invalid move `{input}`; expected coordinates like `e2e4` or `e2 e4`")]
    InvalidMove { input: String },
    #[error("invalid color `{input}`; options are: black, white")]
    InvalidColor { input: String },
    #[error("invalid difficulty `{input}`; options are: easy, medium, hard")]
    InvalidDifficulty { input: String },
}
