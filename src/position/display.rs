use std::fmt;

use super::square::Square;
use super::Position;

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..8u8 {
            write!(f, "{} ", 8 - row)?;
            for col in 0..8u8 {
                let symbol = self
                    .get(Square::new(row, col))
                    .map_or('.', |piece| piece.to_fen());
                write!(f, "{} ", symbol)?;
            }
            writeln!(f)?;
        }
        write!(f, "  a b c d e f g h")
    }
}

/// Builds a `Position` from an 8x8 diagram written from White's point of
/// view: the first line is rank 8, `.` is an empty square, upper case is
/// White and lower case is Black. No moved flags are set.
#[macro_export]
macro_rules! chess_position {
    ($($piece:tt)*) => {{
        let mut position = $crate::position::Position::new();
        // Convert all input tokens to a string and filter out whitespace characters.
        let pieces: Vec<_> = stringify!($($piece)*)
            .chars()
            .filter(|&c| !c.is_whitespace())
            .collect();
        assert_eq!(pieces.len(), 64, "Invalid number of squares. Expected 64, got {}", pieces.len());
        for (i, &c) in pieces.iter().enumerate() {
            if c == '.' {
                continue;
            }
            let piece = $crate::position::piece::Piece::from_fen(c)
                .expect("Invalid character in chess position");
            let square = $crate::position::square::Square::new((i / 8) as u8, (i % 8) as u8);
            position
                .put(square, piece)
                .expect("each square is filled at most once");
        }
        position
    }};
}
