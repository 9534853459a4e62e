//! Sticky "has moved" flags backing castling eligibility. Once set, a flag is
//! never cleared for the rest of the game, even if a different rook later
//! lands on the home square.

use super::color::Color;

pub type MovedFlags = u8;
pub const WHITE_KING_MOVED: MovedFlags = 0b10_0000;
pub const BLACK_KING_MOVED: MovedFlags = 0b01_0000;
pub const WHITE_KINGSIDE_ROOK_MOVED: MovedFlags = 0b00_1000;
pub const WHITE_QUEENSIDE_ROOK_MOVED: MovedFlags = 0b00_0100;
pub const BLACK_KINGSIDE_ROOK_MOVED: MovedFlags = 0b00_0010;
pub const BLACK_QUEENSIDE_ROOK_MOVED: MovedFlags = 0b00_0001;
pub const ALL_MOVED: MovedFlags = WHITE_KING_MOVED
    | BLACK_KING_MOVED
    | WHITE_KINGSIDE_ROOK_MOVED
    | WHITE_QUEENSIDE_ROOK_MOVED
    | BLACK_KINGSIDE_ROOK_MOVED
    | BLACK_QUEENSIDE_ROOK_MOVED;

pub const KINGSIDE_ROOK_COL: u8 = 7;
pub const QUEENSIDE_ROOK_COL: u8 = 0;
pub const KING_COL: u8 = 4;

pub fn king_moved(color: Color) -> MovedFlags {
    match color {
        Color::White => WHITE_KING_MOVED,
        Color::Black => BLACK_KING_MOVED,
    }
}

pub fn kingside_rook_moved(color: Color) -> MovedFlags {
    match color {
        Color::White => WHITE_KINGSIDE_ROOK_MOVED,
        Color::Black => BLACK_KINGSIDE_ROOK_MOVED,
    }
}

pub fn queenside_rook_moved(color: Color) -> MovedFlags {
    match color {
        Color::White => WHITE_QUEENSIDE_ROOK_MOVED,
        Color::Black => BLACK_QUEENSIDE_ROOK_MOVED,
    }
}

/// Flag for a rook of `color` leaving (or being captured on) the given
/// square. Only the two home-rank corner squares carry a flag.
pub fn rook_flag_for_square(color: Color, row: u8, col: u8) -> Option<MovedFlags> {
    if row != color.home_row() {
        return None;
    }
    match col {
        KINGSIDE_ROOK_COL => Some(kingside_rook_moved(color)),
        QUEENSIDE_ROOK_COL => Some(queenside_rook_moved(color)),
        _ => None,
    }
}
