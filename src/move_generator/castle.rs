use smallvec::SmallVec;

use crate::chess_move::ChessMove;
use crate::position::castle_rights::{
    self, KINGSIDE_ROOK_COL, KING_COL, QUEENSIDE_ROOK_COL,
};
use crate::position::color::Color;
use crate::position::piece::PieceKind;
use crate::position::square::Square;
use crate::position::Position;

/// Castling moves currently available to `color`, encoded as the king moving
/// two columns toward the rook.
///
/// The moved flags are sticky: a rook that left its corner and came back, or
/// a different rook standing there, does not restore the right.
pub fn castle_moves(position: &Position, color: Color) -> SmallVec<[ChessMove; 2]> {
    let mut moves = SmallVec::new();
    let row = color.home_row();
    let king_square = Square::new(row, KING_COL);

    let king_at_home = matches!(position.get(king_square), Some(p) if p.is(PieceKind::King, color));
    if !king_at_home
        || position.has_moved(castle_rights::king_moved(color))
        || position.is_king_in_check(color)
    {
        return moves;
    }

    if can_castle_kingside(position, color, row) {
        moves.push(ChessMove::new(king_square, Square::new(row, KING_COL + 2)));
    }
    if can_castle_queenside(position, color, row) {
        moves.push(ChessMove::new(king_square, Square::new(row, KING_COL - 2)));
    }

    moves
}

fn rook_at_home(position: &Position, color: Color, row: u8, col: u8) -> bool {
    matches!(position.get(Square::new(row, col)), Some(p) if p.is(PieceKind::Rook, color))
}

fn all_empty(position: &Position, row: u8, cols: &[u8]) -> bool {
    cols.iter()
        .all(|&col| !position.is_occupied(Square::new(row, col)))
}

fn none_attacked(position: &Position, color: Color, row: u8, cols: &[u8]) -> bool {
    cols.iter()
        .all(|&col| !position.is_attacked(Square::new(row, col), color.opposite()))
}

fn can_castle_kingside(position: &Position, color: Color, row: u8) -> bool {
    !position.has_moved(castle_rights::kingside_rook_moved(color))
        && rook_at_home(position, color, row, KINGSIDE_ROOK_COL)
        && all_empty(position, row, &[5, 6])
        && none_attacked(position, color, row, &[5, 6])
}

// b-file only needs to be empty; the king never crosses it.
fn can_castle_queenside(position: &Position, color: Color, row: u8) -> bool {
    !position.has_moved(castle_rights::queenside_rook_moved(color))
        && rook_at_home(position, color, row, QUEENSIDE_ROOK_COL)
        && all_empty(position, row, &[1, 2, 3])
        && none_attacked(position, color, row, &[3, 2])
}
