use crate::position::piece::PieceKind;

pub const KING_VALUE: f64 = 1000.0;
pub const QUEEN_VALUE: f64 = 9.0;
pub const ROOK_VALUE: f64 = 5.0;
pub const BISHOP_VALUE: f64 = 3.25;
pub const KNIGHT_VALUE: f64 = 3.0;
pub const PAWN_VALUE: f64 = 1.0;

pub fn material_value(kind: PieceKind) -> f64 {
    match kind {
        PieceKind::King => KING_VALUE,
        PieceKind::Queen => QUEEN_VALUE,
        PieceKind::Rook => ROOK_VALUE,
        PieceKind::Bishop => BISHOP_VALUE,
        PieceKind::Knight => KNIGHT_VALUE,
        PieceKind::Pawn => PAWN_VALUE,
    }
}
