//! Piece geometry shared by attack detection and move generation.

use super::piece::{Piece, PieceKind};
use super::square::Square;
use super::Position;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

pub const ALL_DIRECTIONS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// Directions a sliding piece moves along. Empty for non-sliders.
pub fn sliding_directions(kind: PieceKind) -> &'static [(i8, i8)] {
    match kind {
        PieceKind::Bishop => &BISHOP_DIRECTIONS,
        PieceKind::Rook => &ROOK_DIRECTIONS,
        PieceKind::Queen => &ALL_DIRECTIONS,
        _ => &[],
    }
}

/// Returns true if `piece`, standing on `from`, geometrically reaches
/// `target`. Pawns only reach the two forward diagonals; sliders need every
/// square strictly between them to be empty. Whose turn it is and whether the
/// attacker is pinned are both ignored.
pub fn can_attack(position: &Position, piece: Piece, from: Square, target: Square) -> bool {
    let d_row = target.row() as i8 - from.row() as i8;
    let d_col = target.col() as i8 - from.col() as i8;

    match piece.kind {
        PieceKind::Pawn => d_row == piece.color.forward() && d_col.abs() == 1,
        PieceKind::Knight => {
            let (a_row, a_col) = (d_row.abs(), d_col.abs());
            (a_row == 2 && a_col == 1) || (a_row == 1 && a_col == 2)
        }
        PieceKind::Bishop => {
            d_row != 0 && d_row.abs() == d_col.abs() && is_clear_path(position, from, target)
        }
        PieceKind::Rook => {
            (d_row == 0) != (d_col == 0) && is_clear_path(position, from, target)
        }
        PieceKind::Queen => {
            let aligned = (d_row == 0) != (d_col == 0) || (d_row != 0 && d_row.abs() == d_col.abs());
            aligned && is_clear_path(position, from, target)
        }
        PieceKind::King => d_row.abs().max(d_col.abs()) == 1,
    }
}

/// True when every square strictly between two aligned squares is empty.
fn is_clear_path(position: &Position, from: Square, target: Square) -> bool {
    let step_row = (target.row() as i8 - from.row() as i8).signum();
    let step_col = (target.col() as i8 - from.col() as i8).signum();

    let mut current = from;
    loop {
        current = match current.offset(step_row, step_col) {
            Some(next) => next,
            None => return false,
        };
        if current == target {
            return true;
        }
        if position.get(current).is_some() {
            return false;
        }
    }
}
