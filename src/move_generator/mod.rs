//! Legal move generation.
//!
//! Every pseudo-legal move is tried on a clone of the position and kept only
//! if the mover's king is not in check afterwards. Castling is generated
//! separately, since its safety rules (no castling out of or through check)
//! cannot be expressed by that filter.

mod castle;
mod targets;

#[cfg(test)]
mod tests;

use smallvec::SmallVec;

use crate::chess_move::ChessMove;
use crate::position::color::Color;
use crate::position::square::Square;
use crate::position::Position;

pub use castle::castle_moves;
pub use targets::pseudo_legal_moves;

/// A list of chess moves that is optimized for small sizes.
pub type ChessMoveList = SmallVec<[ChessMove; 32]>;

/// Every legal move for `color`, castling included. Freshly computed on each
/// call; an empty list means the side has no move (checkmate or stalemate).
pub fn legal_moves(position: &Position, color: Color) -> ChessMoveList {
    let mut moves = ChessMoveList::new();

    for (square, _) in position.pieces(color) {
        for chess_move in pseudo_legal_moves(position, square) {
            if !leaves_king_in_check(position, chess_move, color) {
                moves.push(chess_move);
            }
        }
    }

    moves.extend(castle_moves(position, color));
    moves
}

/// Legal moves of whichever piece stands on `square`.
pub fn legal_moves_from(position: &Position, square: Square) -> ChessMoveList {
    match position.get(square) {
        Some(piece) => legal_moves(position, piece.color)
            .into_iter()
            .filter(|chess_move| chess_move.from_square() == square)
            .collect(),
        None => ChessMoveList::new(),
    }
}

pub fn is_legal(position: &Position, color: Color, chess_move: ChessMove) -> bool {
    legal_moves(position, color).contains(&chess_move)
}

fn leaves_king_in_check(position: &Position, chess_move: ChessMove, color: Color) -> bool {
    let mut simulated = position.clone();
    simulated.apply_move(chess_move);
    simulated.is_king_in_check(color)
}
