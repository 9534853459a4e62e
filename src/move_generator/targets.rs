use smallvec::SmallVec;

use crate::chess_move::ChessMove;
use crate::position::attacks::{sliding_directions, ALL_DIRECTIONS, KNIGHT_OFFSETS};
use crate::position::piece::{Piece, PieceKind};
use crate::position::square::Square;
use crate::position::Position;

use super::ChessMoveList;

/// Moves the piece on `square` could make by its movement rule alone,
/// without regard to the safety of its own king. Empty for an empty square.
pub fn pseudo_legal_moves(position: &Position, square: Square) -> ChessMoveList {
    let mut moves = SmallVec::new();
    let piece = match position.get(square) {
        Some(piece) => piece,
        None => return moves,
    };

    match piece.kind {
        PieceKind::Pawn => pawn_moves(position, square, piece, &mut moves),
        PieceKind::Knight => step_moves(position, square, piece, &KNIGHT_OFFSETS, &mut moves),
        PieceKind::King => step_moves(position, square, piece, &ALL_DIRECTIONS, &mut moves),
        PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
            sliding_moves(position, square, piece, &mut moves)
        }
    }

    moves
}

fn is_enemy(position: &Position, square: Square, piece: Piece) -> bool {
    matches!(position.get(square), Some(other) if other.color != piece.color)
}

fn pawn_moves(position: &Position, square: Square, piece: Piece, moves: &mut ChessMoveList) {
    let forward = piece.color.forward();

    if let Some(one_step) = square.offset(forward, 0) {
        if !position.is_occupied(one_step) {
            moves.push(ChessMove::new(square, one_step));

            if square.row() == piece.color.pawn_row() {
                if let Some(two_step) = square.offset(2 * forward, 0) {
                    if !position.is_occupied(two_step) {
                        moves.push(ChessMove::new(square, two_step));
                    }
                }
            }
        }
    }

    for &d_col in &[-1, 1] {
        if let Some(target) = square.offset(forward, d_col) {
            if is_enemy(position, target, piece) {
                moves.push(ChessMove::new(square, target));
            }
        }
    }
}

/// Knights and kings: a fixed set of single hops onto empty or enemy squares.
fn step_moves(
    position: &Position,
    square: Square,
    piece: Piece,
    offsets: &[(i8, i8)],
    moves: &mut ChessMoveList,
) {
    for &(d_row, d_col) in offsets {
        if let Some(target) = square.offset(d_row, d_col) {
            if !position.is_occupied(target) || is_enemy(position, target, piece) {
                moves.push(ChessMove::new(square, target));
            }
        }
    }
}

fn sliding_moves(position: &Position, square: Square, piece: Piece, moves: &mut ChessMoveList) {
    for &(d_row, d_col) in sliding_directions(piece.kind) {
        let mut current = square;
        while let Some(target) = current.offset(d_row, d_col) {
            match position.get(target) {
                None => moves.push(ChessMove::new(square, target)),
                Some(other) => {
                    if other.color != piece.color {
                        moves.push(ChessMove::new(square, target));
                    }
                    break;
                }
            }
            current = target;
        }
    }
}
