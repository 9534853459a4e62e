pub mod attacks;
pub mod castle_rights;
pub mod color;
pub mod error;
pub mod piece;
pub mod square;

mod display;


use castle_rights::{MovedFlags, KINGSIDE_ROOK_COL, QUEENSIDE_ROOK_COL};
use color::Color;
use error::PositionError;
use piece::{Piece, PieceKind};
use square::Square;

use crate::chess_move::ChessMove;

/// Represents the state of a chess game: which piece (if any) sits on each
/// of the 64 squares, plus the sticky flags recording which kings and rooks
/// have left their home squares. Cloning produces a fully independent copy,
/// which is how move legality and search explore hypothetical positions.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Position {
    grid: [[Option<Piece>; 8]; 8],
    moved: MovedFlags,
}

impl Position {
    /// An empty board with no moved flags set.
    pub fn new() -> Self {
        Default::default()
    }

    pub fn starting_position() -> Self {
        crate::chess_position! {
            rnbqkbnr
            pppppppp
            ........
            ........
            ........
            ........
            PPPPPPPP
            RNBQKBNR
        }
    }

    /// Returns the piece at the given coordinates. Coordinates off the board
    /// read as empty rather than failing.
    pub fn at(&self, row: i8, col: i8) -> Option<Piece> {
        Square::checked(row, col).and_then(|square| self.get(square))
    }

    pub fn get(&self, square: Square) -> Option<Piece> {
        self.grid[square.row() as usize][square.col() as usize]
    }

    fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.grid[square.row() as usize][square.col() as usize] = piece;
    }

    pub fn put(&mut self, square: Square, piece: Piece) -> Result<(), PositionError> {
        if self.get(square).is_some() {
            return Err(PositionError::SquareOccupied { square });
        }
        self.set(square, Some(piece));
        Ok(())
    }

    pub fn remove(&mut self, square: Square) -> Option<Piece> {
        let piece = self.get(square);
        self.set(square, None);
        piece
    }

    pub fn is_occupied(&self, square: Square) -> bool {
        self.get(square).is_some()
    }

    /// Every occupied square with its piece, rank 8 first.
    pub fn occupied(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::iter().filter_map(move |square| self.get(square).map(|piece| (square, piece)))
    }

    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.occupied().filter(move |(_, piece)| piece.color == color)
    }

    pub fn piece_count(&self) -> usize {
        self.occupied().count()
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces(color)
            .find(|(_, piece)| piece.kind == PieceKind::King)
            .map(|(square, _)| square)
    }

    pub fn moved_flags(&self) -> MovedFlags {
        self.moved
    }

    pub fn has_moved(&self, flag: MovedFlags) -> bool {
        self.moved & flag != 0
    }

    pub fn mark_moved(&mut self, flags: MovedFlags) {
        self.moved |= flags;
    }

    /// Executes the move without checking that it is legal. Captures,
    /// castling (a king moving two columns) and promotion to a queen are all
    /// inferred from what stands on the board. Callers must only pass moves
    /// produced by the move generator; anything else silently corrupts the
    /// position.
    pub fn apply_move(&mut self, chess_move: ChessMove) {
        let from = chess_move.from_square();
        let to = chess_move.to_square();

        // taking an unmoved rook also takes away that castle
        if let Some(captured) = self.get(to) {
            if captured.kind == PieceKind::Rook {
                self.mark_rook_moved(captured.color, to);
            }
        }

        let moving = self.remove(from);

        if let Some(piece) = moving {
            match piece.kind {
                PieceKind::King => {
                    self.mark_moved(castle_rights::king_moved(piece.color));
                    match chess_move.col_delta() {
                        2 => self.relocate_castling_rook(piece.color, to.row(), KINGSIDE_ROOK_COL, 5),
                        -2 => self.relocate_castling_rook(piece.color, to.row(), QUEENSIDE_ROOK_COL, 3),
                        _ => (),
                    }
                }
                PieceKind::Rook => self.mark_rook_moved(piece.color, from),
                _ => (),
            }
        }

        let landed = match moving {
            Some(piece) if piece.kind == PieceKind::Pawn && to.row() == piece.color.promotion_row() => {
                Some(Piece::new(PieceKind::Queen, piece.color))
            }
            other => other,
        };
        self.set(to, landed);
    }

    fn relocate_castling_rook(&mut self, color: Color, row: u8, from_col: u8, to_col: u8) {
        let rook_from = Square::new(row, from_col);
        let rook = self.remove(rook_from);
        self.set(Square::new(row, to_col), rook);
        self.mark_rook_moved(color, rook_from);
    }

    fn mark_rook_moved(&mut self, color: Color, square: Square) {
        if let Some(flag) = castle_rights::rook_flag_for_square(color, square.row(), square.col()) {
            self.mark_moved(flag);
        }
    }

    /// Returns true if any piece of `by` could reach the square, ignoring
    /// whose turn it is and whether that piece is pinned.
    pub fn is_attacked(&self, square: Square, by: Color) -> bool {
        self.pieces(by)
            .any(|(from, piece)| attacks::can_attack(self, piece, from, square))
    }

    /// A side with no king on the board counts as in check. That state is
    /// unreachable through legal play.
    pub fn is_king_in_check(&self, color: Color) -> bool {
        match self.king_square(color) {
            Some(king) => self.is_attacked(king, color.opposite()),
            None => true,
        }
    }

    /// Bare kings, or a single knight or bishop alongside the two kings.
    pub fn is_automatic_draw_by_insufficient_material(&self) -> bool {
        match self.piece_count() {
            2 => true,
            3 => self
                .occupied()
                .any(|(_, piece)| matches!(piece.kind, PieceKind::Bishop | PieceKind::Knight)),
            _ => false,
        }
    }
}
