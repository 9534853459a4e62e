//! Common types re-exported for convenience.

pub use crate::chess_move::ChessMove;
pub use crate::game::{Engine, EngineConfig, EngineError, GameStatus};
pub use crate::move_generator::ChessMoveList;
pub use crate::position::color::Color;
pub use crate::position::piece::{Piece, PieceKind};
pub use crate::position::square::Square;
pub use crate::position::Position;
pub use crate::searcher::{Difficulty, Searcher};
