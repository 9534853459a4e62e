use crate::move_generator;
use crate::position::color::Color;
use crate::position::Position;

use self::piece_values::material_value;

pub mod piece_values;

/// Weight of each extra legal move one side has over the other.
pub const MOBILITY_WEIGHT: f64 = 0.05;
/// Penalty for being in check, and bonus for giving it.
pub const CHECK_WEIGHT: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEnding {
    Checkmate { winner: Color },
    Stalemate,
    InsufficientMaterial,
}

/// Classifies the position for the side about to move. Returns `None` while
/// play continues. Running out of moves takes precedence over the material
/// draw.
pub fn game_ending(position: &Position, side_to_move: Color) -> Option<GameEnding> {
    let candidates = move_generator::legal_moves(position, side_to_move);

    if candidates.is_empty() {
        if position.is_king_in_check(side_to_move) {
            return Some(GameEnding::Checkmate {
                winner: side_to_move.opposite(),
            });
        }
        return Some(GameEnding::Stalemate);
    }

    if position.is_automatic_draw_by_insufficient_material() {
        return Some(GameEnding::InsufficientMaterial);
    }

    None
}

/// Returns the score of the position from the perspective of the given
/// player; positive favours `perspective`.
///
/// This generates the legal moves of both sides for the mobility term, so
/// it is far from free: search cost is dominated by calls to this function.
pub fn score(position: &Position, perspective: Color) -> f64 {
    material_score(position, perspective)
        + mobility_score(position, perspective)
        + check_score(position, perspective)
}

pub fn material_score(position: &Position, perspective: Color) -> f64 {
    position
        .occupied()
        .map(|(_, piece)| {
            let value = material_value(piece.kind);
            if piece.color == perspective {
                value
            } else {
                -value
            }
        })
        .sum()
}

pub fn mobility_score(position: &Position, perspective: Color) -> f64 {
    let own = move_generator::legal_moves(position, perspective).len() as f64;
    let theirs = move_generator::legal_moves(position, perspective.opposite()).len() as f64;
    MOBILITY_WEIGHT * (own - theirs)
}

pub fn check_score(position: &Position, perspective: Color) -> f64 {
    let mut score = 0.0;
    if position.is_king_in_check(perspective) {
        score -= CHECK_WEIGHT;
    }
    if position.is_king_in_check(perspective.opposite()) {
        score += CHECK_WEIGHT;
    }
    score
}
