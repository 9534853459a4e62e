//! Fixed-depth minimax search with alpha-beta pruning for the automated
//! player.
//!
//! Move lists are shuffled at every node and ties at the root are broken by
//! a coin flip, so equally good moves are picked with equal probability
//! instead of always favouring generation order. The random source is
//! injected, which keeps searches reproducible under a fixed seed.
//!
//! Every node works on its own clone of the position; the caller's position
//! is only read, so a search may run on a snapshot while the live game
//! carries on elsewhere.

pub mod difficulty;


use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::chess_move::ChessMove;
use crate::evaluate;
use crate::move_generator;
use crate::position::color::Color;
use crate::position::Position;

pub use difficulty::Difficulty;

/// Root scores closer than this are treated as equal.
pub const TIE_EPSILON: f64 = 1e-6;

pub struct Searcher<R: Rng = StdRng> {
    rng: R,
    searched_position_count: usize,
}

impl Searcher<StdRng> {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for Searcher<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Searcher<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            searched_position_count: 0,
        }
    }

    /// Number of nodes visited by the most recent search.
    pub fn searched_position_count(&self) -> usize {
        self.searched_position_count
    }

    /// Picks a move for `side`, or `None` when it has no legal move (the game
    /// is over; this is not an error).
    pub fn choose_move(
        &mut self,
        position: &Position,
        side: Color,
        difficulty: Difficulty,
    ) -> Option<ChessMove> {
        self.choose_move_at_depth(position, side, difficulty.search_depth())
    }

    /// Like `choose_move`, with the number of plies searched below each root
    /// move given directly. Depth 0 scores each root move by evaluating the
    /// position it leads to.
    pub fn choose_move_at_depth(
        &mut self,
        position: &Position,
        side: Color,
        depth: u8,
    ) -> Option<ChessMove> {
        self.searched_position_count = 0;

        let mut candidates = move_generator::legal_moves(position, side);
        if candidates.is_empty() {
            return None;
        }
        candidates.shuffle(&mut self.rng);

        let mut best_move = candidates[0];
        let mut best_score = f64::NEG_INFINITY;

        for &chess_move in candidates.iter() {
            let score = self.score_root_move(position, chess_move, side, depth);
            debug!("{} {} scored {:.3}", side, chess_move, score);

            if score > best_score + TIE_EPSILON {
                best_score = score;
                best_move = chess_move;
            } else if (score - best_score).abs() <= TIE_EPSILON && self.rng.gen_bool(0.5) {
                best_move = chess_move;
            }
        }

        debug!(
            "{} chose {} (score {:.3}, depth {}, {} positions searched)",
            side, best_move, best_score, depth, self.searched_position_count
        );
        Some(best_move)
    }

    /// Exact minimax value of playing `chess_move`, seen from `side`.
    pub fn score_root_move(
        &mut self,
        position: &Position,
        chess_move: ChessMove,
        side: Color,
        depth: u8,
    ) -> f64 {
        let mut child = position.clone();
        child.apply_move(chess_move);
        self.alpha_beta(
            &child,
            depth,
            f64::NEG_INFINITY,
            f64::INFINITY,
            side.opposite(),
            side,
        )
    }

    /// `remaining` counts the plies still to expand below `position`; at zero
    /// the position is evaluated. A side with no legal move is either mated
    /// (an infinite score for the winner) or stalemated (a draw, 0).
    fn alpha_beta(
        &mut self,
        position: &Position,
        remaining: u8,
        mut alpha: f64,
        mut beta: f64,
        turn: Color,
        perspective: Color,
    ) -> f64 {
        self.searched_position_count += 1;

        if remaining == 0 {
            return evaluate::score(position, perspective);
        }

        let mut candidates = move_generator::legal_moves(position, turn);
        if candidates.is_empty() {
            if position.is_king_in_check(turn) {
                return if turn == perspective {
                    f64::NEG_INFINITY
                } else {
                    f64::INFINITY
                };
            }
            return 0.0;
        }
        candidates.shuffle(&mut self.rng);

        if turn == perspective {
            let mut value = f64::NEG_INFINITY;
            for &chess_move in candidates.iter() {
                let mut child = position.clone();
                child.apply_move(chess_move);
                let score =
                    self.alpha_beta(&child, remaining - 1, alpha, beta, turn.opposite(), perspective);
                value = value.max(score);
                alpha = alpha.max(value);
                if alpha >= beta {
                    break;
                }
            }
            value
        } else {
            let mut value = f64::INFINITY;
            for &chess_move in candidates.iter() {
                let mut child = position.clone();
                child.apply_move(chess_move);
                let score =
                    self.alpha_beta(&child, remaining - 1, alpha, beta, turn.opposite(), perspective);
                value = value.min(score);
                beta = beta.min(value);
                if beta <= alpha {
                    break;
                }
            }
            value
        }
    }
}
