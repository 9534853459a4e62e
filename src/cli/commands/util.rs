//! Shared utilities for CLI commands.

use chess_ai::chess_move::ChessMove;
use chess_ai::game::engine::{Engine, EngineConfig, EngineError};
use chess_ai::position::error::ParseError;
use chess_ai::position::Position;
use chess_ai::searcher::Difficulty;
use thiserror::Error;

#[derive(Error, Debug)]
pub(crate) enum ReplayError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("move {number} ({chess_move}): {source}")]
    Rejected {
        number: usize,
        chess_move: ChessMove,
        source: EngineError,
    },
}

pub(crate) fn create_engine(difficulty: Difficulty, seed: Option<u64>) -> Engine {
    Engine::with_config(EngineConfig {
        difficulty,
        seed,
        starting_position: Position::starting_position(),
    })
}

/// Plays whitespace-separated coordinate moves (`e2e4 e7e5 ...`) into `engine`.
pub(crate) fn replay_moves(engine: &mut Engine, moves: &str) -> Result<(), ReplayError> {
    for (index, token) in moves.split_whitespace().enumerate() {
        let chess_move: ChessMove = token.parse()?;
        engine
            .make_move(chess_move)
            .map_err(|source| ReplayError::Rejected {
                number: index + 1,
                chess_move,
                source,
            })?;
    }
    Ok(())
}
