use std::fmt;

use log::{debug, info};
use thiserror::Error;

use crate::chess_move::ChessMove;
use crate::evaluate::{self, GameEnding};
use crate::move_generator::{self, ChessMoveList};
use crate::position::color::Color;
use crate::position::Position;
use crate::searcher::{Difficulty, Searcher};

/// How a game session is set up. The side to move is always White at the
/// start.
#[derive(Clone, Debug)]
pub struct EngineConfig {
    pub difficulty: Difficulty,
    /// Seed for the searcher's random tie-breaking; `None` seeds from entropy.
    pub seed: Option<u64>,
    pub starting_position: Position,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            seed: None,
            starting_position: Position::starting_position(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress { check: bool },
    Checkmate { winner: Color },
    Stalemate,
    InsufficientMaterial,
    Resigned { winner: Color },
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress { .. })
    }

    pub fn winner(&self) -> Option<Color> {
        match self {
            GameStatus::Checkmate { winner } | GameStatus::Resigned { winner } => Some(*winner),
            _ => None,
        }
    }

    /// Status of `position` with `turn` to move.
    fn classify(position: &Position, turn: Color) -> Self {
        match evaluate::game_ending(position, turn) {
            Some(GameEnding::Checkmate { winner }) => GameStatus::Checkmate { winner },
            Some(GameEnding::Stalemate) => GameStatus::Stalemate,
            Some(GameEnding::InsufficientMaterial) => GameStatus::InsufficientMaterial,
            None => GameStatus::InProgress {
                check: position.is_king_in_check(turn),
            },
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GameStatus::InProgress { check: true } => write!(f, "in progress, check"),
            GameStatus::InProgress { check: false } => write!(f, "in progress"),
            GameStatus::Checkmate { winner } => write!(f, "checkmate, {} wins", winner),
            GameStatus::Stalemate => write!(f, "draw by stalemate"),
            GameStatus::InsufficientMaterial => write!(f, "draw by insufficient material"),
            GameStatus::Resigned { winner } => {
                write!(f, "{} resigned, {} wins", winner.opposite(), winner)
            }
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum EngineError {
    #[error("{chess_move} is not a legal move in this position")]
    IllegalMove { chess_move: ChessMove },
    #[error("the game is already over")]
    GameOver,
}

/// A game in progress: the authoritative position, whose turn it is, what
/// has been played and how strongly the computer plays.
pub struct Engine {
    position: Position,
    turn: Color,
    history: Vec<ChessMove>,
    status: GameStatus,
    difficulty: Difficulty,
    searcher: Searcher,
}

impl Default for Engine {
    fn default() -> Self {
        Self::with_config(EngineConfig::default())
    }
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Self {
        let searcher = match config.seed {
            Some(seed) => Searcher::seeded(seed),
            None => Searcher::new(),
        };
        let turn = Color::White;
        let status = GameStatus::classify(&config.starting_position, turn);

        Self {
            position: config.starting_position,
            turn,
            history: Vec::new(),
            status,
            difficulty: config.difficulty,
            searcher,
        }
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    pub fn history(&self) -> &[ChessMove] {
        &self.history
    }

    pub fn last_move(&self) -> Option<ChessMove> {
        self.history.last().copied()
    }

    /// Positions visited by the most recent search.
    pub fn searched_position_count(&self) -> usize {
        self.searcher.searched_position_count()
    }

    /// Legal moves for the side to move; empty once the game is over.
    pub fn legal_moves(&self) -> ChessMoveList {
        if self.status.is_over() {
            return ChessMoveList::new();
        }
        move_generator::legal_moves(&self.position, self.turn)
    }

    pub fn make_move(&mut self, chess_move: ChessMove) -> Result<GameStatus, EngineError> {
        if self.status.is_over() {
            return Err(EngineError::GameOver);
        }
        if !move_generator::is_legal(&self.position, self.turn, chess_move) {
            return Err(EngineError::IllegalMove { chess_move });
        }

        self.position.apply_move(chess_move);
        self.history.push(chess_move);
        debug!("{} played {}", self.turn, chess_move);

        self.turn = self.turn.opposite();
        self.status = GameStatus::classify(&self.position, self.turn);
        if self.status.is_over() {
            info!("game over after {} moves: {}", self.history.len(), self.status);
        }
        Ok(self.status)
    }

    /// The move the computer would play for the side to move.
    pub fn best_move(&mut self) -> Result<ChessMove, EngineError> {
        if self.status.is_over() {
            return Err(EngineError::GameOver);
        }
        // an in-progress status guarantees a legal move
        self.searcher
            .choose_move(&self.position, self.turn, self.difficulty)
            .ok_or(EngineError::GameOver)
    }

    pub fn make_best_move(&mut self) -> Result<ChessMove, EngineError> {
        let best_move = self.best_move()?;
        self.make_move(best_move)?;
        Ok(best_move)
    }

    /// The side to move gives up.
    pub fn resign(&mut self) -> Result<GameStatus, EngineError> {
        if self.status.is_over() {
            return Err(EngineError::GameOver);
        }
        self.status = GameStatus::Resigned {
            winner: self.turn.opposite(),
        };
        info!("{}", self.status);
        Ok(self.status)
    }
}
