pub mod chess_move;
pub mod evaluate;
pub mod game;
pub mod move_generator;
pub mod position;
pub mod prelude;
pub mod searcher;
