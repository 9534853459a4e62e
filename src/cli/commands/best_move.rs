//! Best move command - determine the computer's move after a line of play.

use chess_ai::searcher::Difficulty;
use structopt::StructOpt;

use super::util::{create_engine, replay_moves};
use super::Command;

#[derive(StructOpt)]
pub struct BestMoveArgs {
    #[structopt(
        long,
        default_value = "",
        help = "Coordinate moves from the starting position, e.g. \"e2e4 e7e5\""
    )]
    pub moves: String,
    #[structopt(short, long, default_value = "medium")]
    pub difficulty: Difficulty,
    #[structopt(long)]
    pub seed: Option<u64>,
}

impl Command for BestMoveArgs {
    fn execute(self) {
        let mut engine = create_engine(self.difficulty, self.seed);
        if let Err(err) = replay_moves(&mut engine, &self.moves) {
            eprintln!("Invalid move list: {}", err);
            std::process::exit(1);
        }

        match engine.best_move() {
            Ok(best_move) => println!("{}", best_move),
            Err(err) => eprintln!("No move to suggest ({}): {}", engine.status(), err),
        }
    }
}
