//! Watch command - watch the computer play against itself.

use chess_ai::searcher::Difficulty;
use structopt::StructOpt;

use super::util::create_engine;
use super::Command;

#[derive(StructOpt)]
pub struct WatchArgs {
    #[structopt(short, long, default_value = "medium")]
    pub difficulty: Difficulty,
    #[structopt(long, help = "Seed for reproducible games")]
    pub seed: Option<u64>,
    #[structopt(
        long = "max-moves",
        default_value = "200",
        help = "Stop after this many half-moves"
    )]
    pub max_moves: usize,
}

impl Command for WatchArgs {
    fn execute(self) {
        let mut engine = create_engine(self.difficulty, self.seed);
        println!("{}", engine.position());

        while !engine.status().is_over() && engine.history().len() < self.max_moves {
            let side = engine.turn();
            match engine.make_best_move() {
                Ok(chess_move) => {
                    println!(
                        "{}. {} plays {} ({} positions searched)",
                        engine.history().len(),
                        side,
                        chess_move,
                        engine.searched_position_count()
                    );
                    println!("{}", engine.position());
                }
                Err(err) => {
                    eprintln!("Failed to make a move: {}", err);
                    std::process::exit(1);
                }
            }
        }

        println!("{}", engine.status());
    }
}
