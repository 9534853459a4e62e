//! CLI argument parsing using StructOpt.

use structopt::StructOpt;

use crate::cli::commands::{best_move::BestMoveArgs, watch::WatchArgs};

#[derive(StructOpt)]
#[structopt(
    name = "chess",
    about = "A chess rules engine with an alpha-beta computer player ♛"
)]
pub enum Chess {
    #[structopt(
        name = "watch",
        about = "Watch the computer play against itself at the given `--difficulty` (default: medium). Pass `--seed` to replay the same game, and `--max-moves` to stop early."
    )]
    Watch(WatchArgs),
    #[structopt(
        name = "best-move",
        about = "Replay the coordinate moves given with `--moves` (e.g. \"e2e4 e7e5\") from the starting position, then print the move the computer would choose."
    )]
    BestMove(BestMoveArgs),
}

impl crate::cli::commands::Command for Chess {
    fn execute(self) {
        macro_rules! execute_command {
            ($($variant:ident($cmd:ident)),+ $(,)?) => {
                match self {
                    $(Self::$variant($cmd) => $cmd.execute(),)+
                }
            };
        }

        execute_command! {
            Watch(cmd),
            BestMove(cmd),
        }
    }
}
