mod cli;

use structopt::StructOpt;

use cli::commands::Command;
use cli::Chess;

fn main() {
    env_logger::init();
    Chess::from_args().execute();
}
