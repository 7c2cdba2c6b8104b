//! CLI entry point for hiding and revealing maze messages

use clap::Parser;
use stegmaze::io::cli::{Cli, CommandRunner};

fn main() -> stegmaze::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let mut runner = CommandRunner::new(cli);
    runner.run()
}
