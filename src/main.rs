//! CLI entry point for the rook polynomial solver

use clap::Parser;
use rookpoly::io::cli::{Cli, Runner};

fn main() -> rookpoly::Result<()> {
    let cli = Cli::parse();
    cli.init_logging();
    let runner = Runner::new(cli);
    runner.run(&mut std::io::stdout().lock())
}
