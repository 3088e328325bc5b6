//! CLI entry point for the dungeon layout generator

use clap::Parser;
use roomweave::io::cli::{Cli, run};

fn main() -> roomweave::Result<()> {
    let cli = Cli::parse();
    run(&cli)
}
