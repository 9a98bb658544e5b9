mod cli;
mod commands;

use clap::Parser;

use cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();

    let status = match cli.command {
        Command::Canon { symbols } => commands::canon(&symbols),
        Command::Demangle { symbols } => commands::demangle(&symbols),
    };
    std::process::exit(status);
}
