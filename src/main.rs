//! histclean - CLI entry point

mod commands;

use anyhow::Result;
use clap::Parser;

use histclean::cli::{Cli, Commands, ConfigCommands, RulesCommands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    histclean::logging::init(cli.verbose);

    match cli.command {
        Commands::Clean(args) => commands::clean::handle(&args),
        Commands::Rules(cmd) => match cmd {
            RulesCommands::Init { path, force } => commands::rules::handle_init(&path, force),
            RulesCommands::Check { rules } => commands::rules::handle_check(rules.as_deref()),
        },
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(),
            ConfigCommands::Init { force } => commands::config::handle_init(force),
        },
        Commands::Completions { shell } => commands::completions::handle::<Cli>(shell),
    }
}
