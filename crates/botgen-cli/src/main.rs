//! botgen command-line entry point.
//!
//! Binary name: `botgen`
//!
//! ```text
//! botgen generate bot.json -o bot.py     # request JSON → Python program
//! botgen generate old.json --legacy      # flat config from older builders
//! botgen catalog --json                  # supported block types
//! botgen check bot.py                    # inspect a generated program
//! ```

mod cli;

use clap::Parser;

use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli::logging::init(cli.verbose, cli.quiet);

    match &cli.command {
        Commands::Generate(args) => cli::generate::generate(args, cli.json, cli.quiet)?,
        Commands::Catalog => cli::catalog::catalog(cli.json)?,
        Commands::Check { file } => cli::check::check(file, cli.json)?,
    }

    Ok(())
}
