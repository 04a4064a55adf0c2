use clap::Parser;

use pixveil::{
    cli::{Cli, Commands},
    handler::{handle_hide, handle_recover},
};

/// Main entry point of the program
///
/// Parses the command-line arguments and dispatches execution to the
/// matching handler for the given subcommand (`hide` or `recover`)
fn main() -> anyhow::Result<()> {
    // Parse the command-line arguments
    let cli = Cli::parse();

    // Dispatch to the matching handler
    match cli.command {
        Commands::Hide(args) => handle_hide(args),
        Commands::Recover(args) => handle_recover(args),
    }
}
