//! Command dispatch, kept out of the binary so tests can drive it.

use super::args::{CheckArgs, Commands};
use super::handlers;
use crate::exit::BrandcheckExit;
use anyhow::Result;

/// Executes the parsed command.
///
/// # Errors
/// Returns error if the command handler fails.
pub fn execute(command: Commands, verbose: bool) -> Result<BrandcheckExit> {
    match command {
        Commands::Check {
            guidelines,
            designs,
            logo_width,
            clear_space,
            margins,
            stride,
            json,
            export,
        } => {
            let args = CheckArgs {
                guidelines,
                designs,
                logo_width,
                clear_space,
                margins,
                stride,
                json,
                export,
            };
            handlers::handle_check(&args, verbose)
        }
        Commands::Palette {
            design,
            top,
            guidelines,
            json,
        } => handlers::handle_palette(&design, top, guidelines.as_deref(), json),
        Commands::Rules { guidelines, json } => handlers::handle_rules(&guidelines, json),
        Commands::Tools => Ok(handlers::handle_tools()),
        Commands::Sync {
            tool,
            guidelines,
            token,
            document,
            json,
        } => handlers::handle_sync(tool, &guidelines, &token, document.as_deref(), json),
        Commands::Init { dir, force } => handlers::handle_init(&dir, force),
    }
}
