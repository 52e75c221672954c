//! CLI help: stable command names for logs and summaries.

use crate::cli::parse::Commands;

/// Stable command name for logging.
pub fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Scan { .. } => "scan",
        Commands::Status { .. } => "status",
        Commands::Validate { .. } => "validate",
    }
}
