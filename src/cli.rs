//! CLI domain: parse, route, help, and output only.
//! No domain orchestration; the single route table dispatches to the scan
//! service.

mod help;
mod output;
mod parse;
mod route;

pub use help::command_name;
pub use output::{format_scan_report, format_status_report, format_validate_report, map_error};
pub use parse::{Cli, Commands};
pub use route::RunContext;
