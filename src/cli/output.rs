//! CLI output: error mapping and result presentation.

use crate::error::ScanError;
use crate::scan::{ScanReport, StatusReport, ValidateReport};
use owo_colors::OwoColorize;

/// Map domain errors to a string for CLI output.
pub fn map_error(e: &ScanError) -> String {
    format!("{} {}", "error:".red().bold(), e)
}

pub fn format_scan_report(report: &ScanReport) -> String {
    let heading = if report.dry_run {
        format!("{} (manifest not written)", "Dry run complete".yellow())
    } else {
        format!("{}", "Scan complete".green())
    };
    format!(
        "{}:\n  Output: {}\n  Directories: {}\n  Files: {}\n  Total size: {} bytes\n  Duration: {} ms",
        heading,
        report.output.display(),
        report.summary.directories,
        report.summary.files,
        report.summary.total_bytes,
        report.duration_ms
    )
}

pub fn format_status_report(report: &StatusReport, format: &str) -> Result<String, ScanError> {
    if format == "json" {
        return serde_json::to_string_pretty(report).map_err(ScanError::from);
    }

    if !report.exists {
        return Ok(format!(
            "No manifest at {}. Run `canopy scan` to create it.",
            report.output.display()
        ));
    }

    let mut s = format!("Manifest: {}", report.output.display());
    if let Some(summary) = &report.summary {
        s.push_str(&format!(
            "\n  Directories: {}\n  Files: {}\n  Total size: {} bytes",
            summary.directories, summary.files, summary.total_bytes
        ));
    }
    if let Some(written) = report.written {
        s.push_str(&format!("\n  Written: {}", written.to_rfc3339()));
    }
    Ok(s)
}

pub fn format_validate_report(report: &ValidateReport, format: &str) -> Result<String, ScanError> {
    if format == "json" {
        return serde_json::to_string_pretty(report).map_err(ScanError::from);
    }

    Ok(format!(
        "{}:\n  Manifest: {}\n  Directories: {}\n  Files: {}\n  Manifest is current",
        "Validation passed".green(),
        report.output.display(),
        report.summary.directories,
        report.summary.files
    ))
}
