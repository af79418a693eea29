//! User interface module - report rendering and formatting.
//!
//! - `formatter` - Pure formatting functions
//! - This module - Rendering a whole check report

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{
    display_error, display_no_upgrade, display_status, display_success, display_upgrade,
    format_upgrade,
};

use crate::cli::orchestration::CheckReport;

/// Single-word form of a report for scripting: the change kind or `none`.
pub fn quiet_line(report: &CheckReport) -> String {
    report
        .kind()
        .map(|kind| kind.to_string())
        .unwrap_or_else(|| "none".to_string())
}

/// Print a check report.
///
/// # Arguments
/// * `report` - Outcome of the check workflow
/// * `quiet` - Print only the change kind (or `none`)
pub fn display_report(report: &CheckReport, quiet: bool) {
    if quiet {
        println!("{}", quiet_line(report));
        return;
    }

    match report {
        CheckReport::Upgrade {
            current,
            latest,
            kind,
            urgency,
        } => display_upgrade(current, latest, *kind, *urgency),
        CheckReport::NoUpgrade(reason) => display_no_upgrade(reason),
    }
}
