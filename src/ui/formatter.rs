//! Pure formatting functions for UI output.
//!
//! `format_*` functions build strings and are testable; `display_*` functions
//! print them.

use console::style;

use crate::boundary::NoUpgrade;
use crate::config::Urgency;
use crate::domain::ChangeKind;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Build the headline for an available upgrade, e.g.
/// `major upgrade available: 1.0.0 -> 2.0.0 (urgent)`.
pub fn format_upgrade(current: &str, latest: &str, kind: ChangeKind, urgency: Urgency) -> String {
    format!(
        "{} upgrade available: {} -> {} ({})",
        kind, current, latest, urgency
    )
}

/// Display an available upgrade, styled by urgency.
pub fn display_upgrade(current: &str, latest: &str, kind: ChangeKind, urgency: Urgency) {
    let message = format_upgrade(current, latest, kind, urgency);
    match urgency {
        Urgency::Urgent => println!("{} {}", style("!").red().bold(), style(message).bold()),
        Urgency::Notice => println!("{} {}", style("→").yellow(), message),
        Urgency::Silent => println!("{} {}", style("·").dim(), style(message).dim()),
    }
}

/// Display why no upgrade was reported.
///
/// Bad input goes to stderr as a warning. Being up to date is a success;
/// every other reason is a plain status line.
pub fn display_no_upgrade(reason: &NoUpgrade) {
    match reason {
        NoUpgrade::UnparsableVersion { .. } => {
            eprintln!("{} {}", style("⚠ WARNING:").yellow(), reason)
        }
        NoUpgrade::UpToDate { .. } => display_success(&reason.to_string()),
        _ => display_status(&reason.to_string()),
    }
}
