//! Check workflow orchestration logic
//!
//! Keeps the comparison workflow apart from CLI argument parsing so it can be
//! driven programmatically without depending on clap.

use anyhow::{bail, Result};

use crate::analyzer::VersionComparator;
use crate::boundary::NoUpgrade;
use crate::config::{Config, Urgency};
use crate::domain::ChangeKind;

/// Arguments for the check workflow
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CheckArgs {
    /// Version currently running
    pub current: Option<String>,

    /// Latest known version
    pub latest: Option<String>,

    /// Fail on malformed versions instead of reporting no upgrade
    pub strict: bool,
}

/// Result of a completed check
#[derive(Debug, Clone, PartialEq)]
pub enum CheckReport {
    /// `latest` is an upgrade over `current`
    Upgrade {
        current: String,
        latest: String,
        kind: ChangeKind,
        urgency: Urgency,
    },
    /// No upgrade to report
    NoUpgrade(NoUpgrade),
}

impl CheckReport {
    /// The change kind, if an upgrade was found
    pub fn kind(&self) -> Option<ChangeKind> {
        match self {
            CheckReport::Upgrade { kind, .. } => Some(*kind),
            CheckReport::NoUpgrade(_) => None,
        }
    }
}

/// Main check workflow
///
/// 1. Build the comparator from the `[behavior]` configuration
/// 2. Assess the two versions
/// 3. Attach the configured urgency to an upgrade
///
/// Strict mode, from `args` or the configuration, turns an unparsable version
/// into an error.
pub fn run_check(args: CheckArgs, config: &Config) -> Result<CheckReport> {
    let comparator = VersionComparator::from_config(&config.behavior);
    let strict = args.strict || config.behavior.strict;

    match comparator.assess(args.current.as_deref(), args.latest.as_deref()) {
        Ok(kind) => Ok(CheckReport::Upgrade {
            current: args.current.unwrap_or_default(),
            latest: args.latest.unwrap_or_default(),
            kind,
            urgency: config.urgency_for(kind),
        }),
        Err(reason) if strict && reason.is_error() => bail!("{}", reason),
        Err(reason) => Ok(CheckReport::NoUpgrade(reason)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boundary::VersionRole;

    fn args(current: &str, latest: &str) -> CheckArgs {
        CheckArgs {
            current: Some(current.to_string()),
            latest: Some(latest.to_string()),
            strict: false,
        }
    }

    #[test]
    fn test_upgrade_report_carries_urgency() {
        let report = run_check(args("1.0.0", "2.0.0"), &Config::default()).unwrap();
        assert_eq!(
            report,
            CheckReport::Upgrade {
                current: "1.0.0".to_string(),
                latest: "2.0.0".to_string(),
                kind: ChangeKind::Major,
                urgency: Urgency::Urgent,
            }
        );
    }

    #[test]
    fn test_missing_latest() {
        let check = CheckArgs {
            current: Some("1.0.0".to_string()),
            ..CheckArgs::default()
        };
        let report = run_check(check, &Config::default()).unwrap();
        assert_eq!(
            report,
            CheckReport::NoUpgrade(NoUpgrade::MissingVersion {
                role: VersionRole::Latest
            })
        );
        assert_eq!(report.kind(), None);
    }

    #[test]
    fn test_strict_rejects_malformed() {
        let mut check = args("1.0", "1.0.1");
        assert!(run_check(check.clone(), &Config::default()).is_ok());

        check.strict = true;
        let err = run_check(check, &Config::default()).unwrap_err();
        assert!(err.to_string().contains("Cannot parse current version '1.0'"));
    }

    #[test]
    fn test_strict_from_config() {
        let mut config = Config::default();
        config.behavior.strict = true;
        assert!(run_check(args("1.0.0", "one"), &config).is_err());
        // Downgrades are not errors even in strict mode
        assert!(run_check(args("2.0.0", "1.0.0"), &config).is_ok());
    }
}
