use crate::domain::ChangeKind;
use crate::error::Result;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Default configuration file name.
pub const DEFAULT_CONFIG_NAME: &str = "versioncheck.toml";

/// Environment variable overriding the configuration file name.
pub const CONFIG_NAME_ENV: &str = "VERSION_CHECK_CONFIG_NAME";

/// Represents the complete configuration for version-check.
///
/// Contains comparator behavior and the mapping from change kinds to urgency.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub behavior: BehaviorConfig,

    #[serde(default)]
    pub notify: NotifyConfig,
}

/// Configuration for comparator behavior.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct BehaviorConfig {
    /// Do not report upgrades whose latest version is a prerelease
    #[serde(default)]
    pub ignore_prereleases: bool,

    /// Treat malformed version strings as hard errors on the command line
    #[serde(default)]
    pub strict: bool,
}

/// Returns the default change kinds that warrant an urgent notice.
fn default_urgent() -> Vec<ChangeKind> {
    vec![
        ChangeKind::Major,
        ChangeKind::Premajor,
        ChangeKind::Prerelease,
    ]
}

/// Returns the default change kinds that warrant a regular notice.
fn default_notice() -> Vec<ChangeKind> {
    vec![ChangeKind::Minor, ChangeKind::Preminor]
}

/// Maps change kinds to how loudly they should be surfaced.
///
/// Kinds listed in neither list are silent.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct NotifyConfig {
    #[serde(default = "default_urgent")]
    pub urgent: Vec<ChangeKind>,

    #[serde(default = "default_notice")]
    pub notice: Vec<ChangeKind>,
}

impl Default for NotifyConfig {
    fn default() -> Self {
        NotifyConfig {
            urgent: default_urgent(),
            notice: default_notice(),
        }
    }
}

/// How loudly an available upgrade should be surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Urgency {
    Silent,
    Notice,
    Urgent,
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Urgency::Silent => f.write_str("silent"),
            Urgency::Notice => f.write_str("notice"),
            Urgency::Urgent => f.write_str("urgent"),
        }
    }
}

impl Config {
    /// Urgency configured for a change kind. `urgent` wins over `notice`.
    pub fn urgency_for(&self, kind: ChangeKind) -> Urgency {
        if self.notify.urgent.contains(&kind) {
            Urgency::Urgent
        } else if self.notify.notice.contains(&kind) {
            Urgency::Notice
        } else {
            Urgency::Silent
        }
    }
}

/// Configuration file name, honoring `VERSION_CHECK_CONFIG_NAME`.
pub fn config_file_name() -> String {
    match std::env::var(CONFIG_NAME_ENV) {
        Ok(name) if !name.trim().is_empty() => name,
        _ => DEFAULT_CONFIG_NAME.to_string(),
    }
}

/// Locates the configuration file that [`load_config`] would read when no
/// explicit path is given.
pub fn find_config_file() -> Option<PathBuf> {
    let name = config_file_name();

    let local = Path::new(".").join(&name);
    if local.exists() {
        return Some(local);
    }

    let user = dirs::config_dir()?.join(format!(".{}", name));
    user.exists().then_some(user)
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `versioncheck.toml` in current directory
/// 3. `.versioncheck.toml` in user config directory
/// 4. Default configuration if no file found
///
/// The file name in steps 2 and 3 can be changed with the
/// `VERSION_CHECK_CONFIG_NAME` environment variable.
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let path = match config_path {
        Some(path) => PathBuf::from(path),
        None => match find_config_file() {
            Some(path) => path,
            None => {
                debug!("No configuration file found, using defaults");
                return Ok(Config::default());
            }
        },
    };

    debug!("Loading configuration from {}", path.display());
    let config_str = fs::read_to_string(&path)?;
    let config: Config = toml::from_str(&config_str)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_urgency() {
        let config = Config::default();
        assert_eq!(config.urgency_for(ChangeKind::Major), Urgency::Urgent);
        assert_eq!(config.urgency_for(ChangeKind::Premajor), Urgency::Urgent);
        assert_eq!(config.urgency_for(ChangeKind::Prerelease), Urgency::Urgent);
        assert_eq!(config.urgency_for(ChangeKind::Minor), Urgency::Notice);
        assert_eq!(config.urgency_for(ChangeKind::Preminor), Urgency::Notice);
        assert_eq!(config.urgency_for(ChangeKind::Patch), Urgency::Silent);
        assert_eq!(config.urgency_for(ChangeKind::Prepatch), Urgency::Silent);
    }

    #[test]
    fn test_urgent_wins_over_notice() {
        let mut config = Config::default();
        config.notify.notice.push(ChangeKind::Major);
        assert_eq!(config.urgency_for(ChangeKind::Major), Urgency::Urgent);
    }

    #[test]
    fn test_partial_sections_keep_defaults() {
        let config: Config = toml::from_str("[notify]\nurgent = [\"patch\"]\n").unwrap();
        assert_eq!(config.notify.urgent, vec![ChangeKind::Patch]);
        assert_eq!(config.notify.notice, default_notice());
        assert_eq!(config.behavior, BehaviorConfig::default());
    }

    #[test]
    fn test_urgency_ordering() {
        assert!(Urgency::Urgent > Urgency::Notice);
        assert!(Urgency::Notice > Urgency::Silent);
        assert_eq!(Urgency::Notice.to_string(), "notice");
    }
}
