use std::fmt;

/// Which side of a comparison a version string came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionRole {
    Current,
    Latest,
}

impl fmt::Display for VersionRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionRole::Current => f.write_str("current"),
            VersionRole::Latest => f.write_str("latest"),
        }
    }
}

/// Reasons a comparison reports no upgrade.
/// None of these are fatal; callers that only want the change kind can
/// collapse all of them into `None`.
#[derive(Debug, Clone, PartialEq)]
pub enum NoUpgrade {
    /// One of the versions was not supplied
    MissingVersion { role: VersionRole },
    /// A version string exists but cannot be parsed
    UnparsableVersion {
        role: VersionRole,
        input: String,
        reason: String,
    },
    /// Both versions are the same
    UpToDate { version: String },
    /// The latest version is older than the current one
    Downgrade { current: String, latest: String },
    /// An upgrade exists but prerelease upgrades are ignored
    PrereleaseIgnored { latest: String },
}

impl NoUpgrade {
    /// Whether this outcome stems from bad input rather than a real comparison
    pub fn is_error(&self) -> bool {
        matches!(self, NoUpgrade::UnparsableVersion { .. })
    }
}

impl fmt::Display for NoUpgrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoUpgrade::MissingVersion { role } => {
                write!(f, "No {} version supplied", role)
            }
            NoUpgrade::UnparsableVersion {
                role,
                input,
                reason,
            } => {
                write!(f, "Cannot parse {} version '{}': {}", role, input, reason)
            }
            NoUpgrade::UpToDate { version } => {
                write!(f, "Already up to date ({})", version)
            }
            NoUpgrade::Downgrade { current, latest } => {
                write!(
                    f,
                    "Latest version {} is older than current version {}",
                    latest, current
                )
            }
            NoUpgrade::PrereleaseIgnored { latest } => {
                write!(f, "Ignoring prerelease upgrade to {}", latest)
            }
        }
    }
}
