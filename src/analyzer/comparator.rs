use crate::boundary::{NoUpgrade, VersionRole};
use crate::config::BehaviorConfig;
use crate::domain::{ChangeKind, ParsedVersion};
use crate::error::Result;
use log::{debug, info};

/// Compares a current version against a latest version and classifies the upgrade
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VersionComparator {
    ignore_prereleases: bool,
}

impl VersionComparator {
    /// Create a comparator with default behavior
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a comparator from the `[behavior]` section of the configuration
    pub fn from_config(config: &BehaviorConfig) -> Self {
        VersionComparator {
            ignore_prereleases: config.ignore_prereleases,
        }
    }

    /// Suppress upgrades whose latest version is itself a prerelease
    pub fn ignore_prereleases(mut self, ignore: bool) -> Self {
        self.ignore_prereleases = ignore;
        self
    }

    /// Parse a single version string
    pub fn parse(&self, raw: &str) -> Result<ParsedVersion> {
        Ok(ParsedVersion::parse(raw)?)
    }

    /// Classify the upgrade from `current` to `latest`.
    ///
    /// Returns `None` when either version is missing or malformed, or when
    /// `latest` does not strictly outrank `current`. Never fails.
    pub fn detect_change(&self, current: Option<&str>, latest: Option<&str>) -> Option<ChangeKind> {
        match self.assess(current, latest) {
            Ok(kind) => Some(kind),
            Err(reason) => {
                debug!("No upgrade reported: {}", reason);
                None
            }
        }
    }

    /// Like [`detect_change`](Self::detect_change) but explains why no change
    /// kind was produced.
    pub fn assess(
        &self,
        current: Option<&str>,
        latest: Option<&str>,
    ) -> std::result::Result<ChangeKind, NoUpgrade> {
        let (current_raw, latest_raw) = match (current, latest) {
            (None, _) => {
                return Err(NoUpgrade::MissingVersion {
                    role: VersionRole::Current,
                })
            }
            (_, None) => {
                return Err(NoUpgrade::MissingVersion {
                    role: VersionRole::Latest,
                })
            }
            (Some(c), Some(l)) => (c, l),
        };

        let current = parse_role(VersionRole::Current, current_raw)?;
        let latest = parse_role(VersionRole::Latest, latest_raw)?;

        // No differing field means the versions are equal
        let Some(kind) = classify_difference(&current, &latest) else {
            return Err(NoUpgrade::UpToDate {
                version: current.to_string(),
            });
        };

        if latest < current {
            return Err(NoUpgrade::Downgrade {
                current: current.to_string(),
                latest: latest.to_string(),
            });
        }

        if self.ignore_prereleases && latest.is_prerelease() {
            return Err(NoUpgrade::PrereleaseIgnored {
                latest: latest.to_string(),
            });
        }

        info!("Upgrade available: {} -> {} ({})", current, latest, kind);
        Ok(kind)
    }

    /// Strict variant of [`detect_change`](Self::detect_change) for callers
    /// that want malformed input reported as an error.
    pub fn try_detect_change(&self, current: &str, latest: &str) -> Result<Option<ChangeKind>> {
        let current = self.parse(current)?;
        let latest = self.parse(latest)?;
        Ok(self.classify(&current, &latest))
    }

    /// Classify two already-parsed versions. `None` unless `latest > current`.
    pub fn classify(&self, current: &ParsedVersion, latest: &ParsedVersion) -> Option<ChangeKind> {
        if latest <= current {
            return None;
        }
        if self.ignore_prereleases && latest.is_prerelease() {
            return None;
        }
        classify_difference(current, latest)
    }
}

fn parse_role(role: VersionRole, raw: &str) -> std::result::Result<ParsedVersion, NoUpgrade> {
    ParsedVersion::parse(raw).map_err(|e| NoUpgrade::UnparsableVersion {
        role,
        input: raw.to_string(),
        reason: e.to_string(),
    })
}

/// Highest-precedence difference between two versions, checked in the order
/// major, minor, patch, prerelease. Does not look at ordering.
fn classify_difference(current: &ParsedVersion, latest: &ParsedVersion) -> Option<ChangeKind> {
    let prerelease_involved = current.is_prerelease() || latest.is_prerelease();
    let refine = |kind: ChangeKind| {
        if prerelease_involved {
            kind.to_prerelease()
        } else {
            kind
        }
    };

    if current.major != latest.major {
        return Some(refine(ChangeKind::Major));
    }
    if current.minor != latest.minor {
        return Some(refine(ChangeKind::Minor));
    }
    if current.patch != latest.patch {
        return Some(refine(ChangeKind::Patch));
    }
    if current.prerelease != latest.prerelease {
        return Some(ChangeKind::Prerelease);
    }
    None
}

/// Classify the upgrade from `current` to `latest` with default behavior.
///
/// ```
/// use version_check::{detect_change, ChangeKind};
///
/// assert_eq!(detect_change(Some("1.2.2"), Some("1.2.3-alpha")), Some(ChangeKind::Prepatch));
/// assert_eq!(detect_change(Some("1.2.4"), Some("1.2.3-alpha")), None);
/// assert_eq!(detect_change(None, Some("1.0.0")), None);
/// ```
pub fn detect_change(current: Option<&str>, latest: Option<&str>) -> Option<ChangeKind> {
    VersionComparator::default().detect_change(current, latest)
}
