use crate::error::ParseError;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Semantic version as read from a version string.
///
/// Holds the numeric `MAJOR.MINOR.PATCH` triple and an optional prerelease
/// identifier kept verbatim. A leading `v`/`V` in the source is dropped.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParsedVersion {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub prerelease: Option<String>,
}

impl ParsedVersion {
    /// Create a release version (no prerelease identifier)
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        ParsedVersion {
            major,
            minor,
            patch,
            prerelease: None,
        }
    }

    /// Attach a prerelease identifier to this version
    pub fn with_prerelease(mut self, prerelease: impl Into<String>) -> Self {
        self.prerelease = Some(prerelease.into());
        self
    }

    /// Parse a version string (e.g., "v1.2.3" or "1.2.3-alpha").
    ///
    /// Accepted shape is `[v|V]MAJOR.MINOR.PATCH[-PRERELEASE]`. Everything after
    /// the first `-` is the prerelease identifier, taken as-is. Each numeric
    /// component must consist of ASCII digits only.
    ///
    /// # Errors
    /// Returns a [`ParseError`] for empty input, a component count other than
    /// three, a non-numeric component, or an empty prerelease tail.
    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        if raw.is_empty() {
            return Err(ParseError::Empty);
        }

        let unprefixed = raw
            .strip_prefix('v')
            .or_else(|| raw.strip_prefix('V'))
            .unwrap_or(raw);

        let (core, prerelease) = match unprefixed.split_once('-') {
            Some((_, "")) => {
                return Err(ParseError::EmptyPrerelease {
                    input: raw.to_string(),
                })
            }
            Some((core, tail)) => (core, Some(tail.to_string())),
            None => (unprefixed, None),
        };

        let parts: Vec<&str> = core.split('.').collect();
        if parts.len() != 3 {
            return Err(ParseError::ComponentCount {
                input: raw.to_string(),
                found: parts.len(),
            });
        }

        Ok(ParsedVersion {
            major: parse_component("major", parts[0])?,
            minor: parse_component("minor", parts[1])?,
            patch: parse_component("patch", parts[2])?,
            prerelease,
        })
    }

    /// Whether this version carries a prerelease identifier
    pub fn is_prerelease(&self) -> bool {
        self.prerelease.is_some()
    }
}

fn parse_component(field: &'static str, value: &str) -> Result<u64, ParseError> {
    let invalid = || ParseError::InvalidComponent {
        field,
        value: value.to_string(),
    };

    // `u64::from_str` accepts a leading '+', so check the digits first
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    value.parse::<u64>().map_err(|_| invalid())
}

/// Order two prerelease identifiers.
///
/// Identifiers that are valid semver prereleases use semver precedence so that
/// `rc.2 < rc.10`. All other identifiers sort after every valid one, in plain
/// string order among themselves, which keeps the ordering transitive.
fn compare_prerelease(a: &str, b: &str) -> Ordering {
    match (semver::Prerelease::new(a), semver::Prerelease::new(b)) {
        (Ok(pa), Ok(pb)) => pa.cmp(&pb).then_with(|| a.cmp(b)),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}

impl Ord for ParsedVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.major
            .cmp(&other.major)
            .then_with(|| self.minor.cmp(&other.minor))
            .then_with(|| self.patch.cmp(&other.patch))
            .then_with(|| match (&self.prerelease, &other.prerelease) {
                (None, None) => Ordering::Equal,
                // A release outranks its own prereleases
                (None, Some(_)) => Ordering::Greater,
                (Some(_), None) => Ordering::Less,
                (Some(a), Some(b)) => compare_prerelease(a, b),
            })
    }
}

impl PartialOrd for ParsedVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl FromStr for ParsedVersion {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ParsedVersion::parse(s)
    }
}

impl fmt::Display for ParsedVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(pre) = &self.prerelease {
            write!(f, "-{}", pre)?;
        }
        Ok(())
    }
}
