use crate::error::{Result, VersionCheckError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of upgrade between a current and a latest version.
///
/// "No upgrade" is not a variant; comparisons return `Option<ChangeKind>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Major,
    Minor,
    Patch,
    Premajor,
    Preminor,
    Prepatch,
    Prerelease,
}

impl ChangeKind {
    pub const ALL: [ChangeKind; 7] = [
        ChangeKind::Major,
        ChangeKind::Minor,
        ChangeKind::Patch,
        ChangeKind::Premajor,
        ChangeKind::Preminor,
        ChangeKind::Prepatch,
        ChangeKind::Prerelease,
    ];

    /// The `pre-` form of a numeric kind. Already prerelease-qualified kinds
    /// are returned unchanged.
    pub fn to_prerelease(self) -> Self {
        match self {
            ChangeKind::Major => ChangeKind::Premajor,
            ChangeKind::Minor => ChangeKind::Preminor,
            ChangeKind::Patch => ChangeKind::Prepatch,
            other => other,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ChangeKind::Major => "major",
            ChangeKind::Minor => "minor",
            ChangeKind::Patch => "patch",
            ChangeKind::Premajor => "premajor",
            ChangeKind::Preminor => "preminor",
            ChangeKind::Prepatch => "prepatch",
            ChangeKind::Prerelease => "prerelease",
        }
    }
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChangeKind {
    type Err = VersionCheckError;

    fn from_str(s: &str) -> Result<Self> {
        ChangeKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| VersionCheckError::config(format!("Unknown change kind: '{}'", s)))
    }
}
