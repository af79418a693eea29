//! Semantic version comparison for update notifications.
//!
//! [`detect_change`] tells whether a latest version is an upgrade over the
//! current one and what kind of upgrade it is.

pub mod analyzer;
pub mod boundary;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod ui;

pub use analyzer::{detect_change, VersionComparator};
pub use domain::{ChangeKind, ParsedVersion};
pub use error::{ParseError, Result, VersionCheckError};
