//! Version comparison and upgrade classification

pub mod comparator;

pub use comparator::{detect_change, VersionComparator};
