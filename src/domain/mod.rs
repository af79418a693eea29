//! Domain logic - pure version values independent of configuration and I/O

pub mod change;
pub mod version;

pub use change::ChangeKind;
pub use version::ParsedVersion;
