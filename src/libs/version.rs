//! Product version triple and the vendor's comparison rule.
//!
//! Versions are read from two places: the Windows file-version resource of
//! the installed executable (three or four dotted fields) and the vendor's
//! update endpoint (three fields). Both are reduced to `major.minor.build`.
//!
//! The comparison used to decide whether to update is deliberately kept as
//! the component-wise disjunction the vendor tooling has always used:
//! a version is "greater" if *any* of its build, minor or major fields is
//! larger. This is not an ordering (it is neither antisymmetric nor
//! transitive), so `Version` does not implement `PartialOrd`.

use super::error::UpdateError;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub build: u32,
}

impl Version {
    pub fn new(major: u32, minor: u32, build: u32) -> Self {
        Self { major, minor, build }
    }

    /// Builds a version from three numeric strings.
    pub fn from_parts(major: &str, minor: &str, build: &str) -> Result<Self, UpdateError> {
        Ok(Self::new(parse_component(major)?, parse_component(minor)?, parse_component(build)?))
    }

    /// Parses the text of a file-version resource.
    ///
    /// `a.b.c` maps to major/minor/build directly. `a.b.c.d` maps to
    /// `a.b.d`: the third field is the revision and is dropped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use piriform_updater::libs::version::Version;
    ///
    /// assert_eq!(Version::parse_file_version("6.1.0.123").unwrap(), Version::new(6, 1, 123));
    /// assert_eq!(Version::parse_file_version("5.0.200").unwrap(), Version::new(5, 0, 200));
    /// ```
    pub fn parse_file_version(text: &str) -> Result<Self, UpdateError> {
        let parts: Vec<&str> = text.trim().split('.').collect();
        match parts.as_slice() {
            [major, minor, _revision, build] => Self::from_parts(major, minor, build),
            [major, minor, build] => Self::from_parts(major, minor, build),
            _ => Err(UpdateError::UnexpectedVersionSchema(parts.len())),
        }
    }

    /// True when any of build, minor or major is larger than in `other`.
    ///
    /// `1.0.0` is not greater than `2.0.0`, but `1.0.10` is greater than
    /// `2.0.5` because its build field is larger.
    pub fn greater_than(&self, other: &Version) -> bool {
        self.build > other.build || self.minor > other.minor || self.major > other.major
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.build)
    }
}

fn parse_component(value: &str) -> Result<u32, UpdateError> {
    let value = value.trim();
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(UpdateError::InvalidVersionComponent(value.to_string()));
    }
    value.parse().map_err(|_| UpdateError::InvalidVersionComponent(value.to_string()))
}
