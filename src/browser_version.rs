//! Four-component browser version numbers.

use crate::detection::parse_version;
use crate::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A browser version as `major.minor.build.revision`.
///
/// Components missing from the source text are zero. Versions order
/// component by component, so they can be compared directly for feature
/// gating.
///
/// # Example
///
/// ```rust
/// use ua_browser_detect::BrowserVersion;
///
/// let v = BrowserVersion::parse_lossy("91.0.4472.124");
/// assert_eq!(v, BrowserVersion::new(91, 0, 4472, 124));
/// assert!(v > BrowserVersion::new(90, 9, 0, 0));
/// assert_eq!(v.to_string(), "91.0.4472.124");
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct BrowserVersion {
    /// Major version.
    pub major: u32,
    /// Minor version.
    pub minor: u32,
    /// Build number.
    pub build: u32,
    /// Revision number.
    pub revision: u32,
}

impl BrowserVersion {
    /// Create a version from its four components.
    pub const fn new(major: u32, minor: u32, build: u32, revision: u32) -> Self {
        Self {
            major,
            minor,
            build,
            revision,
        }
    }

    /// Leniently parse a version, never failing.
    ///
    /// Dot-separated components are read left to right. The first component
    /// that is not an unsigned integer stops the parse, and it and every
    /// component after it are left at zero.
    ///
    /// ```rust
    /// use ua_browser_detect::BrowserVersion;
    ///
    /// assert_eq!(BrowserVersion::parse_lossy("7"), BrowserVersion::new(7, 0, 0, 0));
    /// assert_eq!(BrowserVersion::parse_lossy("4.0b1.2"), BrowserVersion::new(4, 0, 0, 0));
    /// assert_eq!(BrowserVersion::parse_lossy(""), BrowserVersion::default());
    /// ```
    pub fn parse_lossy(text: &str) -> Self {
        parse_version(text)
    }

    /// Convert to a [`semver::Version`] using `major.minor.build`.
    ///
    /// The revision component has no semver counterpart and is dropped.
    pub fn to_semver(&self) -> semver::Version {
        semver::Version::new(
            u64::from(self.major),
            u64::from(self.minor),
            u64::from(self.build),
        )
    }
}

impl fmt::Display for BrowserVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}.{}",
            self.major, self.minor, self.build, self.revision
        )
    }
}

/// Strict parsing: one to four dot-separated unsigned integers.
impl FromStr for BrowserVersion {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        if input.is_empty() {
            return Err(ParseError::Empty);
        }

        let mut components = [0u32; 4];
        let mut parts = input.split('.');
        for slot in components.iter_mut() {
            let Some(part) = parts.next() else {
                break;
            };
            let invalid = || ParseError::InvalidComponent {
                input: input.to_string(),
                component: part.to_string(),
            };
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
            *slot = part.parse().map_err(|_| invalid())?;
        }
        if parts.next().is_some() {
            return Err(ParseError::TooManyComponents(input.to_string()));
        }

        let [major, minor, build, revision] = components;
        Ok(Self::new(major, minor, build, revision))
    }
}
