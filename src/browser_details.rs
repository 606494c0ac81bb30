//! Browser details representing a classification result.

use crate::{BrowserName, BrowserVersion};
use semver::VersionReq;
use serde::Serialize;
use std::fmt;

/// Result of classifying a `User-Agent` header.
///
/// A detected browser always carries a version; [`BrowserName::Unknown`]
/// never does. The fields are private so that pairing cannot be broken.
///
/// # Example
///
/// ```rust
/// use ua_browser_detect::{detect, BrowserName};
///
/// let details = detect(Some("Mozilla/5.0 (Windows NT 6.1; Trident/7.0; rv:11.0) like Gecko"));
/// if details.is_known() {
///     println!("{} {}", details.name().display_name(), details.version().unwrap());
/// }
/// assert_eq!(details.name(), BrowserName::InternetExplorer);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct BrowserDetails {
    name: BrowserName,
    version: Option<BrowserVersion>,
}

impl BrowserDetails {
    /// The result for headers matching no known browser.
    pub const fn unknown() -> Self {
        Self {
            name: BrowserName::Unknown,
            version: None,
        }
    }

    /// A detected browser. Passing [`BrowserName::Unknown`] yields
    /// [`BrowserDetails::unknown`] and discards the version.
    pub fn detected(name: BrowserName, version: BrowserVersion) -> Self {
        match name {
            BrowserName::Unknown => Self::unknown(),
            _ => Self {
                name,
                version: Some(version),
            },
        }
    }

    /// The detected browser name.
    pub fn name(&self) -> BrowserName {
        self.name
    }

    /// The detected version, `None` only for [`BrowserName::Unknown`].
    pub fn version(&self) -> Option<BrowserVersion> {
        self.version
    }

    /// Whether a browser was recognised.
    pub fn is_known(&self) -> bool {
        self.name != BrowserName::Unknown
    }

    /// Check the detected version against a semver requirement.
    ///
    /// Only `major.minor.build` take part in the comparison. Unknown
    /// browsers never match.
    ///
    /// ```rust
    /// use semver::VersionReq;
    /// use ua_browser_detect::detect;
    ///
    /// let details = detect(Some("Mozilla/5.0 (X11; Linux x86_64; rv:89.0) Gecko/20100101 Firefox/89.0"));
    /// assert!(details.matches(&VersionReq::parse(">=78").unwrap()));
    /// assert!(!details.matches(&VersionReq::parse("<60").unwrap()));
    /// ```
    pub fn matches(&self, req: &VersionReq) -> bool {
        self.version
            .map(|version| req.matches(&version.to_semver()))
            .unwrap_or(false)
    }
}

impl fmt::Display for BrowserDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.version {
            Some(version) => write!(f, "{} {}", self.name, version),
            None => write!(f, "{}", self.name),
        }
    }
}
