//! Browser name enum identifying the detectable browsers.

use crate::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use strum::IntoEnumIterator;

/// The browser a `User-Agent` header was classified as.
///
/// The set is closed: headers that match none of the known signatures are
/// reported as [`BrowserName::Unknown`].
///
/// # Example
///
/// ```rust
/// use ua_browser_detect::BrowserName;
///
/// for name in BrowserName::all() {
///     println!("{}: {}", name.as_str(), name.display_name());
/// }
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
pub enum BrowserName {
    /// No known browser signature was found.
    #[default]
    Unknown,
    /// Google Chrome (and other browsers advertising a `Chrome/` product).
    Chrome,
    /// Legacy (EdgeHTML) Microsoft Edge.
    Edge,
    /// Mozilla Firefox.
    Firefox,
    /// Microsoft Internet Explorer, detected via `MSIE` or `Trident/` comments.
    InternetExplorer,
    /// Apple Safari.
    Safari,
}

impl BrowserName {
    /// Stable snake_case key, also used for serialization.
    ///
    /// ```rust
    /// use ua_browser_detect::BrowserName;
    ///
    /// assert_eq!(BrowserName::InternetExplorer.as_str(), "internet_explorer");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Chrome => "chrome",
            Self::Edge => "edge",
            Self::Firefox => "firefox",
            Self::InternetExplorer => "internet_explorer",
            Self::Safari => "safari",
        }
    }

    /// Human-readable name, suitable for compatibility messages.
    ///
    /// ```rust
    /// use ua_browser_detect::BrowserName;
    ///
    /// assert_eq!(BrowserName::InternetExplorer.display_name(), "Internet Explorer");
    /// ```
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::Chrome => "Chrome",
            Self::Edge => "Edge",
            Self::Firefox => "Firefox",
            Self::InternetExplorer => "Internet Explorer",
            Self::Safari => "Safari",
        }
    }

    /// Iterator over all browser names, `Unknown` included.
    pub fn all() -> impl Iterator<Item = Self> {
        <Self as IntoEnumIterator>::iter()
    }
}

impl fmt::Display for BrowserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BrowserName {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::all()
            .find(|name| name.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseError::UnknownBrowser(s.to_string()))
    }
}
