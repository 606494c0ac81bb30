//! Error types for strict conversions.
//!
//! Browser detection itself never fails: malformed headers classify as
//! [`BrowserName::Unknown`](crate::BrowserName::Unknown). The errors in this
//! module are only produced by the strict [`FromStr`](std::str::FromStr)
//! implementations on [`BrowserName`](crate::BrowserName) and
//! [`BrowserVersion`](crate::BrowserVersion).

use thiserror::Error;

/// Errors produced when parsing a browser name or version from text.
///
/// # Example
///
/// ```rust
/// use ua_browser_detect::{BrowserVersion, ParseError};
///
/// let err = "1.2.x".parse::<BrowserVersion>().unwrap_err();
/// assert!(matches!(err, ParseError::InvalidComponent { .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ParseError {
    /// The text does not name a known browser.
    #[error("unknown browser name: {0}")]
    UnknownBrowser(String),

    /// The version text was empty (or only whitespace).
    #[error("empty version string")]
    Empty,

    /// One of the dot-separated components is not an unsigned integer.
    #[error("invalid version component `{component}` in `{input}`")]
    InvalidComponent {
        /// The full version text.
        input: String,
        /// The offending component.
        component: String,
    },

    /// The version text has more than four components.
    #[error("version `{0}` has more than four components")]
    TooManyComponents(String),
}
