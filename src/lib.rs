//! # ua-browser-detect
//!
//! Browser name and version detection from HTTP `User-Agent` headers.
//!
//! This crate classifies a raw `User-Agent` value as one of Chrome, Edge,
//! Firefox, Internet Explorer or Safari, together with a four-component
//! version number. Anything else is reported as unknown; detection never
//! fails.
//!
//! ## Features
//!
//! - `detect()` for classifying a header value (or its absence)
//! - `BrowserDetails` holding the `BrowserName` and `BrowserVersion`
//! - `DetectOptions` for bounding the amount of header text examined
//! - `tokenize()`, `classify()`, `parse_version()` and
//!   `extract_numeric_prefix()` exposing the individual pipeline stages
//!
//! ## Remarks
//!
//! Browsers routinely claim to be other browsers. Signatures are therefore
//! tried in a fixed order (Edge, Internet Explorer, Firefox, Chrome,
//! Safari) and the first one found wins, wherever it appears in the header.
//! Only legacy EdgeHTML Edge (`Edge/`) is recognised as Edge.
//!
//! Rendering engine, platform and device information are not extracted.
//!
//! ## Example
//!
//! ```rust
//! use ua_browser_detect::{detect, BrowserName, BrowserVersion};
//!
//! let details = detect(Some(
//!     "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_6) AppleWebKit/605.1.15 \
//!      (KHTML, like Gecko) Version/14.0 Safari/605.1.15",
//! ));
//! assert_eq!(details.name(), BrowserName::Safari);
//! assert_eq!(details.version(), Some(BrowserVersion::new(14, 0, 0, 0)));
//! ```

mod browser_details;
mod browser_name;
mod browser_version;
mod detect;
mod detection;
mod error;
mod options;

pub use browser_details::BrowserDetails;
pub use browser_name::BrowserName;
pub use browser_version::BrowserVersion;
pub use detect::{detect, detect_bytes, detect_with_options};
pub use detection::{classify, extract_numeric_prefix, parse_version, tokenize, Token};
pub use error::ParseError;
pub use options::DetectOptions;
