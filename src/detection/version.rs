//! Lenient version parsing with regex extraction.

use crate::BrowserVersion;
use regex::Regex;
use std::sync::OnceLock;

/// Parse a version from text, defaulting anything unparsable to zero.
///
/// Reads up to four `.`-separated components left to right. Parsing stops
/// at the first component that is not an unsigned integer; that component
/// and all later ones stay zero.
///
/// - `91.0.4472.124` -> 91.0.4472.124
/// - `11` -> 11.0.0.0
/// - `4.0b1` -> 4.0.0.0
/// - `` -> 0.0.0.0
///
/// ```rust
/// use ua_browser_detect::{parse_version, BrowserVersion};
///
/// assert_eq!(parse_version("1.2.3.4"), BrowserVersion::new(1, 2, 3, 4));
/// assert_eq!(parse_version("7"), BrowserVersion::new(7, 0, 0, 0));
/// ```
pub fn parse_version(text: &str) -> BrowserVersion {
    let mut components = [0u32; 4];
    let mut rest = text;

    for slot in components.iter_mut() {
        let (segment, remainder) = rest.split_once('.').unwrap_or((rest, ""));
        match segment.parse() {
            Ok(value) => {
                *slot = value;
                rest = remainder;
            }
            Err(_) => break,
        }
    }

    let [major, minor, build, revision] = components;
    BrowserVersion::new(major, minor, build, revision)
}

/// Extract the leading run of ASCII digits and `.` from text.
///
/// Surrounding whitespace is trimmed first. The result may be empty.
///
/// - ` 10.6rc1` -> `10.6`
/// - `rc1` -> ``
///
/// ```rust
/// use ua_browser_detect::extract_numeric_prefix;
///
/// assert_eq!(extract_numeric_prefix("10.6rc1"), "10.6");
/// assert_eq!(extract_numeric_prefix("rc1"), "");
/// ```
pub fn extract_numeric_prefix(text: &str) -> &str {
    static NUMERIC_PREFIX: OnceLock<Regex> = OnceLock::new();
    let re = NUMERIC_PREFIX.get_or_init(|| Regex::new(r"^[0-9.]*").expect("Invalid regex pattern"));

    let text = text.trim();
    re.find(text).map(|m| m.as_str()).unwrap_or_default()
}
