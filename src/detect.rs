//! Browser detection functions.

use crate::detection::{classify, tokenize};
use crate::{BrowserDetails, DetectOptions};

/// Detect the browser from a `User-Agent` header value.
///
/// This function never fails. A missing, empty or unrecognised header
/// yields [`BrowserDetails::unknown`].
///
/// # Detection Process
///
/// 1. Lower-case the header (ASCII only)
/// 2. Split it into product tokens, comments and plain tokens
/// 3. Try the browser signatures in order: Edge, Internet Explorer
///    (`msie`, then `trident/` with `rv:`), Firefox, Chrome, Safari
/// 4. Return the first match, or `Unknown`
///
/// # Example
///
/// ```rust
/// use ua_browser_detect::{detect, BrowserName, BrowserVersion};
///
/// let details = detect(Some(
///     "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
///      (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36",
/// ));
/// assert_eq!(details.name(), BrowserName::Chrome);
/// assert_eq!(details.version(), Some(BrowserVersion::new(91, 0, 4472, 124)));
///
/// assert!(!detect(None).is_known());
/// ```
pub fn detect(user_agent: Option<&str>) -> BrowserDetails {
    detect_with_options(user_agent, &DetectOptions::default())
}

/// Detect the browser from a `User-Agent` header value, using custom options.
///
/// ```rust
/// use ua_browser_detect::{detect_with_options, BrowserName, DetectOptions};
///
/// let opts = DetectOptions { max_len: Some(512) };
/// let details = detect_with_options(Some("Mozilla/5.0 Firefox/89.0"), &opts);
/// assert_eq!(details.name(), BrowserName::Firefox);
/// ```
pub fn detect_with_options(user_agent: Option<&str>, options: &DetectOptions) -> BrowserDetails {
    let Some(user_agent) = user_agent else {
        tracing::trace!("no User-Agent header; browser unknown");
        return BrowserDetails::unknown();
    };

    let header = options.truncate(user_agent).to_ascii_lowercase();
    let tokens = tokenize(&header);
    let details = classify(&tokens);

    tracing::trace!(
        tokens = tokens.len(),
        browser = %details.name(),
        version = ?details.version(),
        "classified User-Agent header"
    );
    details
}

/// Detect the browser from raw header bytes.
///
/// Bytes that are not valid UTF-8 are replaced with `U+FFFD` before
/// detection, so any header value can be classified.
///
/// ```rust
/// use ua_browser_detect::{detect_bytes, BrowserName};
///
/// let details = detect_bytes(b"Mozilla/5.0 (\xff) Firefox/89.0");
/// assert_eq!(details.name(), BrowserName::Firefox);
/// ```
pub fn detect_bytes(user_agent: &[u8]) -> BrowserDetails {
    let user_agent = String::from_utf8_lossy(user_agent);
    detect(Some(&*user_agent))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BrowserName, BrowserVersion};

    #[test]
    fn test_detect_none_and_empty() {
        assert_eq!(detect(None), BrowserDetails::unknown());
        assert_eq!(detect(Some("")), BrowserDetails::unknown());
        assert_eq!(detect(Some("  \t ")), BrowserDetails::unknown());
    }

    #[test]
    fn test_detect_is_case_insensitive() {
        let expected =
            BrowserDetails::detected(BrowserName::Firefox, BrowserVersion::new(89, 0, 0, 0));
        assert_eq!(detect(Some("FIREFOX/89.0")), expected);
        assert_eq!(detect(Some("FireFox/89.0")), expected);
        assert_eq!(detect(Some("firefox/89.0")), expected);
    }

    #[test]
    fn test_detect_garbage() {
        let details = detect(Some("not a real user agent string at all"));
        assert_eq!(details.name(), BrowserName::Unknown);
        assert!(details.version().is_none());
    }

    #[test]
    fn test_detect_with_max_len_cuts_signature() {
        let ua = "Mozilla/5.0 (X11; Linux x86_64; rv:89.0) Gecko/20100101 Firefox/89.0";
        let opts = DetectOptions { max_len: Some(32) };
        assert_eq!(detect_with_options(Some(ua), &opts), BrowserDetails::unknown());
        assert_eq!(
            detect_with_options(Some(ua), &DetectOptions::default()).name(),
            BrowserName::Firefox
        );
    }

    #[test]
    fn test_detect_bytes_invalid_utf8() {
        assert_eq!(detect_bytes(b"\xff\xfe\xfd"), BrowserDetails::unknown());
        assert_eq!(detect_bytes(b"Chrome/91.0\xff").name(), BrowserName::Chrome);
    }
}
