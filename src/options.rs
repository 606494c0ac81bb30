//! Detection options configuration.
//!
//! This module provides the [`DetectOptions`] struct for configuring
//! browser detection behavior.

/// Configuration options for browser detection.
///
/// # Default Behavior
///
/// By default the whole header is classified, however long it is.
///
/// # Example
///
/// ```rust
/// use ua_browser_detect::DetectOptions;
///
/// // Use default options (no length limit)
/// let opts = DetectOptions::default();
///
/// // Only look at the first 512 bytes of the header
/// let opts = DetectOptions {
///     max_len: Some(512),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetectOptions {
    /// Maximum number of header bytes to classify.
    ///
    /// Longer headers are cut back to the nearest character boundary at or
    /// below this length before tokenizing. Real browsers send headers of a
    /// few hundred bytes at most, so a limit bounds the work done for
    /// hostile input.
    ///
    /// Default: `None` (no limit)
    pub max_len: Option<usize>,
}

impl DetectOptions {
    /// Apply the length limit to a header value.
    pub(crate) fn truncate<'a>(&self, header: &'a str) -> &'a str {
        let Some(max_len) = self.max_len else {
            return header;
        };
        if header.len() <= max_len {
            return header;
        }

        let mut end = max_len;
        while !header.is_char_boundary(end) {
            end -= 1;
        }
        tracing::debug!(
            header.len = header.len(),
            max_len,
            "truncating User-Agent header before detection"
        );
        &header[..end]
    }
}
