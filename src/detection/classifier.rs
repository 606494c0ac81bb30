//! Ordered browser signature matching over a token sequence.

use super::tokenizer::Token;
use super::version::{extract_numeric_prefix, parse_version};
use crate::{BrowserDetails, BrowserName};

/// A single browser signature check.
type Pass = for<'a> fn(&[Token<'a>]) -> Option<BrowserDetails>;

/// Signature checks in precedence order.
///
/// Several browsers advertise other browsers' products (Edge claims to be
/// Chrome, Chrome claims to be Safari), so the order decides the winner,
/// never the position of a token in the header.
const PASSES: [Pass; 6] = [
    detect_edge,
    detect_msie,
    detect_trident,
    detect_firefox,
    detect_chrome,
    detect_safari,
];

/// Classify an already tokenized, lower-cased `User-Agent` header.
///
/// Each pass scans the whole token sequence; the first pass that matches
/// decides the result. When none matches the result is
/// [`BrowserDetails::unknown`].
///
/// ```rust
/// use ua_browser_detect::{classify, tokenize, BrowserName};
///
/// let tokens = tokenize("chrome/46.0.2486.0 edge/13.10586");
/// assert_eq!(classify(&tokens).name(), BrowserName::Edge);
/// ```
pub fn classify(tokens: &[Token<'_>]) -> BrowserDetails {
    PASSES
        .iter()
        .find_map(|pass| pass(tokens))
        .unwrap_or_else(BrowserDetails::unknown)
}

fn find_product<'a>(tokens: &[Token<'a>], product: &str) -> Option<&'a str> {
    tokens.iter().find_map(|token| match *token {
        Token::Product { name, version, .. } if name == product => Some(version),
        Token::Product { .. } | Token::Plain { .. } | Token::Comment { .. } => None,
    })
}

fn comments<'a, 'b>(tokens: &'b [Token<'a>]) -> impl Iterator<Item = &'a str> + 'b {
    tokens.iter().filter_map(|token| match *token {
        Token::Comment { text, .. } => Some(text),
        Token::Plain { .. } | Token::Product { .. } => None,
    })
}

fn product_pass(tokens: &[Token<'_>], product: &str, name: BrowserName) -> Option<BrowserDetails> {
    find_product(tokens, product).map(|version| BrowserDetails::detected(name, parse_version(version)))
}

fn version_after<'a>(text: &'a str, marker: &str) -> Option<&'a str> {
    text.find(marker)
        .map(|idx| extract_numeric_prefix(&text[idx + marker.len()..]))
}

fn detect_edge(tokens: &[Token<'_>]) -> Option<BrowserDetails> {
    product_pass(tokens, "edge", BrowserName::Edge)
}

/// `(compatible; msie 10.0; windows nt 6.1)`
fn detect_msie(tokens: &[Token<'_>]) -> Option<BrowserDetails> {
    comments(tokens)
        .find_map(|text| version_after(text, "msie"))
        .map(|version| BrowserDetails::detected(BrowserName::InternetExplorer, parse_version(version)))
}

/// IE 11 dropped `msie`: `(windows nt 6.1; trident/7.0; rv:11.0)`
fn detect_trident(tokens: &[Token<'_>]) -> Option<BrowserDetails> {
    comments(tokens)
        .filter(|text| text.contains("trident/"))
        .find_map(|text| version_after(text, "rv:"))
        .map(|version| BrowserDetails::detected(BrowserName::InternetExplorer, parse_version(version)))
}

fn detect_firefox(tokens: &[Token<'_>]) -> Option<BrowserDetails> {
    product_pass(tokens, "firefox", BrowserName::Firefox)
}

fn detect_chrome(tokens: &[Token<'_>]) -> Option<BrowserDetails> {
    product_pass(tokens, "chrome", BrowserName::Chrome)
}

/// Safari's own product carries a WebKit build number; the release
/// version lives in a separate `version/` product.
fn detect_safari(tokens: &[Token<'_>]) -> Option<BrowserDetails> {
    find_product(tokens, "safari")?;
    product_pass(tokens, "version", BrowserName::Safari)
}
