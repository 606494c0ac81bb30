//! Splitting a `User-Agent` value into products, comments and plain tokens.

/// A lexical unit of a `User-Agent` header.
///
/// Tokens borrow from the (already lower-cased) header they were read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// Anything that is neither a product nor a comment.
    Plain {
        /// The token text.
        raw: &'a str,
    },
    /// A `name/version` product token, split at its first `/`.
    Product {
        /// The token text.
        raw: &'a str,
        /// Text before the `/`.
        name: &'a str,
        /// Text after the `/`.
        version: &'a str,
    },
    /// A parenthesized comment.
    Comment {
        /// The token text, parentheses included.
        raw: &'a str,
        /// The comment without its surrounding parentheses.
        text: &'a str,
    },
}

impl<'a> Token<'a> {
    /// The token exactly as it appeared in the header.
    pub fn raw(&self) -> &'a str {
        match self {
            Self::Plain { raw } | Self::Product { raw, .. } | Self::Comment { raw, .. } => raw,
        }
    }

    fn from_raw(raw: &'a str) -> Self {
        if raw.len() >= 2 && raw.starts_with('(') && raw.ends_with(')') {
            return Self::Comment {
                raw,
                text: &raw[1..raw.len() - 1],
            };
        }
        match raw.find('/') {
            Some(slash) if slash > 0 => Self::Product {
                raw,
                name: &raw[..slash],
                version: &raw[slash + 1..],
            },
            _ => Self::Plain { raw },
        }
    }
}

/// Split a `User-Agent` value into [`Token`]s, in header order.
///
/// This is a forgiving scanner, not a grammar: quoted strings, escapes and
/// nested comments are not understood. Separators (` `, tab and
/// `<>@,;:\"[]?={}`) end a token unless a comment is open. Only the first
/// `/` of a token is kept; a second one ends the token. A second `(` inside
/// an open comment also ends the token, and the token that follows starts
/// outside any comment.
///
/// The input is expected to be lower-cased by the caller already.
///
/// ```rust
/// use ua_browser_detect::{tokenize, Token};
///
/// let tokens = tokenize("mozilla/5.0 (x11; linux) gecko");
/// assert_eq!(
///     tokens,
///     vec![
///         Token::Product { raw: "mozilla/5.0", name: "mozilla", version: "5.0" },
///         Token::Comment { raw: "(x11; linux)", text: "x11; linux" },
///         Token::Plain { raw: "gecko" },
///     ]
/// );
/// ```
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut in_comment = false;
    let mut saw_slash = false;

    // All separators are ASCII, so byte positions are always char boundaries.
    for (pos, byte) in input.bytes().enumerate() {
        let is_separator = match byte {
            b'<' | b'>' | b'@' | b',' | b';' | b':' | b'\\' | b'"' | b'[' | b']' | b'?'
            | b'=' | b'{' | b'}' | b' ' | b'\t' => !in_comment,
            b')' => {
                if in_comment {
                    in_comment = false;
                    false
                } else {
                    true
                }
            }
            b'/' => std::mem::replace(&mut saw_slash, true),
            b'(' => std::mem::replace(&mut in_comment, true),
            _ => false,
        };

        if is_separator {
            push_token(&mut tokens, &input[start..pos]);
            start = pos + 1;
            saw_slash = false;
            in_comment = false;
        }
    }
    push_token(&mut tokens, &input[start..]);

    tokens
}

fn push_token<'a>(tokens: &mut Vec<Token<'a>>, raw: &'a str) {
    if !raw.is_empty() {
        tokens.push(Token::from_raw(raw));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raws<'a>(tokens: &[Token<'a>]) -> Vec<&'a str> {
        tokens.iter().map(Token::raw).collect()
    }

    #[test]
    fn test_empty_and_whitespace_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \t  ").is_empty());
    }

    #[test]
    fn test_full_chrome_header() {
        let tokens = tokenize(
            "mozilla/5.0 (windows nt 10.0; win64; x64) applewebkit/537.36 (khtml, like gecko) chrome/91.0.4472.124 safari/537.36",
        );
        assert_eq!(
            raws(&tokens),
            vec![
                "mozilla/5.0",
                "(windows nt 10.0; win64; x64)",
                "applewebkit/537.36",
                "(khtml, like gecko)",
                "chrome/91.0.4472.124",
                "safari/537.36",
            ]
        );
        assert_eq!(
            tokens[1],
            Token::Comment {
                raw: "(windows nt 10.0; win64; x64)",
                text: "windows nt 10.0; win64; x64",
            }
        );
        assert_eq!(
            tokens[5],
            Token::Product {
                raw: "safari/537.36",
                name: "safari",
                version: "537.36",
            }
        );
    }

    #[test]
    fn test_final_character_is_kept() {
        let tokens = tokenize("edge/13.10586");
        assert_eq!(
            tokens,
            vec![Token::Product {
                raw: "edge/13.10586",
                name: "edge",
                version: "13.10586",
            }]
        );
        assert_eq!(
            tokenize("(compatible)"),
            vec![Token::Comment {
                raw: "(compatible)",
                text: "compatible",
            }]
        );
    }

    #[test]
    fn test_separators_split_outside_comments() {
        assert_eq!(
            raws(&tokenize("a,b;c:d=e?f[g]h{i}j<k>l@m\\n\"o\tp q")),
            vec!["a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l", "m", "n", "o", "p", "q"]
        );
    }

    #[test]
    fn test_separators_kept_inside_comment() {
        let tokens = tokenize("(a, b; c: d=e)");
        assert_eq!(
            tokens,
            vec![Token::Comment {
                raw: "(a, b; c: d=e)",
                text: "a, b; c: d=e",
            }]
        );
    }

    #[test]
    fn test_second_slash_ends_token() {
        assert_eq!(
            tokenize("a/b/c"),
            vec![
                Token::Product {
                    raw: "a/b",
                    name: "a",
                    version: "b",
                },
                Token::Plain { raw: "c" },
            ]
        );
    }

    #[test]
    fn test_leading_slash_is_plain() {
        assert_eq!(tokenize("/5.0"), vec![Token::Plain { raw: "/5.0" }]);
    }

    #[test]
    fn test_empty_product_version() {
        assert_eq!(
            tokenize("safari/"),
            vec![Token::Product {
                raw: "safari/",
                name: "safari",
                version: "",
            }]
        );
    }

    #[test]
    fn test_stray_close_paren_is_separator() {
        assert_eq!(raws(&tokenize("foo)bar")), vec!["foo", "bar"]);
    }

    #[test]
    fn test_unclosed_comment_is_plain() {
        assert_eq!(
            tokenize("(windows nt 6.1"),
            vec![Token::Plain {
                raw: "(windows nt 6.1",
            }]
        );
    }

    #[test]
    fn test_doubly_opened_comment() {
        // the second `(` ends the first token; what follows is not a comment
        let tokens = tokenize("(a (b) c");
        assert_eq!(
            tokens,
            vec![
                Token::Plain { raw: "(a " },
                Token::Plain { raw: "b" },
                Token::Plain { raw: "c" },
            ]
        );
    }

    #[test]
    fn test_comment_with_product_inside() {
        let tokens = tokenize("(windows nt 6.1; trident/7.0; rv:11.0) like gecko");
        assert_eq!(
            tokens[0],
            Token::Comment {
                raw: "(windows nt 6.1; trident/7.0; rv:11.0)",
                text: "windows nt 6.1; trident/7.0; rv:11.0",
            }
        );
        assert_eq!(raws(&tokens[1..]), vec!["like", "gecko"]);
    }

    #[test]
    fn test_non_ascii_input() {
        let tokens = tokenize("naïve/1.0 (ünïcode)");
        assert_eq!(
            tokens,
            vec![
                Token::Product {
                    raw: "naïve/1.0",
                    name: "naïve",
                    version: "1.0",
                },
                Token::Comment {
                    raw: "(ünïcode)",
                    text: "ünïcode",
                },
            ]
        );
    }
}
