//! Detection implementation submodule.
//!
//! The pipeline runs lower-cased header text through three stages:
//!
//! - `tokenize`: split the header into products, comments and plain tokens
//! - `parse_version` / `extract_numeric_prefix`: lenient version reading
//! - `classify`: ordered browser signature passes over the tokens

mod classifier;
mod tokenizer;
mod version;

pub use classifier::classify;
pub use tokenizer::{tokenize, Token};
pub use version::{extract_numeric_prefix, parse_version};
