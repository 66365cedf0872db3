// file: src/error.rs
// description: Custom error types and result type aliases
// reference: https://docs.rs/thiserror

use crate::formatter::RegionKind;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, FormatError>;

#[derive(Error, Debug)]
pub enum FormatError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Placeholder leaked into output: {kind} region #{index} was not restored")]
    PlaceholderLeak { kind: RegionKind, index: usize },

    #[error("Unknown placeholder marker left in output")]
    StrayMarker,

    #[error("Pattern error: {0}")]
    Pattern(#[from] fancy_regex::Error),

    #[error("Frontmatter error: {0}")]
    Frontmatter(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
