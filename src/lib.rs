// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns

pub mod config;
pub mod drafts;
pub mod error;
pub mod formatter;
pub mod models;
pub mod pipeline;
pub mod utils;

pub use config::{Config, InputConfig, StoreConfig};
pub use drafts::{
    DraftRecord, DraftSink, DraftSource, FileDraftSource, FileDraftStore, TextDraftSource,
    WriterSink,
};
pub use error::{FormatError, Result};
pub use formatter::{MarkdownFormatter, Stage};
pub use models::{Draft, DraftHandle};
pub use pipeline::{DraftProcessor, ProcessingResult};
pub use utils::Validator;

/// Formats one draft's text with the fixed rule set.
pub fn format_markdown(content: &str) -> Result<String> {
    MarkdownFormatter::new().format(content)
}
