// file: src/drafts/mod.rs
// description: draft input accessors and output sinks
// reference: internal module structure

pub mod frontmatter;
pub mod source;
pub mod store;

pub use frontmatter::{Frontmatter, FrontmatterParser};
pub use source::{FileDraftSource, TextDraftSource};
pub use store::{DraftRecord, FileDraftStore, WriterSink};

use crate::error::Result;
use crate::models::{Draft, DraftHandle};

/// Where a draft comes from.
pub trait DraftSource {
    fn read(&self) -> Result<Draft>;
}

/// Where a formatted draft goes. `activate` is only called with a handle
/// returned by `create_draft` on the same sink.
pub trait DraftSink {
    fn create_draft(&mut self, content: &str, tags: &[String]) -> Result<DraftHandle>;
    fn activate(&mut self, handle: &DraftHandle) -> Result<()>;
}
