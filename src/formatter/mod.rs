// file: src/formatter/mod.rs
// description: markdown draft formatting module exports
// reference: internal module structure

pub mod cleanup;
pub mod extractor;
pub mod inline;
pub mod markdown;
pub mod patterns;
pub mod placeholder;
pub mod restorer;
pub mod spacing;

pub use cleanup::FinalCleanup;
pub use extractor::BlockExtractor;
pub use inline::InlineNormalizer;
pub use markdown::{MarkdownFormatter, Stage};
pub use placeholder::{PlaceholderStore, ProtectedRegion, RegionKind};
pub use restorer::BlockRestorer;
pub use spacing::{LineClass, LineSpacingReformatter, SpacingRule};
