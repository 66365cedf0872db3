// file: src/drafts/source.rs
// description: draft input accessors backed by files, raw text or memory
// reference: input validation patterns

use super::DraftSource;
use super::frontmatter::FrontmatterParser;
use crate::config::InputConfig;
use crate::error::{FormatError, Result};
use crate::models::Draft;
use crate::utils::Validator;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, warn};

impl DraftSource for Draft {
    fn read(&self) -> Result<Draft> {
        Ok(self.clone())
    }
}

/// Raw draft text, e.g. read from stdin.
pub struct TextDraftSource {
    bytes: Vec<u8>,
    extra_tags: Vec<String>,
    frontmatter_tags: bool,
}

impl TextDraftSource {
    pub fn new(bytes: impl Into<Vec<u8>>, input: &InputConfig) -> Self {
        Self {
            bytes: bytes.into(),
            extra_tags: Vec::new(),
            frontmatter_tags: input.frontmatter_tags,
        }
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.extra_tags = tags;
        self
    }
}

impl DraftSource for TextDraftSource {
    fn read(&self) -> Result<Draft> {
        build_draft(&self.bytes, &self.extra_tags, self.frontmatter_tags)
    }
}

pub struct FileDraftSource {
    path: PathBuf,
    extra_tags: Vec<String>,
    frontmatter_tags: bool,
    max_bytes: u64,
}

impl FileDraftSource {
    pub fn new(path: impl Into<PathBuf>, input: &InputConfig) -> Self {
        Self {
            path: path.into(),
            extra_tags: Vec::new(),
            frontmatter_tags: input.frontmatter_tags,
            max_bytes: (input.max_file_size_kb as u64) * 1024,
        }
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.extra_tags = tags;
        self
    }
}

impl DraftSource for FileDraftSource {
    fn read(&self) -> Result<Draft> {
        Validator::validate_file_path(&self.path)?;
        Validator::validate_draft_extension(&self.path)?;

        let bytes = fs::read(&self.path)?;
        Validator::validate_file_size(bytes.len() as u64, self.max_bytes)?;

        debug!("Read {} bytes from {}", bytes.len(), self.path.display());
        build_draft(&bytes, &self.extra_tags, self.frontmatter_tags)
    }
}

fn build_draft(bytes: &[u8], extra_tags: &[String], frontmatter_tags: bool) -> Result<Draft> {
    let raw = std::str::from_utf8(bytes)
        .map_err(|e| FormatError::InvalidInput(format!("draft is not valid UTF-8: {}", e)))?;

    if !frontmatter_tags {
        return Ok(Draft::new(raw, extra_tags.to_vec()));
    }

    match FrontmatterParser::new().extract(raw)? {
        Some((frontmatter, body)) => {
            if !frontmatter.other_keys.is_empty() {
                warn!(
                    "Ignoring frontmatter fields: {}",
                    frontmatter.other_keys.join(", ")
                );
            }
            let mut draft = Draft::new(body, frontmatter.tags);
            draft.add_tags(extra_tags);
            Ok(draft)
        }
        None => Ok(Draft::new(raw, extra_tags.to_vec())),
    }
}
