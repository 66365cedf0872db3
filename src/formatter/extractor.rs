// file: src/formatter/extractor.rs
// description: lifts code blocks, headings and rules out of a draft before rewriting
// reference: protected-region extraction

use super::patterns::{CODE_BLOCK, H2_HEADING, H3_HEADING, HORIZONTAL_RULE};
use super::placeholder::{PlaceholderStore, RegionKind};
use crate::error::Result;
use regex::{Captures, Regex};
use tracing::debug;

pub struct BlockExtractor;

impl BlockExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Runs the four extraction passes. Code blocks go first: their indented
    /// lines are the most fragile and must be gone before anything else scans
    /// the text.
    pub fn extract(&self, text: &str, store: &mut PlaceholderStore) -> Result<String> {
        let text = self.extract_code_blocks(text, store)?;
        let text = self.extract_headings(&text, &H2_HEADING, RegionKind::H2, store);
        let text = self.extract_headings(&text, &H3_HEADING, RegionKind::H3, store);
        let text = self.extract_rules(&text, store);

        let counts: Vec<String> = RegionKind::ALL
            .iter()
            .map(|&kind| format!("{} {}", store.count(kind), kind))
            .collect();
        debug!("Extracted {} regions: {}", store.len(), counts.join(", "));

        Ok(text)
    }

    fn extract_code_blocks(&self, text: &str, store: &mut PlaceholderStore) -> Result<String> {
        let replaced = CODE_BLOCK.try_replacen(text, 0, |caps: &fancy_regex::Captures| {
            let block = caps.get(1).map_or("", |m| m.as_str());
            let marker = store.extract(RegionKind::CodeBlock, block);
            format!("{}\n\n", marker)
        })?;
        Ok(replaced.into_owned())
    }

    fn extract_headings(
        &self,
        text: &str,
        pattern: &Regex,
        kind: RegionKind,
        store: &mut PlaceholderStore,
    ) -> String {
        pattern
            .replace_all(text, |caps: &Captures| store.extract(kind, &caps[1]))
            .into_owned()
    }

    fn extract_rules(&self, text: &str, store: &mut PlaceholderStore) -> String {
        HORIZONTAL_RULE
            .replace_all(text, |_: &Captures| store.extract(RegionKind::HRule, "* * *"))
            .into_owned()
    }
}

impl Default for BlockExtractor {
    fn default() -> Self {
        Self::new()
    }
}
