// file: src/formatter/restorer.rs
// description: reinserts protected regions with canonical blank-line spacing

use super::placeholder::{PlaceholderStore, RegionKind};

pub struct BlockRestorer;

impl BlockRestorer {
    pub fn new() -> Self {
        Self
    }

    pub fn restore(&self, text: &str, store: &mut PlaceholderStore) -> String {
        let text = store.restore_all(RegionKind::H2, text, |heading| format!("\n\n## {heading}"));
        let text = store.restore_all(RegionKind::H3, &text, |heading| format!("\n### {heading}"));
        let text = store.restore_all(RegionKind::HRule, &text, |rule| format!("\n{rule}\n"));
        store.restore_all(RegionKind::CodeBlock, &text, |block| {
            format!("\n{}\n", trim_blank_lines(block))
        })
    }
}

impl Default for BlockRestorer {
    fn default() -> Self {
        Self::new()
    }
}

/// Drops whitespace-only lines from both ends of `block` while keeping the
/// indentation of the first and last content lines.
pub fn trim_blank_lines(block: &str) -> &str {
    let end = block.trim_end().len();
    let content = &block[..end];
    let start = match content.find(|c: char| !c.is_whitespace()) {
        Some(first) => content[..first].rfind('\n').map_or(0, |nl| nl + 1),
        None => return "",
    };
    &content[start..]
}
