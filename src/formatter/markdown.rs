// file: src/formatter/markdown.rs
// description: staged markdown draft formatter
// reference: extract -> normalize -> reformat -> restore -> cleanup

use super::cleanup::FinalCleanup;
use super::extractor::BlockExtractor;
use super::inline::InlineNormalizer;
use super::placeholder::{PlaceholderStore, RegionKind};
use super::restorer::BlockRestorer;
use super::spacing::LineSpacingReformatter;
use crate::error::Result;
use std::fmt;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Extract,
    Normalize,
    Reformat,
    Restore,
    Cleanup,
}

impl Stage {
    /// Each stage relies on the output of the one before it.
    pub const ORDER: [Stage; 5] = [
        Stage::Extract,
        Stage::Normalize,
        Stage::Reformat,
        Stage::Restore,
        Stage::Cleanup,
    ];
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Extract => "extract",
            Stage::Normalize => "normalize",
            Stage::Reformat => "reformat",
            Stage::Restore => "restore",
            Stage::Cleanup => "cleanup",
        };
        f.write_str(name)
    }
}

/// Stateless across calls; every `format` owns its own placeholder store.
pub struct MarkdownFormatter {
    extractor: BlockExtractor,
    normalizer: InlineNormalizer,
    reformatter: LineSpacingReformatter,
    restorer: BlockRestorer,
    cleanup: FinalCleanup,
}

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self {
            extractor: BlockExtractor::new(),
            normalizer: InlineNormalizer::new(),
            reformatter: LineSpacingReformatter::new(),
            restorer: BlockRestorer::new(),
            cleanup: FinalCleanup::new(),
        }
    }

    pub fn format(&self, content: &str) -> Result<String> {
        PlaceholderStore::ensure_marker_free(content)?;

        let mut store = PlaceholderStore::new();
        let mut text = content.replace("\r\n", "\n");

        let mut opens_with_code = false;
        for stage in Stage::ORDER {
            if stage == Stage::Restore {
                opens_with_code = store
                    .leading_region(&text)
                    .is_some_and(|region| region.kind == RegionKind::CodeBlock);
            }
            text = self.run_stage(stage, &text, &mut store, opens_with_code)?;
            debug!("Stage {} done ({} bytes)", stage, text.len());
        }

        store.verify(&text)?;
        Ok(text)
    }

    /// True when formatting would leave `content` unchanged.
    pub fn is_formatted(&self, content: &str) -> Result<bool> {
        Ok(self.format(content)? == content)
    }

    fn run_stage(
        &self,
        stage: Stage,
        text: &str,
        store: &mut PlaceholderStore,
        opens_with_code: bool,
    ) -> Result<String> {
        match stage {
            Stage::Extract => self.extractor.extract(text, store),
            Stage::Normalize => self.normalizer.normalize(text, store),
            Stage::Reformat => Ok(self.reformatter.reformat(text)),
            Stage::Restore => Ok(self.restorer.restore(text, store)),
            Stage::Cleanup => self.cleanup.apply(text, opens_with_code),
        }
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FormatError;
    use crate::formatter::placeholder::{MARKER_CLOSE, MARKER_OPEN};
    use pretty_assertions::assert_eq;

    const NOTES: &str = "# Notes\nIntro with __strong__ and *soft* words.\n* first\n* second\n  * nested\n* third\n## Details\n1. one\n2. two\n---\nText\n\n    let x = 1;\n\n### Sub\nEnd";

    fn format(text: &str) -> String {
        MarkdownFormatter::new().format(text).unwrap()
    }

    #[test]
    fn test_end_to_end_example() {
        let input = "# Title\nSome text\n* item one\n* item two\n---";
        let expected = "# Title\n\nSome text\n\n- item one\n- item two\n\n* * *\n";
        assert_eq!(format(input), expected);
    }

    #[test]
    fn test_full_document() {
        let expected = "# Notes\n\nIntro with **strong** and _soft_ words.\n\n- first\n- second\n  - nested\n\n- third\n\n## Details\n\n1. one\n\n2. two\n\n* * *\n\nText\n\n    let x = 1;\n\n### Sub\nEnd\n";
        assert_eq!(format(NOTES), expected);
    }

    #[test]
    fn test_idempotence() {
        let samples = [
            NOTES,
            "# Title\nSome text\n* item one\n* item two\n---",
            "Intro\n\n    __not_bold__\n    *keep*\n\nAfter __bold__",
            "    leading code\n    block\nText after",
            "Para\n## H2\n- a\n- b\n### H3\n+ x\n  + y\n+ z\n* * *\n1. one\n2. two",
            "\u{00A0}\u{00A0}text\n-\u{00A0}item\n\n\n\n\nend",
            "Intro\n\n    first\n\n    __second__\n\nAfter",
            "  indented prose\n- a",
        ];

        for sample in samples {
            let once = format(sample);
            let twice = format(&once);
            assert_eq!(twice, once, "not idempotent for {:?}", sample);
        }
    }

    #[test]
    fn test_code_block_preserved() {
        let out = format("Intro\n\n    __not_bold__\n    *keep*\n\nAfter __bold__");
        assert_eq!(
            out,
            "Intro\n\n    __not_bold__\n    *keep*\n\nAfter **bold**\n"
        );
    }

    #[test]
    fn test_consecutive_code_blocks_preserved() {
        let input = "Intro\n\n    first\n\n    __second__\n\nAfter";
        assert_eq!(format(input), "Intro\n\n    first\n\n    __second__\n\nAfter\n");

        let input = "Intro\n\n    a\n\n    *x* y *z*";
        assert_eq!(format(input), "Intro\n\n    a\n\n    *x* y *z*\n");
    }

    #[test]
    fn test_leading_indentation() {
        assert_eq!(format(" Leading space text"), "Leading space text\n");
        assert_eq!(format("\n\n    code\nText"), "    code\n\nText\n");
    }

    #[test]
    fn test_decimal_after_ordered_item() {
        assert_eq!(format("1. a\n2.5 litres"), "1. a\n2.5 litres\n");
    }

    #[test]
    fn test_bullet_opening_with_bold_keeps_marker() {
        assert_eq!(format("* **bold** item"), "* **bold** item\n");
    }

    #[test]
    fn test_heading_isolation() {
        let out = format("Intro\n## Title *italic-looking* text\nBody");
        assert_eq!(out, "Intro\n\n## Title *italic-looking* text\nBody\n");
    }

    #[test]
    fn test_bullets_and_rules() {
        let out = format("* item\n\n* * *\n\nafter");
        assert_eq!(out, "- item\n\n* * *\n\nafter\n");
        assert!(!out.contains("- * *"));
    }

    #[test]
    fn test_emphasis() {
        assert_eq!(format("__bold__"), "**bold**\n");
        assert_eq!(format("a *word* here"), "a _word_ here\n");
        assert_eq!(format("**already bold**"), "**already bold**\n");
    }

    #[test]
    fn test_blank_line_collapsing() {
        let out = format("a\n\n\n\n\nb");
        assert_eq!(out, "a\n\nb\n");
        assert!(!out.contains("\n\n\n"));
    }

    #[test]
    fn test_crlf_input() {
        assert_eq!(format("# T\r\n* a\r\n"), "# T\n\n- a\n");
    }

    #[test]
    fn test_no_marker_leaks() {
        let samples = [
            NOTES,
            "## A\n## B\n### C\n* * *\n---\n\n    code",
            "",
            "\n\n\n",
            "## \n### \n",
        ];

        for sample in samples {
            let out = format(sample);
            assert!(!out.contains([MARKER_OPEN, MARKER_CLOSE]), "leak in {:?}", out);
        }
    }

    #[test]
    fn test_reserved_characters_rejected() {
        let result = MarkdownFormatter::new().format("text \u{E001}");
        assert!(matches!(result, Err(FormatError::InvalidInput(_))));
    }

    #[test]
    fn test_extraction_must_precede_normalization() {
        let input = "Intro\n\n    __not_bold__";
        let mut store = PlaceholderStore::new();
        let normalized_first = InlineNormalizer::new().normalize(input, &mut store).unwrap();

        assert_eq!(normalized_first, "Intro\n\n    **not_bold**");
        assert_eq!(format(input), "Intro\n\n    __not_bold__\n");
    }

    #[test]
    fn test_is_formatted() {
        let formatter = MarkdownFormatter::new();
        assert!(!formatter.is_formatted("* a\n* b").unwrap());
        assert!(formatter.is_formatted("- a\n- b\n").unwrap());
    }

    #[test]
    fn test_stage_order() {
        assert_eq!(Stage::ORDER.first(), Some(&Stage::Extract));
        assert_eq!(Stage::ORDER.last(), Some(&Stage::Cleanup));
    }
}
