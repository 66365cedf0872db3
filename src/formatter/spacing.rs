// file: src/formatter/spacing.rs
// description: line-by-line blank line insertion around list items
// reference: previous-line state machine

use super::patterns::{is_list_item, is_ordered_item};
use tracing::trace;

/// Classification of one line. Only the previous line's record is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineClass {
    pub cleaned: String,
    pub is_list_item: bool,
    pub is_ordered: bool,
    pub is_blank: bool,
    pub indent: usize,
}

impl LineClass {
    pub fn classify(raw: &str) -> Self {
        let cleaned = raw.replace('\u{00A0}', " ");
        let is_blank = cleaned.trim().is_empty();
        let indent = cleaned.chars().take_while(|c| c.is_whitespace()).count();

        Self {
            is_list_item: is_list_item(&cleaned),
            is_ordered: is_ordered_item(&cleaned),
            is_blank,
            indent,
            cleaned,
        }
    }

    /// State before the first line: behaves like a blank line.
    fn start() -> Self {
        Self {
            cleaned: String::new(),
            is_list_item: false,
            is_ordered: false,
            is_blank: true,
            indent: 0,
        }
    }

    fn is_top_level_item(&self) -> bool {
        self.is_list_item && self.indent == 0
    }
}

/// Why a blank line goes in front of the current line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpacingRule {
    OrderedSiblings,
    DeIndent,
    TopLevelSiblings,
    ParagraphToList,
}

impl SpacingRule {
    /// First matching rule, in priority order.
    pub fn evaluate(prev: &LineClass, current: &LineClass) -> Option<Self> {
        if prev.is_blank {
            return None;
        }

        if current.is_ordered && prev.is_list_item && prev.is_ordered {
            Some(SpacingRule::OrderedSiblings)
        } else if current.is_list_item && prev.is_list_item && current.indent < prev.indent {
            Some(SpacingRule::DeIndent)
        } else if current.is_top_level_item() && prev.is_top_level_item() {
            Some(SpacingRule::TopLevelSiblings)
        } else if current.is_top_level_item() && !prev.is_list_item {
            Some(SpacingRule::ParagraphToList)
        } else {
            None
        }
    }
}

pub struct LineSpacingReformatter;

impl LineSpacingReformatter {
    pub fn new() -> Self {
        Self
    }

    /// Emits every input line unchanged, with a blank line inserted wherever
    /// a `SpacingRule` fires.
    pub fn reformat(&self, text: &str) -> String {
        let mut lines: Vec<&str> = Vec::new();
        let mut prev = LineClass::start();

        for (number, raw) in text.split('\n').enumerate() {
            let current = LineClass::classify(raw);

            if let Some(rule) = SpacingRule::evaluate(&prev, &current) {
                trace!("Blank line before line {} ({:?})", number + 1, rule);
                lines.push("");
            }

            lines.push(raw);
            prev = current;
        }

        lines.join("\n")
    }
}

impl Default for LineSpacingReformatter {
    fn default() -> Self {
        Self::new()
    }
}
