// file: src/formatter/cleanup.rs
// description: final touch-up pass over restored text
// reference: https://docs.rs/fancy-regex

use super::patterns::{EXCESS_NEWLINES, H1_WITHOUT_GAP, LOOSE_TOP_LEVEL_ITEMS};
use crate::error::Result;

pub struct FinalCleanup;

impl FinalCleanup {
    pub fn new() -> Self {
        Self
    }

    /// Heading and list fix-ups run before collapsing, since either may leave
    /// runs of newlines behind. `opens_with_code` keeps the indentation of the
    /// first line, which belongs to a restored code block.
    pub fn apply(&self, text: &str, opens_with_code: bool) -> Result<String> {
        let text = self.separate_title(text)?;
        let text = self.tighten_top_level_items(&text)?;
        let text = self.collapse_blank_lines(&text);
        let text = if opens_with_code {
            trim_leading_blank_lines(&text)
        } else {
            text.trim_start()
        };
        Ok(terminate(text))
    }

    pub fn separate_title(&self, text: &str) -> Result<String> {
        let replaced = H1_WITHOUT_GAP.try_replacen(text, 0, |caps: &fancy_regex::Captures| {
            format!("{}\n\n", caps.get(1).map_or("", |m| m.as_str()))
        })?;
        Ok(replaced.into_owned())
    }

    pub fn tighten_top_level_items(&self, text: &str) -> Result<String> {
        let replaced =
            LOOSE_TOP_LEVEL_ITEMS.try_replacen(text, 0, |caps: &fancy_regex::Captures| {
                format!("{}\n", caps.get(1).map_or("", |m| m.as_str()))
            })?;
        Ok(replaced.into_owned())
    }

    pub fn collapse_blank_lines(&self, text: &str) -> String {
        EXCESS_NEWLINES.replace_all(text, "\n\n").into_owned()
    }
}

impl Default for FinalCleanup {
    fn default() -> Self {
        Self::new()
    }
}

/// Removes whitespace-only lines at the start; the first content line keeps
/// its indentation.
fn trim_leading_blank_lines(text: &str) -> &str {
    match text.find(|c: char| !c.is_whitespace()) {
        Some(first) => {
            let start = text[..first].rfind('\n').map_or(0, |nl| nl + 1);
            &text[start..]
        }
        None => "",
    }
}

/// Ends a non-empty document with exactly one newline.
fn terminate(text: &str) -> String {
    let content_end = text.trim_end().len();
    let line_end = text[content_end..]
        .find('\n')
        .map_or(text.len(), |nl| content_end + nl);

    let mut out = text[..line_end].to_string();
    if !out.is_empty() {
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn cleanup(text: &str) -> String {
        FinalCleanup::new().apply(text, false).unwrap()
    }

    #[test]
    fn test_title_gets_blank_line() {
        assert_eq!(cleanup("# Title\nText"), "# Title\n\nText\n");
        assert_eq!(cleanup("# Title\n\nText"), "# Title\n\nText\n");
        assert_eq!(cleanup("# Title"), "# Title\n");
    }

    #[test]
    fn test_consecutive_titles() {
        assert_eq!(cleanup("# One\n# Two\nx"), "# One\n\n# Two\n\nx\n");
    }

    #[test]
    fn test_top_level_items_are_tightened() {
        assert_eq!(cleanup("- a\n\n- b\n\n\n- c"), "- a\n- b\n- c\n");
        assert_eq!(cleanup("1. a\n\n2. b"), "1. a\n\n2. b\n");
        assert_eq!(cleanup("  - child\n\n- parent"), "  - child\n\n- parent\n");
    }

    #[test]
    fn test_five_newlines_collapse() {
        assert_eq!(cleanup("a\n\n\n\n\nb"), "a\n\nb\n");
    }

    #[test]
    fn test_leading_whitespace_trimmed() {
        assert_eq!(cleanup("\n\n\n  \nText"), "Text\n");
        assert_eq!(cleanup(" Leading space text"), "Leading space text\n");
        assert_eq!(cleanup("\n\t  Text"), "Text\n");
    }

    #[test]
    fn test_leading_code_keeps_indentation() {
        let out = FinalCleanup::new().apply("\n\n    code\n", true).unwrap();
        assert_eq!(out, "    code\n");
    }

    #[test]
    fn test_trailing_whitespace_normalized() {
        assert_eq!(cleanup("Text  \n\n  \n"), "Text  \n");
        assert_eq!(cleanup(""), "");
        assert_eq!(cleanup("\n \n"), "");
    }
}
