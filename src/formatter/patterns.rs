// file: src/formatter/patterns.rs
// description: compiled regex patterns for block extraction and inline rewriting
// reference: https://docs.rs/regex, https://docs.rs/fancy-regex

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Protected blocks. The code-block run needs lookaround, so it lives in fancy-regex.
    // The blank line before a block is not consumed, so back-to-back blocks
    // separated by one blank line both match.
    pub static ref CODE_BLOCK: fancy_regex::Regex = fancy_regex::Regex::new(
        r"(?:(?<=\n\n)|\A)((?:(?:(?> {4,})|\t)(?![-+*] ).*\n?)+)"
    ).expect("CODE_BLOCK regex is valid");

    pub static ref H2_HEADING: Regex = Regex::new(
        r"(?m)^## (.*)$"
    ).expect("H2_HEADING regex is valid");

    pub static ref H3_HEADING: Regex = Regex::new(
        r"(?m)^### (.*)$"
    ).expect("H3_HEADING regex is valid");

    pub static ref HORIZONTAL_RULE: Regex = Regex::new(
        r"(?m)^\* \* \*$"
    ).expect("HORIZONTAL_RULE regex is valid");

    // Inline syntax
    pub static ref BOLD_UNDERSCORE: Regex = Regex::new(
        r"__(.*?)__"
    ).expect("BOLD_UNDERSCORE regex is valid");

    pub static ref ITALIC_ASTERISK: fancy_regex::Regex = fancy_regex::Regex::new(
        r"(?<!\*)\*([^\s*].*?[^\s*])\*(?!\*)"
    ).expect("ITALIC_ASTERISK regex is valid");

    pub static ref DASH_RULE: Regex = Regex::new(
        r"(?m)^---$"
    ).expect("DASH_RULE regex is valid");

    // Anything shaped like `* *` or `* **` after the marker is left alone, so a
    // bullet whose text opens with bold keeps its `*` marker.
    pub static ref STAR_BULLET: fancy_regex::Regex = fancy_regex::Regex::new(
        r"(?m)^([ \t]*)\* (?! ?\* ?\*)"
    ).expect("STAR_BULLET regex is valid");

    // Line classification
    pub static ref LIST_ITEM: Regex = Regex::new(
        r"^\s*(?:[-+]|\d+\.)(?:\s|$)"
    ).expect("LIST_ITEM regex is valid");

    pub static ref ORDERED_ITEM: Regex = Regex::new(
        r"^\s*\d+\.(?:\s|$)"
    ).expect("ORDERED_ITEM regex is valid");

    // Cleanup
    pub static ref H1_WITHOUT_GAP: fancy_regex::Regex = fancy_regex::Regex::new(
        r"(?m)^(# .*)\n(?=\S)"
    ).expect("H1_WITHOUT_GAP regex is valid");

    pub static ref LOOSE_TOP_LEVEL_ITEMS: fancy_regex::Regex = fancy_regex::Regex::new(
        r"(?m)^(-[ \t].*)\n\n+(?=-[ \t])"
    ).expect("LOOSE_TOP_LEVEL_ITEMS regex is valid");

    pub static ref EXCESS_NEWLINES: Regex = Regex::new(
        r"\n{3,}"
    ).expect("EXCESS_NEWLINES regex is valid");
}

pub fn is_list_item(line: &str) -> bool {
    LIST_ITEM.is_match(line)
}

pub fn is_ordered_item(line: &str) -> bool {
    ORDERED_ITEM.is_match(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_item_pattern() {
        assert!(is_list_item("- item"));
        assert!(is_list_item("  + nested"));
        assert!(is_list_item("12. twelfth"));
        assert!(is_list_item("-"));
        assert!(!is_list_item("2024 was a year"));
        assert!(!is_list_item("-dash-word"));
        assert!(!is_list_item("* * *"));
    }

    #[test]
    fn test_ordered_pattern() {
        assert!(is_ordered_item("1. one"));
        assert!(is_ordered_item("   3. nested"));
        assert!(!is_ordered_item("- one"));
        assert!(!is_ordered_item("2.5 litres"));
        assert!(!is_ordered_item("3.14"));
    }

    #[test]
    fn test_code_block_skips_indented_bullets() {
        assert!(CODE_BLOCK.is_match("    let x = 1;").unwrap());
        assert!(CODE_BLOCK.is_match("\tfn main() {}").unwrap());
        assert!(!CODE_BLOCK.is_match("    - nested item").unwrap());
        assert!(!CODE_BLOCK.is_match("      * deeper item").unwrap());
    }

    #[test]
    fn test_code_block_requires_blank_line_or_start() {
        assert!(!CODE_BLOCK.is_match("para\n    continued").unwrap());
        assert!(CODE_BLOCK.is_match("para\n\n    code").unwrap());
    }

    #[test]
    fn test_code_block_leaves_preceding_blank_line() {
        let text = "Intro\n\n    first\n\n    second";
        let blocks: Vec<&str> = CODE_BLOCK
            .captures_iter(text)
            .map(|caps| caps.unwrap().get(1).unwrap().as_str())
            .collect();

        assert_eq!(blocks, vec!["    first\n", "    second"]);
    }

    #[test]
    fn test_italic_ignores_bold_and_rules() {
        assert!(ITALIC_ASTERISK.is_match("an *emphasised* word").unwrap());
        assert!(!ITALIC_ASTERISK.is_match("**already bold**").unwrap());
        assert!(!ITALIC_ASTERISK.is_match("* * *").unwrap());
    }

    #[test]
    fn test_star_bullet_skips_rule_shape() {
        assert!(STAR_BULLET.is_match("* item").unwrap());
        assert!(STAR_BULLET.is_match("   * nested").unwrap());
        assert!(!STAR_BULLET.is_match("* * *").unwrap());
        assert!(!STAR_BULLET.is_match("* ** text").unwrap());
        assert!(!STAR_BULLET.is_match("* **bold** item").unwrap());
    }
}
