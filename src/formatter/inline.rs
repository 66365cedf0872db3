// file: src/formatter/inline.rs
// description: emphasis, rule literal and bullet marker standardization
// reference: https://docs.rs/fancy-regex

use super::patterns::{BOLD_UNDERSCORE, DASH_RULE, ITALIC_ASTERISK, STAR_BULLET};
use super::placeholder::{PlaceholderStore, RegionKind};
use crate::error::Result;
use regex::Captures;

/// Rewrites inline syntax on text whose protected regions are already
/// replaced by markers.
pub struct InlineNormalizer;

impl InlineNormalizer {
    pub fn new() -> Self {
        Self
    }

    pub fn normalize(&self, text: &str, store: &mut PlaceholderStore) -> Result<String> {
        let text = self.normalize_bold(text);
        let text = self.normalize_italic(&text)?;
        let text = self.normalize_rules(&text, store);
        self.normalize_bullets(&text)
    }

    /// `__text__` becomes `**text**`.
    pub fn normalize_bold(&self, text: &str) -> String {
        BOLD_UNDERSCORE.replace_all(text, "**$1**").into_owned()
    }

    /// `*word*` becomes `_word_`; must run after `normalize_bold`.
    pub fn normalize_italic(&self, text: &str) -> Result<String> {
        let replaced = ITALIC_ASTERISK.try_replacen(text, 0, |caps: &fancy_regex::Captures| {
            format!("_{}_", caps.get(1).map_or("", |m| m.as_str()))
        })?;
        Ok(replaced.into_owned())
    }

    /// A `---` line becomes a protected `* * *` rule.
    pub fn normalize_rules(&self, text: &str, store: &mut PlaceholderStore) -> String {
        DASH_RULE
            .replace_all(text, |_: &Captures| store.extract(RegionKind::HRule, "* * *"))
            .into_owned()
    }

    /// A leading `* ` bullet becomes `- ` at the same indentation.
    pub fn normalize_bullets(&self, text: &str) -> Result<String> {
        let replaced = STAR_BULLET.try_replacen(text, 0, |caps: &fancy_regex::Captures| {
            format!("{}- ", caps.get(1).map_or("", |m| m.as_str()))
        })?;
        Ok(replaced.into_owned())
    }
}

impl Default for InlineNormalizer {
    fn default() -> Self {
        Self::new()
    }
}
