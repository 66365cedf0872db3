// file: src/drafts/frontmatter.rs
// description: YAML frontmatter tag extraction from draft files
// reference: https://docs.rs/yaml-rust

use crate::error::{FormatError, Result};
use yaml_rust::{Yaml, YamlLoader};

pub struct FrontmatterParser;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frontmatter {
    pub tags: Vec<String>,
    /// Keys other than `tags`, in document order.
    pub other_keys: Vec<String>,
}

impl FrontmatterParser {
    pub fn new() -> Self {
        Self
    }

    /// Splits a leading `---` delimited YAML block off `content`.
    /// Returns `None` when the draft has no frontmatter.
    pub fn extract(&self, content: &str) -> Result<Option<(Frontmatter, String)>> {
        let Some(rest) = content
            .strip_prefix("---\n")
            .or_else(|| content.strip_prefix("---\r\n"))
        else {
            return Ok(None);
        };

        let Some((yaml_content, body)) = split_at_closing_fence(rest) else {
            return Ok(None);
        };

        let docs = YamlLoader::load_from_str(yaml_content)
            .map_err(|e| FormatError::Frontmatter(format!("YAML parse error: {}", e)))?;

        // A fenced block that is not a mapping is ordinary draft text.
        let Some(Yaml::Hash(hash)) = docs.first() else {
            return Ok(None);
        };

        let mut frontmatter = Frontmatter::default();
        for (key, value) in hash {
            let Yaml::String(key) = key else { continue };
            if key == "tags" {
                frontmatter.tags = parse_tags(value);
            } else {
                frontmatter.other_keys.push(key.clone());
            }
        }

        Ok(Some((
            frontmatter,
            body.trim_start_matches(['\r', '\n']).to_string(),
        )))
    }
}

impl Default for FrontmatterParser {
    fn default() -> Self {
        Self::new()
    }
}

fn split_at_closing_fence(rest: &str) -> Option<(&str, &str)> {
    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == "---" {
            return Some((&rest[..offset], &rest[offset + line.len()..]));
        }
        offset += line.len();
    }
    None
}

/// Accepts a YAML list or a comma separated string.
fn parse_tags(value: &Yaml) -> Vec<String> {
    match value {
        Yaml::Array(items) => items
            .iter()
            .filter_map(|item| match item {
                Yaml::String(s) => Some(s.clone()),
                Yaml::Integer(i) => Some(i.to_string()),
                _ => None,
            })
            .collect(),
        Yaml::String(s) => s
            .split(',')
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect(),
        _ => Vec::new(),
    }
}
