// file: src/models/draft.rs
// description: draft input model and the handle returned by a draft sink
// reference: internal data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    pub content: String,
    pub tags: Vec<String>,
}

impl Draft {
    pub fn new(content: impl Into<String>, tags: Vec<String>) -> Self {
        let mut draft = Self {
            content: content.into(),
            tags: Vec::new(),
        };
        draft.add_tags(tags);
        draft
    }

    /// Appends tags, skipping blanks and ones already present.
    pub fn add_tags<I, S>(&mut self, tags: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for tag in tags {
            let tag = tag.as_ref().trim();
            if !tag.is_empty() && !self.tags.iter().any(|t| t == tag) {
                self.tags.push(tag.to_string());
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftHandle {
    pub id: Uuid,
    pub content_hash: String,
    pub created_at: DateTime<Utc>,
}

impl DraftHandle {
    pub fn new(content: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            content_hash: Self::compute_hash(content),
            created_at: Utc::now(),
        }
    }

    pub fn compute_hash(content: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(content.as_bytes());
        format!("{:x}", hasher.finalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_tags_deduplicated() {
        let draft = Draft::new(
            "# Test",
            vec!["work".to_string(), " work ".to_string(), "".to_string(), "ideas".to_string()],
        );
        assert_eq!(draft.tags, vec!["work", "ideas"]);
    }

    #[test]
    fn test_handle_creation() {
        let handle = DraftHandle::new("# Test Content");
        assert_eq!(handle.content_hash.len(), 64);
        assert_ne!(handle.id, DraftHandle::new("# Test Content").id);
    }

    #[test]
    fn test_hash_consistency() {
        let hash1 = DraftHandle::compute_hash("Test content");
        let hash2 = DraftHandle::compute_hash("Test content");
        assert_eq!(hash1, hash2);
    }
}
