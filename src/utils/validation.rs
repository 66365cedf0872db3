// file: src/utils/validation.rs
// description: draft input validation utilities
// reference: input validation patterns

use crate::error::{FormatError, Result};
use std::path::Path;

pub struct Validator;

impl Validator {
    pub fn validate_file_path(path: &Path) -> Result<()> {
        if path.as_os_str().is_empty() {
            return Err(FormatError::InvalidInput("Empty draft path".to_string()));
        }

        if !path.exists() {
            return Err(FormatError::Validation(format!(
                "Draft does not exist: {}",
                path.display()
            )));
        }

        if !path.is_file() {
            return Err(FormatError::Validation(format!(
                "Path is not a file: {}",
                path.display()
            )));
        }

        Ok(())
    }

    pub fn validate_draft_extension(path: &Path) -> Result<()> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("md") | Some("markdown") | Some("txt") => Ok(()),
            _ => Err(FormatError::Validation(format!(
                "File is not a markdown draft: {}",
                path.display()
            ))),
        }
    }

    /// `max_bytes == 0` means unlimited.
    pub fn validate_file_size(size: u64, max_bytes: u64) -> Result<()> {
        if max_bytes > 0 && size > max_bytes {
            return Err(FormatError::InvalidInput(format!(
                "Draft too large ({} bytes, limit {} bytes)",
                size, max_bytes
            )));
        }
        Ok(())
    }

    pub fn truncate_text(text: &str, max_chars: usize) -> String {
        if text.chars().count() <= max_chars {
            text.to_string()
        } else {
            let head: String = text.chars().take(max_chars).collect();
            format!("{}...", head)
        }
    }
}
