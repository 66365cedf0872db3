// file: src/drafts/store.rs
// description: draft sinks writing to a directory store or any writer
// reference: https://docs.rs/serde_json

use super::DraftSink;
use crate::config::StoreConfig;
use crate::error::{FormatError, Result};
use crate::models::{Draft, DraftHandle};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;
use uuid::Uuid;

const ACTIVE_FILE: &str = "ACTIVE";

/// Sidecar metadata written next to every stored draft.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftRecord {
    #[serde(flatten)]
    pub handle: DraftHandle,
    pub tags: Vec<String>,
}

/// Stores each draft as `<id>.md` plus `<id>.json` under one root directory.
#[derive(Debug, Clone)]
pub struct FileDraftStore {
    root: PathBuf,
    pretty: bool,
}

impl FileDraftStore {
    pub fn new(config: &StoreConfig) -> Result<Self> {
        fs::create_dir_all(&config.root)?;
        Ok(Self {
            root: config.root.clone(),
            pretty: config.pretty_metadata,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn content_path(&self, id: &Uuid) -> PathBuf {
        self.root.join(format!("{}.md", id))
    }

    fn record_path(&self, id: &Uuid) -> PathBuf {
        self.root.join(format!("{}.json", id))
    }

    /// Writes through a temporary file so readers never see a partial draft.
    fn write_atomic(&self, path: &Path, bytes: &[u8]) -> Result<()> {
        let tmp = path.with_extension("tmp");
        fs::write(&tmp, bytes)?;
        fs::rename(&tmp, path)?;
        Ok(())
    }

    pub fn load_record(&self, id: &Uuid) -> Result<DraftRecord> {
        let raw = fs::read_to_string(self.record_path(id))?;
        Ok(serde_json::from_str(&raw)?)
    }

    pub fn load(&self, id: &Uuid) -> Result<Draft> {
        let record = self.load_record(id)?;
        let content = fs::read_to_string(self.content_path(id))?;
        Ok(Draft::new(content, record.tags))
    }

    /// The record of the currently active draft, if any draft was activated.
    pub fn active(&self) -> Result<Option<DraftRecord>> {
        let path = self.root.join(ACTIVE_FILE);
        if !path.exists() {
            return Ok(None);
        }

        let raw = fs::read_to_string(&path)?;
        let id = Uuid::parse_str(raw.trim()).map_err(|e| {
            FormatError::Validation(format!("Corrupt active marker {}: {}", path.display(), e))
        })?;
        self.load_record(&id).map(Some)
    }
}

impl DraftSink for FileDraftStore {
    fn create_draft(&mut self, content: &str, tags: &[String]) -> Result<DraftHandle> {
        let handle = DraftHandle::new(content);
        let record = DraftRecord {
            handle: handle.clone(),
            tags: tags.to_vec(),
        };

        let json = if self.pretty {
            serde_json::to_vec_pretty(&record)?
        } else {
            serde_json::to_vec(&record)?
        };

        self.write_atomic(&self.content_path(&handle.id), content.as_bytes())?;
        self.write_atomic(&self.record_path(&handle.id), &json)?;

        info!("Created draft {} with {} tags", handle.id, tags.len());
        Ok(handle)
    }

    fn activate(&mut self, handle: &DraftHandle) -> Result<()> {
        if !self.record_path(&handle.id).exists() {
            return Err(FormatError::Validation(format!(
                "Cannot activate unknown draft {}",
                handle.id
            )));
        }

        self.write_atomic(&self.root.join(ACTIVE_FILE), handle.id.to_string().as_bytes())?;
        info!("Activated draft {}", handle.id);
        Ok(())
    }
}

/// Writes the formatted content to `W`; tags are not persisted.
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> DraftSink for WriterSink<W> {
    fn create_draft(&mut self, content: &str, _tags: &[String]) -> Result<DraftHandle> {
        self.writer.write_all(content.as_bytes())?;
        self.writer.flush()?;
        Ok(DraftHandle::new(content))
    }

    fn activate(&mut self, handle: &DraftHandle) -> Result<()> {
        info!("Draft {} written to output", handle.id);
        Ok(())
    }
}
