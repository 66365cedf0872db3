// file: src/pipeline/processor.rs
// description: reads a draft, formats it and hands it to a sink as one unit of work
// reference: source -> formatter -> sink

use crate::drafts::{DraftSink, DraftSource};
use crate::error::Result;
use crate::formatter::MarkdownFormatter;
use crate::models::DraftHandle;
use crate::utils::{OperationTimer, Validator};
use std::time::Duration;
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct ProcessingResult {
    pub handle: DraftHandle,
    pub changed: bool,
    pub activated: bool,
}

pub struct DraftProcessor {
    formatter: MarkdownFormatter,
    activate: bool,
}

impl DraftProcessor {
    pub fn new(activate: bool) -> Self {
        Self {
            formatter: MarkdownFormatter::new(),
            activate,
        }
    }

    /// The sink is only touched once formatting has fully succeeded, so a
    /// failed run leaves it untouched.
    pub fn process<S, K>(&self, source: &S, sink: &mut K) -> Result<ProcessingResult>
    where
        S: DraftSource + ?Sized,
        K: DraftSink + ?Sized,
    {
        let timer = OperationTimer::new("reformat draft");

        let draft = source.read()?;
        debug!(
            "Formatting draft ({} bytes, tags: [{}]): {}",
            draft.content.len(),
            draft.tags.join(", "),
            Validator::truncate_text(draft.content.lines().next().unwrap_or(""), 60)
        );

        let formatted = self.formatter.format(&draft.content)?;
        let changed = formatted != draft.content;
        timer.warn_if_slow(Duration::from_secs(1), "formatting");

        let handle = sink.create_draft(&formatted, &draft.tags)?;
        if self.activate {
            sink.activate(&handle)?;
        }

        info!(
            "Draft {} {}",
            handle.id,
            if changed { "reformatted" } else { "already formatted" }
        );
        timer.finish();

        Ok(ProcessingResult {
            handle,
            changed,
            activated: self.activate,
        })
    }

    /// Reports whether the source draft is already in canonical form.
    pub fn check<S>(&self, source: &S) -> Result<bool>
    where
        S: DraftSource + ?Sized,
    {
        let draft = source.read()?;
        self.formatter.is_formatted(&draft.content)
    }
}

impl Default for DraftProcessor {
    fn default() -> Self {
        Self::new(true)
    }
}
