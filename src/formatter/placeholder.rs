// file: src/formatter/placeholder.rs
// description: protected region bookkeeping and placeholder marker substitution
// reference: internal data structures

use crate::error::{FormatError, Result};
use std::collections::HashMap;
use std::fmt;

/// Opens every placeholder marker. Private-use code point, rejected in input.
pub const MARKER_OPEN: char = '\u{E000}';
/// Closes every placeholder marker.
pub const MARKER_CLOSE: char = '\u{E001}';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegionKind {
    CodeBlock,
    H2,
    H3,
    HRule,
}

impl RegionKind {
    pub const ALL: [RegionKind; 4] = [
        RegionKind::CodeBlock,
        RegionKind::H2,
        RegionKind::H3,
        RegionKind::HRule,
    ];

    fn tag(self) -> &'static str {
        match self {
            RegionKind::CodeBlock => "CODE",
            RegionKind::H2 => "H2",
            RegionKind::H3 => "H3",
            RegionKind::HRule => "HR",
        }
    }
}

impl fmt::Display for RegionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RegionKind::CodeBlock => "code block",
            RegionKind::H2 => "level-2 heading",
            RegionKind::H3 => "level-3 heading",
            RegionKind::HRule => "horizontal rule",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtectedRegion {
    pub kind: RegionKind,
    /// Sequence number within `kind`.
    pub index: usize,
    pub content: String,
    restored: bool,
}

impl ProtectedRegion {
    pub fn marker(&self) -> String {
        marker_for(self.kind, self.index)
    }

    pub fn is_restored(&self) -> bool {
        self.restored
    }
}

fn marker_for(kind: RegionKind, index: usize) -> String {
    format!("{}{}:{}{}", MARKER_OPEN, kind.tag(), index, MARKER_CLOSE)
}

/// Holds the regions lifted out of a document for one formatting run.
#[derive(Debug, Default)]
pub struct PlaceholderStore {
    regions: Vec<ProtectedRegion>,
    by_marker: HashMap<String, usize>,
}

impl PlaceholderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fails when `text` already carries marker characters, since a marker
    /// produced later could then be confused with document content.
    pub fn ensure_marker_free(text: &str) -> Result<()> {
        if text.contains([MARKER_OPEN, MARKER_CLOSE]) {
            return Err(FormatError::InvalidInput(
                "document contains reserved private-use characters U+E000/U+E001".to_string(),
            ));
        }
        Ok(())
    }

    /// Records `content` under `kind` and returns the marker that stands in for it.
    pub fn extract(&mut self, kind: RegionKind, content: impl Into<String>) -> String {
        let index = self.count(kind);
        let region = ProtectedRegion {
            kind,
            index,
            content: content.into(),
            restored: false,
        };
        let marker = region.marker();
        self.by_marker.insert(marker.clone(), self.regions.len());
        self.regions.push(region);
        marker
    }

    pub fn count(&self, kind: RegionKind) -> usize {
        self.regions.iter().filter(|r| r.kind == kind).count()
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn regions(&self, kind: RegionKind) -> impl Iterator<Item = &ProtectedRegion> {
        self.regions.iter().filter(move |r| r.kind == kind)
    }

    pub fn lookup(&self, marker: &str) -> Option<&ProtectedRegion> {
        self.by_marker.get(marker).map(|&i| &self.regions[i])
    }

    /// The region whose marker is the first non-whitespace content of `text`.
    pub fn leading_region(&self, text: &str) -> Option<&ProtectedRegion> {
        let rest = text.trim_start();
        if !rest.starts_with(MARKER_OPEN) {
            return None;
        }
        let end = rest.find(MARKER_CLOSE)? + MARKER_CLOSE.len_utf8();
        self.lookup(&rest[..end])
    }

    /// Replaces the first occurrence of each `kind` marker, in recording order,
    /// with `render(content)`. A marker missing from `text` leaves its region
    /// unrestored, which `verify` reports.
    pub fn restore_all<F>(&mut self, kind: RegionKind, text: &str, mut render: F) -> String
    where
        F: FnMut(&str) -> String,
    {
        let mut result = text.to_string();

        for region in self.regions.iter_mut().filter(|r| r.kind == kind) {
            if region.restored {
                continue;
            }
            let marker = region.marker();
            if let Some(pos) = result.find(&marker) {
                let rendered = render(&region.content);
                result.replace_range(pos..pos + marker.len(), &rendered);
                region.restored = true;
            }
        }

        result
    }

    /// Checks that every region was restored exactly once and that `text`
    /// holds no marker characters.
    pub fn verify(&self, text: &str) -> Result<()> {
        if let Some(region) = self.regions.iter().find(|r| !r.is_restored()) {
            return Err(FormatError::PlaceholderLeak {
                kind: region.kind,
                index: region.index,
            });
        }

        if let Some(start) = text.find(MARKER_OPEN) {
            let tail = &text[start..];
            let marker = match tail.find(MARKER_CLOSE) {
                Some(end) => &tail[..end + MARKER_CLOSE.len_utf8()],
                None => tail,
            };
            return Err(match self.lookup(marker) {
                Some(region) => FormatError::PlaceholderLeak {
                    kind: region.kind,
                    index: region.index,
                },
                None => FormatError::StrayMarker,
            });
        }

        if text.contains(MARKER_CLOSE) {
            return Err(FormatError::StrayMarker);
        }

        Ok(())
    }
}
