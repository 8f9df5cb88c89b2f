//! README Splicing
//!
//! Replaces the sentinel-delimited region of a package README with a
//! rendered fragment. The region runs from the start marker's line to the
//! last line ending in the end marker; everything between is regenerated,
//! everything outside is preserved byte for byte.
//!
//! Files are always rewritten, even when the content did not change, so a
//! run's effect on disk never depends on prior state.

use std::path::Path;

use regex::{NoExpand, Regex};
use tracing::warn;

use crate::constants::sentinel;
use crate::types::Result;

/// Result of one README write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// Region replaced and content changed
    Updated,
    /// Region replaced; file already matched byte for byte
    Unchanged,
    /// No sentinel region; file rewritten with its old content
    MissingSentinels,
}

/// Result of one README comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadmeStatus {
    UpToDate,
    Stale,
    MissingSentinels,
}

pub struct ReadmeWriter {
    region: Regex,
}

impl ReadmeWriter {
    pub fn new() -> Result<Self> {
        let pattern = format!(
            "(?ms)^{}\n.*{}$",
            regex::escape(sentinel::START),
            regex::escape(sentinel::END)
        );
        Ok(Self {
            region: Regex::new(&pattern)?,
        })
    }

    /// Replace the sentinel region with the fragment.
    /// Returns the new content and whether a region was found.
    pub fn splice(&self, readme: &str, fragment: &str) -> (String, bool) {
        let replacement = format!("{}\n{}\n{}", sentinel::START, fragment, sentinel::END);

        if self.region.is_match(readme) {
            let next = self
                .region
                .replace(readme, NoExpand(&replacement))
                .into_owned();
            (next, true)
        } else {
            (readme.to_string(), false)
        }
    }

    /// Splice the fragment into the README on disk.
    /// Missing sentinels are warned about; the file is rewritten either way.
    pub async fn write(&self, path: &Path, fragment: &str) -> Result<WriteOutcome> {
        let readme = tokio::fs::read_to_string(path).await?;
        let (next, matched) = self.splice(&readme, fragment);

        let outcome = if !matched {
            warn!(
                "No sentinel region in {}; content left untouched",
                path.display()
            );
            WriteOutcome::MissingSentinels
        } else if next == readme {
            WriteOutcome::Unchanged
        } else {
            WriteOutcome::Updated
        };

        tokio::fs::write(path, &next).await?;
        Ok(outcome)
    }

    /// Compare a README against what a write would produce, without touching it
    pub async fn status(&self, path: &Path, fragment: &str) -> Result<ReadmeStatus> {
        let readme = tokio::fs::read_to_string(path).await?;
        let (next, matched) = self.splice(&readme, fragment);

        Ok(if !matched {
            ReadmeStatus::MissingSentinels
        } else if next == readme {
            ReadmeStatus::UpToDate
        } else {
            ReadmeStatus::Stale
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
