//! Run accounting and the final directory listing.

use anyhow::{Context, Result};
use std::path::Path;

/// Success/failure tally for one run. Skipped files count as success.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub success: u32,
    pub failed: u32,
}

impl RunSummary {
    pub fn record(&mut self, ok: bool) {
        if ok {
            self.success += 1;
        } else {
            self.failed += 1;
        }
    }

    pub fn total(&self) -> u32 {
        self.success + self.failed
    }
}

/// One `*.ico` file present in the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconFile {
    pub name: String,
    pub size: u64,
}

/// Lists every `*.ico` file in `dir` (whole history, not just this run),
/// lexicographically by name. A missing directory is just an empty listing.
pub fn list_icons(dir: &Path) -> Result<Vec<IconFile>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }
    let mut icons = Vec::new();
    let entries =
        std::fs::read_dir(dir).with_context(|| format!("read output dir: {}", dir.display()))?;
    for entry in entries {
        let entry = entry?;
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("ico") {
            continue;
        }
        let name = match path.file_name().and_then(|n| n.to_str()) {
            Some(n) => n.to_string(),
            None => continue,
        };
        let size = entry.metadata()?.len();
        icons.push(IconFile { name, size });
    }
    icons.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(icons)
}
