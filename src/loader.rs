use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::{DirEntry, WalkDir};

use crate::page::{Page, Pages};

/// Extensions treated as content pages unless overridden
pub const DEFAULT_EXTENSIONS: [&str; 4] = ["md", "markdown", "html", "htm"];

/// Files above this size are skipped (10 MB)
pub const DEFAULT_MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Reads a content directory into an ordered [`Pages`] collection
pub struct ContentLoader {
    root: PathBuf,
    extensions: Vec<String>,
    max_file_size: u64,
}

impl ContentLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            max_file_size: DEFAULT_MAX_FILE_SIZE,
        }
    }

    /// Replace the accepted extensions (without dot, case-insensitive)
    pub fn extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = extensions
            .into_iter()
            .map(|e| e.into().to_lowercase())
            .collect();
        self
    }

    pub fn max_file_size(mut self, size: u64) -> Self {
        self.max_file_size = size;
        self
    }

    /// Walk the content root and build pages.
    ///
    /// Entries are visited in file-name order, so the same tree always
    /// produces the same page sequence.
    pub fn load(&self) -> Result<Pages> {
        info!(root = %self.root.display(), "Scanning content directory");

        if !self.root.is_dir() {
            anyhow::bail!("Content directory not found: {}", self.root.display());
        }

        let mut pages = Pages::new();
        let mut skipped = 0u32;

        for entry in WalkDir::new(&self.root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !should_ignore(e))
        {
            let entry = entry.context("Failed to read directory entry")?;
            let path = entry.path();

            if !entry.file_type().is_file() || !self.accepts(path) {
                continue;
            }

            let size = entry
                .metadata()
                .with_context(|| format!("Failed to get metadata for {}", path.display()))?
                .len();
            if size > self.max_file_size {
                warn!(path = %path.display(), size, max = self.max_file_size, "Skipping oversized file");
                skipped += 1;
                continue;
            }

            let content =
                fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))?;

            let relative = path.strip_prefix(&self.root).unwrap_or(path);
            let page = Page::with_content(&relative.to_string_lossy(), &content)
                .with_context(|| format!("Invalid content path: {}", relative.display()))?;

            debug!(path = %page.path, section = %page.section, "Loaded page");
            pages.push(page);
        }

        info!(pages = pages.len(), skipped, "Content scan complete");
        Ok(pages)
    }

    fn accepts(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
            .unwrap_or(false)
    }
}

/// Check if a directory entry should be skipped
fn should_ignore(entry: &DirEntry) -> bool {
    let name = entry.file_name().to_string_lossy();
    name.starts_with('.') || name.ends_with('~')
}
