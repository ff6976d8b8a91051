mod error;
mod path;

#[cfg(test)]
mod tests;

pub use error::PageError;
pub use path::ContentPath;

use crate::partition::{PartitionError, PartitionSet, partition_with};
use serde::Serialize;
use sha2::{Digest, Sha256};

/// Pages grouped for pagination
pub type PagesPartition<'a> = PartitionSet<'a, Page>;

/// A single content page as seen by the partitioner
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page {
    /// Normalized content path (e.g., "/section1/testpage1.md")
    pub path: String,
    /// First path segment, empty for pages at the content root
    pub section: String,
    /// Hex SHA-256 of the page body, if it was loaded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_hash: Option<String>,
}

impl Page {
    pub fn new(raw_path: &str) -> Result<Self, PageError> {
        let path = ContentPath::normalize(raw_path)?;
        let section = ContentPath::section(&path).to_string();

        Ok(Self {
            path,
            section,
            content_hash: None,
        })
    }

    /// Create a page and record the hash of its body
    pub fn with_content(raw_path: &str, content: &[u8]) -> Result<Self, PageError> {
        let mut page = Self::new(raw_path)?;
        page.content_hash = Some(hash_content(content));
        Ok(page)
    }

    /// File name without its extension
    pub fn name(&self) -> &str {
        let file = self.path.rsplit('/').next().unwrap_or_default();
        match file.rsplit_once('.') {
            Some((stem, _)) if !stem.is_empty() => stem,
            _ => file,
        }
    }
}

/// Compute SHA256 hash of page contents
pub fn hash_content(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    hex::encode(hasher.finalize())
}

/// Ordered collection of pages
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Pages(Vec<Page>);

impl Pages {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, page: Page) {
        self.0.push(page);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Page> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Page] {
        &self.0
    }

    /// Pages whose top-level section is `section`, in their original order
    pub fn in_section(&self, section: &str) -> Pages {
        self.0
            .iter()
            .filter(|p| p.section == section)
            .cloned()
            .collect()
    }

    /// Distinct sections in first-seen order
    pub fn sections(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for page in &self.0 {
            if !seen.contains(&page.section.as_str()) {
                seen.push(page.section.as_str());
            }
        }
        seen
    }

    /// Split the pages into consecutive groups of `size`
    pub fn partition_with(&self, size: i64) -> Result<PagesPartition<'_>, PartitionError> {
        partition_with(&self.0, size)
    }
}

impl From<Vec<Page>> for Pages {
    fn from(pages: Vec<Page>) -> Self {
        Self(pages)
    }
}

impl FromIterator<Page> for Pages {
    fn from_iter<I: IntoIterator<Item = Page>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Pages {
    type Item = Page;
    type IntoIter = std::vec::IntoIter<Page>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Pages {
    type Item = &'a Page;
    type IntoIter = std::slice::Iter<'a, Page>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl std::ops::Index<usize> for Pages {
    type Output = Page;

    fn index(&self, index: usize) -> &Page {
        &self.0[index]
    }
}
