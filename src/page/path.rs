use super::PageError;

pub struct ContentPath;

impl ContentPath {
    /// Normalize a path relative to the content root.
    ///
    /// Accepts both `/` and `\` as separators and an optional leading `/`.
    /// Rejects:
    /// - Parent directory traversal (`..`)
    /// - Drive prefixes (`C:`)
    /// - Paths with no file component
    ///
    /// The result always starts with `/` and uses `/` between segments,
    /// e.g. `section1//./testpage1.md` becomes `/section1/testpage1.md`.
    pub fn normalize(raw_path: &str) -> Result<String, PageError> {
        if raw_path.trim().is_empty() {
            return Err(PageError::InvalidPath("Empty path".to_string()));
        }

        let mut segments = Vec::new();

        for (position, segment) in raw_path.split(['/', '\\']).enumerate() {
            match segment {
                "" | "." => continue,
                ".." => {
                    return Err(PageError::InvalidPath(format!(
                        "Parent directory traversal not allowed: {}",
                        raw_path
                    )));
                }
                drive if position == 0 && drive.ends_with(':') => {
                    return Err(PageError::InvalidPath(format!(
                        "Drive prefix not allowed: {}",
                        raw_path
                    )));
                }
                part => segments.push(part),
            }
        }

        if segments.is_empty() {
            return Err(PageError::InvalidPath(format!(
                "No valid components: {}",
                raw_path
            )));
        }

        Ok(format!("/{}", segments.join("/")))
    }

    /// Top-level section of a normalized path.
    ///
    /// `/section1/testpage1.md` is in `section1`; a file directly under the
    /// content root (`/about.md`) has no section and yields `""`.
    pub fn section(normalized: &str) -> &str {
        let trimmed = normalized.trim_start_matches('/');
        match trimmed.split_once('/') {
            Some((section, _)) => section,
            None => "",
        }
    }
}
