//! Filesystem-backed case study source.
//!
//! DESIGN
//! ======
//! Every `*.md` file directly inside the content directory is one case
//! study. The directory is re-read on every call so content edits show up
//! without a restart. Validation happens here, before rendering: dates must
//! parse and client names must be unique. The collection is ordered newest
//! first (ties by file stem) so the renderer can keep whatever order it gets.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use time::Date;

use super::date::parse_date;
use super::frontmatter::parse_case_study;
use super::{CaseStudy, CaseStudySource, ContentError};

const CONTENT_EXTENSION: &str = "md";

/// Loads case studies from Markdown files with YAML frontmatter.
#[derive(Debug, Clone)]
pub struct FsCaseStudyLoader {
    dir: PathBuf,
}

impl FsCaseStudyLoader {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

#[async_trait::async_trait]
impl CaseStudySource for FsCaseStudyLoader {
    async fn load_case_studies(&self) -> Result<Vec<CaseStudy>, ContentError> {
        let mut entries = tokio::fs::read_dir(&self.dir).await.map_err(|source| io_error(&self.dir, source))?;
        let mut loaded = Vec::new();

        while let Some(entry) = entries.next_entry().await.map_err(|source| io_error(&self.dir, source))? {
            let path = entry.path();
            if !is_content_file(&path) {
                continue;
            }
            if !entry.file_type().await.map_err(|source| io_error(&path, source))?.is_file() {
                continue;
            }
            let Some(slug) = path.file_stem().and_then(|s| s.to_str()).map(str::to_owned) else {
                continue;
            };

            let source = tokio::fs::read_to_string(&path).await.map_err(|source| io_error(&path, source))?;
            let case_study = parse_case_study(&path, &slug, &source)?;
            loaded.push((slug, case_study));
        }

        let ordered = order_case_studies(loaded)?;
        tracing::debug!(dir = %self.dir.display(), count = ordered.len(), "case studies loaded");
        Ok(ordered)
    }
}

fn io_error(path: &Path, source: std::io::Error) -> ContentError {
    ContentError::Io { path: path.to_path_buf(), source }
}

fn is_content_file(path: &Path) -> bool {
    path.extension().and_then(|ext| ext.to_str()) == Some(CONTENT_EXTENSION)
}

/// Validate a loaded batch and put it in display order: newest date first,
/// ties broken by slug.
///
/// # Errors
///
/// Returns [`ContentError::InvalidDate`] for an unparsable date and
/// [`ContentError::DuplicateClient`] when two records share a client name.
pub(crate) fn order_case_studies(loaded: Vec<(String, CaseStudy)>) -> Result<Vec<CaseStudy>, ContentError> {
    let mut seen = HashSet::with_capacity(loaded.len());
    let mut dated: Vec<(Date, String, CaseStudy)> = Vec::with_capacity(loaded.len());

    for (slug, case_study) in loaded {
        if !seen.insert(case_study.client.clone()) {
            return Err(ContentError::DuplicateClient(case_study.client));
        }
        let date = parse_date(&case_study.date)?;
        dated.push((date, slug, case_study));
    }

    dated.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.cmp(&b.1)));
    Ok(dated.into_iter().map(|(_, _, case_study)| case_study).collect())
}

#[cfg(test)]
#[path = "loader_test.rs"]
mod tests;
