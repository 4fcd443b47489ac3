//! Frontmatter extraction for Markdown content files.
//!
//! A content file opens with a `---` line, carries YAML metadata, and closes
//! the block with another `---` line. Everything after the closing delimiter
//! is the document body.

use std::path::Path;

use super::{CaseStudy, ContentError};

const DELIMITER: &str = "---";

/// Split `source` into its YAML frontmatter and the remaining body.
///
/// Returns `None` if the file does not start with a delimiter line or the
/// block is never closed.
#[must_use]
pub fn split_frontmatter(source: &str) -> Option<(&str, &str)> {
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);
    let rest = source.strip_prefix(DELIMITER)?;
    let rest = rest.strip_prefix("\r\n").or_else(|| rest.strip_prefix('\n'))?;

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end_matches(['\r', '\n']) == DELIMITER {
            return Some((&rest[..offset], &rest[offset + line.len()..]));
        }
        offset += line.len();
    }
    None
}

/// Parse a case study from a content file.
///
/// `slug` is the file stem; it supplies the default `href` when the
/// frontmatter does not set one.
///
/// # Errors
///
/// Returns [`ContentError::MissingFrontmatter`] or
/// [`ContentError::Frontmatter`] when the metadata block is absent or does
/// not describe a case study.
pub fn parse_case_study(path: &Path, slug: &str, source: &str) -> Result<CaseStudy, ContentError> {
    let (yaml, _body) =
        split_frontmatter(source).ok_or_else(|| ContentError::MissingFrontmatter { path: path.to_path_buf() })?;

    let mut case_study: CaseStudy = serde_yaml::from_str(yaml)
        .map_err(|source| ContentError::Frontmatter { path: path.to_path_buf(), source })?;

    if case_study.href.is_none() {
        case_study.href = Some(format!("/work/{slug}"));
    }
    Ok(case_study)
}

#[cfg(test)]
#[path = "frontmatter_test.rs"]
mod tests;
