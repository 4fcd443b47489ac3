//! Case study content: record types, the loader seam and content errors.
//!
//! SYSTEM CONTEXT
//! ==============
//! The work page awaits a `CaseStudySource` once per request and hands the
//! returned records to the renderer untouched. Records are immutable values
//! that live for a single request.

pub mod date;
pub mod frontmatter;
pub mod loader;

use std::path::PathBuf;

use serde::Deserialize;

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced while loading or validating case study content.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// The content directory or a content file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A content file does not open with a `---` delimited frontmatter block.
    #[error("{}: missing frontmatter block", .path.display())]
    MissingFrontmatter { path: PathBuf },

    /// The frontmatter block is not valid case study YAML.
    #[error("{}: invalid frontmatter: {source}", .path.display())]
    Frontmatter {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// A date field is not a valid `YYYY-MM-DD` calendar date.
    #[error("invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    /// Two records share a client name, which must be unique per collection.
    #[error("duplicate case study client '{0}'")]
    DuplicateClient(String),
}

// =============================================================================
// RECORDS
// =============================================================================

/// Attributed quote attached to a case study.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Testimonial {
    pub author: String,
    pub content: String,
}

/// One client engagement shown as a card on the work page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CaseStudy {
    /// Client name. Unique within a loaded collection.
    pub client: String,
    /// Logo image URL.
    pub logo: String,
    pub service: String,
    /// ISO `YYYY-MM-DD` date.
    pub date: String,
    pub title: String,
    /// Summary paragraphs in display order.
    #[serde(default)]
    pub summary: Vec<String>,
    #[serde(default)]
    pub testimonial: Option<Testimonial>,
    /// Link to the full case study. Not rendered on the listing page.
    #[serde(default)]
    #[allow(dead_code)]
    pub href: Option<String>,
}

// =============================================================================
// SOURCE TRAIT
// =============================================================================

/// Asynchronous provider of the ordered case study collection.
#[async_trait::async_trait]
pub trait CaseStudySource: Send + Sync {
    /// Load every case study in display order.
    ///
    /// # Errors
    ///
    /// Returns a [`ContentError`] if the content store cannot be read or a
    /// record fails validation.
    async fn load_case_studies(&self) -> Result<Vec<CaseStudy>, ContentError>;
}
