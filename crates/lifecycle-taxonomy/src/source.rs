//! Taxonomy sources
//!
//! A source produces the raw JSON text; [`TaxonomySource::load`] parses it.
//! Loading is the only asynchronous step in the pipeline.

use crate::error::{TaxonomyError, TaxonomyResult};
use crate::model::TaxonomyDocument;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Something that can fetch a taxonomy document
#[async_trait]
pub trait TaxonomySource: Send + Sync {
    /// Short description used in diagnostics
    fn describe(&self) -> String;

    /// Fetch the raw JSON text
    async fn fetch(&self) -> TaxonomyResult<String>;

    /// Fetch and validate
    async fn load(&self) -> TaxonomyResult<TaxonomyDocument> {
        let text = self.fetch().await?;
        let doc = TaxonomyDocument::parse(&text)?;
        tracing::debug!(
            source = %self.describe(),
            stages = doc.stage_count(),
            substages = doc.substage_count(),
            tools = doc.tool_count(),
            "taxonomy loaded"
        );
        Ok(doc)
    }
}

/// Reads a JSON file from the local filesystem
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Source for a file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// File path
    #[inline]
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl TaxonomySource for FileSource {
    fn describe(&self) -> String {
        format!("file:{}", self.path.display())
    }

    async fn fetch(&self) -> TaxonomyResult<String> {
        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| TaxonomyError::io_error(&self.path, e))
    }
}

/// In-memory JSON text (embedded data, tests)
#[derive(Debug, Clone)]
pub struct StaticSource {
    name: String,
    text: String,
}

impl StaticSource {
    /// Source returning the given text
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

#[async_trait]
impl TaxonomySource for StaticSource {
    fn describe(&self) -> String {
        format!("static:{}", self.name)
    }

    async fn fetch(&self) -> TaxonomyResult<String> {
        Ok(self.text.clone())
    }
}
