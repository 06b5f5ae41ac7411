//! Error types for taxonomy loading
//!
//! Covers the three ways a load can fail:
//! - the source could not be read (IO or fetch failure)
//! - the payload is not JSON
//! - the JSON does not have the stage → substage record shape

use std::fmt::{self, Display, Formatter};
use std::path::PathBuf;

/// Errors raised while fetching or validating a taxonomy document
#[derive(Debug, thiserror::Error)]
pub enum TaxonomyError {
    /// IO error reading a file source
    #[error("io error reading {path}: {source}")]
    Io {
        /// Path that failed
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Source could not produce a payload
    #[error("fetch failed for {source_name}: {message}")]
    Fetch {
        /// Human-readable source description
        source_name: String,
        /// Failure message
        message: String,
    },

    /// Payload is not valid JSON
    #[error("invalid JSON: {0}")]
    Syntax(#[from] serde_json::Error),

    /// JSON is valid but not a taxonomy
    #[error("malformed taxonomy at {location}: {reason}")]
    Malformed {
        /// Where in the document the problem is
        location: RecordLocation,
        /// What is wrong
        reason: MalformedReason,
    },
}

impl TaxonomyError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create fetch error
    pub fn fetch(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Fetch {
            source_name: source_name.into(),
            message: message.into(),
        }
    }

    /// Create malformed-input error
    #[must_use]
    pub fn malformed(location: RecordLocation, reason: MalformedReason) -> Self {
        Self::Malformed { location, reason }
    }

    /// True for shape errors (as opposed to transport or syntax errors)
    #[inline]
    #[must_use]
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::Malformed { .. })
    }
}

/// Why a record was rejected
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MalformedReason {
    /// Required field absent
    #[error("missing field '{0}'")]
    MissingField(&'static str),

    /// Value has the wrong JSON type
    #[error("expected {expected}, found {found}")]
    WrongType {
        /// Expected JSON type
        expected: &'static str,
        /// JSON type actually present
        found: &'static str,
    },
}

/// Position of a problem inside the document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordLocation {
    /// Stage key, if the problem is below the document root
    pub stage: Option<String>,
    /// Substage record index within the stage
    pub record: Option<usize>,
    /// Field within the record
    pub field: Option<&'static str>,
    /// Entry index within the `tools` array
    pub tool: Option<usize>,
}

impl RecordLocation {
    /// Document root
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    /// Stage value
    #[must_use]
    pub fn stage(stage: &str) -> Self {
        Self {
            stage: Some(stage.to_string()),
            ..Self::default()
        }
    }

    /// Substage record within a stage
    #[must_use]
    pub fn record(stage: &str, record: usize) -> Self {
        Self {
            record: Some(record),
            ..Self::stage(stage)
        }
    }

    /// Narrow to a field
    #[must_use]
    pub fn with_field(mut self, field: &'static str) -> Self {
        self.field = Some(field);
        self
    }

    /// Narrow to a tool entry
    #[must_use]
    pub fn with_tool(mut self, tool: usize) -> Self {
        self.tool = Some(tool);
        self
    }
}

impl Display for RecordLocation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let Some(stage) = &self.stage else {
            return f.write_str("document root");
        };
        write!(f, "stage '{stage}'")?;
        if let Some(record) = self.record {
            write!(f, " record {record}")?;
        }
        if let Some(field) = self.field {
            write!(f, " field '{field}'")?;
        }
        if let Some(tool) = self.tool {
            write!(f, "[{tool}]")?;
        }
        Ok(())
    }
}

/// Result alias for taxonomy operations
pub type TaxonomyResult<T> = Result<T, TaxonomyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_display() {
        assert_eq!(RecordLocation::root().to_string(), "document root");
        assert_eq!(RecordLocation::stage("PLAN").to_string(), "stage 'PLAN'");
        let loc = RecordLocation::record("PLAN", 2).with_field("tools").with_tool(1);
        assert_eq!(loc.to_string(), "stage 'PLAN' record 2 field 'tools'[1]");
    }

    #[test]
    fn malformed_error_display() {
        let err = TaxonomyError::malformed(
            RecordLocation::record("COLLECT", 0).with_field("tools"),
            MalformedReason::MissingField("tools"),
        );
        assert_eq!(
            err.to_string(),
            "malformed taxonomy at stage 'COLLECT' record 0 field 'tools': missing field 'tools'"
        );
        assert!(err.is_malformed());
    }

    #[test]
    fn fetch_error_is_not_malformed() {
        let err = TaxonomyError::fetch("memory", "connection refused");
        assert!(!err.is_malformed());
        assert!(err.to_string().contains("connection refused"));
    }
}
