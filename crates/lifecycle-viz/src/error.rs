//! Error types for the viewer
//!
//! Wraps the lower layers and adds the controller's own failures:
//! - configuration that cannot be read or is out of range
//! - control identifiers and action strings that do not parse
//! - node names that do not exist in the loaded tree or are not on screen

use lifecycle_layout::LayoutError;
use lifecycle_taxonomy::TaxonomyError;
use lifecycle_tree::TreeError;
use std::path::PathBuf;

/// Main viewer error type
#[derive(Debug, thiserror::Error)]
pub enum VizError {
    /// Taxonomy could not be loaded
    #[error("load failed: {0}")]
    Load(#[from] TaxonomyError),

    /// Tree operation failed
    #[error("tree error: {0}")]
    Tree(#[from] TreeError),

    /// Layout could not be computed
    #[error("layout error: {0}")]
    Layout(#[from] LayoutError),

    /// Configuration file unreadable or invalid
    #[error("configuration error{}: {message}", path.as_ref().map(|p| format!(" in {}", p.display())).unwrap_or_default())]
    Config {
        /// File the configuration came from
        path: Option<PathBuf>,
        /// What is wrong
        message: String,
    },

    /// Control identifier not part of the host page contract
    #[error("unknown control: '{0}'")]
    UnknownControl(String),

    /// No node with this name
    #[error("unknown node: '{0}'")]
    UnknownNode(String),

    /// Node exists but a collapsed ancestor hides it
    #[error("node '{0}' is not visible")]
    NodeHidden(String),

    /// Action string does not parse
    #[error("invalid action '{input}': {reason}")]
    InvalidAction {
        /// Raw action text
        input: String,
        /// Why it was rejected
        reason: String,
    },
}

impl VizError {
    /// Create configuration error
    pub fn config(path: Option<PathBuf>, message: impl Into<String>) -> Self {
        Self::Config {
            path,
            message: message.into(),
        }
    }

    /// Create invalid-action error
    pub fn invalid_action(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidAction {
            input: input.into(),
            reason: reason.into(),
        }
    }
}

/// Result alias for viewer operations
pub type VizResult<T> = Result<T, VizError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = VizError::config(Some(PathBuf::from("viz.toml")), "zoom_step must be > 1");
        assert_eq!(err.to_string(), "configuration error in viz.toml: zoom_step must be > 1");
        let err = VizError::config(None, "bad");
        assert_eq!(err.to_string(), "configuration error: bad");
    }

    #[test]
    fn error_conversions() {
        let err: VizError = TaxonomyError::fetch("x", "down").into();
        assert!(matches!(err, VizError::Load(_)));
    }
}
