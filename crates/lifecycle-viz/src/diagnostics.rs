//! Diagnostic channel for failures the user should see.

use parking_lot::Mutex;
use std::sync::Arc;

/// One reported problem
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Where it came from (a data source description)
    pub source: String,
    /// Human-readable message
    pub message: String,
}

impl Diagnostic {
    /// Create a diagnostic
    pub fn new(source: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.source, self.message)
    }
}

/// Receives diagnostics
pub trait DiagnosticSink: Send + Sync {
    /// Report one diagnostic
    fn emit(&self, diagnostic: Diagnostic);
}

/// Default sink: logs at error level
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&self, diagnostic: Diagnostic) {
        tracing::error!(source = %diagnostic.source, "{}", diagnostic.message);
    }
}

/// Collects diagnostics in memory
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    recorded: Arc<Mutex<Vec<Diagnostic>>>,
}

impl RecordingSink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything emitted so far
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.recorded.lock().clone()
    }

    /// Number emitted so far
    pub fn len(&self) -> usize {
        self.recorded.lock().len()
    }

    /// Nothing emitted yet
    pub fn is_empty(&self) -> bool {
        self.recorded.lock().is_empty()
    }
}

impl DiagnosticSink for RecordingSink {
    fn emit(&self, diagnostic: Diagnostic) {
        self.recorded.lock().push(diagnostic);
    }
}
