//! Lifecycle Taxonomy
//!
//! Document model for the research-data-lifecycle taxonomy: stages, their
//! substage records, and the tools attached to each substage.
//!
//! # Example
//!
//! ```rust
//! use lifecycle_taxonomy::TaxonomyDocument;
//!
//! let doc: TaxonomyDocument = r#"{
//!     "PLAN": [{"substage": "DMP", "description": "Write a plan", "tools": ["DMPTool", ""]}]
//! }"#.parse().unwrap();
//!
//! assert_eq!(doc.stage_count(), 1);
//! assert_eq!(doc.tool_count(), 1);
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod model;
pub mod source;

pub use error::{MalformedReason, RecordLocation, TaxonomyError, TaxonomyResult};
pub use model::{SubstageRecord, TaxonomyDocument};
pub use source::{FileSource, StaticSource, TaxonomySource};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
