//! Lifecycle Viz
//!
//! Interactive research-data-lifecycle diagram:
//! - [`Viewer`]: loads a taxonomy and re-renders after every [`Action`]
//! - [`VizConfig`]: TOML configuration with defaults for every field
//! - [`DiagnosticSink`]: where load failures are reported
//! - [`DetailsTable`]: detail panel of the selected node
//!
//! # Example
//!
//! ```rust,no_run
//! use lifecycle_taxonomy::FileSource;
//! use lifecycle_viz::{Action, TracingSink, Viewer, VizConfig};
//!
//! # async fn run() -> lifecycle_viz::VizResult<()> {
//! let source = FileSource::new("data/lifecycle_data.json");
//! let mut viewer = Viewer::load(&source, VizConfig::default(), &TracingSink).await?;
//! viewer.dispatch(Action::ExpandAll)?;
//! println!("{}", viewer.svg());
//! # Ok(())
//! # }
//! ```

pub mod action;
pub mod config;
pub mod controller;
pub mod details;
pub mod diagnostics;
pub mod error;

pub use action::{Action, ActionSpec, ControlId};
pub use config::VizConfig;
pub use controller::Viewer;
pub use details::DetailsTable;
pub use diagnostics::{Diagnostic, DiagnosticSink, RecordingSink, TracingSink};
pub use error::{VizError, VizResult};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
