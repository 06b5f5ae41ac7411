//! Lifecycle Tree
//!
//! Owned Root → Stage → Substage → Tool hierarchy with:
//! - stable [`NodeId`]s assigned at construction
//! - an explicit [`ExpansionState`] per node
//! - `toggle`, `expand_all`, `collapse_all`, `reset` and `expand_substages`
//!
//! # Example
//!
//! ```rust
//! use lifecycle_tree::{TreeBuilder, ExpansionState};
//!
//! let tree = TreeBuilder::new()
//!     .build_json(r#"{"PLAN": [{"substage": "DMP", "tools": ["DMPTool"]}]}"#)
//!     .unwrap();
//! let mut tree = tree;
//! let plan = tree.find_by_name("PLAN").unwrap();
//! assert_eq!(tree.toggle(plan).unwrap(), ExpansionState::Expanded);
//! ```

pub mod builder;
pub mod error;
pub mod state_machine;
pub mod tree;
pub mod types;

pub use builder::{build, TreeBuilder, ROOT_NAME};
pub use error::{StateMachineError, TreeError, TreeResult};
pub use tree::{DiagramTree, Node, NodeData};
pub use types::{ExpansionDepth, ExpansionState, NodeId, NodeKind};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
