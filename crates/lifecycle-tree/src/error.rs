use crate::types::{ExpansionState, NodeId};
use lifecycle_taxonomy::TaxonomyError;

/// Errors raised by tree operations
#[derive(Debug, thiserror::Error)]
pub enum TreeError {
    /// No node with this id in the tree
    #[error("node not found: {0}")]
    NodeNotFound(NodeId),

    /// Transition not permitted for this node
    #[error("illegal transition on {node}: {from:?} -> {to:?}")]
    IllegalTransition {
        /// Node the transition was attempted on
        node: NodeId,
        /// Current state
        from: ExpansionState,
        /// Requested state
        to: ExpansionState,
    },

    /// Input could not be turned into a tree
    #[error("taxonomy error: {0}")]
    Taxonomy(#[from] TaxonomyError),
}

/// Errors from the state machine rules alone
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StateMachineError {
    /// Transition not in the allowed set
    #[error("illegal transition")]
    IllegalTransition,
}

/// Result alias for tree operations
pub type TreeResult<T> = Result<T, TreeError>;
