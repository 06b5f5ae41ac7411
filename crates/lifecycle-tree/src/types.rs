use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable node identity.
///
/// Assigned in pre-order by the builder and never reassigned, so a renderer can
/// match nodes across frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Arena index
    #[inline]
    #[must_use]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

/// Level of a node in the taxonomy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Root,
    Stage,
    Substage,
    Tool,
}

impl NodeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Root => "root",
            NodeKind::Stage => "stage",
            NodeKind::Substage => "substage",
            NodeKind::Tool => "tool",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Visibility of a node's children
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpansionState {
    /// Children hidden (held)
    Collapsed,
    /// Children visible
    Expanded,
}

impl ExpansionState {
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            ExpansionState::Collapsed => ExpansionState::Expanded,
            ExpansionState::Expanded => ExpansionState::Collapsed,
        }
    }
}

/// How many levels below the root start expanded.
///
/// A node at depth `d` is expanded iff `d < depth`. The default of 1 expands
/// only the root, which leaves the stages visible and everything else held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpansionDepth(pub usize);

impl ExpansionDepth {
    /// Nothing expanded, only the root is visible
    pub const ROOT_ONLY: Self = Self(0);
    /// Root expanded, stages visible
    pub const STAGES: Self = Self(1);
    /// Root and stages expanded, substages visible
    pub const SUBSTAGES: Self = Self(2);

    #[inline]
    #[must_use]
    pub fn expands(self, depth: usize) -> bool {
        depth < self.0
    }
}

impl Default for ExpansionDepth {
    fn default() -> Self {
        Self::STAGES
    }
}
