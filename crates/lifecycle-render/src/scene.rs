//! Keyed frames and the data join between them.
//!
//! Nodes are keyed by [`NodeId`], edges by their target node. Joining the
//! previous frame with the next yields which elements enter, update or exit.

use crate::tooltip::tooltip;
use indexmap::IndexMap;
use lifecycle_layout::{Layout, LayoutEdge, LayoutMode, Point, Polar};
use lifecycle_tree::{DiagramTree, NodeId, NodeKind};
use serde::{Deserialize, Serialize};

/// Everything needed to draw one node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeView {
    pub id: NodeId,
    pub name: String,
    pub kind: NodeKind,
    pub position: Point,
    pub polar: Option<Polar>,
    /// Holds collapsed children (drawn with the collapsed fill)
    pub has_hidden_children: bool,
    pub tooltip: String,
}

/// One renderable scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub mode: LayoutMode,
    pub width: f64,
    pub height: f64,
    pub centre: Point,
    pub nodes: IndexMap<NodeId, NodeView>,
    pub edges: Vec<LayoutEdge>,
}

impl Frame {
    /// Combine a layout with node payloads from the tree
    pub fn build(tree: &DiagramTree, layout: &Layout) -> Self {
        let nodes = layout
            .nodes
            .values()
            .filter_map(|placement| {
                let node = tree.get(placement.id)?;
                Some((
                    placement.id,
                    NodeView {
                        id: placement.id,
                        name: node.name().to_string(),
                        kind: node.kind(),
                        position: placement.position,
                        polar: placement.polar,
                        has_hidden_children: node.has_hidden_children(),
                        tooltip: tooltip(node.data()),
                    },
                ))
            })
            .collect();

        Self {
            mode: layout.mode,
            width: layout.width,
            height: layout.height,
            centre: layout.centre(),
            nodes,
            edges: layout.edges.clone(),
        }
    }

    /// Frame with nothing in it
    pub fn empty(mode: LayoutMode, width: f64, height: f64) -> Self {
        Self {
            mode,
            width,
            height,
            centre: Point::new(width / 2.0, height / 2.0),
            nodes: IndexMap::new(),
            edges: Vec::new(),
        }
    }

    #[inline]
    pub fn position(&self, id: NodeId) -> Option<Point> {
        self.nodes.get(&id).map(|n| n.position)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Result of joining two frames
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SceneDiff {
    /// In next, not in previous
    pub entered: Vec<NodeId>,
    /// In both (position or style may have changed)
    pub updated: Vec<NodeId>,
    /// In previous, not in next
    pub exited: Vec<NodeId>,
    /// Edge targets entering
    pub entered_edges: Vec<NodeId>,
    /// Edge targets exiting
    pub exited_edges: Vec<NodeId>,
}

impl SceneDiff {
    /// Nodes whose drawing changes at all
    pub fn changed(&self, previous: Option<&Frame>, next: &Frame) -> Vec<NodeId> {
        let mut out = self.entered.clone();
        out.extend(self.exited.iter().copied());
        if let Some(prev) = previous {
            out.extend(
                self.updated
                    .iter()
                    .copied()
                    .filter(|id| prev.nodes.get(id) != next.nodes.get(id)),
            );
        }
        out
    }

    /// Same node set on both sides; positions may still differ
    #[inline]
    pub fn membership_unchanged(&self) -> bool {
        self.entered.is_empty() && self.exited.is_empty()
    }
}

/// Join `previous` (if any) with `next`
pub fn join(previous: Option<&Frame>, next: &Frame) -> SceneDiff {
    let Some(prev) = previous else {
        return SceneDiff {
            entered: next.nodes.keys().copied().collect(),
            entered_edges: next.edges.iter().map(|e| e.target).collect(),
            ..SceneDiff::default()
        };
    };

    let (updated, entered): (Vec<NodeId>, Vec<NodeId>) = next
        .nodes
        .keys()
        .copied()
        .partition(|id| prev.nodes.contains_key(id));
    let exited = prev
        .nodes
        .keys()
        .filter(|id| !next.nodes.contains_key(*id))
        .copied()
        .collect();

    let prev_edges: Vec<NodeId> = prev.edges.iter().map(|e| e.target).collect();
    let next_edges: Vec<NodeId> = next.edges.iter().map(|e| e.target).collect();

    SceneDiff {
        entered,
        updated,
        exited,
        entered_edges: next_edges.iter().filter(|t| !prev_edges.contains(t)).copied().collect(),
        exited_edges: prev_edges.iter().filter(|t| !next_edges.contains(t)).copied().collect(),
    }
}
