//! Owned diagram tree
//!
//! Nodes live in an arena indexed by [`NodeId`]. Each node owns its full,
//! constant child list plus an [`ExpansionState`]; "visible" and "held" children
//! are two views of that one list selected by the state, so they can never
//! alias or drift apart.

use crate::error::{TreeError, TreeResult};
use crate::state_machine::validate_transition;
use crate::types::{ExpansionDepth, ExpansionState, NodeId, NodeKind};
use std::fmt::Write as _;

/// Payload carried by a node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeData {
    pub name: String,
    pub kind: NodeKind,
    pub description: Option<String>,
    /// Non-empty tool names (substages only)
    pub tools: Vec<String>,
}

impl NodeData {
    pub fn new(name: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            description: None,
            tools: Vec::new(),
        }
    }
}

/// A node record in the arena
#[derive(Debug, Clone)]
pub struct Node {
    id: NodeId,
    parent: Option<NodeId>,
    depth: usize,
    data: NodeData,
    children: Vec<NodeId>,
    state: ExpansionState,
}

impl Node {
    #[inline]
    pub fn id(&self) -> NodeId {
        self.id
    }

    #[inline]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    #[inline]
    pub fn data(&self) -> &NodeData {
        &self.data
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.data.name
    }

    #[inline]
    pub fn kind(&self) -> NodeKind {
        self.data.kind
    }

    #[inline]
    pub fn state(&self) -> ExpansionState {
        self.state
    }

    /// Every child, visible or not
    #[inline]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Children currently shown
    pub fn visible_children(&self) -> &[NodeId] {
        match self.state {
            ExpansionState::Expanded => &self.children,
            ExpansionState::Collapsed => &[],
        }
    }

    /// Children currently stashed
    pub fn held_children(&self) -> &[NodeId] {
        match self.state {
            ExpansionState::Expanded => &[],
            ExpansionState::Collapsed => &self.children,
        }
    }

    /// Drives the "collapsed" fill in the renderer
    #[inline]
    pub fn has_hidden_children(&self) -> bool {
        !self.held_children().is_empty()
    }
}

/// Rooted lifecycle tree
#[derive(Debug, Clone)]
pub struct DiagramTree {
    nodes: Vec<Node>,
}

impl DiagramTree {
    /// Tree with a single root node
    pub(crate) fn with_root(data: NodeData) -> Self {
        Self {
            nodes: vec![Node {
                id: NodeId(0),
                parent: None,
                depth: 0,
                data,
                children: Vec::new(),
                state: ExpansionState::Collapsed,
            }],
        }
    }

    /// Append a child; ids follow insertion order
    pub(crate) fn push_child(&mut self, parent: NodeId, data: NodeData) -> NodeId {
        let id = NodeId(u32::try_from(self.nodes.len()).unwrap_or(u32::MAX));
        let depth = self.nodes[parent.index()].depth + 1;
        self.nodes.push(Node {
            id,
            parent: Some(parent),
            depth,
            data,
            children: Vec::new(),
            state: ExpansionState::Collapsed,
        });
        self.nodes[parent.index()].children.push(id);
        id
    }

    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    pub fn node(&self, id: NodeId) -> TreeResult<&Node> {
        self.get(id).ok_or(TreeError::NodeNotFound(id))
    }

    /// All nodes in id (pre-order) order
    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// First node in pre-order with this name
    pub fn find_by_name(&self, name: &str) -> Option<NodeId> {
        self.nodes.iter().find(|n| n.name() == name).map(Node::id)
    }

    /// Number of tool leaves
    pub fn tool_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.kind() == NodeKind::Tool).count()
    }

    pub fn max_depth(&self) -> usize {
        self.nodes.iter().map(Node::depth).max().unwrap_or(0)
    }

    /// Strict descendants of `id`, pre-order
    pub fn descendants(&self, id: NodeId) -> TreeResult<Vec<NodeId>> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.node(id)?.children.iter().rev().copied().collect();
        while let Some(next) = stack.pop() {
            out.push(next);
            stack.extend(self.nodes[next.index()].children.iter().rev());
        }
        Ok(out)
    }

    /// Visible nodes, pre-order from the root
    pub fn visible_nodes(&self) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![self.root()];
        while let Some(next) = stack.pop() {
            out.push(next);
            stack.extend(self.nodes[next.index()].visible_children().iter().rev());
        }
        out
    }

    /// `(parent, child)` pairs where both ends are visible
    pub fn visible_edges(&self) -> Vec<(NodeId, NodeId)> {
        self.visible_nodes()
            .into_iter()
            .flat_map(|p| {
                self.nodes[p.index()]
                    .visible_children()
                    .iter()
                    .map(move |&c| (p, c))
            })
            .collect()
    }

    pub fn is_visible(&self, id: NodeId) -> bool {
        let mut cursor = match self.get(id) {
            Some(node) => node.parent,
            None => return false,
        };
        while let Some(p) = cursor {
            let parent = &self.nodes[p.index()];
            if parent.state == ExpansionState::Collapsed {
                return false;
            }
            cursor = parent.parent;
        }
        true
    }

    /// Flip one node. Leaves are left untouched.
    pub fn toggle(&mut self, id: NodeId) -> TreeResult<ExpansionState> {
        let node = self.node(id)?;
        if node.is_leaf() {
            return Ok(node.state);
        }
        let to = node.state.flipped();
        self.set_state(id, to)?;
        tracing::debug!(node = %id, name = %self.nodes[id.index()].name(), state = ?to, "toggled");
        Ok(to)
    }

    /// Show a node's children
    pub fn expand(&mut self, id: NodeId) -> TreeResult<()> {
        self.set_state(id, ExpansionState::Expanded)
    }

    /// Hide a node's children
    pub fn collapse(&mut self, id: NodeId) -> TreeResult<()> {
        self.set_state(id, ExpansionState::Collapsed)
    }

    /// Expand `id` and every descendant
    pub fn expand_all(&mut self, id: NodeId) -> TreeResult<()> {
        self.expand(id)?;
        for d in self.descendants(id)? {
            self.expand(d)?;
        }
        Ok(())
    }

    /// Collapse every strict descendant and leave `id` expanded
    pub fn collapse_all(&mut self, id: NodeId) -> TreeResult<()> {
        for d in self.descendants(id)? {
            self.collapse(d)?;
        }
        self.expand(id)
    }

    /// Re-apply an initial expansion depth to the whole tree
    pub fn reset(&mut self, depth: ExpansionDepth) {
        for node in &mut self.nodes {
            node.state = crate::state_machine::initial_state(!node.is_leaf(), depth.expands(node.depth));
        }
        tracing::debug!(depth = depth.0, visible = self.visible_nodes().len(), "reset");
    }

    /// Expand the root and every stage once so substages show
    pub fn expand_substages(&mut self) -> TreeResult<()> {
        let root = self.root();
        self.expand(root)?;
        let stages: Vec<NodeId> = self.nodes[root.index()].children.clone();
        for stage in stages {
            self.expand(stage)?;
        }
        Ok(())
    }

    /// Indented outline of the visible tree.
    ///
    /// `+` marks nodes holding hidden children, `-` expanded nodes, `·` leaves.
    pub fn outline(&self) -> String {
        let mut out = String::new();
        for id in self.visible_nodes() {
            let node = &self.nodes[id.index()];
            let marker = if node.is_leaf() {
                '·'
            } else if node.has_hidden_children() {
                '+'
            } else {
                '-'
            };
            let _ = writeln!(
                out,
                "{:indent$}{marker} {} [{}]",
                "",
                node.name(),
                node.kind(),
                indent = node.depth * 2
            );
        }
        out
    }

    fn set_state(&mut self, id: NodeId, to: ExpansionState) -> TreeResult<()> {
        let node = self.node(id)?;
        let from = node.state;
        if from == to || (node.is_leaf() && to == ExpansionState::Expanded) {
            return Ok(());
        }
        validate_transition(!node.is_leaf(), from, to).map_err(|_| TreeError::IllegalTransition {
            node: id,
            from,
            to,
        })?;
        self.nodes[id.index()].state = to;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_tree() -> DiagramTree {
        let mut tree = DiagramTree::with_root(NodeData::new("Lifecycle", NodeKind::Root));
        let plan = tree.push_child(NodeId(0), NodeData::new("PLAN", NodeKind::Stage));
        let dmp = tree.push_child(plan, NodeData::new("DMP", NodeKind::Substage));
        tree.push_child(dmp, NodeData::new("DMPTool", NodeKind::Tool));
        tree.push_child(NodeId(0), NodeData::new("COLLECT", NodeKind::Stage));
        tree.reset(ExpansionDepth::default());
        tree
    }

    #[test]
    fn ids_are_preorder() {
        let tree = small_tree();
        let names: Vec<_> = tree.iter().map(|n| (n.id().0, n.name().to_string())).collect();
        assert_eq!(
            names,
            vec![
                (0, "Lifecycle".to_string()),
                (1, "PLAN".to_string()),
                (2, "DMP".to_string()),
                (3, "DMPTool".to_string()),
                (4, "COLLECT".to_string()),
            ]
        );
    }

    #[test]
    fn visible_and_held_are_exclusive() {
        let tree = small_tree();
        for node in tree.iter() {
            assert!(node.visible_children().is_empty() || node.held_children().is_empty());
            assert_eq!(
                node.visible_children().len() + node.held_children().len(),
                node.children().len()
            );
        }
    }

    #[test]
    fn default_reset_shows_stages() {
        let tree = small_tree();
        assert_eq!(tree.visible_nodes(), vec![NodeId(0), NodeId(1), NodeId(4)]);
        assert!(tree.node(NodeId(1)).unwrap().has_hidden_children());
        assert!(!tree.node(NodeId(4)).unwrap().has_hidden_children());
    }

    #[test]
    fn toggle_on_leaf_is_noop() {
        let mut tree = small_tree();
        assert_eq!(tree.toggle(NodeId(3)).unwrap(), ExpansionState::Collapsed);
        assert_eq!(tree.toggle(NodeId(4)).unwrap(), ExpansionState::Collapsed);
    }

    #[test]
    fn unknown_node_is_error() {
        let mut tree = small_tree();
        assert!(matches!(tree.toggle(NodeId(99)), Err(TreeError::NodeNotFound(_))));
    }

    #[test]
    fn is_visible_follows_ancestors() {
        let mut tree = small_tree();
        assert!(!tree.is_visible(NodeId(3)));
        tree.expand_all(tree.root()).unwrap();
        assert!(tree.is_visible(NodeId(3)));
        tree.collapse(NodeId(1)).unwrap();
        assert!(!tree.is_visible(NodeId(2)));
    }

    #[test]
    fn outline_marks_states() {
        let tree = small_tree();
        assert_eq!(
            tree.outline(),
            "- Lifecycle [root]\n  + PLAN [stage]\n  · COLLECT [stage]\n"
        );
    }
}
