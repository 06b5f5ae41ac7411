//! Leaf-slot assignment shared by both modes.
//!
//! Visible leaves get consecutive positions along the breadth axis, spaced by a
//! separation function; each visible internal node sits at the midpoint of its
//! first and last visible child.

use lifecycle_tree::{DiagramTree, Node, NodeId};
use std::collections::HashMap;

pub(crate) struct Slots {
    pub(crate) breadth: HashMap<NodeId, f64>,
    /// Breadth of the last leaf (the first is at 0)
    pub(crate) extent: f64,
    /// Separation between the last and first leaf, for closing a circle
    pub(crate) wrap_gap: f64,
}

struct Walk<'a, F> {
    tree: &'a DiagramTree,
    separation: F,
    breadth: HashMap<NodeId, f64>,
    first_leaf: Option<&'a Node>,
    prev_leaf: Option<&'a Node>,
}

impl<'a, F> Walk<'a, F>
where
    F: Fn(&Node, &Node) -> f64,
{
    fn visit(&mut self, id: NodeId) {
        let tree = self.tree;
        let Some(node) = tree.get(id) else {
            return;
        };
        let kids = node.visible_children();
        let pos = if let (Some(first), Some(last)) = (kids.first(), kids.last()) {
            for &kid in kids {
                self.visit(kid);
            }
            (self.breadth[first] + self.breadth[last]) / 2.0
        } else {
            let pos = match self.prev_leaf {
                Some(prev) => self.breadth[&prev.id()] + (self.separation)(prev, node),
                None => 0.0,
            };
            self.first_leaf.get_or_insert(node);
            self.prev_leaf = Some(node);
            pos
        };
        self.breadth.insert(id, pos);
    }
}

pub(crate) fn assign<F>(tree: &DiagramTree, separation: F) -> Slots
where
    F: Fn(&Node, &Node) -> f64,
{
    let mut walk = Walk {
        tree,
        separation,
        breadth: HashMap::new(),
        first_leaf: None,
        prev_leaf: None,
    };
    walk.visit(tree.root());

    let (extent, wrap_gap) = match (walk.first_leaf, walk.prev_leaf) {
        (Some(first), Some(last)) if first.id() != last.id() => {
            (walk.breadth[&last.id()], (walk.separation)(last, first))
        }
        _ => (0.0, 1.0),
    };

    Slots {
        breadth: walk.breadth,
        extent,
        wrap_gap,
    }
}

/// Siblings 1 apart, cousins 2
pub(crate) fn linear_separation(a: &Node, b: &Node) -> f64 {
    if a.parent() == b.parent() {
        1.0
    } else {
        2.0
    }
}

/// As linear, shrunk with depth so outer rings stay compact
#[allow(clippy::cast_precision_loss)]
pub(crate) fn radial_separation(a: &Node, b: &Node) -> f64 {
    linear_separation(a, b) / a.depth().max(1) as f64
}
