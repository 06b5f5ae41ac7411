//! Layout computation
//!
//! Positions are recomputed from scratch for every visible node on each call;
//! nothing is patched incrementally.

use crate::error::LayoutError;
use crate::geometry::{Bounds, Point, Polar};
use crate::mode::{LayoutMode, LayoutParams};
use crate::tidy::{self, Slots};
use indexmap::IndexMap;
use lifecycle_tree::{DiagramTree, NodeId};
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// Where one visible node goes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub id: NodeId,
    pub parent: Option<NodeId>,
    pub depth: usize,
    /// Canvas position
    pub position: Point,
    /// Polar coordinate (radial mode only)
    pub polar: Option<Polar>,
}

/// Edge between a visible node and its visible parent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LayoutEdge {
    pub source: NodeId,
    pub target: NodeId,
}

/// Positions for the currently visible part of a tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub mode: LayoutMode,
    /// Canvas size the drawing was laid out for
    pub width: f64,
    pub height: f64,
    /// Visible nodes in pre-order
    pub nodes: IndexMap<NodeId, Placement>,
    pub edges: Vec<LayoutEdge>,
}

impl Layout {
    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&Placement> {
        self.nodes.get(&id)
    }

    #[inline]
    pub fn position(&self, id: NodeId) -> Option<Point> {
        self.nodes.get(&id).map(|p| p.position)
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
    pub fn centre(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Lay out the visible part of `tree`
pub fn compute(tree: &DiagramTree, mode: LayoutMode, params: &LayoutParams) -> Result<Layout, LayoutError> {
    params.validate()?;

    let layout = match mode {
        LayoutMode::Radial => radial(tree, params),
        LayoutMode::Linear => linear(tree, params),
    };
    tracing::debug!(
        mode = %mode,
        nodes = layout.len(),
        edges = layout.edges.len(),
        "layout computed"
    );
    Ok(layout)
}

#[allow(clippy::cast_precision_loss)]
fn radial(tree: &DiagramTree, params: &LayoutParams) -> Layout {
    let Slots {
        breadth,
        extent,
        wrap_gap,
    } = tidy::assign(tree, tidy::radial_separation);
    let total = extent + wrap_gap;
    let visible = tree.visible_nodes();
    let max_depth = visible
        .iter()
        .filter_map(|&id| tree.get(id))
        .map(|n| n.depth())
        .max()
        .unwrap_or(0);
    let radius = params.radius();
    let centre = Point::new(params.width / 2.0, params.height / 2.0);

    let nodes = place(tree, &visible, |id, depth| {
        let angle = if total > 0.0 {
            breadth.get(&id).copied().unwrap_or(0.0) / total * TAU
        } else {
            0.0
        };
        let r = if max_depth == 0 {
            0.0
        } else {
            depth as f64 / max_depth as f64 * radius
        };
        let polar = Polar::new(angle, r);
        (polar.project(centre), Some(polar))
    });

    Layout {
        mode: LayoutMode::Radial,
        width: params.width,
        height: params.height,
        nodes,
        edges: edges(tree),
    }
}

#[allow(clippy::cast_precision_loss)]
fn linear(tree: &DiagramTree, params: &LayoutParams) -> Layout {
    let slots = tidy::assign(tree, tidy::linear_separation);
    let visible = tree.visible_nodes();

    let nodes = place(tree, &visible, |id, depth| {
        let slot = slots.breadth.get(&id).copied().unwrap_or(0.0);
        let position = Point::new(
            params.margin + depth as f64 * params.level_spacing,
            params.margin + slot * params.row_spacing,
        );
        (position, None)
    });

    let content = Bounds::of(nodes.values().map(|p| p.position));
    let (width, height) = content.map_or((params.width, params.height), |b| {
        (
            params.width.max(b.max.x + params.margin),
            params.height.max(b.max.y + params.margin),
        )
    });

    Layout {
        mode: LayoutMode::Linear,
        width,
        height,
        nodes,
        edges: edges(tree),
    }
}

fn place<F>(tree: &DiagramTree, visible: &[NodeId], mut locate: F) -> IndexMap<NodeId, Placement>
where
    F: FnMut(NodeId, usize) -> (Point, Option<Polar>),
{
    visible
        .iter()
        .filter_map(|&id| tree.get(id))
        .map(|node| {
            let (position, polar) = locate(node.id(), node.depth());
            (
                node.id(),
                Placement {
                    id: node.id(),
                    parent: node.parent(),
                    depth: node.depth(),
                    position,
                    polar,
                },
            )
        })
        .collect()
}

fn edges(tree: &DiagramTree) -> Vec<LayoutEdge> {
    tree.visible_edges()
        .into_iter()
        .map(|(source, target)| LayoutEdge { source, target })
        .collect()
}
