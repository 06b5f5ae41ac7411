//! Hierarchy builder
//!
//! Turns a validated [`TaxonomyDocument`] into a [`DiagramTree`]:
//! Root → Stage → Substage → Tool. Node ids are handed out here, once.

use crate::error::TreeResult;
use crate::tree::{DiagramTree, NodeData};
use crate::types::{ExpansionDepth, NodeKind};
use lifecycle_taxonomy::TaxonomyDocument;

/// Name given to the synthetic root node
pub const ROOT_NAME: &str = "Lifecycle";

/// Builder for [`DiagramTree`]
#[derive(Debug, Clone)]
pub struct TreeBuilder {
    root_name: String,
    depth: ExpansionDepth,
}

impl TreeBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Initial expansion depth
    #[must_use]
    pub fn with_depth(mut self, depth: ExpansionDepth) -> Self {
        self.depth = depth;
        self
    }

    /// Root label
    #[must_use]
    pub fn with_root_name(mut self, name: impl Into<String>) -> Self {
        self.root_name = name.into();
        self
    }

    /// Build from a validated document. Cannot fail.
    pub fn build(&self, doc: &TaxonomyDocument) -> DiagramTree {
        let mut tree = DiagramTree::with_root(NodeData::new(&self.root_name, NodeKind::Root));
        let root = tree.root();

        for (stage_name, records) in doc.stages() {
            let stage = tree.push_child(root, NodeData::new(stage_name, NodeKind::Stage));
            for record in records {
                let tools: Vec<String> = record.non_empty_tools().map(str::to_string).collect();
                let substage = tree.push_child(
                    stage,
                    NodeData {
                        name: record.substage.clone(),
                        kind: NodeKind::Substage,
                        description: record.description.clone(),
                        tools: tools.clone(),
                    },
                );
                for tool in tools {
                    tree.push_child(substage, NodeData::new(tool, NodeKind::Tool));
                }
            }
        }

        tree.reset(self.depth);
        tracing::info!(
            nodes = tree.len(),
            stages = doc.stage_count(),
            tools = tree.tool_count(),
            depth = self.depth.0,
            "hierarchy built"
        );
        tree
    }

    /// Parse, validate and build in one step.
    ///
    /// Malformed records reject the whole input; no partial tree is produced.
    pub fn build_json(&self, text: &str) -> TreeResult<DiagramTree> {
        let doc = TaxonomyDocument::parse(text)?;
        Ok(self.build(&doc))
    }
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self {
            root_name: ROOT_NAME.to_string(),
            depth: ExpansionDepth::default(),
        }
    }
}

/// Build with default settings
pub fn build(doc: &TaxonomyDocument) -> DiagramTree {
    TreeBuilder::default().build(doc)
}
