//! Detail panel for the selected node.

use lifecycle_tree::{DiagramTree, NodeId, NodeKind, TreeResult};
use serde::Serialize;
use std::fmt;

/// Everything known about one node
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailsTable {
    /// Node label
    pub name: String,
    /// Hierarchy level
    pub kind: NodeKind,
    /// Substage description
    pub description: Option<String>,
    /// Child names, when the node is a stage
    pub substages: Vec<String>,
    /// Tool names, when the node is a substage
    pub tools: Vec<String>,
}

impl DetailsTable {
    /// Collect details for `id`
    pub fn for_node(tree: &DiagramTree, id: NodeId) -> TreeResult<Self> {
        let node = tree.node(id)?;
        let child_names = || -> TreeResult<Vec<String>> {
            node.children()
                .iter()
                .map(|&c| tree.node(c).map(|n| n.name().to_string()))
                .collect()
        };

        let substages = if node.kind() == NodeKind::Stage {
            child_names()?
        } else {
            Vec::new()
        };

        Ok(Self {
            name: node.name().to_string(),
            kind: node.kind(),
            description: node.data().description.clone(),
            substages,
            tools: node.data().tools.clone(),
        })
    }

    /// Label/value rows for display
    pub fn rows(&self) -> Vec<(&'static str, String)> {
        let mut rows = vec![("Name", self.name.clone()), ("Level", self.kind.as_str().to_string())];
        if let Some(desc) = &self.description {
            rows.push(("Description", desc.clone()));
        }
        if !self.substages.is_empty() {
            rows.push(("Substages", self.substages.join(", ")));
        }
        if !self.tools.is_empty() {
            rows.push(("Tools", self.tools.join(", ")));
        }
        rows
    }
}

impl fmt::Display for DetailsTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = self.rows();
        let width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
        for (label, value) in rows {
            writeln!(f, "{label:<width$}  {value}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lifecycle_test_utils::plan_collect_document;
    use pretty_assertions::assert_eq;

    #[test]
    fn substage_details() {
        let tree = lifecycle_tree::build(&plan_collect_document());
        let acq = tree.find_by_name("Acquisition").unwrap();
        let table = DetailsTable::for_node(&tree, acq).unwrap();

        assert_eq!(table.kind, NodeKind::Substage);
        assert_eq!(table.description.as_deref(), Some("Gather data"));
        assert_eq!(table.tools, vec!["REDCap".to_string(), "ODK".to_string()]);
        assert_eq!(
            table.to_string(),
            "Name         Acquisition\nLevel        substage\nDescription  Gather data\nTools        REDCap, ODK\n"
        );
    }

    #[test]
    fn stage_lists_substages() {
        let tree = lifecycle_tree::build(&plan_collect_document());
        let plan = tree.find_by_name("PLAN").unwrap();
        let table = DetailsTable::for_node(&tree, plan).unwrap();

        assert_eq!(table.substages, vec!["Data Management Planning".to_string(), "Ethics".to_string()]);
        assert!(table.tools.is_empty());
    }
}
