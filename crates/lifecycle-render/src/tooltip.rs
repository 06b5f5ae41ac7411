use lifecycle_tree::NodeData;

/// Hover text: name, then description, then tool list when present.
///
/// `"Cleaning: Detect errors | Tools: OpenRefine, pandas"`
pub fn tooltip(data: &NodeData) -> String {
    let mut text = data.name.clone();
    if let Some(description) = data.description.as_deref().filter(|d| !d.is_empty()) {
        text.push_str(": ");
        text.push_str(description);
    }
    if !data.tools.is_empty() {
        text.push_str(" | Tools: ");
        text.push_str(&data.tools.join(", "));
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use lifecycle_tree::NodeKind;

    #[test]
    fn name_only() {
        assert_eq!(tooltip(&NodeData::new("PLAN", NodeKind::Stage)), "PLAN");
    }

    #[test]
    fn description_and_tools() {
        let data = NodeData {
            name: "Cleaning".into(),
            kind: NodeKind::Substage,
            description: Some("Fix errors".into()),
            tools: vec!["OpenRefine".into(), "pandas".into()],
        };
        assert_eq!(tooltip(&data), "Cleaning: Fix errors | Tools: OpenRefine, pandas");
    }
}
