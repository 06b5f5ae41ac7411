use serde::{Deserialize, Serialize};

/// Visual encoding for nodes, links and labels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub background: String,
    /// Fill for nodes holding hidden children
    pub collapsed_fill: String,
    /// Fill for leaves and expanded nodes
    pub open_fill: String,
    pub node_stroke: String,
    pub node_radius: f64,
    pub link_color: String,
    pub link_width: f64,
    pub text_color: String,
    pub font_family: String,
    pub font_size: f64,
    /// Distance between a node and its label
    pub label_offset: f64,
}

impl Theme {
    pub fn fill(&self, has_hidden_children: bool) -> &str {
        if has_hidden_children {
            &self.collapsed_fill
        } else {
            &self.open_fill
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: "#ffffff".to_string(),
            collapsed_fill: "lightblue".to_string(),
            open_fill: "lightgreen".to_string(),
            node_stroke: "#4a6f8a".to_string(),
            node_radius: 5.0,
            link_color: "#ccc".to_string(),
            link_width: 2.0,
            text_color: "#333".to_string(),
            font_family: "sans-serif".to_string(),
            font_size: 12.0,
            label_offset: 10.0,
        }
    }
}
