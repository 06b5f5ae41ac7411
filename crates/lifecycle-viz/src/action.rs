//! User actions and the control identifiers of the host page.

use crate::error::{VizError, VizResult};
use lifecycle_tree::{DiagramTree, NodeId};
use std::fmt;
use std::str::FromStr;

/// Something the user did
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// Click on a node
    Click(NodeId),
    /// Click on empty canvas
    ClickBackground,
    /// Back to the initial expansion depth
    Reset,
    /// Show root, stages and substages
    ExpandSubstages,
    /// Show everything
    ExpandAll,
    /// Zoom in one step about the canvas centre
    ZoomIn,
    /// Zoom out one step about the canvas centre
    ZoomOut,
    /// Drag the canvas
    Pan {
        /// Horizontal offset
        dx: f64,
        /// Vertical offset
        dy: f64,
    },
    /// Switch between radial and linear
    ToggleLayout,
}

/// Button identifiers exposed by the host page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlId {
    /// `reset`
    Reset,
    /// `show-substages` (alias `expand-substages`)
    ShowSubstages,
    /// `show-all` (alias `expand-all`)
    ShowAll,
    /// `zoom-in`
    ZoomIn,
    /// `zoom-out`
    ZoomOut,
    /// `toggle-layout`
    ToggleLayout,
}

impl ControlId {
    /// Every control, in page order
    pub const ALL: [ControlId; 6] = [
        ControlId::Reset,
        ControlId::ShowSubstages,
        ControlId::ShowAll,
        ControlId::ZoomIn,
        ControlId::ZoomOut,
        ControlId::ToggleLayout,
    ];

    /// Identifier as written in the page
    pub fn as_str(self) -> &'static str {
        match self {
            ControlId::Reset => "reset",
            ControlId::ShowSubstages => "show-substages",
            ControlId::ShowAll => "show-all",
            ControlId::ZoomIn => "zoom-in",
            ControlId::ZoomOut => "zoom-out",
            ControlId::ToggleLayout => "toggle-layout",
        }
    }

    /// Action the control triggers
    pub fn action(self) -> Action {
        match self {
            ControlId::Reset => Action::Reset,
            ControlId::ShowSubstages => Action::ExpandSubstages,
            ControlId::ShowAll => Action::ExpandAll,
            ControlId::ZoomIn => Action::ZoomIn,
            ControlId::ZoomOut => Action::ZoomOut,
            ControlId::ToggleLayout => Action::ToggleLayout,
        }
    }
}

impl fmt::Display for ControlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ControlId {
    type Err = VizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "expand-substages" => return Ok(ControlId::ShowSubstages),
            "expand-all" => return Ok(ControlId::ShowAll),
            _ => {}
        }
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| VizError::UnknownControl(s.to_string()))
    }
}

/// Textual action, before node names are resolved against a tree.
///
/// Accepted forms:
/// - a control identifier (`reset`, `zoom-in`, ...)
/// - `click:<node name>`
/// - `background`
/// - `pan:<dx>:<dy>`
#[derive(Debug, Clone, PartialEq)]
pub enum ActionSpec {
    /// Host page control
    Control(ControlId),
    /// Click on the node with this name
    Click(String),
    /// Click on empty canvas
    Background,
    /// Pan by an offset
    Pan {
        /// Horizontal offset
        dx: f64,
        /// Vertical offset
        dy: f64,
    },
}

impl ActionSpec {
    /// Resolve node names against `tree`.
    ///
    /// Clicks only reach nodes currently on screen.
    pub fn resolve(&self, tree: &DiagramTree) -> VizResult<Action> {
        Ok(match self {
            ActionSpec::Control(control) => control.action(),
            ActionSpec::Click(name) => {
                let visible = tree
                    .visible_nodes()
                    .into_iter()
                    .find(|&id| tree.get(id).is_some_and(|n| n.name() == name));
                match visible {
                    Some(id) => Action::Click(id),
                    None if tree.find_by_name(name).is_some() => {
                        return Err(VizError::NodeHidden(name.clone()))
                    }
                    None => return Err(VizError::UnknownNode(name.clone())),
                }
            }
            ActionSpec::Background => Action::ClickBackground,
            ActionSpec::Pan { dx, dy } => Action::Pan { dx: *dx, dy: *dy },
        })
    }

    /// Parse a comma-separated list
    pub fn parse_list(input: &str) -> VizResult<Vec<ActionSpec>> {
        input
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::parse)
            .collect()
    }
}

impl FromStr for ActionSpec {
    type Err = VizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(name) = s.strip_prefix("click:") {
            if name.is_empty() {
                return Err(VizError::invalid_action(s, "missing node name"));
            }
            return Ok(ActionSpec::Click(name.to_string()));
        }
        if let Some(rest) = s.strip_prefix("pan:") {
            let (dx, dy) = rest
                .split_once(':')
                .ok_or_else(|| VizError::invalid_action(s, "expected pan:<dx>:<dy>"))?;
            let parse = |v: &str| {
                v.trim()
                    .parse::<f64>()
                    .ok()
                    .filter(|f| f.is_finite())
                    .ok_or_else(|| VizError::invalid_action(s, format!("'{v}' is not a number")))
            };
            return Ok(ActionSpec::Pan {
                dx: parse(dx)?,
                dy: parse(dy)?,
            });
        }
        if s == "background" {
            return Ok(ActionSpec::Background);
        }
        s.parse().map(ActionSpec::Control)
    }
}
