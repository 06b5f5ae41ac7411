use crate::error::LayoutError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Arrangement of the diagram
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    /// Circular: angle by slot, radius by depth
    #[default]
    Radial,
    /// Left-to-right: x by depth, y by slot
    Linear,
}

impl LayoutMode {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            LayoutMode::Radial => LayoutMode::Linear,
            LayoutMode::Linear => LayoutMode::Radial,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LayoutMode::Radial => "radial",
            LayoutMode::Linear => "linear",
        }
    }
}

impl fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LayoutMode {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "radial" | "circular" => Ok(LayoutMode::Radial),
            "linear" => Ok(LayoutMode::Linear),
            other => Err(LayoutError::UnknownMode(other.to_string())),
        }
    }
}

/// Canvas geometry used by both modes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutParams {
    /// Canvas width
    pub width: f64,
    /// Canvas height
    pub height: f64,
    /// Space kept free around the drawing
    pub margin: f64,
    /// Distance between depth levels (linear)
    pub level_spacing: f64,
    /// Distance between leaf slots (linear)
    pub row_spacing: f64,
}

impl LayoutParams {
    /// Outer radius of the radial layout
    #[inline]
    #[must_use]
    pub fn radius(&self) -> f64 {
        (self.width.min(self.height) / 2.0 - self.margin).max(0.0)
    }

    pub fn validate(&self) -> Result<(), LayoutError> {
        let fields = [
            ("width", self.width),
            ("height", self.height),
            ("level_spacing", self.level_spacing),
            ("row_spacing", self.row_spacing),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(LayoutError::InvalidParameter { name, value });
            }
        }
        if !self.margin.is_finite() || self.margin < 0.0 {
            return Err(LayoutError::InvalidParameter {
                name: "margin",
                value: self.margin,
            });
        }
        Ok(())
    }
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 1200.0,
            margin: 100.0,
            level_spacing: 180.0,
            row_spacing: 24.0,
        }
    }
}
