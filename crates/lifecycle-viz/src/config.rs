//! Viewer configuration
//!
//! Every field has a default, so a TOML file only needs the values it changes:
//!
//! ```toml
//! initial_depth = 2
//! layout = "linear"
//!
//! [theme]
//! collapsed_fill = "#9ecae1"
//! ```

use crate::error::{VizError, VizResult};
use lifecycle_layout::{LayoutMode, LayoutParams, Point};
use lifecycle_render::{Theme, Viewport};
use lifecycle_tree::{ExpansionDepth, ROOT_NAME};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Viewer configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VizConfig {
    /// Canvas width
    pub width: f64,
    /// Canvas height
    pub height: f64,
    /// Free space around the drawing
    pub margin: f64,
    /// Levels below the root expanded on load and on reset
    pub initial_depth: ExpansionDepth,
    /// Arrangement on load
    pub layout: LayoutMode,
    /// Multiplicative zoom step per zoom-in/zoom-out
    pub zoom_step: f64,
    /// Smallest allowed scale
    pub zoom_min: f64,
    /// Largest allowed scale
    pub zoom_max: f64,
    /// Transition length in milliseconds
    pub transition_ms: u64,
    /// Distance between depth levels (linear)
    pub level_spacing: f64,
    /// Distance between leaf rows (linear)
    pub row_spacing: f64,
    /// Label of the synthetic root
    pub root_name: String,
    /// Colours and sizes
    pub theme: Theme,
}

impl VizConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With initial expansion depth
    #[inline]
    #[must_use]
    pub fn with_initial_depth(mut self, depth: ExpansionDepth) -> Self {
        self.initial_depth = depth;
        self
    }

    /// With initial layout mode
    #[inline]
    #[must_use]
    pub fn with_layout(mut self, layout: LayoutMode) -> Self {
        self.layout = layout;
        self
    }

    /// Parse TOML text
    pub fn from_toml_str(text: &str) -> VizResult<Self> {
        let config: Self = toml::from_str(text).map_err(|e| VizError::config(None, e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML file
    pub fn load(path: &Path) -> VizResult<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| VizError::config(Some(path.to_path_buf()), e.to_string()))?;
        Self::from_toml_str(&text).map_err(|e| match e {
            VizError::Config { message, .. } => VizError::config(Some(path.to_path_buf()), message),
            other => other,
        })
    }

    /// Check ranges that serde cannot
    pub fn validate(&self) -> VizResult<()> {
        if !(self.zoom_step.is_finite() && self.zoom_step > 1.0) {
            return Err(VizError::config(None, format!("zoom_step must be > 1, got {}", self.zoom_step)));
        }
        if !(self.zoom_min > 0.0 && self.zoom_min <= 1.0 && self.zoom_max >= 1.0) {
            return Err(VizError::config(
                None,
                format!(
                    "zoom extent [{}, {}] must contain 1 and be positive",
                    self.zoom_min, self.zoom_max
                ),
            ));
        }
        self.layout_params().validate()?;
        Ok(())
    }

    /// Geometry handed to the layout engine
    #[must_use]
    pub fn layout_params(&self) -> LayoutParams {
        LayoutParams {
            width: self.width,
            height: self.height,
            margin: self.margin,
            level_spacing: self.level_spacing,
            row_spacing: self.row_spacing,
        }
    }

    /// Fresh viewport with the configured zoom extent
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.zoom_min, self.zoom_max)
    }

    /// Zoom focus (canvas centre)
    #[must_use]
    pub fn focus(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// Transition length
    #[must_use]
    pub fn transition(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }
}

impl Default for VizConfig {
    fn default() -> Self {
        let params = LayoutParams::default();
        Self {
            width: params.width,
            height: params.height,
            margin: params.margin,
            initial_depth: ExpansionDepth::default(),
            layout: LayoutMode::Radial,
            zoom_step: 1.2,
            zoom_min: 0.5,
            zoom_max: 5.0,
            transition_ms: 200,
            level_spacing: params.level_spacing,
            row_spacing: params.row_spacing,
            root_name: ROOT_NAME.to_string(),
            theme: Theme::default(),
        }
    }
}
