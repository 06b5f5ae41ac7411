//! Lifecycle Render
//!
//! Turns a laid-out tree into drawable output:
//! - [`Frame`]: keyed node/edge views for one scene
//! - [`join`]: enter/update/exit classification between frames
//! - [`Animator`]: re-targetable position transitions
//! - [`render_svg`]: standalone SVG document

pub mod scene;
pub mod svg;
pub mod theme;
pub mod tooltip;
pub mod transition;
pub mod viewport;

pub use scene::{join, Frame, NodeView, SceneDiff};
pub use svg::render_svg;
pub use theme::Theme;
pub use tooltip::tooltip;
pub use transition::{Animator, Phase, Track};
pub use viewport::Viewport;

use lifecycle_tree::NodeId;
use std::time::Duration;

/// Output of one render pass
#[derive(Debug, Clone)]
pub struct RenderOutput {
    pub svg: String,
    pub diff: SceneDiff,
}

/// Stateful renderer: remembers the last frame so each pass can be diffed and
/// animated against it.
#[derive(Debug, Clone)]
pub struct Renderer {
    theme: Theme,
    last: Option<Frame>,
    animator: Animator,
}

impl Renderer {
    pub fn new(theme: Theme, transition: Duration) -> Self {
        Self {
            theme,
            last: None,
            animator: Animator::new(transition),
        }
    }

    /// Draw `frame`, diffing against the previous one.
    ///
    /// `source` is the node the interaction started from (the clicked node),
    /// used as the origin for entering and exiting nodes.
    pub fn render(&mut self, frame: Frame, viewport: &Viewport, source: Option<NodeId>) -> RenderOutput {
        let diff = join(self.last.as_ref(), &frame);
        self.animator.retarget(self.last.as_ref(), &frame, source);
        let svg = render_svg(&frame, viewport, &self.theme);
        tracing::debug!(
            nodes = frame.len(),
            entered = diff.entered.len(),
            exited = diff.exited.len(),
            bytes = svg.len(),
            "frame rendered"
        );
        self.last = Some(frame);
        RenderOutput { svg, diff }
    }

    pub fn last_frame(&self) -> Option<&Frame> {
        self.last.as_ref()
    }

    pub fn animator(&self) -> &Animator {
        &self.animator
    }

    pub fn animator_mut(&mut self) -> &mut Animator {
        &mut self.animator
    }
}
