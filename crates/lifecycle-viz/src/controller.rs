//! Interaction controller
//!
//! Owns the tree, the current layout mode and the viewport, and re-renders
//! after every action. Handlers run to completion one at a time; a new action
//! arriving while a transition is in flight re-targets it from the positions
//! currently on screen.

use crate::action::{Action, ActionSpec};
use crate::config::VizConfig;
use crate::details::DetailsTable;
use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::error::VizResult;
use lifecycle_layout::{compute, LayoutMode};
use lifecycle_render::{Frame, RenderOutput, Renderer, Viewport};
use lifecycle_taxonomy::TaxonomySource;
use lifecycle_tree::{DiagramTree, NodeId, TreeBuilder};

/// A loaded, interactive diagram
#[derive(Debug)]
pub struct Viewer {
    config: VizConfig,
    tree: DiagramTree,
    mode: LayoutMode,
    viewport: Viewport,
    renderer: Renderer,
    selected: Option<NodeId>,
    output: RenderOutput,
}

impl Viewer {
    /// Fetch, validate and render the taxonomy.
    ///
    /// On any load failure exactly one diagnostic is emitted and no viewer
    /// (and so no frame) exists.
    pub async fn load(
        source: &dyn TaxonomySource,
        config: VizConfig,
        sink: &dyn DiagnosticSink,
    ) -> VizResult<Self> {
        config.validate()?;
        let doc = match source.load().await {
            Ok(doc) => doc,
            Err(err) => {
                sink.emit(Diagnostic::new(source.describe(), err.to_string()));
                return Err(err.into());
            }
        };

        let tree = TreeBuilder::new()
            .with_depth(config.initial_depth)
            .with_root_name(config.root_name.clone())
            .build(&doc);
        Self::new(tree, config, source.describe())
    }

    /// Wrap an already built tree and draw the first frame
    pub fn new(tree: DiagramTree, config: VizConfig, source: impl Into<String>) -> VizResult<Self> {
        config.validate()?;
        let mode = config.layout;
        let viewport = config.viewport();
        let mut renderer = Renderer::new(config.theme.clone(), config.transition());

        let layout = compute(&tree, mode, &config.layout_params())?;
        let output = renderer.render(Frame::build(&tree, &layout), &viewport, None);

        let source: String = source.into();
        tracing::info!(source = %source, nodes = tree.len(), mode = mode.as_str(), "viewer ready");
        Ok(Self {
            config,
            tree,
            mode,
            viewport,
            renderer,
            selected: None,
            output,
        })
    }

    /// Apply one action and re-render.
    ///
    /// Returns `None` when the action changes nothing (a background click, or
    /// a click on a node hidden under a collapsed ancestor). Bulk expansion
    /// and reset animate out of the root.
    pub fn dispatch(&mut self, action: Action) -> VizResult<Option<&RenderOutput>> {
        let origin = match action {
            Action::ClickBackground => {
                tracing::debug!("background click ignored");
                return Ok(None);
            }
            Action::Click(id) if !self.tree.is_visible(id) => {
                tracing::debug!(node = %id, "click on hidden node ignored");
                return Ok(None);
            }
            Action::Click(id) => {
                let state = self.tree.toggle(id)?;
                self.selected = Some(id);
                tracing::info!(node = %id, name = self.tree.node(id)?.name(), state = ?state, "node clicked");
                Some(id)
            }
            Action::Reset => {
                self.tree.reset(self.config.initial_depth);
                Some(self.tree.root())
            }
            Action::ExpandSubstages => {
                self.tree.expand_substages()?;
                Some(self.tree.root())
            }
            Action::ExpandAll => {
                let root = self.tree.root();
                self.tree.expand_all(root)?;
                Some(root)
            }
            Action::ZoomIn => {
                self.viewport.zoom_by(self.config.zoom_step, self.config.focus());
                None
            }
            Action::ZoomOut => {
                self.viewport.zoom_by(self.config.zoom_step.recip(), self.config.focus());
                None
            }
            Action::Pan { dx, dy } => {
                self.viewport.pan(dx, dy);
                None
            }
            Action::ToggleLayout => {
                self.mode = self.mode.toggled();
                tracing::info!(mode = self.mode.as_str(), "layout toggled");
                None
            }
        };

        self.redraw(origin)?;
        Ok(Some(&self.output))
    }

    /// Resolve and apply textual actions in order
    pub fn apply(&mut self, specs: &[ActionSpec]) -> VizResult<()> {
        for spec in specs {
            let action = spec.resolve(&self.tree)?;
            self.dispatch(action)?;
        }
        Ok(())
    }

    fn redraw(&mut self, origin: Option<NodeId>) -> VizResult<()> {
        let layout = compute(&self.tree, self.mode, &self.config.layout_params())?;
        self.output = self
            .renderer
            .render(Frame::build(&self.tree, &layout), &self.viewport, origin);
        Ok(())
    }

    /// Details of the last clicked node
    pub fn details(&self) -> VizResult<Option<DetailsTable>> {
        self.selected
            .map(|id| DetailsTable::for_node(&self.tree, id))
            .transpose()
            .map_err(Into::into)
    }

    /// Latest SVG document
    pub fn svg(&self) -> &str {
        &self.output.svg
    }

    /// Latest frame
    pub fn frame(&self) -> Option<&Frame> {
        self.renderer.last_frame()
    }

    /// Number of nodes in the latest frame
    pub fn rendered_nodes(&self) -> usize {
        self.frame().map_or(0, Frame::len)
    }

    pub fn tree(&self) -> &DiagramTree {
        &self.tree
    }

    pub fn mode(&self) -> LayoutMode {
        self.mode
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn selected(&self) -> Option<NodeId> {
        self.selected
    }

    pub fn config(&self) -> &VizConfig {
        &self.config
    }

    pub fn renderer_mut(&mut self) -> &mut Renderer {
        &mut self.renderer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lifecycle_render::Phase;
    use lifecycle_test_utils::plan_collect_document;
    use lifecycle_tree::ExpansionState;

    fn viewer() -> Viewer {
        let tree = lifecycle_tree::build(&plan_collect_document());
        Viewer::new(tree, VizConfig::default(), "memory").unwrap()
    }

    #[test]
    fn initial_frame_shows_stages() {
        let v = viewer();
        assert_eq!(v.rendered_nodes(), 3);
        assert_eq!(v.mode(), LayoutMode::Radial);
        assert!(v.details().unwrap().is_none());
    }

    #[test]
    fn click_toggles_and_selects() {
        let mut v = viewer();
        let plan = v.tree().find_by_name("PLAN").unwrap();

        let out = v.dispatch(Action::Click(plan)).unwrap().unwrap();
        assert_eq!(out.diff.entered.len(), 2);
        assert_eq!(v.rendered_nodes(), 5);
        assert_eq!(v.selected(), Some(plan));
        assert_eq!(v.details().unwrap().unwrap().name, "PLAN");
    }

    #[test]
    fn hidden_click_is_ignored() {
        let mut v = viewer();
        let dmp = v.tree().find_by_name("Data Management Planning").unwrap();
        let before = v.svg().to_string();

        assert!(v.dispatch(Action::Click(dmp)).unwrap().is_none());
        assert!(!v.tree().is_visible(dmp));
        assert_eq!(v.tree().node(dmp).unwrap().state(), ExpansionState::Collapsed);
        assert_eq!(v.selected(), None);
        assert_eq!(v.svg(), before);
    }

    #[test]
    fn bulk_actions_animate_from_root() {
        let mut v = viewer();
        let root = v.tree().root();
        let centre = v.frame().unwrap().position(root).unwrap();

        let entered = v.dispatch(Action::ExpandAll).unwrap().unwrap().diff.entered.clone();
        assert!(!entered.is_empty());
        for id in entered {
            let track = *v.renderer_mut().animator().track(id).unwrap();
            assert_eq!(track.phase, Phase::Enter);
            assert_eq!(track.from, centre);
        }

        v.renderer_mut().animator_mut().finish();
        let exited = v.dispatch(Action::Reset).unwrap().unwrap().diff.exited.clone();
        assert!(!exited.is_empty());
        for id in exited {
            let track = *v.renderer_mut().animator().track(id).unwrap();
            assert_eq!(track.phase, Phase::Exit);
            assert_eq!(track.to, centre);
        }
    }

    #[test]
    fn zoom_out_respects_lower_bound() {
        let mut v = viewer();
        for _ in 0..20 {
            v.dispatch(Action::ZoomOut).unwrap();
        }
        assert!((v.viewport().scale - 0.5).abs() < 1e-12);
    }
}
