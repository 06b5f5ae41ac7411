use lifecycle_layout::{compute, LayoutMode, LayoutParams};
use lifecycle_render::{Frame, Renderer, Theme, Viewport};
use lifecycle_test_utils::sample_document;
use lifecycle_tree::DiagramTree;
use std::time::Duration;

fn frame(tree: &DiagramTree, mode: LayoutMode) -> Frame {
    let layout = compute(tree, mode, &LayoutParams::default()).unwrap();
    Frame::build(tree, &layout)
}

#[test]
fn renderer_diffs_successive_frames() {
    let mut tree = lifecycle_tree::build(&sample_document());
    let mut renderer = Renderer::new(Theme::default(), Duration::from_millis(200));
    let viewport = Viewport::default();

    let first = renderer.render(frame(&tree, LayoutMode::Radial), &viewport, None);
    assert_eq!(first.diff.entered.len(), 8);

    let analyze = tree.find_by_name("ANALYZE").unwrap();
    tree.toggle(analyze).unwrap();
    let second = renderer.render(frame(&tree, LayoutMode::Radial), &viewport, Some(analyze));

    assert_eq!(second.diff.entered, tree.node(analyze).unwrap().children().to_vec());
    assert!(second.diff.exited.is_empty());
    assert!(second.svg.contains("Exploration"));
    assert_eq!(renderer.last_frame().unwrap().len(), 10);
}

#[test]
fn layout_toggle_keeps_identity() {
    let tree = lifecycle_tree::build(&sample_document());
    let mut renderer = Renderer::new(Theme::default(), Duration::from_millis(200));
    let viewport = Viewport::default();

    renderer.render(frame(&tree, LayoutMode::Radial), &viewport, None);
    let out = renderer.render(frame(&tree, LayoutMode::Linear), &viewport, None);

    // same nodes, new positions: nothing enters or exits
    assert!(out.diff.membership_unchanged());
    assert_eq!(out.diff.updated.len(), 8);
}

#[test]
fn tooltips_include_description_and_tools() {
    let mut tree = lifecycle_tree::build(&sample_document());
    tree.expand_substages().unwrap();
    let f = frame(&tree, LayoutMode::Radial);
    let cleaning = tree.find_by_name("Cleaning").unwrap();

    assert_eq!(
        f.nodes[&cleaning].tooltip,
        "Cleaning: Detect and correct errors, duplicates and inconsistencies. | Tools: OpenRefine, pandas"
    );
}
