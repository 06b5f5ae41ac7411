use lifecycle_test_utils::{arb_document, plan_collect_document, sample_document, SAMPLE_TOOLS};
use lifecycle_tree::{ExpansionDepth, NodeKind, TreeBuilder, TreeError, ROOT_NAME};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_tool_leaves_match_non_empty_tools(doc in arb_document()) {
        let tree = lifecycle_tree::build(&doc);

        prop_assert_eq!(tree.tool_count(), doc.tool_count());
        for node in tree.iter().filter(|n| n.kind() == NodeKind::Tool) {
            prop_assert!(node.is_leaf());
            prop_assert!(!node.name().is_empty());
        }
    }

    #[test]
    fn prop_ids_are_dense_and_preorder(doc in arb_document()) {
        let tree = lifecycle_tree::build(&doc);
        for (idx, node) in tree.iter().enumerate() {
            prop_assert_eq!(node.id().index(), idx);
            if let Some(parent) = node.parent() {
                prop_assert!(parent < node.id());
            }
        }
    }
}

#[test]
fn stages_keep_document_order() {
    let tree = lifecycle_tree::build(&plan_collect_document());
    let root = tree.node(tree.root()).unwrap();

    assert_eq!(root.name(), ROOT_NAME);
    let names: Vec<_> = root
        .children()
        .iter()
        .map(|&id| tree.node(id).unwrap().name().to_string())
        .collect();
    assert_eq!(names, vec!["PLAN".to_string(), "COLLECT".to_string()]);
}

#[test]
fn empty_tool_placeholders_produce_no_leaves() {
    let tree = lifecycle_tree::build(&plan_collect_document());
    let dmp = tree.find_by_name("Data Management Planning").unwrap();
    let node = tree.node(dmp).unwrap();

    assert_eq!(node.children().len(), 1);
    let only = tree.node(node.children()[0]).unwrap();
    assert_eq!(only.name(), "DMPTool");
    assert_eq!(only.kind(), NodeKind::Tool);
    assert_eq!(node.data().tools, vec!["DMPTool".to_string()]);
}

#[test]
fn substages_carry_description() {
    let tree = lifecycle_tree::build(&plan_collect_document());
    let acq = tree.node(tree.find_by_name("Acquisition").unwrap()).unwrap();
    assert_eq!(acq.data().description.as_deref(), Some("Gather data"));
    assert_eq!(acq.depth(), 2);
}

#[test]
fn sample_dataset_shape() {
    let tree = lifecycle_tree::build(&sample_document());
    assert_eq!(tree.tool_count(), SAMPLE_TOOLS);
    assert_eq!(tree.max_depth(), 3);
    // root + 7 stages visible with the default depth
    assert_eq!(tree.visible_nodes().len(), 8);
}

#[test]
fn configured_depth_two_shows_substages() {
    let tree = TreeBuilder::new()
        .with_depth(ExpansionDepth::SUBSTAGES)
        .build(&plan_collect_document());
    // root, 2 stages, 3 substages
    assert_eq!(tree.visible_nodes().len(), 6);
}

#[test]
fn malformed_json_rejects_whole_tree() {
    let err = TreeBuilder::new()
        .build_json(r#"{"PLAN": [{"substage": "ok", "tools": []}, {"substage": "bad"}]}"#)
        .unwrap_err();
    match err {
        TreeError::Taxonomy(inner) => assert!(inner.is_malformed()),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn custom_root_name() {
    let tree = TreeBuilder::new()
        .with_root_name("Research Data")
        .build(&plan_collect_document());
    assert_eq!(tree.node(tree.root()).unwrap().name(), "Research Data");
}
