use lifecycle_test_utils::{arb_document, sample_document};
use lifecycle_tree::state_machine::{allowed_transitions, validate_transition};
use lifecycle_tree::{DiagramTree, ExpansionDepth, ExpansionState, NodeId};
use proptest::prelude::*;
use std::collections::HashSet;

fn snapshot(tree: &DiagramTree) -> (Vec<ExpansionState>, Vec<NodeId>) {
    (tree.iter().map(|n| n.state()).collect(), tree.visible_nodes())
}

proptest! {
    #[test]
    fn prop_transitions_are_subset_of_allowed(
        has_children in any::<bool>(),
        from in prop_oneof![Just(ExpansionState::Collapsed), Just(ExpansionState::Expanded)],
        to in prop_oneof![Just(ExpansionState::Collapsed), Just(ExpansionState::Expanded)],
    ) {
        let res = validate_transition(has_children, from, to);
        let allowed = allowed_transitions(has_children, from);
        prop_assert_eq!(res.is_ok(), allowed.contains(&to));
    }

    #[test]
    fn prop_double_toggle_is_identity(
        doc in arb_document(),
        pick in any::<prop::sample::Index>(),
        depth in 0..4usize,
    ) {
        let mut tree = lifecycle_tree::TreeBuilder::new()
            .with_depth(ExpansionDepth(depth))
            .build(&doc);
        let target = NodeId(u32::try_from(pick.index(tree.len())).unwrap());
        let before = snapshot(&tree);

        tree.toggle(target).unwrap();
        tree.toggle(target).unwrap();

        prop_assert_eq!(snapshot(&tree), before);
    }

    #[test]
    fn prop_collapse_then_expand_shows_every_node_once(
        doc in arb_document(),
        toggles in proptest::collection::vec(any::<prop::sample::Index>(), 0..10),
    ) {
        let mut tree = lifecycle_tree::build(&doc);
        for t in toggles {
            let id = NodeId(u32::try_from(t.index(tree.len())).unwrap());
            tree.toggle(id).unwrap();
        }

        let root = tree.root();
        tree.collapse_all(root).unwrap();
        tree.expand_all(root).unwrap();

        let visible = tree.visible_nodes();
        let unique: HashSet<_> = visible.iter().copied().collect();
        prop_assert_eq!(visible.len(), tree.len());
        prop_assert_eq!(unique.len(), tree.len());
    }

    #[test]
    fn prop_visible_and_held_partition_children(
        doc in arb_document(),
        toggles in proptest::collection::vec(any::<prop::sample::Index>(), 0..10),
    ) {
        let mut tree = lifecycle_tree::build(&doc);
        let original: Vec<Vec<NodeId>> = tree.iter().map(|n| n.children().to_vec()).collect();
        for t in toggles {
            let id = NodeId(u32::try_from(t.index(tree.len())).unwrap());
            tree.toggle(id).unwrap();
        }
        for (node, children) in tree.iter().zip(original) {
            let mut union = node.visible_children().to_vec();
            union.extend_from_slice(node.held_children());
            prop_assert!(node.visible_children().is_empty() || node.held_children().is_empty());
            prop_assert_eq!(union, children);
        }
    }
}

#[test]
fn collapse_all_keeps_direct_children_visible() {
    let mut tree = lifecycle_tree::build(&sample_document());
    let root = tree.root();
    tree.expand_all(root).unwrap();
    assert_eq!(tree.visible_nodes().len(), tree.len());

    let plan = tree.find_by_name("PLAN").unwrap();
    tree.collapse_all(plan).unwrap();

    assert_eq!(tree.node(plan).unwrap().state(), ExpansionState::Expanded);
    for &child in tree.node(plan).unwrap().children() {
        assert!(tree.is_visible(child));
        assert!(tree.node(child).unwrap().has_hidden_children());
    }
}

#[test]
fn reset_returns_to_stage_view() {
    let mut tree = lifecycle_tree::build(&sample_document());
    let initial = tree.visible_nodes();
    tree.expand_all(tree.root()).unwrap();
    tree.reset(ExpansionDepth::default());
    assert_eq!(tree.visible_nodes(), initial);
}

#[test]
fn expand_substages_leaves_tools_hidden() {
    let mut tree = lifecycle_tree::build(&sample_document());
    tree.expand_substages().unwrap();

    let visible = tree.visible_nodes();
    // root + 7 stages + 15 substages
    assert_eq!(visible.len(), 23);
    assert!(visible
        .iter()
        .all(|&id| tree.node(id).unwrap().kind() != lifecycle_tree::NodeKind::Tool));
}

#[test]
fn toggle_collapsed_stage_restores_children() {
    let mut tree = lifecycle_tree::build(&sample_document());
    let plan = tree.find_by_name("PLAN").unwrap();
    let held = tree.node(plan).unwrap().held_children().to_vec();
    assert_eq!(held.len(), 3);

    assert_eq!(tree.toggle(plan).unwrap(), ExpansionState::Expanded);
    assert_eq!(tree.node(plan).unwrap().visible_children(), held.as_slice());
    assert!(tree.node(plan).unwrap().held_children().is_empty());
}
