use crate::error::StateMachineError;
use crate::types::ExpansionState;

/// Validates an expansion transition.
///
/// Nodes with children may flip between `Collapsed` and `Expanded`. Leaves have
/// nothing to show or hide and stay `Collapsed`. Illegal transitions return an
/// error; the `strict-debug` feature turns them into a panic.
pub fn validate_transition(
    has_children: bool,
    from: ExpansionState,
    to: ExpansionState,
) -> Result<(), StateMachineError> {
    if allowed(has_children, from, to) {
        Ok(())
    } else {
        #[cfg(feature = "strict-debug")]
        panic!(
            "Illegal expansion transition attempted: {:?} -> {:?} (has_children = {})",
            from, to, has_children
        );

        #[cfg(not(feature = "strict-debug"))]
        Err(StateMachineError::IllegalTransition)
    }
}

pub fn allowed_transitions(has_children: bool, from: ExpansionState) -> Vec<ExpansionState> {
    use ExpansionState::*;
    if !has_children {
        return vec![];
    }
    match from {
        Collapsed => vec![Expanded],
        Expanded => vec![Collapsed],
    }
}

/// State a freshly built node starts in.
pub fn initial_state(has_children: bool, expanded_by_depth: bool) -> ExpansionState {
    if has_children && expanded_by_depth {
        ExpansionState::Expanded
    } else {
        ExpansionState::Collapsed
    }
}

fn allowed(has_children: bool, from: ExpansionState, to: ExpansionState) -> bool {
    allowed_transitions(has_children, from)
        .into_iter()
        .any(|s| s == to)
}
