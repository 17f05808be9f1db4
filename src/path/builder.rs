//! Path builders - joining components into registrable paths.
//!
//! Replaces an operator DSL with plain functions. The defaulting rule: a
//! component joined into a chain receives the default push transition for
//! each slot it leaves empty; explicit transitions are never overwritten.

use super::component::PathComponent;

/// Join components into one linear path, applying default transitions.
pub fn chain(mut components: Vec<PathComponent>) -> Vec<PathComponent> {
    for component in &mut components {
        component.apply_default_transitions();
    }
    components
}

/// Build a set of paths sharing a common prefix.
///
/// Each branch is appended to a copy of the prefix, producing full
/// root-anchored paths ready for
/// [`register_branches`](crate::engine::Navigator::register_branches).
pub fn branch(
    prefix: Vec<PathComponent>,
    branches: Vec<Vec<PathComponent>>,
) -> Vec<Vec<PathComponent>> {
    branches
        .into_iter()
        .map(|suffix| {
            let mut path = prefix.clone();
            path.extend(suffix);
            chain(path)
        })
        .collect()
}
