//! PathTree - the arena-backed registration tree.
//!
//! Nodes live in a `Vec`; child lists hold indices and the parent link is a
//! plain index too, so the back-reference never owns anything. Index 0 is a
//! hidden root that carries an empty component: it anchors every registered
//! path but is never displayed and never appears in path descriptions.
//!
//! The tree is built once during a registration phase and is never mutated
//! concurrently with navigation.

use smallvec::SmallVec;

use super::component::PathComponent;
use crate::error::FlowError;

/// Index of a node inside the arena.
pub(crate) type NodeId = usize;

struct PathNode {
    component: PathComponent,
    parent: Option<NodeId>,
    children: SmallVec<[NodeId; 4]>,
}

/// The registration tree of [`PathComponent`]s.
pub struct PathTree {
    nodes: Vec<PathNode>,
}

impl PathTree {
    pub(crate) const ROOT: NodeId = 0;

    pub fn new() -> Self {
        Self {
            nodes: vec![PathNode {
                component: PathComponent::root(),
                parent: None,
                children: SmallVec::new(),
            }],
        }
    }

    // =========================================================================
    // Registration
    // =========================================================================

    /// Insert one linear path, reusing any already-registered prefix.
    ///
    /// Scanning proceeds from the first element: an element whose identifier
    /// already exists as a child of the cursor is reused, anything else
    /// becomes a new child. Registering `[A,B]` then `[A,C]` therefore
    /// yields one `A` node with two children.
    ///
    /// The whole path is validated before the tree is touched:
    /// - the terminal element's identifier must not exist anywhere in the
    ///   tree yet, and no element may duplicate an identifier outside the
    ///   shared prefix ([`FlowError::PathAlreadyRegistered`]);
    /// - every element must carry both transitions
    ///   ([`FlowError::MissingPathStepTransition`]).
    ///
    /// Variant-supporting elements get their `variant_name` assigned here,
    /// from the identifier of their immediate parent in this path.
    pub fn register(&mut self, mut path: Vec<PathComponent>) -> Result<(), FlowError> {
        if path.is_empty() {
            return Ok(());
        }

        // Resolve variant names and validate without mutating the tree.
        let last = path.len() - 1;
        let mut planned: Vec<String> = Vec::with_capacity(path.len());
        let mut cursor = Some(Self::ROOT);
        let mut parent_identifier = String::new();
        for (index, component) in path.iter_mut().enumerate() {
            if component.supports_variants() && !parent_identifier.is_empty() {
                component.set_variant_name(&parent_identifier);
            }
            let identifier = component.identifier();
            if !component.has_transitions() {
                return Err(FlowError::MissingPathStepTransition(identifier));
            }
            let existing_child = cursor.and_then(|node| self.child_by_identifier(node, &identifier));
            // Identifier uniqueness: an element that would create a new node
            // must not exist anywhere else, and a terminal element must not
            // exist at all, not even on the shared prefix.
            if existing_child.is_none() && self.find(&identifier).is_some() {
                return Err(FlowError::PathAlreadyRegistered(identifier));
            }
            if index == last && existing_child.is_some() {
                return Err(FlowError::PathAlreadyRegistered(identifier));
            }
            cursor = existing_child;
            parent_identifier = identifier.clone();
            planned.push(identifier);
        }

        // Insert, reusing the shared prefix.
        let mut cursor = Self::ROOT;
        for (component, identifier) in path.into_iter().zip(planned) {
            cursor = match self.child_by_identifier(cursor, &identifier) {
                Some(child) => child,
                None => self.insert_child(cursor, component),
            };
        }

        log::debug!("registered path {}", self.path_description(cursor));
        Ok(())
    }

    /// Insert a set of paths, typically built with
    /// [`branch`](crate::path::branch). Paths are registered in order; the
    /// first conflict aborts the remainder.
    pub fn register_branches(&mut self, paths: Vec<Vec<PathComponent>>) -> Result<(), FlowError> {
        for path in paths {
            self.register(path)?;
        }
        Ok(())
    }

    fn insert_child(&mut self, parent: NodeId, component: PathComponent) -> NodeId {
        let node = self.nodes.len();
        self.nodes.push(PathNode {
            component,
            parent: Some(parent),
            children: SmallVec::new(),
        });
        self.nodes[parent].children.push(node);
        node
    }

    // =========================================================================
    // Lookup
    // =========================================================================

    /// Depth-first search by identifier: self then children, pre-order,
    /// first match wins.
    pub(crate) fn find(&self, identifier: &str) -> Option<NodeId> {
        self.find_from(Self::ROOT, identifier)
    }

    fn find_from(&self, node: NodeId, identifier: &str) -> Option<NodeId> {
        if node != Self::ROOT && self.nodes[node].component.identifier() == identifier {
            return Some(node);
        }
        self.nodes[node]
            .children
            .iter()
            .find_map(|&child| self.find_from(child, identifier))
    }

    fn child_by_identifier(&self, parent: NodeId, identifier: &str) -> Option<NodeId> {
        self.nodes[parent]
            .children
            .iter()
            .copied()
            .find(|&child| self.nodes[child].component.identifier() == identifier)
    }

    pub(crate) fn component(&self, node: NodeId) -> &PathComponent {
        &self.nodes[node].component
    }

    pub(crate) fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes[node].parent
    }

    pub(crate) fn children(&self, node: NodeId) -> &[NodeId] {
        &self.nodes[node].children
    }

    // =========================================================================
    // Chains and distance
    // =========================================================================

    /// Root-to-node path, root first. Includes the hidden root.
    pub(crate) fn ancestor_chain(&self, node: NodeId, include_self: bool) -> Vec<NodeId> {
        let mut chain = Vec::new();
        let mut cursor = Some(node);
        while let Some(current) = cursor {
            chain.push(current);
            cursor = self.nodes[current].parent;
        }
        chain.reverse();
        if !include_self {
            chain.pop();
        }
        chain
    }

    /// Up/down hop counts between two nodes.
    ///
    /// Both root-anchored chains are compared element by element; the last
    /// matching node is the lowest common ancestor. `up` is the hop count
    /// from `a` to the ancestor, `down` from the ancestor to `b`. `(0, 0)`
    /// with distinct nodes means no common ancestor, which callers must
    /// treat as disjoint trees.
    pub(crate) fn distance(&self, a: NodeId, b: NodeId) -> (usize, usize) {
        let chain_a = self.ancestor_chain(a, true);
        let chain_b = self.ancestor_chain(b, true);
        let common = chain_a
            .iter()
            .zip(&chain_b)
            .take_while(|(x, y)| x == y)
            .count();
        if common == 0 {
            return (0, 0);
        }
        (chain_a.len() - common, chain_b.len() - common)
    }

    /// Slash-joined identifiers from the first page down to `node`, e.g.
    /// `"1/2/2_4"`. The hidden root contributes nothing.
    pub(crate) fn path_description(&self, node: NodeId) -> String {
        self.ancestor_chain(node, true)
            .into_iter()
            .filter(|&n| n != Self::ROOT)
            .map(|n| self.nodes[n].component.identifier())
            .collect::<Vec<_>>()
            .join("/")
    }
}

impl Default for PathTree {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use proptest::prelude::*;

    use super::*;
    use crate::path::{chain, page};
    use crate::screen::{Screen, ScreenHandle};

    struct Dummy;
    impl Screen for Dummy {}

    fn dummy_page(name: &str) -> PathComponent {
        page(name, || Rc::new(Dummy) as ScreenHandle)
    }

    fn linear_tree(names: &[&str]) -> PathTree {
        let mut tree = PathTree::new();
        tree.register(chain(names.iter().map(|n| dummy_page(n)).collect()))
            .unwrap();
        tree
    }

    #[test]
    fn test_registered_chain_is_findable_in_order() {
        let tree = linear_tree(&["1", "2", "3", "4"]);

        let node = tree.find("4").unwrap();
        let identifiers: Vec<String> = tree
            .ancestor_chain(node, true)
            .into_iter()
            .filter(|&n| n != PathTree::ROOT)
            .map(|n| tree.component(n).identifier())
            .collect();
        assert_eq!(identifiers, ["1", "2", "3", "4"]);
    }

    #[test]
    fn test_prefix_is_shared() {
        let mut tree = PathTree::new();
        tree.register(chain(vec![dummy_page("a"), dummy_page("b")]))
            .unwrap();
        tree.register(chain(vec![dummy_page("a"), dummy_page("c")]))
            .unwrap();

        let a = tree.find("a").unwrap();
        assert_eq!(tree.children(a).len(), 2);
    }

    #[test]
    fn test_duplicate_terminal_is_rejected() {
        let mut tree = PathTree::new();
        tree.register(chain(vec![dummy_page("a"), dummy_page("b")]))
            .unwrap();

        let err = tree
            .register(chain(vec![dummy_page("x"), dummy_page("b")]))
            .unwrap_err();
        assert_eq!(err, FlowError::PathAlreadyRegistered("b".into()));

        // Same terminal via the same prefix is just as much of a conflict.
        let err = tree
            .register(chain(vec![dummy_page("a"), dummy_page("b")]))
            .unwrap_err();
        assert_eq!(err, FlowError::PathAlreadyRegistered("b".into()));
    }

    #[test]
    fn test_interior_duplicate_is_rejected() {
        let mut tree = PathTree::new();
        tree.register(chain(vec![dummy_page("a"), dummy_page("b")]))
            .unwrap();

        // "b" would become a second node under a fresh prefix.
        let err = tree
            .register(chain(vec![dummy_page("x"), dummy_page("b"), dummy_page("c")]))
            .unwrap_err();
        assert_eq!(err, FlowError::PathAlreadyRegistered("b".into()));
        assert!(tree.find("x").is_none());
    }

    #[test]
    fn test_missing_transition_is_rejected_before_insertion() {
        let mut tree = PathTree::new();
        // Bypassing chain() leaves the transitions empty.
        let err = tree
            .register(vec![dummy_page("a"), dummy_page("b")])
            .unwrap_err();
        assert_eq!(err, FlowError::MissingPathStepTransition("a".into()));
        assert!(tree.find("a").is_none());
    }

    #[test]
    fn test_distance_in_branching_tree() {
        // root{1{3,4}, 2}
        let mut tree = PathTree::new();
        tree.register(chain(vec![dummy_page("1"), dummy_page("3")]))
            .unwrap();
        tree.register(chain(vec![dummy_page("1"), dummy_page("4")]))
            .unwrap();
        tree.register(chain(vec![dummy_page("2")])).unwrap();

        let n2 = tree.find("2").unwrap();
        let n3 = tree.find("3").unwrap();
        let n4 = tree.find("4").unwrap();

        assert_eq!(tree.distance(n3, n2), (2, 1));
        assert_eq!(tree.distance(n2, n3), (1, 2));
        assert_eq!(tree.distance(n3, n4), (1, 1));
        assert_eq!(tree.distance(n3, n3), (0, 0));
    }

    #[test]
    fn test_variant_terminals_get_distinct_identifiers() {
        let mut tree = PathTree::new();
        tree.register(chain(vec![
            dummy_page("1"),
            dummy_page("2"),
            dummy_page("4").with_variants(),
        ]))
        .unwrap();
        tree.register(chain(vec![
            dummy_page("1"),
            dummy_page("3"),
            dummy_page("4").with_variants(),
        ]))
        .unwrap();

        assert!(tree.find("2_4").is_some());
        assert!(tree.find("3_4").is_some());
        assert!(tree.find("4").is_none());
    }

    #[test]
    fn test_path_description_excludes_root() {
        let mut tree = PathTree::new();
        tree.register(chain(vec![
            dummy_page("1"),
            dummy_page("2"),
            dummy_page("4").with_variants(),
        ]))
        .unwrap();

        let node = tree.find("2_4").unwrap();
        assert_eq!(tree.path_description(node), "1/2/2_4");
    }

    #[test]
    fn test_find_is_preorder_first_match() {
        let mut tree = PathTree::new();
        tree.register(chain(vec![dummy_page("a"), dummy_page("x").with_variants()]))
            .unwrap();
        tree.register(chain(vec![dummy_page("b"), dummy_page("x").with_variants()]))
            .unwrap();

        // "a" was registered first, so its subtree wins the scan.
        let found = tree.find("a_x").unwrap();
        let parent = tree.parent(found).unwrap();
        assert_eq!(tree.component(parent).identifier(), "a");
    }

    proptest! {
        #[test]
        fn distance_is_symmetric(
            parents in prop::collection::vec(any::<prop::sample::Index>(), 1..24),
            picks in any::<(prop::sample::Index, prop::sample::Index)>(),
        ) {
            // Random arena: node i hangs under any earlier node.
            let mut tree = PathTree::new();
            let mut ids: Vec<NodeId> = vec![PathTree::ROOT];
            for (i, parent) in parents.iter().enumerate() {
                let parent = ids[parent.index(ids.len())];
                let node = tree.insert_child(parent, dummy_page(&format!("n{i}")));
                ids.push(node);
            }

            let a = ids[picks.0.index(ids.len())];
            let b = ids[picks.1.index(ids.len())];

            let (up, down) = tree.distance(a, b);
            let (up_rev, down_rev) = tree.distance(b, a);
            prop_assert_eq!((up, down), (down_rev, up_rev));
            prop_assert_eq!(tree.distance(a, a), (0, 0));
        }
    }
}
