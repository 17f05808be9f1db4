//! Navigator - the show/pop/back orchestrator.
//!
//! The navigator owns the registration tree and the screen tracker, and
//! drives an external [`ScreenHost`] through sequences of deferred
//! transition actions. Its only notion of "where we are" is derived on
//! demand: the host's visible screen, reverse-mapped through the tracker,
//! looked up in the tree. Nothing is cached, so the engine can never
//! disagree with the host about the real screen stack.
//!
//! All validation happens before the first host side effect: identifiers,
//! variants and screen construction are resolved while planning, and only a
//! fully-planned step sequence is handed to the sequencer.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use super::sequencer::StepQueue;
use crate::error::FlowError;
use crate::host::ScreenHost;
use crate::path::{PathComponent, PathTree};
use crate::path::NodeId;
use crate::screen::ScreenHandle;
use crate::state::ScreenTracker;
use crate::types::{Completion, PageKind, TransitionAction, TransitionParameter};

// =============================================================================
// Show Options
// =============================================================================

/// Options for a single [`Navigator::show`] call.
pub struct ShowOptions {
    /// Parent identifier disambiguating a variant-supporting page.
    pub variant: Option<String>,
    /// Values to attach to newly displayed nodes, matched by identifier.
    pub parameters: Vec<TransitionParameter>,
    /// Page names to pass through without creating a screen.
    pub skip: Vec<String>,
    /// Whether host transitions should animate.
    pub animated: bool,
}

impl Default for ShowOptions {
    fn default() -> Self {
        Self {
            variant: None,
            parameters: Vec::new(),
            skip: Vec::new(),
            animated: true,
        }
    }
}

impl ShowOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn variant(mut self, variant: impl Into<String>) -> Self {
        self.variant = Some(variant.into());
        self
    }

    pub fn parameter(mut self, parameter: TransitionParameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn skip(mut self, page: &PathComponent) -> Self {
        self.skip.push(page.name().to_string());
        self
    }

    pub fn animated(mut self, animated: bool) -> Self {
        self.animated = animated;
        self
    }
}

// =============================================================================
// Navigator
// =============================================================================

/// The navigation-flow engine.
///
/// Construct one at the application's composition root, register the page
/// tree, install the host with [`prepare`](Navigator::prepare), then drive
/// it with [`show`](Navigator::show), [`pop_to`](Navigator::pop_to) and
/// [`go_back`](Navigator::go_back).
pub struct Navigator {
    tree: PathTree,
    tracker: Rc<RefCell<ScreenTracker>>,
    host: Option<Rc<dyn ScreenHost>>,
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            tree: PathTree::new(),
            tracker: Rc::new(RefCell::new(ScreenTracker::new())),
            host: None,
        }
    }

    /// Install the screen host. Navigation before this fails with
    /// [`FlowError::MissingConfiguration`].
    pub fn prepare(&mut self, host: Rc<dyn ScreenHost>) {
        self.host = Some(host);
    }

    /// Register one linear path. See [`PathTree::register`].
    pub fn register(&mut self, path: Vec<PathComponent>) -> Result<(), FlowError> {
        self.tree.register(path)
    }

    /// Register a set of paths sharing a common prefix.
    pub fn register_branches(&mut self, paths: Vec<Vec<PathComponent>>) -> Result<(), FlowError> {
        self.tree.register_branches(paths)
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Navigate to `page`, dismissing and presenting whatever the path diff
    /// requires.
    pub fn show(&self, page: &PathComponent, options: ShowOptions) -> Result<(), FlowError> {
        let host = self.host()?;
        let target_identifier = page.resolved_identifier(options.variant.as_deref())?;
        let target = match self.tree.find(&target_identifier) {
            Some(node) => node,
            None => return Err(FlowError::UnregisteredPathIdentifier(target_identifier)),
        };
        let target_chain = self.tree.ancestor_chain(target, true);

        let mut steps: Vec<TransitionAction> = Vec::new();
        let mut dismiss_count = 0usize;

        // Dismiss phase: climb to the lowest common ancestor. The display
        // segment is everything below it on the target chain; with no
        // current position the whole chain is up for display.
        let display_nodes: Vec<NodeId>;
        let mut last_screen: Option<ScreenHandle> = None;
        if let Some(current) = self.current_node() {
            let (up, down) = self.tree.distance(current, target);
            steps.extend(self.backward_steps(&host, current, up, options.animated)?);
            dismiss_count = up;

            let first_display = target_chain.len() - down;
            display_nodes = target_chain[first_display..].to_vec();
            if first_display >= 1 {
                let ancestor = target_chain[first_display - 1];
                if ancestor != PathTree::ROOT {
                    last_screen = self
                        .tracker
                        .borrow()
                        .screen(&self.tree.component(ancestor).identifier());
                }
            }
        } else {
            display_nodes = target_chain[1..].to_vec();
        }

        // Display phase. Screens are constructed here, while planning, so
        // factory and kind failures surface before any host call.
        let skip_set: HashSet<&str> = options.skip.iter().map(String::as_str).collect();
        let mut pending_tabs: HashMap<String, ScreenHandle> = HashMap::new();
        let mut display_count = 0usize;
        let mut skip_count = 0usize;

        for &node in &display_nodes {
            let component = self.tree.component(node);
            let identifier = component.identifier();

            // Reuse a live screen, or a tab entry created earlier in this
            // same plan. A still-live screen wins over a skip request.
            let existing = self
                .tracker
                .borrow()
                .screen(&identifier)
                .or_else(|| pending_tabs.get(&identifier).cloned());
            if let Some(screen) = existing {
                let under_tab_host = self
                    .tree
                    .parent(node)
                    .map(|parent| self.tree.component(parent).kind() == PageKind::TabHost)
                    .unwrap_or(false);
                if under_tab_host {
                    if let Some(tab_host_screen) = last_screen.clone() {
                        let host = Rc::clone(&host);
                        let child = Rc::clone(&screen);
                        steps.push(Box::new(move |done: Completion| {
                            host.select_tab(&tab_host_screen, &child);
                            done();
                        }));
                    }
                }
                last_screen = Some(screen);
                continue;
            }

            if skip_set.contains(component.name()) {
                let tracker = Rc::clone(&self.tracker);
                let skipped_identifier = identifier.clone();
                steps.push(Box::new(move |done: Completion| {
                    tracker
                        .borrow_mut()
                        .register(None, None, &skipped_identifier, true);
                    done();
                }));
                skip_count += 1;
                continue;
            }

            let screen = component.make_screen()?;
            let mut tab_children: Option<Vec<(String, ScreenHandle)>> = None;
            if component.kind() == PageKind::TabHost {
                if !screen.is_tab_host() {
                    return Err(FlowError::ScreenKindMismatch(identifier));
                }
                let mut children = Vec::new();
                for &child in self.tree.children(node) {
                    let child_component = self.tree.component(child);
                    let child_identifier = child_component.identifier();
                    let child_screen = child_component.make_screen()?;
                    pending_tabs.insert(child_identifier.clone(), Rc::clone(&child_screen));
                    children.push((child_identifier, child_screen));
                }
                tab_children = Some(children);
            }

            let parameter = options
                .parameters
                .iter()
                .find(|parameter| parameter.identifier() == identifier)
                .map(|parameter| parameter.value().to_string());

            let forward = Rc::clone(component.forward().ok_or_else(|| {
                FlowError::Internal(format!("no forward transition for {identifier}"))
            })?);
            let action =
                forward.forward_action(&host, Rc::clone(&screen), last_screen.clone(), options.animated);

            let tracker = Rc::clone(&self.tracker);
            let host_for_step = Rc::clone(&host);
            let step_identifier = identifier.clone();
            let step_screen = Rc::clone(&screen);
            steps.push(Box::new(move |done: Completion| {
                if let Some(children) = tab_children {
                    let handles: Vec<ScreenHandle> =
                        children.iter().map(|(_, screen)| Rc::clone(screen)).collect();
                    host_for_step.attach_tab_children(&step_screen, handles);
                    let mut tracked = tracker.borrow_mut();
                    for (child_identifier, child_screen) in &children {
                        tracked.register(Some(child_screen), None, child_identifier, false);
                    }
                }
                action(Box::new(move || {
                    tracker
                        .borrow_mut()
                        .register(Some(&step_screen), parameter, &step_identifier, false);
                    done();
                }));
            }));
            display_count += 1;
            last_screen = Some(screen);
        }

        log::debug!(
            "show {target_identifier}: {dismiss_count} dismiss, {display_count} display, {skip_count} skipped"
        );
        StepQueue::new(steps, None).run();
        Ok(())
    }

    /// Dismiss back to `page`, which must be a strict ancestor of the
    /// current position.
    pub fn pop_to(&self, page: &PathComponent, variant: Option<&str>) -> Result<(), FlowError> {
        let host = self.host()?;
        let identifier = page.resolved_identifier(variant)?;
        let target = match self.tree.find(&identifier) {
            Some(node) => node,
            None => return Err(FlowError::UnregisteredPathIdentifier(identifier)),
        };
        if self.tracker.borrow().is_skipped(&identifier) {
            return Err(FlowError::PopToSkippedPath(identifier));
        }
        let Some(current) = self.current_node() else {
            return Ok(());
        };

        let (up, down) = self.tree.distance(current, target);
        if down != 0 {
            return Err(FlowError::NotAnAncestor(identifier));
        }

        let steps = self.backward_steps(&host, current, up, true)?;
        log::debug!("pop to {identifier}: {up} steps");
        StepQueue::new(steps, None).run();
        Ok(())
    }

    /// Dismiss the current screen back to its parent. Fire-and-forget: with
    /// no host, no current position, nothing above the first page, or a
    /// missing live screen this silently does nothing.
    pub fn go_back(&self, animated: bool) {
        let Some(host) = self.host.clone() else { return };
        let Some(current) = self.current_node() else { return };
        let Some(parent) = self.tree.parent(current) else { return };
        if parent == PathTree::ROOT {
            return;
        }

        let component = self.tree.component(current);
        let identifier = component.identifier();
        let Some(screen) = self.tracker.borrow().screen(&identifier) else { return };
        let Some(backward) = component.backward() else { return };

        log::debug!("go back from {identifier}");
        let action = backward.backward_action(&host, screen, animated);
        action(Box::new(|| {}));
    }

    /// Drop all tracked state and have the host tear down and reinitialize
    /// its root presentation container.
    pub fn reset(&self, completion: Completion) {
        log::debug!("reset");
        self.tracker.borrow_mut().reset();
        match &self.host {
            Some(host) => host.reset_root(completion),
            None => completion(),
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// The page currently visible, if the host's visible screen is tracked.
    pub fn current_path_component(&self) -> Option<PathComponent> {
        self.current_node()
            .map(|node| self.tree.component(node).clone())
    }

    /// Slash-joined identifier chain of the current position, e.g.
    /// `"1/2/2_4"`.
    pub fn current_path_description(&self) -> Option<String> {
        self.current_node()
            .map(|node| self.tree.path_description(node))
    }

    /// Parameter attached to the current position, if any.
    pub fn current_parameter(&self) -> Option<String> {
        let node = self.current_node()?;
        self.tracker
            .borrow()
            .parameter(&self.tree.component(node).identifier())
    }

    /// Slash-joined identifier chain for an arbitrary registered page.
    pub fn path_description(
        &self,
        page: &PathComponent,
        variant: Option<&str>,
    ) -> Result<String, FlowError> {
        let identifier = page.resolved_identifier(variant)?;
        match self.tree.find(&identifier) {
            Some(node) => Ok(self.tree.path_description(node)),
            None => Err(FlowError::UnregisteredPathIdentifier(identifier)),
        }
    }

    /// Parameter tracked for an arbitrary registered page.
    pub fn parameter(
        &self,
        page: &PathComponent,
        variant: Option<&str>,
    ) -> Result<Option<String>, FlowError> {
        let identifier = page.resolved_identifier(variant)?;
        if self.tree.find(&identifier).is_none() {
            return Err(FlowError::UnregisteredPathIdentifier(identifier));
        }
        Ok(self.tracker.borrow().parameter(&identifier))
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn host(&self) -> Result<Rc<dyn ScreenHost>, FlowError> {
        self.host.clone().ok_or(FlowError::MissingConfiguration)
    }

    /// Derive the current tree position from the host's visible screen.
    fn current_node(&self) -> Option<NodeId> {
        let host = self.host.as_ref()?;
        let visible = host.visible_screen()?;
        let identifier = self.tracker.borrow().identifier(&visible)?;
        self.tree.find(&identifier)
    }

    /// Plan `count` backward steps starting at `from`. Skipped nodes count
    /// as a step but need no dismiss action, as do nodes whose screen the
    /// host already discarded.
    fn backward_steps(
        &self,
        host: &Rc<dyn ScreenHost>,
        from: NodeId,
        count: usize,
        animated: bool,
    ) -> Result<Vec<TransitionAction>, FlowError> {
        let mut steps = Vec::new();
        let mut node = from;
        for _ in 0..count {
            let component = self.tree.component(node);
            let identifier = component.identifier();
            if !self.tracker.borrow().is_skipped(&identifier) {
                if let Some(screen) = self.tracker.borrow().screen(&identifier) {
                    let backward = Rc::clone(component.backward().ok_or_else(|| {
                        FlowError::Internal(format!("no backward transition for {identifier}"))
                    })?);
                    steps.push(backward.backward_action(host, screen, animated));
                }
            }
            node = self
                .tree
                .parent(node)
                .ok_or_else(|| FlowError::Internal("walked above the root".into()))?;
        }
        Ok(steps)
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}
