//! Transition strategies - how a single navigation step maps onto host
//! primitives.
//!
//! Every non-root page carries one forward and one backward strategy. The
//! default push/pop pair delegates straight to the host; the tab strategy
//! only flips tab selection on an already-presented host screen.

use std::rc::Rc;

use crate::host::ScreenHost;
use crate::screen::ScreenHandle;
use crate::types::TransitionAction;

/// Strategy for bringing a screen on stage.
pub trait ForwardTransition {
    /// Build the deferred action that presents `screen` above `from`.
    fn forward_action(
        &self,
        host: &Rc<dyn ScreenHost>,
        screen: ScreenHandle,
        from: Option<ScreenHandle>,
        animated: bool,
    ) -> TransitionAction;
}

/// Strategy for taking a screen off stage.
pub trait BackwardTransition {
    /// Build the deferred action that dismisses `screen`.
    fn backward_action(
        &self,
        host: &Rc<dyn ScreenHost>,
        screen: ScreenHandle,
        animated: bool,
    ) -> TransitionAction;
}

// =============================================================================
// Push (default)
// =============================================================================

/// The default push/pop-equivalent transition.
///
/// Assigned automatically by [`chain`](crate::path::chain) to every joined
/// component that does not carry an explicit transition.
#[derive(Debug, Clone, Copy, Default)]
pub struct PushTransition;

impl ForwardTransition for PushTransition {
    fn forward_action(
        &self,
        host: &Rc<dyn ScreenHost>,
        screen: ScreenHandle,
        from: Option<ScreenHandle>,
        animated: bool,
    ) -> TransitionAction {
        host.forward_action(screen, from, animated)
    }
}

impl BackwardTransition for PushTransition {
    fn backward_action(
        &self,
        host: &Rc<dyn ScreenHost>,
        screen: ScreenHandle,
        animated: bool,
    ) -> TransitionAction {
        host.backward_action(screen, animated)
    }
}

// =============================================================================
// Tab selection
// =============================================================================

/// Transition for pages living as tab entries inside a tab host.
///
/// Forward selects the entry on the hosting screen (the `from` screen of the
/// step) and completes synchronously. Backward completes synchronously with
/// no host effect; dismissal of the hosting screen itself is its own
/// backward step.
#[derive(Debug, Clone, Copy, Default)]
pub struct TabTransition;

impl ForwardTransition for TabTransition {
    fn forward_action(
        &self,
        host: &Rc<dyn ScreenHost>,
        screen: ScreenHandle,
        from: Option<ScreenHandle>,
        _animated: bool,
    ) -> TransitionAction {
        let host = Rc::clone(host);
        Box::new(move |done| {
            if let Some(tab_host) = from {
                host.select_tab(&tab_host, &screen);
            }
            done();
        })
    }
}

impl BackwardTransition for TabTransition {
    fn backward_action(
        &self,
        _host: &Rc<dyn ScreenHost>,
        _screen: ScreenHandle,
        _animated: bool,
    ) -> TransitionAction {
        Box::new(|done| done())
    }
}
