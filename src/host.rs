//! ScreenHost - the presentation capability the engine drives.
//!
//! The engine never pushes, pops, presents or dismisses anything itself; it
//! asks the host for deferred actions and invokes them one at a time. The
//! surrounding application supplies the concrete implementation on top of
//! whatever rendering stack it uses.

use crate::screen::ScreenHandle;
use crate::types::{Completion, TransitionAction};

/// The external presentation layer.
///
/// Contract notes:
/// - `visible_screen` is queried fresh on every navigation and query; the
///   engine never caches the answer.
/// - Actions returned from the `*_action` methods must invoke their
///   completion callback exactly once, when the (possibly animated)
///   operation has fully finished. The engine will not issue the next step
///   of a navigation until then.
/// - A dismissed screen must be released by the host; the tracker's weak
///   handles rely on dismissal dropping the last owning reference.
pub trait ScreenHost {
    /// Current topmost/visible screen, if any.
    fn visible_screen(&self) -> Option<ScreenHandle>;

    /// Action that presents `screen`, above `from` when one is given.
    fn forward_action(
        &self,
        screen: ScreenHandle,
        from: Option<ScreenHandle>,
        animated: bool,
    ) -> TransitionAction;

    /// Action that dismisses `screen`.
    fn backward_action(&self, screen: ScreenHandle, animated: bool) -> TransitionAction;

    /// Wire `children` into a tab-hosting screen before it is first shown.
    fn attach_tab_children(&self, host: &ScreenHandle, children: Vec<ScreenHandle>);

    /// Switch the active tab entry of `host` without recreating anything.
    fn select_tab(&self, host: &ScreenHandle, child: &ScreenHandle);

    /// Dismiss everything currently shown and reinitialize the root
    /// presentation container, then fire `completion`.
    fn reset_root(&self, completion: Completion);
}
