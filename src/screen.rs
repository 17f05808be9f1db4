//! Screen handles - the engine's view of host-owned screen objects.
//!
//! Ownership of screens belongs entirely to the external host. The engine
//! holds owning handles only transiently while a navigation is in flight;
//! everything it retains across navigations is a weak handle.

use std::rc::{Rc, Weak};

/// A screen instance owned by the external host.
///
/// The engine only needs identity (pointer equality through handles) and the
/// defensive kind check; what a screen renders is none of its business.
pub trait Screen {
    /// Whether this screen can host tab children.
    fn is_tab_host(&self) -> bool {
        false
    }
}

/// Owning handle to a screen.
pub type ScreenHandle = Rc<dyn Screen>;

/// Non-owning handle stored by the tracker. Never keeps a screen alive; once
/// the host discards the screen, upgrades fail and the entry reads as absent.
pub type WeakScreen = Weak<dyn Screen>;

/// Zero-argument producer of a new screen instance.
pub type ScreenFactory = Rc<dyn Fn() -> ScreenHandle>;

/// Pointer identity between two screen handles.
///
/// Compares the data addresses only, so two handles to the same screen
/// obtained through different trait objects still compare equal.
pub fn same_screen(a: &ScreenHandle, b: &ScreenHandle) -> bool {
    std::ptr::eq(Rc::as_ptr(a) as *const (), Rc::as_ptr(b) as *const ())
}
