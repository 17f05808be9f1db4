//! # pathflow
//!
//! Navigation-flow engine for tree-structured screen hierarchies.
//!
//! An application declares named pages and the parent/child paths between
//! them, then drives presentation purely in terms of page identities. The
//! engine diffs the tree position you are at against the one you want,
//! dismisses and presents through an abstract host, and keeps track of
//! which identifiers map to which live screens.
//!
//! ## Architecture
//!
//! ```text
//! page declarations → PathTree ──┐
//!                                ├─ Navigator::show ─→ dismiss/display steps ─→ ScreenHost
//! host's visible screen ─ Tracker┘
//! ```
//!
//! The engine never renders anything: pushing, popping and tab selection
//! live behind the [`ScreenHost`] trait the application implements.
//!
//! ## Modules
//!
//! - [`path`] - Page declarations, builders and the registration tree
//! - [`engine`] - The navigator and its step sequencer
//! - [`state`] - Runtime screen tracking
//! - [`transition`] - Forward/backward transition strategies
//! - [`host`] / [`screen`] - The external collaborator seams
//! - [`error`] - The failure taxonomy
//! - [`types`] - Foundation types

pub mod engine;
pub mod error;
pub mod host;
pub mod path;
pub mod screen;
pub mod state;
pub mod transition;
pub mod types;

// Re-export commonly used items
pub use engine::{Navigator, ShowOptions};
pub use error::FlowError;
pub use host::ScreenHost;
pub use path::{branch, chain, page, PathComponent, PathTree};
pub use screen::{same_screen, Screen, ScreenFactory, ScreenHandle, WeakScreen};
pub use state::ScreenTracker;
pub use transition::{BackwardTransition, ForwardTransition, PushTransition, TabTransition};
pub use types::{Completion, PageKind, TransitionAction, TransitionParameter};
