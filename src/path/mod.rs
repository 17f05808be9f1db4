//! Path Module - Page declarations and the registration tree.
//!
//! This module contains everything about *where screens can live*:
//!
//! - **Component** - `PathComponent`, the declared identity of one page
//! - **Builder** - `chain`/`branch` helpers with the transition defaulting rule
//! - **Tree** - `PathTree`, the arena-backed registration tree with lookup,
//!   ancestor chains and the up/down distance algorithm

mod builder;
mod component;
mod tree;

pub use builder::*;
pub use component::*;
pub use tree::*;
