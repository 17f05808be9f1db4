//! State Module - Runtime navigation state.
//!
//! - **Tracker** - which screens are alive for which identifiers, their
//!   parameters and skipped flags

mod tracker;

pub use tracker::*;
