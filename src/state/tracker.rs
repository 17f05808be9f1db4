//! Screen Tracker - runtime bookkeeping per node identifier.
//!
//! Maps identifiers to live screen handles, their parameters and their
//! skipped status. Handles are weak: the tracker never keeps a screen alive,
//! and an entry whose screen the host has discarded reads as absent.

use std::collections::HashMap;
use std::rc::Rc;

use crate::screen::{same_screen, ScreenHandle, WeakScreen};

struct TrackedScreen {
    screen: Option<WeakScreen>,
    parameter: Option<String>,
    skipped: bool,
}

/// Runtime map from node identifier to tracked screen state.
#[derive(Default)]
pub struct ScreenTracker {
    entries: HashMap<String, TrackedScreen>,
}

impl ScreenTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the state of a node, overwriting any existing entry for that
    /// identifier. Skipped nodes are registered without a screen.
    pub fn register(
        &mut self,
        screen: Option<&ScreenHandle>,
        parameter: Option<String>,
        identifier: &str,
        skipped: bool,
    ) {
        self.entries.insert(
            identifier.to_string(),
            TrackedScreen {
                screen: screen.map(Rc::downgrade),
                parameter,
                skipped,
            },
        );
    }

    /// Live screen for an identifier, if the host still owns one.
    pub fn screen(&self, identifier: &str) -> Option<ScreenHandle> {
        self.entries.get(identifier)?.screen.as_ref()?.upgrade()
    }

    /// Reverse lookup: which identifier a live screen is tracked under.
    pub fn identifier(&self, screen: &ScreenHandle) -> Option<String> {
        self.entries.iter().find_map(|(identifier, entry)| {
            let tracked = entry.screen.as_ref()?.upgrade()?;
            same_screen(&tracked, screen).then(|| identifier.clone())
        })
    }

    pub fn parameter(&self, identifier: &str) -> Option<String> {
        self.entries.get(identifier)?.parameter.clone()
    }

    pub fn is_skipped(&self, identifier: &str) -> bool {
        self.entries
            .get(identifier)
            .is_some_and(|entry| entry.skipped)
    }

    /// Reset the skipped flag. No-op for absent identifiers.
    pub fn clear_skip(&mut self, identifier: &str) {
        if let Some(entry) = self.entries.get_mut(identifier) {
            entry.skipped = false;
        }
    }

    /// Drop all entries.
    pub fn reset(&mut self) {
        self.entries.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
