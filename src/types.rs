//! Core types for pathflow.
//!
//! These types define the foundation that everything builds on: identifier
//! composition, the deferred-action shape transitions produce, and the
//! values callers attach to a navigation.

use std::fmt;

use crate::path::PathComponent;

// =============================================================================
// Deferred Actions
// =============================================================================

/// Completion callback fired when a transition action finishes.
pub type Completion = Box<dyn FnOnce()>;

/// A deferred presentation/dismissal action.
///
/// Hosts and transitions return these instead of performing work directly;
/// the engine invokes the action with a completion callback and waits for
/// that callback before issuing the next step of the same navigation.
pub type TransitionAction = Box<dyn FnOnce(Completion)>;

// =============================================================================
// Page Kind
// =============================================================================

/// What a page materializes into when displayed.
///
/// Decided at declaration time; the engine never inspects the runtime type
/// of an instantiated screen to discover tab hosting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageKind {
    /// An ordinary screen.
    #[default]
    Leaf,
    /// A screen that hosts its registered tree children as tab entries.
    TabHost,
}

// =============================================================================
// Identifiers
// =============================================================================

/// Compose a tree identifier from a page name and an optional variant.
pub(crate) fn compose_identifier(name: &str, variant: Option<&str>) -> String {
    match variant {
        Some(variant) => format!("{variant}_{name}"),
        None => name.to_string(),
    }
}

// =============================================================================
// Transition Parameter
// =============================================================================

/// A value attached to a specific (page, variant) pair during `show`.
///
/// The identifier is composed the same way as [`PathComponent`]'s, so a
/// parameter registered for one variant of a page is invisible to every
/// other variant of the same page.
#[derive(Clone, PartialEq, Eq)]
pub struct TransitionParameter {
    name: String,
    variant: Option<String>,
    value: String,
}

impl TransitionParameter {
    /// Parameter for a page without a variant.
    pub fn new(page: &PathComponent, value: impl Into<String>) -> Self {
        Self {
            name: page.name().to_string(),
            variant: None,
            value: value.into(),
        }
    }

    /// Parameter for a specific variant of a page. `variant` is the
    /// identifier of the page's immediate parent at the targeted position.
    pub fn for_variant(
        page: &PathComponent,
        variant: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            name: page.name().to_string(),
            variant: Some(variant.into()),
            value: value.into(),
        }
    }

    /// The (node, variant) identifier this parameter attaches to.
    pub fn identifier(&self) -> String {
        compose_identifier(&self.name, self.variant.as_deref())
    }

    /// The attached value.
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Debug for TransitionParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransitionParameter")
            .field("identifier", &self.identifier())
            .field("value", &self.value)
            .finish()
    }
}
