//! PathComponent - the declared identity of one page.
//!
//! A component is an immutable-by-convention value the application builds
//! once and hands to registration. The tree stores its own copy; the copy in
//! the application's hands keeps working as a lookup key for `show`,
//! `pop_to` and the query calls.

use std::fmt;
use std::rc::Rc;

use crate::error::FlowError;
use crate::screen::{ScreenFactory, ScreenHandle};
use crate::transition::{BackwardTransition, ForwardTransition};
use crate::types::{compose_identifier, PageKind};

/// Declare a page with its screen factory.
///
/// The returned component has no transitions; [`chain`](crate::path::chain)
/// fills in the default push/pop pair for every slot left empty.
pub fn page(name: impl Into<String>, factory: impl Fn() -> ScreenHandle + 'static) -> PathComponent {
    PathComponent {
        name: name.into(),
        supports_variants: false,
        variant_name: None,
        kind: PageKind::Leaf,
        forward: None,
        backward: None,
        factory: Some(Rc::new(factory)),
    }
}

/// One named node of the navigation tree.
#[derive(Clone)]
pub struct PathComponent {
    name: String,
    supports_variants: bool,
    variant_name: Option<String>,
    kind: PageKind,
    forward: Option<Rc<dyn ForwardTransition>>,
    backward: Option<Rc<dyn BackwardTransition>>,
    factory: Option<ScreenFactory>,
}

impl PathComponent {
    /// The hidden tree root. Never displayed, never navigated into, so it
    /// carries no factory and no transitions.
    pub(crate) fn root() -> Self {
        Self {
            name: String::new(),
            supports_variants: false,
            variant_name: None,
            kind: PageKind::Leaf,
            forward: None,
            backward: None,
            factory: None,
        }
    }

    /// Page name, unique per logical screen unless variants are supported.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared materialization kind.
    pub fn kind(&self) -> PageKind {
        self.kind
    }

    /// Whether this page may appear at multiple tree positions.
    pub fn supports_variants(&self) -> bool {
        self.supports_variants
    }

    /// The tree's primary key: `variant_name + "_" + name` once a variant
    /// name has been assigned at registration, plain `name` otherwise.
    pub fn identifier(&self) -> String {
        compose_identifier(&self.name, self.variant_name.as_deref())
    }

    /// Mark this page as a tab host; its registered tree children become
    /// its tab entries.
    pub fn tab_host(mut self) -> Self {
        self.kind = PageKind::TabHost;
        self
    }

    /// Allow this page to appear at multiple tree positions, disambiguated
    /// by the identifier of each position's parent.
    pub fn with_variants(mut self) -> Self {
        self.supports_variants = true;
        self
    }

    /// Attach an explicit forward transition. Never overwritten by the
    /// chain defaulting rule.
    pub fn with_forward(mut self, transition: impl ForwardTransition + 'static) -> Self {
        self.forward = Some(Rc::new(transition));
        self
    }

    /// Attach an explicit backward transition. Never overwritten by the
    /// chain defaulting rule.
    pub fn with_backward(mut self, transition: impl BackwardTransition + 'static) -> Self {
        self.backward = Some(Rc::new(transition));
        self
    }

    // =========================================================================
    // Crate internals
    // =========================================================================

    pub(crate) fn set_variant_name(&mut self, parent_identifier: &str) {
        self.variant_name = Some(parent_identifier.to_string());
    }

    pub(crate) fn has_transitions(&self) -> bool {
        self.forward.is_some() && self.backward.is_some()
    }

    pub(crate) fn forward(&self) -> Option<&Rc<dyn ForwardTransition>> {
        self.forward.as_ref()
    }

    pub(crate) fn backward(&self) -> Option<&Rc<dyn BackwardTransition>> {
        self.backward.as_ref()
    }

    pub(crate) fn apply_default_transitions(&mut self) {
        use crate::transition::PushTransition;
        if self.forward.is_none() {
            self.forward = Some(Rc::new(PushTransition));
        }
        if self.backward.is_none() {
            self.backward = Some(Rc::new(PushTransition));
        }
    }

    /// Resolve the identifier `show`/`pop_to` should look up, folding in a
    /// caller-supplied variant.
    pub(crate) fn resolved_identifier(&self, variant: Option<&str>) -> Result<String, FlowError> {
        match (self.supports_variants, variant) {
            (true, None) => Err(FlowError::MissingVariant(self.name.clone())),
            (false, Some(_)) => Err(FlowError::VariantNotSupported(self.name.clone())),
            (_, variant) => Ok(compose_identifier(&self.name, variant)),
        }
    }

    pub(crate) fn make_screen(&self) -> Result<ScreenHandle, FlowError> {
        let factory = self
            .factory
            .as_ref()
            .ok_or_else(|| FlowError::Internal(format!("no factory for {}", self.identifier())))?;
        Ok(factory())
    }
}

impl fmt::Debug for PathComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PathComponent")
            .field("identifier", &self.identifier())
            .field("kind", &self.kind)
            .field("supports_variants", &self.supports_variants)
            .finish()
    }
}
