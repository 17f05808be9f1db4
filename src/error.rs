//! Error taxonomy - every failure the engine reports.
//!
//! All error conditions are deterministic functions of the registered tree
//! and the arguments given; nothing here is transient or environmental.

/// Failure values returned by registration, navigation and query calls.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FlowError {
    /// The terminal element of a path being registered already exists in the
    /// tree, even via a different prefix.
    #[error("path already registered: {0}")]
    PathAlreadyRegistered(String),

    /// A lookup referenced an identifier that is not present in the tree.
    #[error("unregistered path identifier: {0}")]
    UnregisteredPathIdentifier(String),

    /// Navigation was attempted before a host was installed with `prepare`.
    #[error("navigator is not configured with a screen host")]
    MissingConfiguration,

    /// The page supports variants but no variant was supplied.
    #[error("page {0} requires a variant")]
    MissingVariant(String),

    /// A variant was supplied for a page that does not support variants.
    #[error("page {0} does not support variants")]
    VariantNotSupported(String),

    /// A non-root path element lacks a forward or backward transition after
    /// defaulting rules were applied.
    #[error("path step {0} is missing a transition")]
    MissingPathStepTransition(String),

    /// `pop_to` targeted a node whose tracker entry is marked skipped.
    #[error("cannot pop to skipped path: {0}")]
    PopToSkippedPath(String),

    /// `pop_to` targeted a node that is not a strict ancestor of the current
    /// position.
    #[error("{0} is not an ancestor of the current path")]
    NotAnAncestor(String),

    /// A factory produced a screen whose runtime kind does not match the
    /// page's declared kind.
    #[error("screen for {0} does not match its declared kind")]
    ScreenKindMismatch(String),

    /// Invariant violation. Indicates a bug in the engine, not a caller
    /// mistake.
    #[error("internal error: {0}")]
    Internal(String),
}
