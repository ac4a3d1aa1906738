use thiserror::Error;

/// The reasons an expansion can fail.
///
/// Every variant is terminal for its call: no partial output is produced
/// and nothing is retried. Note that structurally bogus markup is not an
/// error anywhere in this crate; the lexer and the tree builder absorb it.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum ExpansionError {
    #[error("couldn't find the '{0}' template")]
    TemplateNotFound(String),

    #[error("couldn't find the '{0}' component")]
    ComponentNotFound(String),

    /// A marker token sequence violated the substitution grammar; carries
    /// the index of the first token with an illegal successor.
    #[error("malformed substitution syntax at marker token #{0}")]
    MalformedSyntax(usize),

    /// The expansion scan visited more tokens than the configured loop
    /// bound allows. Usually this means circularly dependent components;
    /// for a legitimately huge expansion, raise
    /// [`Settings::loop_bound`](crate::Settings::loop_bound).
    #[error("expansion exceeded {0} iterations, check for circularly dependent components")]
    CircularDependency(usize),
}
