use thiserror::Error;

/// Errors that may occur when evaluating the standard atmosphere.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AtmosphereError {
    /// The altitude lies outside the range where the barometric formula is physical.
    ///
    /// For example, an altitude high enough that `1 − L·h/T` is no longer positive.
    #[error("out of domain: {context}")]
    OutOfDomain { context: String },
}
