//! Error types.

use thiserror::Error;

/// Result type alias for catalog and rolling-average operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while decoding identifiers, building the catalog or
/// creating a [`RollingAverage`](crate::RollingAverage).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The string does not follow the ColorCET code grammar.
    #[error("invalid ColorCET identifier: {0:?}")]
    InvalidIdentifier(String),

    /// A rolling average needs room for at least one sample.
    #[error("invalid rolling average capacity: {0}")]
    InvalidCapacity(usize),

    /// A line of a raw color table is not an `R,G,B` triple in 0..=255.
    #[error("malformed color table {key:?}, line {line}: {reason}")]
    MalformedTable { key: String, line: usize, reason: String },

    /// Two raw tables decode to the same identifier.
    #[error("duplicate ColorCET identifier {code} (table {key:?})")]
    DuplicateIdentifier { code: String, key: String },

    /// The table the 50% shifted map is derived from was not supplied.
    #[error("missing base table {0} for the 50% shifted colormap")]
    MissingBaseTable(String),
}
