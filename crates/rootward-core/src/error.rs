//! Error types for rootward-core operations.

use thiserror::Error;

/// Result type alias using the crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during graph construction or ancestral-path queries.
///
/// Every failure is detected synchronously, before any traversal starts, so
/// a failed call never leaves partial state behind. Callers should treat
/// these as programming errors rather than transient conditions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A vertex id fell outside the graph's valid range `[0, vertex_count)`.
    ///
    /// Raised for out-of-range ids in adjacency lists, breadth-first seed
    /// sets, and query argument sets alike.
    #[error("invalid vertex {vertex}: graph has {vertex_count} vertices")]
    InvalidVertex {
        /// The offending vertex id.
        vertex: usize,
        /// Number of vertices in the graph the id was checked against.
        vertex_count: usize,
    },
}
