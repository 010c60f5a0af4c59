//! Formatting errors.

/// Errors that can occur while formatting a [`Value`](crate::Value).
///
/// Every well-formed tree renders successfully; the only failure mode is
/// the traversal depth guard, which exists because tool payloads are not
/// trusted to be reasonably shaped.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// The value nests deeper than the formatter's configured limit.
    #[error("value nests deeper than the configured limit of {limit} levels")]
    DepthExceeded {
        /// The configured depth limit.
        limit: usize,
    },
}
