use thiserror::Error;

/// Reasons a pattern is rejected in strict mode
///
/// The display strings are fixed; callers may match on them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A non-bracketed segment contains `*`
    #[error("Invalid path segment: {segment}. Wildcard characters not allowed in static segments when strict mode is enabled.")]
    WildcardInStaticSegment { segment: String },

    /// More than one `**:name` marker
    #[error("Invalid path: multiple catch-all parameters are not allowed")]
    MultipleCatchAll,

    /// The only `**:name` marker is not in the final segment
    #[error("Invalid path: catch-all parameter must be the last segment")]
    CatchAllNotLast,

    /// A bare `*` segment follows a `**:name` segment
    #[error("Invalid path: wildcard (*) cannot appear after catch-all (**:param)")]
    WildcardAfterCatchAll,
}
