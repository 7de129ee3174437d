//! Error types for asset resolution.

/// Error from an [`AssetResolver`](crate::AssetResolver) collaborator.
///
/// Builders absorb these into degraded output (placeholder URLs) rather
/// than failing the render; the type exists so resolvers can report what
/// went wrong for logging.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum AssetError {
    /// The referenced object is not known to the resolver.
    #[error("asset {id} not found")]
    NotFound {
        /// Id of the missing object.
        id: String,
    },

    /// The resolver knows the object but cannot produce a URL for it.
    #[error("asset unavailable: {reason}")]
    Unavailable {
        /// Human-readable cause.
        reason: String,
    },
}
