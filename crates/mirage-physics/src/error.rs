//! Error types for the physics world

use crate::world::BodyId;
use thiserror::Error;

/// Result type alias using the physics Error type
pub type Result<T> = std::result::Result<T, PhysicsError>;

/// Errors raised at the physics mutation boundary.
///
/// Nothing in the per-frame hot path returns these; non-convergence of the
/// contact search degrades to "no collision this sub-step" instead of
/// erroring (see [`solver`](crate::solver)).
#[derive(Error, Debug, PartialEq, Eq)]
pub enum PhysicsError {
    /// Body handle does not name a live body
    #[error("Unknown body handle: {0:?}")]
    UnknownBody(BodyId),

    /// Scene rejected a handle this world was given
    #[error(transparent)]
    Scene(#[from] mirage_core::Error),
}
