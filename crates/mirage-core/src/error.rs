//! Error types for Mirage scene mutations

use crate::material::MaterialId;
use crate::scene::ShapeId;
use thiserror::Error;

/// Result type alias using Mirage's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when mutating a scene.
///
/// Every variant is a configuration error rejected at the mutation call; the
/// registry is left unchanged. Numeric degeneracies (zero-length capsule
/// axis, zero-length normals) are not errors: they recover locally with a
/// safe substitute instead of propagating NaN.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    /// Shape handle does not name a shape in this scene
    #[error("Unknown shape handle: {0:?}")]
    UnknownShape(ShapeId),

    /// Material handle does not name a material in this scene
    #[error("Unknown material handle: {0:?}")]
    UnknownMaterial(MaterialId),

    /// A shape cannot be combined with itself
    #[error("Shape {0:?} cannot be combined with itself")]
    SelfCombine(ShapeId),

    /// Combine edge would close a cycle through the operand chain
    #[error("Combining {parent:?} with {operand:?} would create a cycle")]
    CombineCycle { parent: ShapeId, operand: ShapeId },
}
