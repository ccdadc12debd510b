// SPDX-License-Identifier: MIT OR Apache-2.0
//! Playback errors.

use crate::definition::BoxError;

/// Error raised while playing an animation
#[derive(Debug, thiserror::Error)]
pub enum AnimationError {
    /// A definition's condition failed to evaluate
    #[error("Condition for `{property}` in animation `{key}` failed: {source}")]
    Condition {
        /// Animation key
        key: String,
        /// Property whose condition failed
        property: String,
        /// Error returned by the condition
        #[source]
        source: BoxError,
    },
}

/// Result type for playback operations
pub type Result<T, E = AnimationError> = std::result::Result<T, E>;
