//! Errors raised by the distance functions.

/// The ways in which a distance computation can fail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The Hamming distance is only defined for sequences of equal length.
    #[error("sequences must have the same length, got {left} and {right}")]
    LengthMismatch {
        /// Length of the first sequence.
        left: usize,
        /// Length of the second sequence.
        right: usize,
    },
}
