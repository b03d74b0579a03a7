use thiserror::Error;

/// Validation failure raised synchronously by the pairwise operations.
///
/// This is the only error kind in the crate. Numeric degeneracies (empty
/// input, zero variance) are not errors: they surface as non-finite results
/// of the unguarded arithmetic.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum InvalidArgument {
    /// A pairwise operation received sequences of different lengths.
    #[error("sequences differ in length: {left} vs {right}")]
    LengthMismatch {
        /// Length of the first sequence.
        left: usize,
        /// Length of the second sequence.
        right: usize,
    },
}
