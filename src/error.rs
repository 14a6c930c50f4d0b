use thiserror::Error;

/// Errors surfaced by model construction, `predict` and `fit`.
///
/// Both kinds are immediate: they are returned to the caller as soon as a
/// bad argument is seen, before any computation touches the parameters.
/// Soft conditions (insufficient training data, an input length that is
/// not a multiple of the feature count) are *not* errors; see
/// `Perceptron::fit`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    /// An argument failed numeric validation: a non-finite value where a
    /// number is required, or a fractional/non-positive feature count.
    #[error("invalid argument: expected {expected}, got {got}")]
    InvalidArgument {
        expected: &'static str,
        got: String,
    },

    /// An input slice does not match the unit's feature count.
    #[error("shape mismatch: expected {expected} inputs, got {got}")]
    ShapeMismatch { expected: usize, got: usize },
}
