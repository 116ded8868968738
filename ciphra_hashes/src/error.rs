use thiserror::Error;

/// Failures reported by the hashing engine. Digest computation itself cannot fail; only operations that a one-way
/// function cannot provide are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HashError {
    /// The requested operation does not exist for a one-way hash function.
    #[error("{operation} is not supported by {algorithm}")]
    UnsupportedOperation {
        operation: &'static str,
        algorithm: &'static str,
    },
}
