use thiserror::Error;

/// Error codes returnable from factorization and update/downdate operations.
///
/// Every error is raised at the column or step where it is detected and
/// aborts the whole operation.  No partially computed factor is returned,
/// and caller-owned inputs are never modified.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CholeskyError {
    /// A non-positive pivot appeared during factorization, or a downdate
    /// step would have made the perturbed matrix indefinite
    #[error("Matrix is not positive definite (failed at column {column})")]
    NotPositiveDefinite { column: usize },
    /// Supernode sizes contain a zero or do not sum to the matrix dimension
    #[error("Supernode partition is invalid for this matrix dimension")]
    InvalidPartition,
    /// Operand shapes disagree
    #[error("Matrix dimension fields and/or vector lengths are incompatible")]
    DimensionMismatch,
    /// Input failed the optional symmetry check
    #[error("Matrix is not symmetric")]
    NotSymmetric,
    /// A solver operation needs a factor, but none is stored
    #[error("No factorization is available")]
    NotFactored,
}
