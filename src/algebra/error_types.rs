use thiserror::Error;

/// Error type returned by BLAS-like dense factorization routines.  Errors
/// follow the LAPACK convention for the order of the failing minor.
#[derive(Error, Debug)]
pub enum DenseFactorizationError {
    #[error("Matrix dimension fields and/or array lengths are incompatible")]
    IncompatibleDimension,
    #[error("Cholesky error: leading minor of order {0} is not positive definite")]
    Cholesky(usize),
}
