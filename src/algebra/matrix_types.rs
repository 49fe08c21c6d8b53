#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// All internal matrix representations used by the factorization
// engines are dense and stored in column major format.

/// Matrix orientation marker
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum MatrixShape {
    /// Normal matrix orientation
    N,
    /// Transposed matrix orientation
    T,
}

/// Matrix shape marker for triangular matrices
#[derive(PartialEq, Eq, Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MatrixTriangle {
    /// Upper triangular matrix
    #[default]
    Triu,
    /// Lower triangular matrix
    Tril,
}

impl MatrixTriangle {
    /// the opposite triangle, i.e. the triangle occupied after transposition
    pub fn transpose(&self) -> Self {
        match self {
            MatrixTriangle::Triu => MatrixTriangle::Tril,
            MatrixTriangle::Tril => MatrixTriangle::Triu,
        }
    }
}

/// Read only transposed view of a matrix
#[derive(Debug, Clone, Copy)]
pub struct Adjoint<'a, M> {
    pub src: &'a M,
}
