#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Dense matrix in column major format
///
/// Used for the input matrix `A` and for every triangular factor produced
/// by the factorization and update engines.  Entry `(i, j)` is stored at
/// `data[i + m * j]`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Matrix<T = f64> {
    /// number of rows
    pub m: usize,
    /// number of columns
    pub n: usize,
    /// vector of data in column major format
    pub data: Vec<T>,
}
