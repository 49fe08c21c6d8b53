#![allow(non_snake_case)]

use super::FactorEngine;
use crate::algebra::*;
use crate::cholesky::{CholeskyError, SupernodePartition};

/// Supernodal (blocked left-looking) factorization.
///
/// For each supernode with columns `k = k1..k2`:
///
/// ```text
/// L[k,k]   = chol( A[k,k]   - L[k,0:k1]   * L[k,0:k1]' )
/// L[k2:,k] = ( A[k2:,k] - L[k2:,0:k1] * L[k,0:k1]' ) / L[k,k]'
/// ```
///
/// where the division is a block triangular solve against the factor of
/// the diagonal block.  With one column per supernode this is the
/// left-looking recurrence.
#[derive(Debug, Default)]
pub(crate) struct Supernodal {
    // supernode sizes, or None for one column per supernode
    sizes: Option<Vec<usize>>,
}

impl Supernodal {
    pub(crate) fn new(sizes: Option<&[usize]>) -> Self {
        Self {
            sizes: sizes.map(|s| s.to_vec()),
        }
    }

    fn partition(&self, n: usize) -> Result<SupernodePartition, CholeskyError> {
        match self.sizes {
            Some(ref sizes) => SupernodePartition::new(sizes, n),
            None => Ok(SupernodePartition::ones(n)),
        }
    }
}

impl FactorEngine for Supernodal {
    fn factor<T: FloatT>(&mut self, A: &Matrix<T>, L: &mut Matrix<T>) -> Result<(), CholeskyError> {
        let n = A.nrows();
        let partition = self.partition(n)?;

        for k in partition.blocks() {
            let (k1, k2) = (k.start, k.end);

            // diagonal block, upper triangle only
            let mut C = A.submatrix(k.clone(), k.clone()).transpose();
            let Lk = L.submatrix(k.clone(), 0..k1);
            if k1 > 0 {
                C.syrk(&Lk, -T::one(), T::one());
            }

            let mut chol = CholeskyEngine::<T>::new(k.len());
            chol.factor(&C).map_err(|e| match e {
                DenseFactorizationError::Cholesky(minor) => {
                    CholeskyError::NotPositiveDefinite {
                        column: k1 + minor - 1,
                    }
                }
                DenseFactorizationError::IncompatibleDimension => CholeskyError::DimensionMismatch,
            })?;
            L.set_submatrix(k1, k1, &chol.L);

            if k2 == n {
                continue;
            }

            // rows below the diagonal block
            let mut B = A.submatrix(k2..n, k.clone());
            if k1 > 0 {
                let L21 = L.submatrix(k2..n, 0..k1);
                B.mul(&L21, &Lk.t(), -T::one(), T::one());
            }
            chol.L.trsm_right(MatrixTriangle::Tril, MatrixShape::T, &mut B);
            L.set_submatrix(k2, k1, &B);
        }
        Ok(())
    }
}
