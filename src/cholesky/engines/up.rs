#![allow(non_snake_case)]

use super::{pivot, FactorEngine};
use crate::algebra::*;
use crate::cholesky::CholeskyError;

/// Up-looking factorization.
///
/// Row `k` of `L` comes from a triangular solve against the leading
/// `k × k` block of `L`, i.e. `L[0:k,0:k] * L[k,0:k]' = A[0:k,k]`,
/// followed by `L[k,k] = sqrt(A[k,k] - L[k,0:k]*L[k,0:k]')`.  The repeated
/// solves make this the slowest variant.
#[derive(Debug, Default)]
pub(crate) struct UpLooking;

impl FactorEngine for UpLooking {
    fn factor<T: FloatT>(&mut self, A: &Matrix<T>, L: &mut Matrix<T>) -> Result<(), CholeskyError> {
        let n = A.nrows();
        let mut row = Vec::with_capacity(n);

        for k in 0..n {
            row.clear();
            row.extend_from_slice(&A.col_slice(k)[0..k]);
            L.trsv(MatrixTriangle::Tril, MatrixShape::N, &mut row);

            for (j, &lkj) in row.iter().enumerate() {
                L[(k, j)] = lkj;
            }
            L[(k, k)] = pivot(A[(k, k)] - row.sumsq(), k)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::super::test_matrices::*;
    use super::*;

    #[test]
    fn test_up_looking_3x3() {
        let A = spd_3x3();
        let L = run(&mut UpLooking, &A).unwrap();
        assert!(L.data.norm_inf_diff(&spd_3x3_factor().data) < 1e-12);
    }

    #[test]
    fn test_up_looking_11x11() {
        let A = sparse_11x11();
        let L = run(&mut UpLooking, &A).unwrap();
        assert!(L.is_tril());
        assert!(reconstruction_error(&L, &A) < 1e-12);
    }

    #[test]
    fn test_up_looking_indefinite() {
        let A = Matrix::from(&[[1., 2.], [2., 1.]]);
        assert_eq!(
            run(&mut UpLooking, &A),
            Err(CholeskyError::NotPositiveDefinite { column: 1 })
        );
    }
}
