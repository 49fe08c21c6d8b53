#![allow(non_snake_case)]

use super::{pivot, FactorEngine};
use crate::algebra::*;
use crate::cholesky::CholeskyError;

/// Right-looking (in-place elimination) factorization.
///
/// Works on a private copy `S` of `A`.  At step `k` the pivot and column
/// `L[k+1:,k] = S[k+1:,k] / L[k,k]` are read from `S`, then the trailing
/// Schur complement is updated immediately,
/// `S[k+1:,k+1:] -= L[k+1:,k] * L[k+1:,k]'`.
/// Only the lower triangle of `S` is maintained.
#[derive(Debug, Default)]
pub(crate) struct RightLooking;

impl FactorEngine for RightLooking {
    fn factor<T: FloatT>(&mut self, A: &Matrix<T>, L: &mut Matrix<T>) -> Result<(), CholeskyError> {
        let n = A.nrows();
        let mut S = A.clone();

        for k in 0..n {
            let lkk = pivot(S[(k, k)], k)?;
            L[(k, k)] = lkk;
            for i in (k + 1)..n {
                L[(i, k)] = S[(i, k)] / lkk;
            }

            // rank one update of the trailing lower triangle
            let lcol = &L.col_slice(k)[(k + 1)..];
            for (jj, &ljk) in lcol.iter().enumerate() {
                let j = k + 1 + jj;
                let scol = &mut S.col_slice_mut(j)[j..];
                for (s, &lik) in scol.iter_mut().zip(&lcol[jj..]) {
                    *s -= lik * ljk;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::super::test_matrices::*;
    use super::super::LeftLooking;
    use super::*;

    #[test]
    fn test_right_looking_3x3() {
        let A = spd_3x3();
        let L = run(&mut RightLooking, &A).unwrap();
        assert!(L.data.norm_inf_diff(&spd_3x3_factor().data) < 1e-12);
    }

    #[test]
    fn test_right_looking_11x11() {
        let A = sparse_11x11();
        let L = run(&mut RightLooking, &A).unwrap();
        let Lref = run(&mut LeftLooking, &A).unwrap();
        assert!(L.is_tril());
        assert!(reconstruction_error(&L, &A) < 1e-12);
        assert!(L.data.norm_inf_diff(&Lref.data) < 1e-12);
    }

    #[test]
    fn test_right_looking_leaves_input() {
        let A = spd_3x3();
        let Acopy = A.clone();
        run(&mut RightLooking, &A).unwrap();
        assert_eq!(A, Acopy);
    }

    #[test]
    fn test_right_looking_indefinite() {
        #[rustfmt::skip]
        let A = Matrix::from(
            &[[4., 2., 0.],
              [2., 5., 3.],
              [0., 3., 1.]]);
        assert_eq!(
            run(&mut RightLooking, &A),
            Err(CholeskyError::NotPositiveDefinite { column: 2 })
        );
    }
}
