#![allow(non_snake_case)]

use super::{pivot, FactorEngine};
use crate::algebra::*;
use crate::cholesky::CholeskyError;

/// Left-looking factorization.
///
/// Column `k` of `L` is `A[k:,k]` minus the contributions
/// `L[k:,0:k] * L[k,0:k]'` of every previous column, with the
/// head of the result giving the pivot.
#[derive(Debug, Default)]
pub(crate) struct LeftLooking;

impl FactorEngine for LeftLooking {
    fn factor<T: FloatT>(&mut self, A: &Matrix<T>, L: &mut Matrix<T>) -> Result<(), CholeskyError> {
        let n = A.nrows();
        let mut a = Vec::with_capacity(n);

        for k in 0..n {
            a.clear();
            a.extend_from_slice(&A.col_slice(k)[k..]);

            for j in 0..k {
                let lkj = L[(k, j)];
                subtract_column(&mut a, &L.col_slice(j)[k..], lkj);
            }

            finish_column(L, &a, k)?;
        }
        Ok(())
    }
}

// a -= x * c
#[inline]
pub(crate) fn subtract_column<T: FloatT>(a: &mut [T], x: &[T], c: T) {
    for (ai, &xi) in a.iter_mut().zip(x) {
        *ai -= xi * c;
    }
}

// writes L[k:,k] from the accumulated column a = A[k:,k] - (contributions)
#[inline]
pub(crate) fn finish_column<T: FloatT>(
    L: &mut Matrix<T>,
    a: &[T],
    k: usize,
) -> Result<(), CholeskyError> {
    let lkk = pivot(a[0], k)?;
    let col = &mut L.col_slice_mut(k)[k..];
    col[0] = lkk;
    for (l, &ai) in col.iter_mut().zip(a).skip(1) {
        *l = ai / lkk;
    }
    Ok(())
}
