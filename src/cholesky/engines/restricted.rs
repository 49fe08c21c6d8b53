#![allow(non_snake_case)]

use super::{finish_column, subtract_column, FactorEngine};
use crate::algebra::*;
use crate::cholesky::CholeskyError;

/// Left-looking factorization with the accumulation for column `k`
/// restricted to the nonzero pattern of row `k` of `L`.
///
/// The pattern is held explicitly: after column `k` is computed, `k` is
/// appended to the pattern of every row `i > k` with `L[i,k] != 0`.
/// Rows therefore never need a dense scan-and-test, and the patterns come
/// out sorted.  An entry counts as nonzero when it compares unequal to
/// exact zero, so entries that underflow to zero are dropped from the
/// pattern.  On dense data the result is the left-looking factor.
#[derive(Debug, Default)]
pub(crate) struct LeftRestricted {
    // column indices j < i with L[i,j] != 0, for each row i
    row_pattern: Vec<Vec<usize>>,
}

#[cfg(test)]
impl LeftRestricted {
    /// Nonzero pattern of the strictly lower part of row `i` of
    /// the most recently computed factor
    pub(crate) fn row_pattern(&self, i: usize) -> &[usize] {
        &self.row_pattern[i]
    }

    /// Total number of multiply-subtract column updates that
    /// the restricted accumulation performs
    pub(crate) fn update_count(&self) -> usize {
        self.row_pattern.iter().map(|r| r.len()).sum()
    }
}

impl FactorEngine for LeftRestricted {
    fn factor<T: FloatT>(&mut self, A: &Matrix<T>, L: &mut Matrix<T>) -> Result<(), CholeskyError> {
        let n = A.nrows();

        self.row_pattern.clear();
        self.row_pattern.resize_with(n, Vec::new);

        let mut a = Vec::with_capacity(n);

        for k in 0..n {
            a.clear();
            a.extend_from_slice(&A.col_slice(k)[k..]);

            for &j in &self.row_pattern[k] {
                let lkj = L[(k, j)];
                subtract_column(&mut a, &L.col_slice(j)[k..], lkj);
            }

            finish_column(L, &a, k)?;

            // extend the row patterns with the new column
            for i in (k + 1)..n {
                if L[(i, k)] != T::zero() {
                    self.row_pattern[i].push(k);
                }
            }
        }
        Ok(())
    }
}
