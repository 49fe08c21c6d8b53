#![allow(non_snake_case)]

use crate::algebra::{
    DenseFactorizationError, FactorCholesky, FloatT, Matrix, ShapedMatrix, VectorMath,
};
use faer::dyn_stack::{MemBuffer, MemStack};
use faer::linalg::cholesky::llt::factor::{
    cholesky_in_place, cholesky_in_place_scratch, LltError, LltRegularization,
};
use faer::Par;

/// Dense Cholesky kernel, used for the diagonal blocks
/// of a supernodal factorization.
pub struct CholeskyEngine<T> {
    /// lower triangular factor (stored as square dense)
    pub L: Matrix<T>,
}

impl<T> CholeskyEngine<T>
where
    T: FloatT,
{
    pub fn new(n: usize) -> Self {
        let L = Matrix::<T>::zeros((n, n));
        Self { L }
    }
}

impl<T> FactorCholesky for CholeskyEngine<T>
where
    T: FloatT,
{
    type T = T;
    fn factor(&mut self, A: &Matrix<Self::T>) -> Result<(), DenseFactorizationError> {
        if A.size() != self.L.size() {
            return Err(DenseFactorizationError::IncompatibleDimension);
        }

        // A is referenced through its upper triangle only.  faer
        // factors the lower triangle in place, so L starts as triu(A)'
        let L = &mut self.L;
        let n = L.nrows();
        L.data_mut().set(T::zero());
        for j in 0..n {
            for i in j..n {
                L[(i, j)] = A[(j, i)];
            }
        }

        let req = cholesky_in_place_scratch::<T>(n, Par::Seq, Default::default());
        let mut mem = MemBuffer::new(req);

        // fails for non-positive (or NaN) pivots.  Report the
        // 1-based order of the failing minor, like ?potrf
        cholesky_in_place(
            L.as_faer_mut(),
            LltRegularization::default(),
            Par::Seq,
            MemStack::new(&mut mem),
            Default::default(),
        )
        .map_err(|e| match e {
            LltError::NonPositivePivot { index } => DenseFactorizationError::Cholesky(index + 1),
        })?;

        Ok(())
    }
}

#[test]
fn test_cholesky() {
    use crate::algebra::{DenseMatrix, MultiplyGEMM};

    #[rustfmt::skip]
    let S = Matrix::from(
        &[[ 8., -2., 4.],
          [-2., 12., 2.],
          [ 4.,  2., 6.]]);

    let mut eng = CholeskyEngine::<f64>::new(3);
    assert!(eng.factor(&S).is_ok());
    assert!(eng.L.is_tril());

    let mut M = Matrix::<f64>::zeros((3, 3));
    M.mul(&eng.L, &eng.L.t(), 1.0, 0.0);

    assert!(M.data().norm_inf_diff(S.data()) < 1e-8);
}

#[test]
fn test_cholesky_upper_only() {
    // garbage in the strict lower triangle is never referenced
    #[rustfmt::skip]
    let S = Matrix::from(
        &[[ 4., 12., -16.],
          [99., 37., -43.],
          [99., 99.,  98.]]);

    let mut eng = CholeskyEngine::<f64>::new(3);
    eng.factor(&S).unwrap();

    #[rustfmt::skip]
    let Ltest = Matrix::from(
        &[[ 2., 0., 0.],
          [ 6., 1., 0.],
          [-8., 5., 3.]]);
    assert!(eng.L.data.norm_inf_diff(&Ltest.data) < 1e-12);
}

#[test]
fn test_cholesky_failures() {
    let mut eng = CholeskyEngine::<f64>::new(2);

    let S = Matrix::from(&[[1., 2.], [2., 1.]]);
    assert!(matches!(
        eng.factor(&S),
        Err(DenseFactorizationError::Cholesky(2))
    ));

    let S = Matrix::<f64>::zeros((3, 3));
    assert!(matches!(
        eng.factor(&S),
        Err(DenseFactorizationError::IncompatibleDimension)
    ));
}
