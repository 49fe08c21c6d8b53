#![allow(non_snake_case)]

use crate::algebra::{DenseMatrix, FloatT, Matrix, MultiplySYRK, ShapedMatrix, VectorMath};
use faer::linalg::matmul::triangular::{matmul, BlockStructure};
use faer::{Accum, Par};

impl<T> MultiplySYRK for Matrix<T>
where
    T: FloatT,
{
    type T = T;

    // implements self = C = αA*A' + βC
    fn syrk<MATA>(&mut self, A: &MATA, α: T, β: T) -> &Self
    where
        MATA: DenseMatrix<T>,
    {
        assert!(self.nrows() == A.nrows());
        assert!(self.ncols() == A.nrows());

        if self.nrows() == 0 {
            return self;
        }

        //NB: writes to upper triangle only
        let accum = if β == T::zero() {
            Accum::Replace
        } else {
            if β != T::one() {
                let n = self.nrows();
                for j in 0..n {
                    self.col_slice_mut(j)[..=j].scale(β);
                }
            }
            Accum::Add
        };

        let A = A.as_faer();
        matmul(
            self.as_faer_mut(),
            BlockStructure::TriangularUpper,
            accum,
            A,
            BlockStructure::Rectangular,
            A.transpose(),
            BlockStructure::Rectangular,
            α,
            Par::Seq,
        );
        self
    }
}

#[test]
fn test_syrk() {
    let (m, n) = (2, 3);
    let A = Matrix::from(&[
        [1., 2., 3.], //
        [4., 5., 6.], //
    ]);

    let mut AAt = Matrix::<f64>::zeros((m, m));
    AAt.syrk(&A, 1.0, 0.0);

    //NB: writes to upper triangle only
    let AAt_test = Matrix::from(&[
        [14., 32.], //
        [0., 77.],  //
    ]);

    assert_eq!(AAt, AAt_test);

    let mut AtA = Matrix::<f64>::zeros((n, n));
    AtA.data_mut().fill(1.0);
    AtA.syrk(&A.t(), 2.0, 1.0);

    //NB: writes to upper triangle only
    let AtA_test = Matrix::from(&[
        [35., 45., 55.], //
        [1., 59., 73.],  //
        [1., 1., 91.],   //
    ]);

    assert_eq!(AtA, AtA_test);
}
