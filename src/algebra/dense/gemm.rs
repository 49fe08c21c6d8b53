#![allow(non_snake_case)]

use crate::algebra::{DenseMatrix, FloatT, Matrix, MultiplyGEMM, ShapedMatrix, VectorMath};
use faer::{linalg::matmul::matmul, Accum, Par};

impl<T> MultiplyGEMM for Matrix<T>
where
    T: FloatT,
{
    type T = T;
    // implements self = C = αA*B + βC
    fn mul<MATA, MATB>(&mut self, A: &MATA, B: &MATB, α: T, β: T) -> &Self
    where
        MATA: DenseMatrix<T>,
        MATB: DenseMatrix<T>,
    {
        assert!(A.ncols() == B.nrows() && self.nrows() == A.nrows() && self.ncols() == B.ncols());

        if self.nrows() == 0 || self.ncols() == 0 {
            return self;
        }

        // faer accumulates as C = αA*B + C, so a general β is
        // applied up front.  β = 0 overwrites rather than scales,
        // so that uninitialized NaNs in C do not propagate
        let accum = if β == T::zero() {
            Accum::Replace
        } else {
            if β != T::one() {
                self.data_mut().scale(β);
            }
            Accum::Add
        };

        matmul(
            self.as_faer_mut(),
            accum,
            A.as_faer(),
            B.as_faer(),
            α,
            Par::Seq,
        );
        self
    }
}

#[test]
fn test_gemm() {
    let (m, n, k) = (2, 4, 3);
    let a = vec![1.0, 4.0, 2.0, 5.0, 3.0, 6.0];
    let b = vec![
        1.0, 5.0, 9.0, 2.0, 6.0, 10.0, 3.0, 7.0, 11.0, 4.0, 8.0, 12.0,
    ];
    let c = vec![2.0, 7.0, 6.0, 2.0, 0.0, 7.0, 4.0, 2.0];

    let A = Matrix::new_from_slice((m, k), &a);
    let B = Matrix::new_from_slice((k, n), &b);
    let mut C = Matrix::new_from_slice((m, n), &c);

    C.mul(&A, &B, 1.0, 1.0);

    //A*B + C
    let Ctest = Matrix::from(&[
        [40.0, 50.0, 50.0, 60.0], //
        [90.0, 100.0, 120.0, 130.0],
    ]);

    assert_eq!(C, Ctest);
}

#[test]
fn test_gemm_transposed() {
    let A = Matrix::from(&[
        [1., 2.], //
        [3., 4.], //
        [5., 6.],
    ]);

    // A'*A
    let mut C = Matrix::<f64>::zeros((2, 2));
    C.mul(&A.t(), &A, 1.0, 0.0);
    assert_eq!(C, Matrix::from(&[[35., 44.], [44., 56.]]));

    // -A*A' + 2C, with C = I
    let mut C = Matrix::<f64>::identity(3);
    C.mul(&A, &A.t(), -1.0, 2.0);
    let Ctest = Matrix::from(&[
        [-3., -11., -17.], //
        [-11., -23., -39.],
        [-17., -39., -59.],
    ]);
    assert_eq!(C, Ctest);
}
