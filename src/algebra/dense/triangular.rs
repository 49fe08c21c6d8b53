#![allow(non_snake_case)]

use crate::algebra::{
    DenseMatrix, FloatT, Matrix, MatrixShape, MatrixTriangle, ShapedMatrix, SolveTriangular,
};
use faer::linalg::triangular_solve::{
    solve_lower_triangular_in_place, solve_upper_triangular_in_place,
};
use faer::{MatMut, MatRef, Par};

impl<T> SolveTriangular for Matrix<T>
where
    T: FloatT,
{
    type T = T;

    fn trsv(&self, uplo: MatrixTriangle, shape: MatrixShape, x: &mut [T]) {
        let n = x.len();
        assert!(n <= self.nrows() && n <= self.ncols());

        let S = self.as_faer().submatrix(0, 0, n, n);
        let rhs = MatMut::from_column_major_slice_mut(x, n, 1);
        solve_in_place(S, uplo, shape, rhs);
    }

    fn trsm_right(&self, uplo: MatrixTriangle, shape: MatrixShape, B: &mut Matrix<T>) {
        assert!(self.is_square() && B.ncols() == self.nrows());

        // X*op(S) = B  <=>  op(S)'*X' = B'
        let shape = match shape {
            MatrixShape::N => MatrixShape::T,
            MatrixShape::T => MatrixShape::N,
        };
        solve_in_place(self.as_faer(), uplo, shape, B.as_faer_mut().transpose_mut());
    }
}

// solves op(S)*X = rhs, where `uplo` is the triangle stored in S
fn solve_in_place<T: FloatT>(
    S: MatRef<'_, T>,
    uplo: MatrixTriangle,
    shape: MatrixShape,
    rhs: MatMut<'_, T>,
) {
    let (S, uplo) = match shape {
        MatrixShape::N => (S, uplo),
        MatrixShape::T => (S.transpose(), uplo.transpose()),
    };
    match uplo {
        MatrixTriangle::Tril => solve_lower_triangular_in_place(S, rhs, Par::Seq),
        MatrixTriangle::Triu => solve_upper_triangular_in_place(S, rhs, Par::Seq),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::algebra::{MultiplyGEMM, VectorMath};

    fn lower_3x3() -> Matrix<f64> {
        Matrix::from(&[
            [2., 0., 0.], //
            [6., 1., 0.], //
            [-8., 5., 3.],
        ])
    }

    #[test]
    fn test_trsv_lower() {
        let L = lower_3x3();
        let xtrue = [1., -2., 3.];

        // b = L*x
        let mut b = vec![2., 4., -9.];
        L.trsv(MatrixTriangle::Tril, MatrixShape::N, &mut b);
        assert!(b.norm_inf_diff(&xtrue) < 1e-14);

        // b = L'*x
        let mut b = vec![-34., 13., 9.];
        L.trsv(MatrixTriangle::Tril, MatrixShape::T, &mut b);
        assert!(b.norm_inf_diff(&xtrue) < 1e-14);
    }

    #[test]
    fn test_trsv_upper_and_leading_block() {
        let U = lower_3x3().transpose();

        // b = U*x
        let xtrue = [1., -2., 3.];
        let mut b = vec![-34., 13., 9.];
        U.trsv(MatrixTriangle::Triu, MatrixShape::N, &mut b);
        assert!(b.norm_inf_diff(&xtrue) < 1e-14);

        // leading 2x2 block of L only
        let L = lower_3x3();
        let mut b = vec![2., 4.];
        L.trsv(MatrixTriangle::Tril, MatrixShape::N, &mut b);
        assert!(b.norm_inf_diff(&[1., -2.]) < 1e-14);
    }

    #[test]
    fn test_trsm_right() {
        let L = lower_3x3();
        let X = Matrix::from(&[
            [1., 2., 3.], //
            [-1., 0., 4.],
        ]);

        // B = X*L'
        let mut B = Matrix::<f64>::zeros((2, 3));
        B.mul(&X, &L.t(), 1.0, 0.0);

        L.trsm_right(MatrixTriangle::Tril, MatrixShape::T, &mut B);
        assert!(B.data.norm_inf_diff(&X.data) < 1e-13);
    }
}
