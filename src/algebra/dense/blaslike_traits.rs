#![allow(non_snake_case)]
use crate::algebra::{DenseFactorizationError, DenseMatrix, Matrix, MatrixShape, MatrixTriangle};

pub trait FactorCholesky {
    type T;
    // computes the Cholesky decomposition.  Only the upper
    // part of the input A will be referenced. The lower
    // triangular Cholesky factor is stored in self.L
    fn factor(&mut self, A: &Matrix<Self::T>) -> Result<(), DenseFactorizationError>;
}

pub trait MultiplyGEMM {
    type T;
    // implements self = C = αA*B + βC
    fn mul<MATA, MATB>(&mut self, A: &MATA, B: &MATB, α: Self::T, β: Self::T) -> &Self
    where
        MATA: DenseMatrix<Self::T>,
        MATB: DenseMatrix<Self::T>;
}

pub trait MultiplySYRK {
    type T;
    // implements self = C = αA*A' + βC, upper triangle only
    fn syrk<MATA>(&mut self, A: &MATA, α: Self::T, β: Self::T) -> &Self
    where
        MATA: DenseMatrix<Self::T>;
}

// Triangular solves against a factor held in `self`.  The
// triangle actually stored is given by `uplo`, and `shape`
// selects op(self) = self or self'.  Entries outside of the
// stored triangle are never referenced.
pub trait SolveTriangular {
    type T;

    // Solves op(self)*x = b in place, with b overwritten by x.
    // Only the leading x.len() square block of self is referenced.
    fn trsv(&self, uplo: MatrixTriangle, shape: MatrixShape, x: &mut [Self::T]);

    // Solves X*op(self) = B in place, with B overwritten by X.
    fn trsm_right(&self, uplo: MatrixTriangle, shape: MatrixShape, B: &mut Matrix<Self::T>);
}
