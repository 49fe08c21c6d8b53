#![allow(non_snake_case)]

use crate::algebra::{
    Adjoint, DenseMatrix, FloatT, Matrix, MatrixShape, MatrixTriangle, ShapedMatrix, VectorMath,
};
use faer::{MatMut, MatRef};
use std::ops::{Index, IndexMut, Range};

impl<T> DenseMatrix<T> for Matrix<T>
where
    T: FloatT,
{
    #[inline]
    fn index_linear(&self, idx: (usize, usize)) -> usize {
        idx.0 + self.m * idx.1
    }
    fn data(&self) -> &[T] {
        &self.data
    }
    fn as_faer(&self) -> MatRef<'_, T> {
        MatRef::from_column_major_slice(&self.data, self.m, self.n)
    }
}

impl<T> DenseMatrix<T> for Adjoint<'_, Matrix<T>>
where
    T: FloatT,
{
    #[inline]
    fn index_linear(&self, idx: (usize, usize)) -> usize {
        //reverse the indices
        self.src.index_linear((idx.1, idx.0))
    }
    fn data(&self) -> &[T] {
        &self.src.data
    }
    fn as_faer(&self) -> MatRef<'_, T> {
        self.src.as_faer().transpose()
    }
}

impl<T> Matrix<T>
where
    T: FloatT,
{
    pub fn zeros(size: (usize, usize)) -> Self {
        let (m, n) = size;
        let data = vec![T::zero(); m * n];
        Self { m, n, data }
    }

    pub fn identity(n: usize) -> Self {
        let mut mat = Matrix::zeros((n, n));
        mat.set_identity();
        mat
    }

    pub fn set_identity(&mut self) {
        assert!(self.m == self.n);
        self.data_mut().set(T::zero());
        for i in 0..self.n {
            self[(i, i)] = T::one();
        }
    }

    /// Square diagonal matrix with entries `d`
    pub fn from_diag(d: &[T]) -> Self {
        let n = d.len();
        let mut mat = Matrix::zeros((n, n));
        for (i, &v) in d.iter().enumerate() {
            mat[(i, i)] = v;
        }
        mat
    }

    /// Construct from column major data
    pub fn new_from_slice(size: (usize, usize), src: &[T]) -> Self {
        let (m, n) = size;
        assert!(m * n == src.len());
        Self {
            m,
            n,
            data: src.to_vec(),
        }
    }

    pub fn copy_from_slice(&mut self, src: &[T]) -> &mut Self {
        self.data.copy_from_slice(src);
        self
    }

    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub(crate) fn as_faer_mut(&mut self) -> MatMut<'_, T> {
        MatMut::from_column_major_slice_mut(&mut self.data, self.m, self.n)
    }

    pub fn t(&self) -> Adjoint<'_, Self> {
        Adjoint { src: self }
    }

    /// Owned transpose
    pub fn transpose(&self) -> Self {
        let mut At = Matrix::zeros((self.n, self.m));
        for j in 0..self.n {
            for i in 0..self.m {
                At[(j, i)] = self[(i, j)];
            }
        }
        At
    }

    pub fn col_slice(&self, col: usize) -> &[T] {
        assert!(col < self.n);
        &self.data[(col * self.m)..(col + 1) * self.m]
    }

    pub fn col_slice_mut(&mut self, col: usize) -> &mut [T] {
        assert!(col < self.n);
        &mut self.data[(col * self.m)..(col + 1) * self.m]
    }

    /// Copy of the diagonal
    pub fn diag(&self) -> Vec<T> {
        let k = usize::min(self.m, self.n);
        (0..k).map(|i| self[(i, i)]).collect()
    }

    /// Copy of the upper or lower triangular part, other entries zeroed.
    pub fn triangle(&self, uplo: MatrixTriangle) -> Self {
        let cmp = match uplo {
            MatrixTriangle::Triu => usize::le,
            MatrixTriangle::Tril => usize::ge,
        };
        let mut out = Matrix::zeros(self.size());
        for j in 0..self.n {
            for i in 0..self.m {
                if cmp(&i, &j) {
                    out[(i, j)] = self[(i, j)];
                }
            }
        }
        out
    }

    pub fn tril(&self) -> Self {
        self.triangle(MatrixTriangle::Tril)
    }

    pub fn triu(&self) -> Self {
        self.triangle(MatrixTriangle::Triu)
    }

    pub fn is_triu(&self) -> bool {
        // check lower triangle for any nonzero entries
        for c in 0..self.ncols() {
            for r in (c + 1)..self.nrows() {
                if self[(r, c)] != T::zero() {
                    return false;
                }
            }
        }
        true
    }

    pub fn is_tril(&self) -> bool {
        // check upper triangle for any nonzero entries
        for c in 0..self.ncols() {
            for r in 0..usize::min(c, self.nrows()) {
                if self[(r, c)] != T::zero() {
                    return false;
                }
            }
        }
        true
    }

    /// Symmetry test with tolerance relative to the largest entry
    pub fn is_symmetric(&self, rtol: T) -> bool {
        if !self.is_square() {
            return false;
        }
        let tol = rtol * T::max(T::one(), self.data.norm_inf());
        for c in 0..self.n {
            for r in (c + 1)..self.m {
                if T::abs(self[(r, c)] - self[(c, r)]) > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Copy of the block `self[rows, cols]`
    pub fn submatrix(&self, rows: Range<usize>, cols: Range<usize>) -> Self {
        assert!(rows.end <= self.m && cols.end <= self.n);
        let mut out = Matrix::zeros((rows.len(), cols.len()));
        for (jo, j) in cols.enumerate() {
            let src = &self.col_slice(j)[rows.clone()];
            out.col_slice_mut(jo).copy_from_slice(src);
        }
        out
    }

    /// Writes `B` into the block of `self` with top left corner `(row, col)`
    pub fn set_submatrix(&mut self, row: usize, col: usize, B: &Matrix<T>) {
        assert!(row + B.m <= self.m && col + B.n <= self.n);
        for j in 0..B.n {
            let dst = &mut self.col_slice_mut(col + j)[row..(row + B.m)];
            dst.copy_from_slice(B.col_slice(j));
        }
    }

    /// Number of entries not exactly equal to zero
    pub fn nnz(&self) -> usize {
        self.data.iter().filter(|&&x| x != T::zero()).count()
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T>
where
    T: FloatT,
{
    fn index_mut(&mut self, idx: (usize, usize)) -> &mut Self::Output {
        let lidx = self.index_linear(idx);
        &mut self.data[lidx]
    }
}

impl<T> Index<(usize, usize)> for Matrix<T>
where
    T: FloatT,
{
    type Output = T;
    fn index(&self, idx: (usize, usize)) -> &Self::Output {
        &self.data()[self.index_linear(idx)]
    }
}

impl<T> Index<(usize, usize)> for Adjoint<'_, Matrix<T>>
where
    T: FloatT,
{
    type Output = T;
    fn index(&self, idx: (usize, usize)) -> &Self::Output {
        &self.data()[self.index_linear(idx)]
    }
}

impl<T> ShapedMatrix for Matrix<T>
where
    T: FloatT,
{
    fn nrows(&self) -> usize {
        self.m
    }
    fn ncols(&self) -> usize {
        self.n
    }
    fn shape(&self) -> MatrixShape {
        MatrixShape::N
    }
}

// Matrix from a row major array literal, e.g.
// Matrix::from(&[[1., 2.], [3., 4.]])
impl<T, const R: usize, const C: usize> From<&[[T; C]; R]> for Matrix<T>
where
    T: FloatT,
{
    fn from(rows: &[[T; C]; R]) -> Self {
        let mut mat = Matrix::zeros((R, C));
        for (i, row) in rows.iter().enumerate() {
            for (j, &val) in row.iter().enumerate() {
                mat[(i, j)] = val;
            }
        }
        mat
    }
}

impl<T> std::fmt::Display for Matrix<T>
where
    T: FloatT,
{
    // This trait requires `fmt` with this exact signature.
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        display_matrix(self, f)
    }
}

fn display_matrix<M, T>(m: &M, f: &mut std::fmt::Formatter) -> std::fmt::Result
where
    M: DenseMatrix<T>,
    T: FloatT,
{
    writeln!(f)?;
    for i in 0..m.nrows() {
        write!(f, "[ ")?;
        for j in 0..m.ncols() {
            write!(f, " {:?}", m[(i, j)])?;
        }
        writeln!(f, "]")?;
    }
    writeln!(f)?;
    Ok(())
}
