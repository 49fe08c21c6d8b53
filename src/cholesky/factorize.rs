#![allow(non_snake_case)]

use super::engines::{FactorEngine, FactorizationEngine};
use super::{CholeskyError, CholeskySettings};
use crate::algebra::*;

/// Computes the Cholesky factor of a symmetric positive definite matrix.
///
/// The factor is returned in the triangle selected by `settings.uplo`:
/// the upper triangular `R` with `A = R'*R` (the default), or the lower
/// triangular `L = R'` with `A = L*L'`.  Every diagonal entry of the
/// factor is positive.
///
/// All variants compute the same factor up to rounding.  `A` is only
/// read through its lower triangle, except by [`Up`](super::CholeskyVariant::Up),
/// which reads the upper triangle column by column.
///
/// # Errors
///
/// - [`DimensionMismatch`](CholeskyError::DimensionMismatch) if `A` is not square
/// - [`NotSymmetric`](CholeskyError::NotSymmetric) if the symmetry check is enabled and fails
/// - [`InvalidPartition`](CholeskyError::InvalidPartition) if supernode sizes do not cover `A`
/// - [`NotPositiveDefinite`](CholeskyError::NotPositiveDefinite) at the first failing column
pub fn factorize<T: FloatT>(
    A: &Matrix<T>,
    settings: &CholeskySettings<T>,
) -> Result<Matrix<T>, CholeskyError> {
    let L = factorize_lower(A, settings)?;

    match settings.uplo {
        MatrixTriangle::Tril => Ok(L),
        MatrixTriangle::Triu => Ok(L.transpose()),
    }
}

// checks the input and computes the lower factor, whatever the
// requested output triangle
pub(crate) fn factorize_lower<T: FloatT>(
    A: &Matrix<T>,
    settings: &CholeskySettings<T>,
) -> Result<Matrix<T>, CholeskyError> {
    if !A.is_square() {
        return Err(CholeskyError::DimensionMismatch);
    }
    if settings.symmetry_check && !A.is_symmetric(settings.symmetry_tol) {
        return Err(CholeskyError::NotSymmetric);
    }

    let mut engine = FactorizationEngine::new(settings.variant, settings.partition.as_deref());
    let mut L = Matrix::zeros(A.size());
    engine.factor(A, &mut L)?;

    Ok(L)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::cholesky::engines::test_matrices::*;
    use crate::cholesky::{CholeskySettingsBuilder, CholeskyVariant};

    const VARIANTS: [CholeskyVariant; 5] = [
        CholeskyVariant::Up,
        CholeskyVariant::Left,
        CholeskyVariant::LeftRestricted,
        CholeskyVariant::Right,
        CholeskyVariant::Supernodal,
    ];

    fn settings(variant: CholeskyVariant, uplo: MatrixTriangle) -> CholeskySettings<f64> {
        CholeskySettingsBuilder::default()
            .variant(variant)
            .uplo(uplo)
            .build()
            .unwrap()
    }

    #[test]
    fn test_factorize_all_variants() {
        let A = sparse_11x11();
        let Lref = factorize(&A, &settings(CholeskyVariant::Left, MatrixTriangle::Tril)).unwrap();

        for variant in VARIANTS {
            let L = factorize(&A, &settings(variant, MatrixTriangle::Tril)).unwrap();
            assert!(L.is_tril());
            assert!(L.diag().minimum() > 0.0);
            assert!(reconstruction_error(&L, &A) < 1e-12);
            assert!(L.data.norm_inf_diff(&Lref.data) < 1e-12);
        }
    }

    #[test]
    fn test_factorize_upper() {
        let A = spd_3x3();
        let R = factorize(&A, &CholeskySettings::default()).unwrap();
        assert!(R.is_triu());
        assert!(R.data.norm_inf_diff(&spd_3x3_factor().transpose().data) < 1e-14);
        assert_eq!(R.transpose(), factorize_lower(&A, &CholeskySettings::default()).unwrap());
    }

    #[test]
    fn test_factorize_diagonal() {
        let A = Matrix::from_diag(&[4.0, 9.0, 16.0]);
        for variant in VARIANTS {
            let L = factorize(&A, &settings(variant, MatrixTriangle::Tril)).unwrap();
            assert_eq!(L, Matrix::from_diag(&[2.0, 3.0, 4.0]));
        }
    }

    #[test]
    fn test_factorize_partition() {
        let A = sparse_11x11();
        let mut s = settings(CholeskyVariant::Supernodal, MatrixTriangle::Tril);

        s.partition = Some(vec![2, 3, 1, 5]);
        let L = factorize(&A, &s).unwrap();
        assert!(reconstruction_error(&L, &A) < 1e-12);

        s.partition = Some(vec![2, 1]);
        assert_eq!(factorize(&A, &s), Err(CholeskyError::InvalidPartition));

        // the partition is ignored by the other variants
        s.variant = CholeskyVariant::Right;
        assert!(factorize(&A, &s).is_ok());
    }

    #[test]
    fn test_factorize_errors() {
        let defaults = CholeskySettings::<f64>::default();

        let A = Matrix::<f64>::zeros((2, 3));
        assert_eq!(factorize(&A, &defaults), Err(CholeskyError::DimensionMismatch));

        let A = Matrix::from(&[[2.0, 1.0], [0.0, 2.0]]);
        assert_eq!(factorize(&A, &defaults), Err(CholeskyError::NotSymmetric));

        // without the check only the lower triangle is read
        let mut s = defaults.clone();
        s.symmetry_check = false;
        assert_eq!(
            factorize(&A, &s),
            Ok(Matrix::from(&[[2f64.sqrt(), 0.0], [0.0, 2f64.sqrt()]]))
        );

        let A = Matrix::from(&[[1.0, 2.0], [2.0, 1.0]]);
        for variant in VARIANTS {
            assert_eq!(
                factorize(&A, &settings(variant, MatrixTriangle::Triu)),
                Err(CholeskyError::NotPositiveDefinite { column: 1 })
            );
        }
    }

    #[test]
    fn test_factorize_empty() {
        let A = Matrix::<f64>::zeros((0, 0));
        let L = factorize(&A, &CholeskySettings::default()).unwrap();
        assert_eq!(L.size(), (0, 0));
    }
}
