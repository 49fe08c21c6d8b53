#![allow(non_snake_case)]

use cholup::{algebra::*, cholesky::*};

const VARIANTS: [CholeskyVariant; 5] = [
    CholeskyVariant::Up,
    CholeskyVariant::Left,
    CholeskyVariant::LeftRestricted,
    CholeskyVariant::Right,
    CholeskyVariant::Supernodal,
];

// A = B*B' + n*I for a deterministic dense B
fn dense_spd(n: usize) -> Matrix<f64> {
    let mut B = Matrix::zeros((n, n));
    for j in 0..n {
        for i in 0..n {
            B[(i, j)] = ((3 * i + 7 * j) % 11) as f64 / 11.0 - 0.5;
        }
    }
    let mut A = Matrix::identity(n);
    A.data_mut().scale(n as f64);
    A.mul(&B, &B.t(), 1.0, 1.0);

    // exact symmetry for the default symmetry check
    for j in 0..n {
        for i in 0..j {
            A[(i, j)] = A[(j, i)];
        }
    }
    A
}

fn lower(variant: CholeskyVariant) -> CholeskySettings<f64> {
    CholeskySettingsBuilder::default()
        .variant(variant)
        .uplo(MatrixTriangle::Tril)
        .build()
        .unwrap()
}

fn reconstruct(L: &Matrix<f64>) -> Matrix<f64> {
    let mut M = Matrix::zeros(L.size());
    M.mul(L, &L.t(), 1.0, 0.0);
    M
}

#[test]
fn test_variants_agree_dense() {
    let A = dense_spd(12);
    let Lref = factorize(&A, &lower(CholeskyVariant::Left)).unwrap();

    for variant in VARIANTS {
        let L = factorize(&A, &lower(variant)).unwrap();
        assert!(L.is_tril(), "{variant}");
        assert!(L.diag().iter().all(|&d| d > 0.0), "{variant}");
        assert!(L.data.norm_inf_diff(&Lref.data) < 1e-10, "{variant}");
        assert!(reconstruct(&L).data.norm_inf_diff(&A.data) < 1e-10, "{variant}");
    }
}

#[test]
fn test_supernode_partitions() {
    let A = dense_spd(12);
    let Lref = factorize(&A, &lower(CholeskyVariant::Left)).unwrap();

    let partitions: [&[usize]; 5] = [&[12], &[1; 12], &[4, 4, 4], &[5, 1, 6], &[1, 10, 1]];
    for sizes in partitions {
        let mut settings = lower(CholeskyVariant::Supernodal);
        settings.partition = Some(sizes.to_vec());
        let L = factorize(&A, &settings).unwrap();
        assert!(L.data.norm_inf_diff(&Lref.data) < 1e-10, "{sizes:?}");
    }

    let p = SupernodePartition::new(&[5, 1, 6], 12).unwrap();
    assert_eq!(p.boundaries(), &[0, 5, 6, 12]);
    assert_eq!(
        SupernodePartition::new(&[5, 1, 5], 12),
        Err(CholeskyError::InvalidPartition)
    );
}

#[test]
fn test_upper_and_lower_outputs() {
    let A = dense_spd(6);
    for variant in VARIANTS {
        let L = factorize(&A, &lower(variant)).unwrap();
        let mut settings = lower(variant);
        settings.uplo = MatrixTriangle::Triu;
        let R = factorize(&A, &settings).unwrap();
        assert!(R.is_triu());
        assert_eq!(R, L.transpose());
    }
}

#[test]
fn test_variants_f32() {
    let A = Matrix::<f32>::from(&[[4., 12., -16.], [12., 37., -43.], [-16., -43., 98.]]);
    let settings = CholeskySettingsBuilder::<f32>::default()
        .uplo(MatrixTriangle::Tril)
        .build()
        .unwrap();
    for variant in VARIANTS {
        let mut s = settings.clone();
        s.variant = variant;
        let L = factorize(&A, &s).unwrap();
        assert!((L[(2, 1)] - 5.0).abs() < 1e-5);
        assert!((L[(2, 2)] - 3.0).abs() < 1e-5);
    }
}

#[test]
fn test_variants_not_positive_definite() {
    // leading 2x2 block is SPD, the full matrix is not
    let A = Matrix::from(&[[2., 1., 1.], [1., 2., 1.], [1., 1., -1.]]);
    for variant in VARIANTS {
        assert_eq!(
            factorize(&A, &lower(variant)),
            Err(CholeskyError::NotPositiveDefinite { column: 2 }),
            "{variant}"
        );
    }

    // a zero pivot is also rejected
    let A = Matrix::from(&[[1., 1.], [1., 1.]]);
    for variant in VARIANTS {
        assert_eq!(
            factorize(&A, &lower(variant)),
            Err(CholeskyError::NotPositiveDefinite { column: 1 }),
            "{variant}"
        );
    }
}
