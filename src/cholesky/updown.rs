#![allow(non_snake_case)]

//! Rank one update and downdate of a lower triangular Cholesky factor.
//!
//! Given `A = L*L'`, these routines compute `L̃` with `L̃*L̃' = A ± w*w'`
//! in O(n²) using a sequence of hyperbolic rotations, rather than the
//! O(n³) cost of refactoring `A ± w*w'`.
//!
//! Each routine also returns the transformed `w`, which is the
//! solution `x` of `L*x = w` for the factor `L` that was passed in.

use crate::algebra::*;
use crate::cholesky::CholeskyError;
use itertools::izip;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Sign of the rank one perturbation `A ± w*w'`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum UpdateDirection {
    /// `A + w*w'`
    Update,
    /// `A - w*w'`
    Downdate,
}

impl UpdateDirection {
    /// σ = +1 for an update, -1 for a downdate
    pub fn sign<T: FloatT>(&self) -> T {
        match self {
            UpdateDirection::Update => T::one(),
            UpdateDirection::Downdate => -T::one(),
        }
    }
}

/// Computes the factor of `L*L' + w*w'`.
///
/// `L` may be given in lower or upper triangular form.  Returns the updated
/// factor and the solution `x` of `L*x = w`.  Fails only if `L` and `w`
/// are incompatible, or if `L` has a non-positive diagonal entry and so
/// is not a Cholesky factor.
pub fn update<T: FloatT>(L: &Matrix<T>, w: &[T]) -> Result<(Matrix<T>, Vec<T>), CholeskyError> {
    updown(L, w, UpdateDirection::Update)
}

/// Computes the factor of `L*L' - w*w'`.
///
/// Fails with [`NotPositiveDefinite`](CholeskyError::NotPositiveDefinite)
/// at the first column `j` where `α² ≥ β²`, i.e. where the downdated
/// matrix would no longer be positive definite.  The inputs are never
/// modified, so `L` remains a valid factor after a failure.
pub fn downdate<T: FloatT>(
    L: &Matrix<T>,
    w: &[T],
) -> Result<(Matrix<T>, Vec<T>), CholeskyError> {
    updown(L, w, UpdateDirection::Downdate)
}

/// Computes the factor of `L*L' ± w*w'`, with the sign given by `direction`.
///
/// An upper triangular `R = L'`, as returned by
/// [`factorize`](super::factorize) with the default settings, is also
/// accepted.  The result is then returned in upper triangular form too.
/// A square `L` with entries on both sides of the diagonal is rejected
/// with [`DimensionMismatch`](CholeskyError::DimensionMismatch).
pub fn updown<T: FloatT>(
    L: &Matrix<T>,
    w: &[T],
    direction: UpdateDirection,
) -> Result<(Matrix<T>, Vec<T>), CholeskyError> {
    if !L.is_square() {
        return Err(CholeskyError::DimensionMismatch);
    }

    // a lower triangular L is taken as is, otherwise only R = L'
    // is accepted.  Diagonal inputs are both and take the first path
    let upper = if L.is_tril() {
        false
    } else if L.is_triu() {
        true
    } else {
        return Err(CholeskyError::DimensionMismatch);
    };

    let mut Lnew = if upper { L.transpose() } else { L.clone() };
    let mut x = w.to_vec();
    updown_in_place(&mut Lnew, &mut x, direction)?;

    if upper {
        Lnew = Lnew.transpose();
    }
    Ok((Lnew, x))
}

// In place version.  On error, L and w are left partially
// transformed, so callers must work on copies.
pub(crate) fn updown_in_place<T: FloatT>(
    L: &mut Matrix<T>,
    w: &mut [T],
    direction: UpdateDirection,
) -> Result<(), CholeskyError> {
    if !L.is_square() || L.nrows() != w.len() {
        return Err(CholeskyError::DimensionMismatch);
    }

    let n = w.len();
    let σ: T = direction.sign();

    if n == 1 {
        let l = valid_diagonal(L[(0, 0)], 0)?;
        let r = l * l + σ * w[0] * w[0];
        if !(r > T::zero()) {
            return Err(CholeskyError::NotPositiveDefinite { column: 0 });
        }
        L[(0, 0)] = r.sqrt();
        w[0] /= l;
        return Ok(());
    }

    let mut β = T::one();

    for j in 0..n {
        let ljj = valid_diagonal(L[(j, j)], j)?;
        let α = w[j] / ljj;

        // β̃² = β² ± α².  For a downdate this requires α² < β²
        let r = β * β + σ * α * α;
        if !(r > T::zero()) {
            return Err(CholeskyError::NotPositiveDefinite { column: j });
        }
        let β̃ = r.sqrt();
        let γ = σ * α / (β̃ * β);

        let lcol = &mut L.col_slice_mut(j)[j..];
        let (ldiag, lcol) = lcol.split_at_mut(1);
        let (wj, wtail) = w[j..].split_at_mut(1);

        match direction {
            UpdateDirection::Update => {
                let δ = β / β̃;
                ldiag[0] = δ * ljj + γ * wj[0];
                // both recurrences use the values from before this step
                for (l, wi) in izip!(lcol, wtail) {
                    let wold = *wi;
                    *wi -= α * (*l);
                    *l = δ * (*l) + γ * wold;
                }
            }
            UpdateDirection::Downdate => {
                let δ = β̃ / β;
                ldiag[0] = δ * ljj;
                // the column recurrence uses the freshly reduced w
                for (l, wi) in izip!(lcol, wtail) {
                    *wi -= α * (*l);
                    *l = δ * (*l) + γ * (*wi);
                }
            }
        }

        wj[0] = α;
        β = β̃;
    }

    Ok(())
}

#[inline]
fn valid_diagonal<T: FloatT>(ljj: T, column: usize) -> Result<T, CholeskyError> {
    if ljj > T::zero() {
        Ok(ljj)
    } else {
        Err(CholeskyError::NotPositiveDefinite { column })
    }
}
