#![allow(non_snake_case)]

//! Factorization engines, one per [`CholeskyVariant`].
//!
//! Every engine writes the lower triangular factor `L` of an SPD matrix `A`
//! into a zeroed output matrix and reports the first failing column.

use crate::algebra::*;
use crate::cholesky::{CholeskyError, CholeskyVariant};
use enum_dispatch::*;

mod left;
mod restricted;
mod right;
mod supernodal;
mod up;

pub(crate) use left::*;
pub(crate) use restricted::*;
pub(crate) use right::*;
pub(crate) use supernodal::*;
pub(crate) use up::*;

#[enum_dispatch]
pub(crate) trait FactorEngine {
    /// Computes the lower triangular factor of `A` into `L`.  `L`
    /// arrives zeroed and with the dimensions of `A`.  Only the
    /// lower triangle of `A` is referenced, except by the up-looking
    /// engine which reads the upper columns `A[0:k, k]`.
    fn factor<T: FloatT>(&mut self, A: &Matrix<T>, L: &mut Matrix<T>) -> Result<(), CholeskyError>;
}

#[enum_dispatch(FactorEngine)]
pub(crate) enum FactorizationEngine {
    UpLooking(UpLooking),
    LeftLooking(LeftLooking),
    LeftRestricted(LeftRestricted),
    RightLooking(RightLooking),
    Supernodal(Supernodal),
}

impl FactorizationEngine {
    pub(crate) fn new(variant: CholeskyVariant, partition: Option<&[usize]>) -> Self {
        match variant {
            CholeskyVariant::Up => UpLooking.into(),
            CholeskyVariant::Left => LeftLooking.into(),
            CholeskyVariant::LeftRestricted => LeftRestricted::default().into(),
            CholeskyVariant::Right => RightLooking.into(),
            CholeskyVariant::Supernodal => Supernodal::new(partition).into(),
        }
    }
}

// Shared pivot step: checks the radicand and returns the new diagonal entry.
// Non-positive and NaN radicands are both rejected.
#[inline]
pub(crate) fn pivot<T: FloatT>(radicand: T, column: usize) -> Result<T, CholeskyError> {
    if radicand > T::zero() {
        Ok(radicand.sqrt())
    } else {
        Err(CholeskyError::NotPositiveDefinite { column })
    }
}
