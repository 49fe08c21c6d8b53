//! Dense Cholesky factorization and rank one modification of the factor.
//!
//! [`factorize`] computes the factor of a symmetric positive definite
//! matrix with any of the [`CholeskyVariant`] algorithms.  [`update`],
//! [`downdate`] and [`updown`] modify an existing lower factor in O(n²)
//! for a rank one change `A ± w*w'`.  [`CholeskySolver`] combines the two
//! with timing, statistics and optional verbose output.

mod engines;
mod error_types;
mod factorize;
mod info;
mod partition;
mod settings;
mod solver;
mod updown;

pub use error_types::*;
pub use factorize::*;
pub use info::*;
pub use partition::*;
pub use settings::*;
pub use solver::*;
pub use updown::*;
