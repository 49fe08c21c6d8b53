//! Scalar traits, dense matrix storage and the BLAS-like kernels used by
//! the factorization engines.
//!
//! All internal math goes through the traits defined here, which are
//! implemented generically for floats of type [`FloatT`].

mod adjoint;
mod error_types;
mod floats;
mod math_traits;
mod matrix_traits;
mod matrix_types;
mod scalarmath;
mod vecmath;

pub use error_types::*;
pub use floats::*;
pub use math_traits::*;
pub use matrix_traits::*;
pub use matrix_types::*;

mod dense;
pub use dense::*;
