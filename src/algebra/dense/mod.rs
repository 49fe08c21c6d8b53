mod core;
mod gemm;
mod syrk;
mod triangular;
mod types;
pub use self::types::*;

mod blaslike_traits;
pub use blaslike_traits::*;
mod cholesky;
pub use cholesky::*;
