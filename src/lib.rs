//! __cholup__ computes the Cholesky factorization `A = L*L'` of a dense
//! symmetric positive definite matrix, and updates or downdates the factor
//! after a rank one change `A ± w*w'` without refactoring.
//!
//! ## Features
//!
//! * __Several factorization strategies__: up-looking, left-looking,
//!   sparsity restricted left-looking, right-looking and supernodal (blocked)
//!   variants.  All compute the same factor up to rounding.
//!
//! * __Rank one modification__: O(n²) update and downdate of an existing
//!   factor, returning the forward substitution `L\w` as a byproduct.
//!
//! * __Generic precision__: every routine is generic over [`FloatT`](algebra::FloatT),
//!   so works with both `f32` and `f64`.
//!
//! ## Example
//!
//! ```
//! use cholup::algebra::*;
//! use cholup::cholesky::*;
//!
//! let A = Matrix::<f64>::from(&[[4.0, 12.0, -16.0], [12.0, 37.0, -43.0], [-16.0, -43.0, 98.0]]);
//!
//! let settings = CholeskySettingsBuilder::default()
//!     .variant(CholeskyVariant::Supernodal)
//!     .partition(vec![2, 1])
//!     .uplo(MatrixTriangle::Tril)
//!     .build()
//!     .unwrap();
//!
//! let L = factorize(&A, &settings).unwrap();
//! assert_eq!(L.diag(), vec![2.0, 1.0, 3.0]);
//!
//! let (Lup, _) = update(&L, &[0.0, 0.0, 4.0]).unwrap();
//! assert!((Lup[(2, 2)] - 5.0).abs() < 1e-14);
//! ```
//!
//! # License
//!
//! Licensed under Apache License, Version 2.0.

//Rust hates greek characters
#![allow(confusable_idents)]

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod algebra;
pub mod cholesky;
pub mod io;
pub mod timers;
