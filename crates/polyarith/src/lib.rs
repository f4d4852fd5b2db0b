//! # polyarith
//!
//! Single-variable polynomials with integer degrees and floating-point
//! coefficients.
//!
//! ## Features
//!
//! - **Canonical Form**: terms sorted by strictly descending degree, zero
//!   coefficients never stored
//! - **Arithmetic**: linear-merge addition, multiplication with
//!   sequential or rayon-parallel accumulation
//! - **Evaluation and Rendering**: numeric evaluation and `Display`
//! - **Term Streams**: `<coefficient> <degree>` line reader
//!
//! ## Quick Start
//!
//! ```
//! use polyarith::prelude::*;
//!
//! let p: Polynomial = parse_polynomial("4 5\n-2 3\n2 1\n3 0").unwrap();
//! let q: Polynomial = parse_polynomial("3 4\n-2 2\n-1 0").unwrap();
//!
//! assert_eq!(
//!     p.add(&q).to_string(),
//!     "4.0x^5 + 3.0x^4 + -2.0x^3 + -2.0x^2 + 2.0x + 2.0"
//! );
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use polyarith_io as io;
pub use polyarith_poly as poly;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use polyarith_io::{parse_polynomial, read_polynomial, ReadConfig, ReadError};
    pub use polyarith_poly::{Coefficient, MulConfig, MulStrategy, Polynomial, Term};
}
