//! # polyarith-io
//!
//! Reading polynomials from line-oriented `<coefficient> <degree>` term
//! streams.
//!
//! Parsing lives outside the arithmetic core: malformed text surfaces as
//! a [`ReadError`] and no polynomial is produced.
//!
//! ```
//! use polyarith_io::parse_polynomial;
//! use polyarith_poly::Polynomial;
//!
//! let p: Polynomial = parse_polynomial("4 5\n-2 3\n2 1\n3 0").unwrap();
//! assert_eq!(p.evaluate(1.0), 7.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod reader;

pub use error::ReadError;
pub use reader::{
    parse_polynomial, parse_term_line, read_polynomial, read_polynomial_with, read_terms,
    ReadConfig,
};
