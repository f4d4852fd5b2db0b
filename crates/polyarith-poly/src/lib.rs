//! # polyarith-poly
//!
//! Sparse univariate polynomial arithmetic over floating-point
//! coefficients.
//!
//! This crate provides:
//! - Terms `coeff * x^degree` with exact equality
//! - Polynomials kept in canonical form (strictly descending degree,
//!   no zero coefficients)
//! - Linear-merge addition, evaluation and rendering
//! - Multiplication with selectable accumulation strategies
//!
//! ## Strategy Selection
//!
//! Multiplication automatically selects the accumulation strategy:
//! - Fewer than 4096 pairwise products: ordered degree map
//! - Otherwise: parallel fold/reduce over hash maps
//!
//! ```
//! use polyarith_poly::{Polynomial, Term};
//!
//! let p = Polynomial::from_terms(vec![Term::new(1.0, 1), Term::new(1.0, 0)]);
//! let q = Polynomial::from_terms(vec![Term::new(1.0, 1), Term::new(-1.0, 0)]);
//!
//! assert_eq!(p.multiply(&q).to_string(), "1.0x^2 + -1.0");
//! assert_eq!(p.add(&q).evaluate(3.0), 6.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod coefficient;
pub mod mul;
pub mod polynomial;
pub mod term;

#[cfg(test)]
mod proptests;

pub use coefficient::Coefficient;
pub use mul::{MulConfig, MulStrategy};
pub use polynomial::Polynomial;
pub use term::Term;
