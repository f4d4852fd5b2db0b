//! Coefficient types for polynomial terms.
//!
//! Polynomials are generic over a floating-point coefficient so the same
//! arithmetic serves both `f32` and `f64` inputs.

use std::fmt::Debug;
use std::str::FromStr;

use num_traits::Float;

/// A floating-point coefficient.
///
/// # Laws
///
/// - Zero tests are exact (`c == 0`), there is no tolerance
/// - Addition and multiplication follow IEEE-754 semantics, so sums are
///   only associative up to rounding
pub trait Coefficient: Float + Debug + FromStr + Send + Sync + 'static {
    /// Returns true if this coefficient is exactly zero.
    #[inline]
    fn is_exact_zero(&self) -> bool {
        *self == Self::zero()
    }
}

impl Coefficient for f32 {}

impl Coefficient for f64 {}
