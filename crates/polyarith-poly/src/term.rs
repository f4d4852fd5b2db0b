//! Polynomial terms.

use crate::coefficient::Coefficient;

/// A single term `coeff * x^degree`.
///
/// Two terms are equal iff both the coefficient and the degree are
/// exactly equal.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Term<F: Coefficient = f64> {
    /// Coefficient of the term.
    pub coeff: F,
    /// Degree of the term.
    pub degree: u32,
}

impl<F: Coefficient> Term<F> {
    /// Creates a new term.
    #[must_use]
    pub const fn new(coeff: F, degree: u32) -> Self {
        Self { coeff, degree }
    }

    /// Returns true if the coefficient is exactly zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeff.is_exact_zero()
    }

    /// Multiplies two terms: coefficients multiply, degrees add.
    ///
    /// The degree sum must fit in `u32`; [`crate::Polynomial::multiply`]
    /// checks this before distributing.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        Self::new(self.coeff * other.coeff, self.degree + other.degree)
    }

    /// Evaluates the term at `x`.
    #[must_use]
    pub fn eval(&self, x: F) -> F {
        self.coeff * num_traits::pow(x, self.degree as usize)
    }
}

impl<F: Coefficient> From<(F, u32)> for Term<F> {
    fn from((coeff, degree): (F, u32)) -> Self {
        Self::new(coeff, degree)
    }
}

impl<F: Coefficient> std::fmt::Display for Term<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let c = self.coeff;
        match self.degree {
            0 => write!(f, "{c:?}"),
            1 => write!(f, "{c:?}x"),
            d => write!(f, "{c:?}x^{d}"),
        }
    }
}
