//! Sparse univariate polynomials.
//!
//! Terms are stored in a `Vec` in strictly descending degree order with
//! zero coefficients removed, so addition is a single linear merge and
//! no reordering pass is ever needed.

use std::cmp::Ordering;

use crate::coefficient::Coefficient;
use crate::term::Term;

/// A sparse univariate polynomial with floating-point coefficients.
///
/// Canonical form:
/// - degrees strictly decrease along `terms`
/// - no stored term has a zero coefficient
/// - the empty sequence is the zero polynomial
///
/// Arithmetic never mutates its operands and always returns a canonical
/// polynomial.
#[derive(Clone, PartialEq, Debug)]
pub struct Polynomial<F: Coefficient = f64> {
    /// Terms in descending degree order.
    terms: Vec<Term<F>>,
}

impl<F: Coefficient> Polynomial<F> {
    /// Creates the zero polynomial.
    #[must_use]
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Creates the zero polynomial.
    #[must_use]
    pub fn zero() -> Self {
        Self::new()
    }

    /// Creates a polynomial from terms already in strictly descending
    /// degree order.
    ///
    /// The ordering is trusted, not checked. Use [`Self::from_unordered`]
    /// for arbitrary input.
    #[must_use]
    pub fn from_terms(terms: Vec<Term<F>>) -> Self {
        Self { terms }
    }

    /// Creates a polynomial from terms in any order.
    ///
    /// Terms are sorted, like degrees are combined and zero sums dropped.
    #[must_use]
    pub fn from_unordered(mut terms: Vec<Term<F>>) -> Self {
        // Stable, so equal degrees are summed in input order
        terms.sort_by(|a, b| b.degree.cmp(&a.degree));

        let mut combined: Vec<Term<F>> = Vec::with_capacity(terms.len());
        for term in terms {
            match combined.last_mut() {
                Some(last) if last.degree == term.degree => {
                    last.coeff = last.coeff + term.coeff;
                }
                _ => {
                    if combined.last().is_some_and(Term::is_zero) {
                        combined.pop();
                    }
                    combined.push(term);
                }
            }
        }
        if combined.last().is_some_and(Term::is_zero) {
            combined.pop();
        }

        Self { terms: combined }
    }

    /// Creates the monomial `coeff * x^degree`.
    #[must_use]
    pub fn monomial(coeff: F, degree: u32) -> Self {
        if coeff.is_exact_zero() {
            Self::zero()
        } else {
            Self {
                terms: vec![Term::new(coeff, degree)],
            }
        }
    }

    /// Creates a constant polynomial.
    #[must_use]
    pub fn constant(coeff: F) -> Self {
        Self::monomial(coeff, 0)
    }

    /// Returns the terms in descending degree order.
    #[must_use]
    pub fn terms(&self) -> &[Term<F>] {
        &self.terms
    }

    /// Consumes the polynomial and returns its terms.
    #[must_use]
    pub fn into_terms(self) -> Vec<Term<F>> {
        self.terms
    }

    /// Returns the number of stored terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns true if there are no terms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the degree, or `None` for the zero polynomial.
    #[must_use]
    pub fn degree(&self) -> Option<u32> {
        self.terms.first().map(|t| t.degree)
    }

    /// Returns the leading (highest degree) term.
    #[must_use]
    pub fn leading_term(&self) -> Option<&Term<F>> {
        self.terms.first()
    }

    /// Returns the coefficient of `x^degree`, zero if absent.
    ///
    /// Assumes canonical order.
    #[must_use]
    pub fn coeff(&self, degree: u32) -> F {
        self.terms
            .binary_search_by(|t| t.degree.cmp(&degree).reverse())
            .map_or_else(|_| F::zero(), |i| self.terms[i].coeff)
    }

    /// Returns true if the terms are in canonical form.
    #[must_use]
    pub fn is_canonical(&self) -> bool {
        self.terms.windows(2).all(|w| w[0].degree > w[1].degree)
            && !self.terms.iter().any(Term::is_zero)
    }

    /// Adds two polynomials.
    ///
    /// Neither operand is modified.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        Self {
            terms: merge(&self.terms, &other.terms),
        }
    }

    /// Evaluates the polynomial at `x`.
    ///
    /// Sums `coeff * x^degree` over the stored terms.
    #[must_use]
    pub fn evaluate(&self, x: F) -> F {
        self.terms.iter().fold(F::zero(), |acc, t| acc + t.eval(x))
    }
}

/// Merges two descending term sequences.
///
/// Equal degrees are summed and exactly-zero sums are dropped; terms
/// present in only one input are carried through unchanged.
pub(crate) fn merge<F: Coefficient>(a: &[Term<F>], b: &[Term<F>]) -> Vec<Term<F>> {
    let mut result = Vec::with_capacity(a.len() + b.len());
    let (mut i, mut j) = (0, 0);

    while i < a.len() && j < b.len() {
        match a[i].degree.cmp(&b[j].degree) {
            Ordering::Greater => {
                result.push(a[i]);
                i += 1;
            }
            Ordering::Less => {
                result.push(b[j]);
                j += 1;
            }
            Ordering::Equal => {
                let coeff = a[i].coeff + b[j].coeff;
                if !coeff.is_exact_zero() {
                    result.push(Term::new(coeff, a[i].degree));
                }
                i += 1;
                j += 1;
            }
        }
    }

    result.extend_from_slice(&a[i..]);
    result.extend_from_slice(&b[j..]);
    result
}

impl<F: Coefficient> Default for Polynomial<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Coefficient> FromIterator<Term<F>> for Polynomial<F> {
    fn from_iter<I: IntoIterator<Item = Term<F>>>(iter: I) -> Self {
        Self::from_unordered(iter.into_iter().collect())
    }
}

impl<F: Coefficient> std::fmt::Display for Polynomial<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        // Highest degree first, whatever the storage order
        let mut ordered: Vec<&Term<F>> = self.terms.iter().collect();
        ordered.sort_by(|a, b| b.degree.cmp(&a.degree));

        let terms: Vec<String> = ordered.iter().map(ToString::to_string).collect();
        write!(f, "{}", terms.join(" + "))
    }
}
